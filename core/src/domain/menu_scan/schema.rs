use serde_json::json;

use crate::domain::menu_scan::entities::TAG_VOCABULARY;

/// Returns the JSON schema for menu scan LLM responses.
pub fn get_menu_scan_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "original": { "type": "string" },
            "dishes": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "original": { "type": "string" },
                        "english": { "type": "string" },
                        "chinese": { "type": "string" },
                        "japanese": { "type": "string" },
                        "description": { "type": "string" },
                        "descriptionEnglish": { "type": "string" },
                        "descriptionChinese": { "type": "string" },
                        "descriptionJapanese": { "type": "string" },
                        "tags": {
                            "type": "array",
                            "items": {
                                "type": "string",
                                "enum": TAG_VOCABULARY
                            }
                        },
                        "nutrition": {
                            "type": "object",
                            "properties": {
                                "calories": { "type": "integer", "nullable": true },
                                "protein": { "type": "integer", "nullable": true },
                                "carbs": { "type": "integer", "nullable": true },
                                "fat": { "type": "integer", "nullable": true },
                                "sodium": { "type": "integer", "nullable": true },
                                "allergens": { "type": "string" }
                            },
                            "required": ["allergens"]
                        }
                    },
                    "required": [
                        "original", "english", "chinese", "japanese", "tags", "nutrition"
                    ]
                }
            }
        },
        "required": ["original", "dishes"]
    })
}
