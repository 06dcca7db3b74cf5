use crate::domain::menu_scan::entities::{ALLERGEN_VOCABULARY, TAG_VOCABULARY};

/// Builds the fixed scan prompt sent alongside the menu photo.
pub fn build_scan_prompt() -> String {
    let tags = TAG_VOCABULARY.join(", ");
    let allergens = ALLERGEN_VOCABULARY.join(", ");

    format!(
        "You are an AI that analyzes and digitizes a photographed restaurant menu \
into a specific JSON format.\n\
Respond with a single JSON object and nothing else:\n\
{{\n\
  \"original\": \"<name of the menu's source language>\",\n\
  \"dishes\": [\n\
    {{\n\
      \"original\": \"<dish name as printed>\",\n\
      \"english\": \"<English translation>\",\n\
      \"chinese\": \"<Chinese translation>\",\n\
      \"japanese\": \"<Japanese translation>\",\n\
      \"description\": \"<short description in the source language>\",\n\
      \"descriptionEnglish\": \"<English description>\",\n\
      \"descriptionChinese\": \"<Chinese description>\",\n\
      \"descriptionJapanese\": \"<Japanese description>\",\n\
      \"tags\": [\"<tag>\", ...],\n\
      \"nutrition\": {{\n\
        \"calories\": <integer or null>,\n\
        \"protein\": <grams, integer or null>,\n\
        \"carbs\": <grams, integer or null>,\n\
        \"fat\": <grams, integer or null>,\n\
        \"sodium\": <milligrams, integer or null>,\n\
        \"allergens\": \"<comma-joined allergens or None>\"\n\
      }}\n\
    }}\n\
  ]\n\
}}\n\
Rules:\n\
- Keep dishes in the order they appear on the menu.\n\
- Use only these tags: {tags}.\n\
- Use only these allergens: {allergens}; write \"None\" when none apply.\n\
- Nutrition values are best-effort estimates per serving; use null when a \
value cannot be estimated.\n\
- If a description is not printed on the menu, use an empty string. Never \
invent filler or placeholder text such as \"Lorem ipsum\"."
    )
}
