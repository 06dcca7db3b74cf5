use std::time::Duration;

use base64::{Engine as _, engine::general_purpose};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    menu_scan::{
        entities::MenuScanResult,
        ports::{LlmClient, MenuScanService},
        prompt::build_scan_prompt,
        salvage::{salvage_json, validate_menu_structure},
        schema::get_menu_scan_schema,
        scrub::scrub_placeholder_text,
        value_objects::{MenuScanOutcome, ScanMenuInput, ScanSource},
    },
};

const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024; // 10MB

impl<LLM> Service<LLM>
where
    LLM: LlmClient,
{
    /// Model-side failures never surface as hard errors; the caller
    /// gets the sample menu plus a descriptive error string instead.
    fn fallback_outcome(&self, err: CoreError) -> MenuScanOutcome {
        tracing::warn!(error = %err, "menu scan failed, serving sample fallback");
        MenuScanOutcome {
            success: false,
            data: self.fallback.clone(),
            source: ScanSource::SampleFallback,
            error: Some(err.to_string()),
        }
    }
}

impl<LLM> MenuScanService for Service<LLM>
where
    LLM: LlmClient,
{
    async fn scan_menu(&self, input: ScanMenuInput) -> Result<MenuScanOutcome, CoreError> {
        // 1. Validate the image payload
        if input.image_data.trim().is_empty() {
            return Err(CoreError::MissingImageData);
        }
        let image_bytes = general_purpose::STANDARD
            .decode(input.image_data.trim())
            .map_err(|e| CoreError::InvalidImageData(e.to_string()))?;
        if image_bytes.len() > MAX_IMAGE_BYTES {
            return Err(CoreError::ImageTooLarge(MAX_IMAGE_BYTES));
        }
        let mime_type = input
            .image_type
            .unwrap_or_else(|| "image/jpeg".to_string());

        // 2. Build prompt and response schema
        let prompt = build_scan_prompt();
        let response_schema = get_menu_scan_schema();

        // 3. Call the model under the configured timeout; only this
        //    timer can cancel the outbound call
        let call = self
            .llm_client
            .generate_with_image(prompt, image_bytes, mime_type, response_schema);
        let raw = match tokio::time::timeout(Duration::from_secs(self.scan.timeout_secs), call)
            .await
        {
            Ok(Ok(text)) => text,
            Ok(Err(err)) => return Ok(self.fallback_outcome(err)),
            Err(_) => return Ok(self.fallback_outcome(CoreError::Timeout(self.scan.timeout_secs))),
        };

        // 4. Salvage-parse the model text
        let value = match salvage_json(&raw) {
            Ok(value) => value,
            Err(err) => {
                return Ok(self.fallback_outcome(CoreError::MalformedModelOutput(err.to_string())));
            }
        };

        // 5. Validate and deserialize the structure
        if !validate_menu_structure(&value) {
            return Ok(self.fallback_outcome(CoreError::InvalidScanStructure));
        }
        let mut result: MenuScanResult = match serde_json::from_value(value) {
            Ok(result) => result,
            Err(err) => {
                return Ok(self.fallback_outcome(CoreError::MalformedModelOutput(err.to_string())));
            }
        };

        // 6. Scrub placeholder filler from description fields
        scrub_placeholder_text(&mut result);

        tracing::info!(dishes = result.dishes.len(), "menu scan successful");
        Ok(MenuScanOutcome {
            success: true,
            data: result,
            source: ScanSource::GeminiScan,
            error: None,
        })
    }
}
