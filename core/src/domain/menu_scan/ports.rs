use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    menu_scan::value_objects::{MenuScanOutcome, ScanMenuInput},
};

/// Client trait for multimodal generation APIs.
#[cfg_attr(test, mockall::automock)]
pub trait LlmClient: Send + Sync {
    fn generate_with_image(
        &self,
        prompt: String,
        image_data: Vec<u8>,
        mime_type: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for the menu scan operation.
pub trait MenuScanService: Send + Sync {
    fn scan_menu(
        &self,
        input: ScanMenuInput,
    ) -> impl Future<Output = Result<MenuScanOutcome, CoreError>> + Send;
}
