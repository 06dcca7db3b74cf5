use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::menu_scan::entities::MenuScanResult;

#[derive(Debug, Clone)]
pub struct ScanMenuInput {
    /// Base64-encoded image payload.
    pub image_data: String,
    pub image_type: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ScanSource {
    GeminiScan,
    SampleFallback,
}

/// Result of a scan attempt. Model-side failures are folded into a
/// fallback outcome rather than an error, so callers always get data.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuScanOutcome {
    pub success: bool,
    pub data: MenuScanResult,
    pub source: ScanSource,
    pub error: Option<String>,
}
