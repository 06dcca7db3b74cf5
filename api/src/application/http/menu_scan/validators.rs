use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of a scan request. `image_data` is declared optional so that a
/// missing field yields our 400 contract instead of a deserialization
/// rejection.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanMenuRequest {
    /// Base64-encoded menu photo.
    pub image_data: Option<String>,
    /// MIME type of the photo, defaults to image/jpeg.
    pub image_type: Option<String>,
}
