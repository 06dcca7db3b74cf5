use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    menu_scan::validators::ScanMenuRequest,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};
use menuscan_core::domain::{
    common::generate_random_string,
    menu_scan::{
        entities::MenuScanResult,
        ports::MenuScanService,
        value_objects::{MenuScanOutcome, ScanMenuInput, ScanSource},
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ScanMenuResponse {
    pub success: bool,
    pub data: MenuScanResult,
    pub source: ScanSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<MenuScanOutcome> for ScanMenuResponse {
    fn from(outcome: MenuScanOutcome) -> Self {
        Self {
            success: outcome.success,
            data: outcome.data,
            source: outcome.source,
            error: outcome.error,
        }
    }
}

#[utoipa::path(
    post,
    path = "/scan-menu",
    tag = "menu-scan",
    summary = "Scan a menu photo",
    description = "Digitizes a base64-encoded menu photo into structured dish data. \
Model-side failures return sample fallback data with an error string.",
    request_body = ScanMenuRequest,
    responses(
        (status = 200, body = ScanMenuResponse),
        (status = 400, body = crate::application::http::server::api_entities::api_error::ApiErrorBody)
    ),
)]
pub async fn scan_menu(
    State(state): State<AppState>,
    Json(payload): Json<ScanMenuRequest>,
) -> Result<Response<ScanMenuResponse>, ApiError> {
    let request_id = generate_random_string(12);

    let image_data = payload
        .image_data
        .filter(|data| !data.trim().is_empty())
        .ok_or_else(|| ApiError::BadRequest("Image data is required".to_string()))?;

    tracing::info!(%request_id, "scanning menu image");

    let outcome = state
        .service
        .scan_menu(ScanMenuInput {
            image_data,
            image_type: payload.image_type,
        })
        .await
        .map_err(ApiError::from)?;

    tracing::info!(%request_id, success = outcome.success, "menu scan finished");

    Ok(Response::OK(ScanMenuResponse::from(outcome)))
}
