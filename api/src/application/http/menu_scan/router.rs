use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::scan_menu::{__path_scan_menu, scan_menu};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(scan_menu))]
pub struct MenuScanApiDoc;

pub fn menu_scan_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/scan-menu", state.args.server.root_path),
        post(scan_menu),
    )
}
