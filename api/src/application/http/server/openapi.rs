use utoipa::OpenApi;

use crate::application::http::{health::HealthApiDoc, menu_scan::router::MenuScanApiDoc};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "MenuScan API",
        description = "Digitizes photographed restaurant menus into structured dish data"
    ),
    tags(
        (name = "menu-scan", description = "Menu scanning"),
        (name = "health", description = "Liveness")
    )
)]
struct BaseApiDoc;

pub struct ApiDoc;

impl ApiDoc {
    pub fn openapi() -> utoipa::openapi::OpenApi {
        let mut doc = BaseApiDoc::openapi();
        doc.merge(MenuScanApiDoc::openapi());
        doc.merge(HealthApiDoc::openapi());
        doc
    }
}
