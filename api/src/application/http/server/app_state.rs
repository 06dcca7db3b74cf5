use std::sync::Arc;

use menuscan_core::application::MenuScanAppService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: MenuScanAppService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: MenuScanAppService) -> Self {
        Self { args, service }
    }
}
