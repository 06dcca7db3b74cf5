use crate::domain::{
    common::ScanConfig,
    menu_scan::{entities::MenuScanResult, ports::LlmClient, sample::sample_menu},
};

/// Application service wired over an LLM client implementation.
#[derive(Clone)]
pub struct Service<LLM>
where
    LLM: LlmClient,
{
    pub(crate) llm_client: LLM,
    pub(crate) scan: ScanConfig,
    pub(crate) fallback: MenuScanResult,
}

impl<LLM> Service<LLM>
where
    LLM: LlmClient,
{
    /// The sample fallback is built once here and cloned into every
    /// fallback response, so the error path has an explicit dependency
    /// instead of an inlined constant.
    pub fn new(llm_client: LLM, scan: ScanConfig) -> Self {
        Self {
            llm_client,
            scan,
            fallback: sample_menu(),
        }
    }
}
