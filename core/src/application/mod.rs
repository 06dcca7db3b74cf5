use crate::{
    domain::common::{MenuScanConfig, services::Service},
    infrastructure::llm::gemini_client::GeminiLlmClient,
};

pub type MenuScanAppService = Service<GeminiLlmClient>;

/// Builds the application service from config. Called once at startup;
/// the sample fallback inside the service is constructed here too.
pub fn create_service(config: MenuScanConfig) -> Result<MenuScanAppService, anyhow::Error> {
    anyhow::ensure!(
        !config.llm.api_key.trim().is_empty(),
        "LLM API key must not be empty"
    );

    let llm_client = GeminiLlmClient::new(config.llm);
    Ok(Service::new(llm_client, config.scan))
}
