use rand::{Rng, distributions::Alphanumeric};

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct MenuScanConfig {
    pub llm: LlmConfig,
    pub scan: ScanConfig,
}

#[derive(Clone, Debug)]
pub struct LlmConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub temperature: f32,
    pub top_k: i32,
    pub top_p: f32,
    pub max_output_tokens: i32,
}

#[derive(Clone, Debug)]
pub struct ScanConfig {
    pub timeout_secs: u64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self { timeout_secs: 60 }
    }
}

pub fn generate_random_string(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
