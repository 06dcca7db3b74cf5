use clap::{Args as ClapArgs, Parser};
use menuscan_core::domain::common::{LlmConfig, MenuScanConfig, ScanConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "menuscan-api", about = "MenuScan HTTP API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub scan: ScanArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long, env = "MENUSCAN_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "MENUSCAN_PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long, env = "MENUSCAN_ROOT_PATH", default_value = "/api")]
    pub root_path: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LlmArgs {
    #[arg(long = "api-key", env = "GEMINI_API_KEY")]
    pub api_key: String,

    #[arg(
        long = "llm-model",
        env = "GEMINI_MODEL",
        default_value = "gemini-2.0-flash-lite"
    )]
    pub model: String,

    #[arg(
        long = "llm-base-url",
        env = "GEMINI_BASE_URL",
        default_value = "https://generativelanguage.googleapis.com"
    )]
    pub base_url: String,

    #[arg(long, env = "GEMINI_TEMPERATURE", default_value_t = 0.3)]
    pub temperature: f32,

    #[arg(long, env = "GEMINI_TOP_K", default_value_t = 20)]
    pub top_k: i32,

    #[arg(long, env = "GEMINI_TOP_P", default_value_t = 0.8)]
    pub top_p: f32,

    #[arg(long, env = "GEMINI_MAX_OUTPUT_TOKENS", default_value_t = 16384)]
    pub max_output_tokens: i32,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ScanArgs {
    #[arg(long = "scan-timeout-secs", env = "MENUSCAN_TIMEOUT_SECS", default_value_t = 60)]
    pub timeout_secs: u64,
}

impl From<Args> for MenuScanConfig {
    fn from(args: Args) -> Self {
        MenuScanConfig {
            llm: LlmConfig {
                api_key: args.llm.api_key,
                model: args.llm.model,
                base_url: args.llm.base_url,
                temperature: args.llm.temperature,
                top_k: args.llm.top_k,
                top_p: args.llm.top_p,
                max_output_tokens: args.llm.max_output_tokens,
            },
            scan: ScanConfig {
                timeout_secs: args.scan.timeout_secs,
            },
        }
    }
}
