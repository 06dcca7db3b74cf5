use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("Image data is required")]
    MissingImageData,

    #[error("Invalid image payload: {0}")]
    InvalidImageData(String),

    #[error("Image too large, max size is {0} bytes")]
    ImageTooLarge(usize),

    #[error("LLM request failed: {0}")]
    ExternalServiceError(String),

    #[error("LLM request timed out after {0}s")]
    Timeout(u64),

    #[error("Model returned an error: {0}")]
    ModelError(String),

    #[error("No text content in model response")]
    EmptyModelResponse,

    #[error("Failed to parse model output: {0}")]
    MalformedModelOutput(String),

    #[error("Model output missing required menu structure")]
    InvalidScanStructure,
}

impl CoreError {
    /// Client input errors bubble up as 4xx; everything else is a
    /// model-side failure handled by the sample fallback path.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            CoreError::MissingImageData
                | CoreError::InvalidImageData(_)
                | CoreError::ImageTooLarge(_)
        )
    }
}
