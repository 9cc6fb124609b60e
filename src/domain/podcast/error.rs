use crate::infrastructure::synthesis::SynthesisError;

/// Assembly fails only when the synthesis provider does; validation happens
/// in the tool layer before the service runs.
#[derive(Debug, thiserror::Error)]
pub enum PodcastServiceError {
    #[error("{0}")]
    Synthesis(String),
}

impl From<SynthesisError> for PodcastServiceError {
    fn from(err: SynthesisError) -> Self {
        PodcastServiceError::Synthesis(err.to_string())
    }
}
