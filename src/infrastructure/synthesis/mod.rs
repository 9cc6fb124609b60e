pub mod openai;

pub use openai::OpenAiSynthesizer;

use async_trait::async_trait;

/// Error from a speech synthesis provider.
///
/// Network failures, auth rejections and quota errors all end up here; the
/// caller treats them uniformly (abort the assembly, no retry).
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct SynthesisError(pub String);

/// Speech synthesis provider.
///
/// Abstracts the remote TTS call so the assembly logic can be tested without
/// a network dependency. Implementations are responsible for provider-specific
/// voice and model handling.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize one line of text with the given voice.
    ///
    /// Returns raw audio bytes (MP3 for the OpenAI implementation).
    ///
    /// # Errors
    /// Returns [`SynthesisError`] if the provider call fails for any reason.
    async fn synthesize(&self, voice: &str, text: &str) -> Result<Vec<u8>, SynthesisError>;
}
