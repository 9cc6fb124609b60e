use super::{SpeechSynthesizer, SynthesisError};
use async_openai::{
    config::OpenAIConfig,
    types::{CreateSpeechRequest, SpeechModel, Voice},
    Client,
};
use async_trait::async_trait;
use std::sync::Arc;

const DEFAULT_MODEL: &str = "tts-1";

/// Longest text prefix logged per synthesis call, in characters.
const PREVIEW_CHARS: usize = 200;

/// Prefix of `text` for log output, cut at a character boundary so multibyte
/// script lines cannot panic the slice.
fn text_preview(text: &str) -> &str {
    match text.char_indices().nth(PREVIEW_CHARS) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}

/// OpenAI implementation of the speech synthesizer
pub struct OpenAiSynthesizer {
    client: Arc<Client<OpenAIConfig>>,
    model: String,
}

impl OpenAiSynthesizer {
    pub fn new(client: Arc<Client<OpenAIConfig>>, model: String) -> Self {
        Self { client, model }
    }

    /// Build a synthesizer for the `tts-1` model from a bare API key.
    pub fn from_api_key(api_key: &str) -> Self {
        let config = OpenAIConfig::new().with_api_key(api_key);
        Self::new(
            Arc::new(Client::with_config(config)),
            DEFAULT_MODEL.to_string(),
        )
    }

    /// Parse model string to SpeechModel enum
    fn speech_model(&self) -> SpeechModel {
        match self.model.as_str() {
            "tts-1" => SpeechModel::Tts1,
            "tts-1-hd" => SpeechModel::Tts1Hd,
            other => SpeechModel::Other(other.to_string()),
        }
    }

    /// Parse voice string to Voice enum, falling back to Alloy for unknown
    /// identifiers
    fn parse_voice(voice: &str) -> Voice {
        match voice.to_lowercase().as_str() {
            "alloy" => Voice::Alloy,
            "echo" => Voice::Echo,
            "fable" => Voice::Fable,
            "onyx" => Voice::Onyx,
            "nova" => Voice::Nova,
            "shimmer" => Voice::Shimmer,
            _ => Voice::Alloy,
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for OpenAiSynthesizer {
    async fn synthesize(&self, voice: &str, text: &str) -> Result<Vec<u8>, SynthesisError> {
        let start_time = std::time::Instant::now();

        tracing::info!(
            model = %self.model,
            voice = voice,
            text_length = text.len(),
            text_preview = text_preview(text),
            "Calling OpenAI TTS API"
        );

        let request = CreateSpeechRequest {
            model: self.speech_model(),
            input: text.to_string(),
            voice: Self::parse_voice(voice),
            response_format: None, // Defaults to MP3
            speed: None,           // Defaults to 1.0
        };

        let response = self.client.audio().speech(request).await.map_err(|e| {
            tracing::error!(
                error = %e,
                model = %self.model,
                voice = voice,
                text_length = text.len(),
                "OpenAI TTS API call failed"
            );
            SynthesisError(format!("OpenAI TTS error: {}", e))
        })?;

        let audio_bytes = response.bytes.to_vec();

        tracing::info!(
            provider = "openai",
            model = %self.model,
            voice = voice,
            latency_ms = start_time.elapsed().as_millis(),
            audio_size_bytes = audio_bytes.len(),
            "OpenAI TTS audio received successfully"
        );

        Ok(audio_bytes)
    }
}
