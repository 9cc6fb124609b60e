use super::messages::ToolMessage;
use crate::domain::audio::{GapSampler, UniformGapSampler};
use crate::domain::podcast::{PodcastService, PodcastServiceApi, PodcastServiceError};
use crate::error::{ToolError, ToolResult};
use crate::infrastructure::credentials::{CredentialStore, API_KEY_CREDENTIAL};
use crate::infrastructure::synthesis::{OpenAiSynthesizer, SpeechSynthesizer};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Parameters of a podcast audio generation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PodcastAudioGeneratorParams {
    /// Newline-separated dialogue lines.
    #[serde(default)]
    pub script: String,
    /// Voice identifier for lines on even overall indices.
    #[serde(default)]
    pub host1_voice: String,
    /// Voice identifier for lines on odd overall indices.
    #[serde(default)]
    pub host2_voice: String,
}

/// The podcast audio generator tool.
///
/// Validates parameters and credentials, synthesizes the script line by line
/// and returns the host-facing result messages. The synthesizer and gap
/// sampler can be overridden for tests; by default each invocation builds an
/// OpenAI `tts-1` client from the stored API key.
pub struct PodcastAudioGeneratorTool {
    credentials: Option<CredentialStore>,
    synthesizer: Option<Arc<dyn SpeechSynthesizer>>,
    gap_sampler: Arc<dyn GapSampler>,
}

impl PodcastAudioGeneratorTool {
    pub fn new(credentials: Option<CredentialStore>) -> Self {
        Self {
            credentials,
            synthesizer: None,
            gap_sampler: Arc::new(UniformGapSampler::default()),
        }
    }

    /// Replace the remote synthesis call, bypassing the OpenAI client.
    pub fn with_synthesizer(mut self, synthesizer: Arc<dyn SpeechSynthesizer>) -> Self {
        self.synthesizer = Some(synthesizer);
        self
    }

    /// Replace the silence gap duration source.
    pub fn with_gap_sampler(mut self, gap_sampler: Arc<dyn GapSampler>) -> Self {
        self.gap_sampler = gap_sampler;
        self
    }

    /// Run one generation request.
    ///
    /// Returns `Err` only for parameter and credential validation failures,
    /// both checked before any remote call. A synthesis failure is reported
    /// as a single text message instead, with no audio blob.
    pub async fn invoke(&self, params: PodcastAudioGeneratorParams) -> ToolResult<Vec<ToolMessage>> {
        if params.host1_voice.is_empty() || params.host2_voice.is_empty() {
            return Err(ToolError::ParameterValidation(
                "Host voices are required".to_string(),
            ));
        }

        let credentials = self.credentials.as_ref().ok_or_else(|| {
            ToolError::CredentialValidation("Tool runtime or credentials are missing".to_string())
        })?;
        let api_key = credentials.get(API_KEY_CREDENTIAL).ok_or_else(|| {
            ToolError::CredentialValidation("OpenAI API key is missing".to_string())
        })?;

        let synthesizer = match &self.synthesizer {
            Some(synthesizer) => synthesizer.clone(),
            None => Arc::new(OpenAiSynthesizer::from_api_key(api_key)),
        };
        let service = PodcastService::new(synthesizer, self.gap_sampler.clone());

        match service
            .assemble(&params.script, &params.host1_voice, &params.host2_voice)
            .await
        {
            Ok(podcast) => {
                tracing::info!(
                    spoken_lines = podcast.spoken_lines,
                    audio_size_bytes = podcast.audio.len(),
                    "Podcast audio generated"
                );
                Ok(vec![
                    ToolMessage::text("Audio generated successfully"),
                    ToolMessage::audio_blob(podcast.audio),
                ])
            }
            Err(PodcastServiceError::Synthesis(message)) => {
                tracing::error!(error = %message, "Podcast audio generation failed");
                Ok(vec![ToolMessage::text(format!(
                    "Error generating audio: {message}"
                ))])
            }
        }
    }
}
