use serde::{Deserialize, Serialize};

/// MIME type of the combined audio blob.
pub const AUDIO_MIME_TYPE: &str = "audio/mpeg";

/// Output variable key the host stores the audio blob under.
pub const AUDIO_VARIABLE_KEY: &str = "audio";

/// A result message handed back to the plugin host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ToolMessage {
    Text {
        text: String,
    },
    Blob {
        data: Vec<u8>,
        mime_type: String,
        save_as: String,
    },
}

impl ToolMessage {
    pub fn text(text: impl Into<String>) -> Self {
        ToolMessage::Text { text: text.into() }
    }

    /// Blob message carrying the combined podcast audio.
    pub fn audio_blob(data: Vec<u8>) -> Self {
        ToolMessage::Blob {
            data,
            mime_type: AUDIO_MIME_TYPE.to_string(),
            save_as: AUDIO_VARIABLE_KEY.to_string(),
        }
    }
}
