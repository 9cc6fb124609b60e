pub mod messages;
pub mod podcast_audio_generator;

pub use messages::{ToolMessage, AUDIO_MIME_TYPE, AUDIO_VARIABLE_KEY};
pub use podcast_audio_generator::{PodcastAudioGeneratorParams, PodcastAudioGeneratorTool};
