pub mod error;
pub mod service;

pub use error::PodcastServiceError;
pub use service::{AssembledPodcast, PodcastService, PodcastServiceApi};
