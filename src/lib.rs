//! Podcast audio generator: turns a two-host dialogue script into a single
//! audio buffer by synthesizing each line with a TTS provider, alternating
//! voices per line, with randomized silence gaps between lines.
//!
//! The crate is meant to be embedded in a plugin host that supplies
//! credentials and consumes the resulting tool messages.

pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod tool;
