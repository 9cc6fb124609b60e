pub mod model;

pub use model::{DialogueScript, HostRole, SpokenLine};
