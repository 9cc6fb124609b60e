pub mod audio;
pub mod podcast;
pub mod script;
