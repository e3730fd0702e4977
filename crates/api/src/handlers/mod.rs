//! Per-resource configurations for the generic resource handler.

pub mod folders;
pub mod notes;

pub use folders::Folders;
pub use notes::Notes;
