//! Per-table repositories. Each exposes the same five single-table
//! operations: list, find_by_id, create, update, delete.

pub mod folder_repo;
pub mod note_repo;

pub use folder_repo::FolderRepo;
pub use note_repo::NoteRepo;
