//! Domain logic shared by the Noteful service crates.
//!
//! Pure code only: types, the domain error enum, request validation
//! helpers, and the HTML sanitizer applied to free-text fields before
//! they leave the API.

pub mod error;
pub mod sanitize;
pub mod types;
pub mod validate;
