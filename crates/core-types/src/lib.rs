//! # Konoba Core Types
//!
//! The shared vocabulary of the whole workspace: the raw sales record, the
//! immutable dataset it lives in, and the small enums the other crates agree
//! on. This is a Layer 0 crate with no knowledge of files, networks, or any
//! other external system.

pub mod enums;
pub mod error;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::{Language, RecommendationAction};
pub use error::CoreError;
pub use structs::{SalesDataset, SalesRecord};
