//! # Konoba Content
//!
//! Social media content derived from sales data.
//!
//! The selection rules (featured item, top seller, weekend favorite) are
//! pure functions over the dataset. Text comes from an optional
//! text-generation API client; when the client is absent or fails, a
//! bilingual template renders the same content offline. Generation is
//! therefore never fatal and needs no retry logic.

pub mod client;
pub mod error;
pub mod posts;
pub mod selector;
pub mod templates;

pub use client::PromptClient;
pub use error::ContentError;
pub use posts::{ContentKind, generate_all_content};
pub use selector::{featured_item, top_seller_by_quantity, weekend_top_item};
