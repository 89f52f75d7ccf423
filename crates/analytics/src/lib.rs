//! # Konoba Analytics Engine
//!
//! Weekly performance metrics over a sales dataset.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   files or any other external system. It depends only on `core-types`.
//! - **Stateless Calculation:** The `MetricsEngine` is a stateless
//!   calculator. It takes a current and a previous week of sales data and
//!   produces a `WeeklyReport`. Re-running it on identical inputs yields
//!   identical outputs.
//!
//! ## Public API
//!
//! - `split_week`: slices a full dataset into the current and previous
//!   7-calendar-day windows.
//! - `MetricsEngine`: the main struct that contains the calculation logic.
//! - `WeeklyReport`: the standardized struct holding the weekly metrics.
//! - `AnalyticsError`: the specific error types that can be returned from
//!   this crate.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
pub mod report;
pub mod window;

// Re-export the key components to create a clean, public-facing API.
pub use engine::MetricsEngine;
pub use error::AnalyticsError;
pub use report::WeeklyReport;
pub use window::{WeekWindow, split_week};
