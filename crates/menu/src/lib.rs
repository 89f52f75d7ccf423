//! # Konoba Menu Analysis
//!
//! Ranks menu items, builds the day-of-week and category views, and turns
//! them into actionable recommendations.
//!
//! Like the analytics crate this is pure Layer 1 logic: three independent,
//! order-stable projections of a sales dataset plus a rule engine over the
//! projections. Empty input produces empty output at every step; nothing
//! here can fail.

pub mod category;
pub mod patterns;
pub mod performance;
pub mod recommend;

pub use category::{CategorySummary, analyze_category_revenue};
pub use patterns::{DayPatternTable, analyze_day_patterns};
pub use performance::{ItemPerformance, analyze_item_performance};
pub use recommend::{Recommendation, RecommendationEngine};
