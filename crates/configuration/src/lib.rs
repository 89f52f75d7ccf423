//! # Konoba Configuration
//!
//! Typed application settings plus the bilingual label tables.
//!
//! Settings come from an optional `konoba.toml` in the working directory,
//! overridable through `KONOBA_*` environment variables. Every field has a
//! default, so running with no file and no environment at all is fine. The
//! label tables are plain static lookups keyed by [`core_types::Language`];
//! callers inject them where text is rendered instead of reaching into any
//! global state.

// Declare the modules that make up this crate.
pub mod error;
pub mod labels;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use error::ConfigError;
pub use labels::{Labels, day_names};
pub use settings::{AiSettings, RestaurantSettings, RuleConfig, Settings};

/// Environment variable holding the text-generation API credential.
pub const API_KEY_VAR: &str = "ANTHROPIC_API_KEY";

/// Loads the application settings.
///
/// Reads `konoba.toml` if present, applies `KONOBA_*` environment overrides
/// (`__` as the section separator, e.g. `KONOBA_AI__MODEL`), and falls back
/// to built-in defaults for everything else. The AI credential is taken from
/// [`API_KEY_VAR`] when the file and environment leave it unset.
pub fn load_settings() -> Result<Settings, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::with_name("konoba").required(false))
        .add_source(config::Environment::with_prefix("KONOBA").separator("__"))
        .build()?;

    let mut settings = builder.try_deserialize::<Settings>()?;

    if settings.ai.api_key.is_empty() {
        if let Ok(key) = std::env::var(API_KEY_VAR) {
            settings.ai.api_key = key;
        }
    }

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn defaults_apply_without_a_config_file() {
        let settings = Settings::default();
        assert_eq!(settings.restaurant.name, "Konoba");
        assert_eq!(settings.rules.tier_divisor, 3);
        assert_eq!(settings.rules.weekend_ratio_threshold, dec!(2.0));
    }
}
