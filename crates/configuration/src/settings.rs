use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

/// The root settings structure for the entire application.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub restaurant: RestaurantSettings,
    pub ai: AiSettings,
    pub rules: RuleConfig,
}

/// Identity of the venue, used in report titles and generated posts.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RestaurantSettings {
    pub name: String,
    /// Base hashtag for social posts, without the leading '#'.
    pub hashtag: String,
}

impl Default for RestaurantSettings {
    fn default() -> Self {
        Self {
            name: "Konoba".to_string(),
            hashtag: "Konoba".to_string(),
        }
    }
}

/// Settings for the optional text-generation collaborator.
///
/// An empty `api_key` disables the client entirely; the template fallback is
/// always available, so content generation works offline.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AiSettings {
    pub api_key: String,
    pub model: String,
    pub max_tokens: u32,
}

impl Default for AiSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: "claude-sonnet-4-20250514".to_string(),
            max_tokens: 512,
        }
    }
}

/// Thresholds driving the menu recommendation rules.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// Top and bottom tier sizes are `max(1, item_count / tier_divisor)`.
    pub tier_divisor: usize,
    /// Bottom-tier items selling less than this fraction of the median
    /// quantity are flagged for removal instead of a discount.
    pub remove_volume_factor: Decimal,
    /// Weekend/weekday quantity ratio above which an item earns an extra
    /// promote recommendation.
    pub weekend_ratio_threshold: Decimal,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            tier_divisor: 3,
            remove_volume_factor: dec!(0.5),
            weekend_ratio_threshold: dec!(2.0),
        }
    }
}
