use crate::client::PromptClient;
use crate::selector;
use crate::templates::{self, TemplateContext};
use configuration::RestaurantSettings;
use core_types::{Language, SalesDataset};
use tracing::warn;

/// The three content pieces produced per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    DailySpecial,
    TopSeller,
    WeekendPromo,
}

impl ContentKind {
    /// File stem used for the written output, e.g. `social_daily_special.txt`.
    pub fn file_stem(&self) -> &'static str {
        match self {
            ContentKind::DailySpecial => "daily_special",
            ContentKind::TopSeller => "top_seller",
            ContentKind::WeekendPromo => "weekend_promo",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ContentKind::DailySpecial => "Daily Special",
            ContentKind::TopSeller => "Top Seller",
            ContentKind::WeekendPromo => "Weekend Promo",
        }
    }
}

fn language_instruction(lang: Language) -> &'static str {
    match lang {
        Language::En => "Write in English.",
        Language::Sr => "Write in Serbian language.",
    }
}

/// Generates a post for the featured daily special.
pub async fn generate_daily_special(
    client: Option<&PromptClient>,
    item: &str,
    lang: Language,
    restaurant: &RestaurantSettings,
) -> String {
    let description =
        templates::item_description(item).unwrap_or("A delicious dish from our menu.");

    let prompt = format!(
        "Write a short, engaging Instagram post (max 150 words) for a restaurant called {}. \
         The post is about today's special: {}. Description: {}. \
         The restaurant serves traditional Balkan cuisine with modern fusion items. \
         Include relevant emojis and hashtags. {}",
        restaurant.name,
        item,
        description,
        language_instruction(lang)
    );

    generate_or_fallback(client, &prompt, || {
        templates::daily_special(
            lang,
            &TemplateContext {
                restaurant: &restaurant.name,
                hashtag: &restaurant.hashtag,
                item,
                description,
                sold: 0,
            },
        )
    })
    .await
}

/// Generates a post celebrating the week's top-selling item.
pub async fn generate_top_seller_post(
    client: Option<&PromptClient>,
    dataset: &SalesDataset,
    lang: Language,
    restaurant: &RestaurantSettings,
) -> String {
    let Some((item, sold)) = selector::top_seller_by_quantity(dataset) else {
        return "No data available to determine top seller.".to_string();
    };
    let description = templates::item_description(&item).unwrap_or("");

    let prompt = format!(
        "Write a short, celebratory Instagram post (max 150 words) for {} restaurant. \
         Highlight that '{}' is the top seller this week with {} sold. Description: {}. \
         Include relevant emojis and hashtags. {}",
        restaurant.name,
        item,
        sold,
        description,
        language_instruction(lang)
    );

    generate_or_fallback(client, &prompt, || {
        templates::top_seller(
            lang,
            &TemplateContext {
                restaurant: &restaurant.name,
                hashtag: &restaurant.hashtag,
                item: &item,
                description,
                sold,
            },
        )
    })
    .await
}

/// Generates a weekend promotion post around the weekend favorite.
pub async fn generate_weekend_promo(
    client: Option<&PromptClient>,
    dataset: &SalesDataset,
    lang: Language,
    restaurant: &RestaurantSettings,
) -> String {
    let Some(item) = selector::weekend_top_item(dataset) else {
        return "No data available for weekend promo.".to_string();
    };
    let description = templates::item_description(&item).unwrap_or("A fan favorite.");

    let prompt = format!(
        "Write a fun, inviting Instagram post (max 150 words) for {} restaurant's weekend special. \
         Feature the dish: {}. Description: {}. \
         Make it feel exciting and weekend-appropriate. \
         Include relevant emojis and hashtags. {}",
        restaurant.name,
        item,
        description,
        language_instruction(lang)
    );

    generate_or_fallback(client, &prompt, || {
        templates::weekend_promo(
            lang,
            &TemplateContext {
                restaurant: &restaurant.name,
                hashtag: &restaurant.hashtag,
                item: &item,
                description,
                sold: 0,
            },
        )
    })
    .await
}

/// Generates all three content pieces from the dataset.
///
/// The featured item drives the daily special; the other two pieces derive
/// their subject from the dataset directly.
pub async fn generate_all_content(
    client: Option<&PromptClient>,
    dataset: &SalesDataset,
    lang: Language,
    restaurant: &RestaurantSettings,
) -> Vec<(ContentKind, String)> {
    let featured = selector::featured_item(dataset);

    vec![
        (
            ContentKind::DailySpecial,
            generate_daily_special(client, &featured, lang, restaurant).await,
        ),
        (
            ContentKind::TopSeller,
            generate_top_seller_post(client, dataset, lang, restaurant).await,
        ),
        (
            ContentKind::WeekendPromo,
            generate_weekend_promo(client, dataset, lang, restaurant).await,
        ),
    ]
}

/// Tries the API client first; any miss lands on the template fallback.
async fn generate_or_fallback(
    client: Option<&PromptClient>,
    prompt: &str,
    fallback: impl FnOnce() -> String,
) -> String {
    if let Some(client) = client {
        match client.generate(prompt).await {
            Ok(text) => return text,
            Err(e) => warn!("Text generation failed, using template fallback: {}", e),
        }
    }
    fallback()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use core_types::SalesRecord;
    use rust_decimal_macros::dec;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn restaurant() -> RestaurantSettings {
        RestaurantSettings::default()
    }

    fn sample() -> SalesDataset {
        SalesDataset::new(vec![
            SalesRecord::new(d("2026-02-16"), "Sarma", "Mains", 12, dec!(5.0)),
            SalesRecord::new(d("2026-02-21"), "Cevapi", "Grill", 8, dec!(7.0)),
        ])
    }

    #[tokio::test]
    async fn all_three_pieces_render_without_a_client() {
        let content = generate_all_content(None, &sample(), Language::En, &restaurant()).await;
        assert_eq!(content.len(), 3);
        let (kind, daily) = &content[0];
        assert_eq!(*kind, ContentKind::DailySpecial);
        // Sarma has the higher revenue and is featured.
        assert!(daily.contains("Sarma"));
    }

    #[tokio::test]
    async fn top_seller_post_cites_the_quantity() {
        let text =
            generate_top_seller_post(None, &sample(), Language::En, &restaurant()).await;
        assert!(text.contains("Sarma"));
        assert!(text.contains("12"));
    }

    #[tokio::test]
    async fn serbian_output_uses_serbian_templates() {
        let text =
            generate_weekend_promo(None, &sample(), Language::Sr, &restaurant()).await;
        assert!(text.contains("Vikend"));
        assert!(text.contains("Cevapi"));
    }

    #[tokio::test]
    async fn empty_dataset_degrades_to_plain_messages() {
        let empty = SalesDataset::empty();
        let text = generate_top_seller_post(None, &empty, Language::En, &restaurant()).await;
        assert!(text.contains("No data"));
    }
}
