//! Template-based fallback content, used whenever the API client is absent
//! or a call fails.

use core_types::Language;

/// Curated one-line descriptions for the house menu.
const ITEM_DESCRIPTIONS: [(&str, &str); 9] = [
    (
        "Roasted Chicken",
        "Slow-cooked for 3 hours with a blend of Balkan herbs and spices. Crispy skin, tender meat, unforgettable flavor.",
    ),
    (
        "Sarma",
        "Traditional cabbage rolls stuffed with seasoned meat and rice, simmered to perfection in a rich tomato broth.",
    ),
    (
        "Cevapi",
        "Hand-rolled grilled sausages served with fresh onions, kajmak, and warm somun bread. A Balkan classic.",
    ),
    (
        "Bao Buns",
        "Our fusion twist: fluffy steamed bao buns filled with Balkan-spiced pulled pork and pickled cabbage.",
    ),
    (
        "Caesar Salad",
        "Crisp romaine, shaved parmesan, crunchy croutons, and our house-made Caesar dressing.",
    ),
    (
        "Shopska Salad",
        "Fresh tomatoes, cucumbers, peppers, and onions topped with a generous layer of grated white cheese.",
    ),
    (
        "Baklava",
        "Layers of flaky phyllo dough, chopped walnuts, and a sweet honey syrup. Pure Balkan indulgence.",
    ),
    (
        "Turkish Coffee",
        "Rich, strong, and traditionally brewed in a dzezva. The perfect end to any meal.",
    ),
    (
        "Rakija",
        "Serbia's national spirit: smooth, aromatic plum brandy served chilled.",
    ),
];

/// The description for an item, if one is curated.
pub fn item_description(item: &str) -> Option<&'static str> {
    ITEM_DESCRIPTIONS
        .iter()
        .find(|(name, _)| *name == item)
        .map(|(_, desc)| *desc)
}

/// Converts an item name into a hashtag-safe CamelCase-ish tag.
pub fn make_tag(item: &str) -> String {
    item.split_whitespace().collect()
}

const DAILY_SPECIAL_EN: &str = "Today's special at {restaurant}: {item}!\n\
{description}\n\
Come taste tradition with a modern twist.\n\
{restaurant} | Order now!\n\n\
#{hashtag} #{tag} #BalkanFood";

const DAILY_SPECIAL_SR: &str = "Danas u restoranu {restaurant}: {item}!\n\
{description}\n\
Dođite i probajte tradiciju sa modernim zaokretom.\n\
{restaurant} | Naručite odmah!\n\n\
#{hashtag} #{tag} #BalkanskaHrana";

const TOP_SELLER_EN: &str = "Our {item} is your favorite, and we get why! \
{sold} sold this week alone.\n\
Have you tried it yet?\n\
{restaurant}\n\n\
#{hashtag} #{tag} #TopSeller #BalkanCuisine";

const TOP_SELLER_SR: &str = "Naš {item} je vaš omiljeni, i znamo zašto! \
{sold} prodato ove nedelje.\n\
Da li ste probali?\n\
{restaurant}\n\n\
#{hashtag} #{tag} #NajProdavaniji #BalkanskaKuhinja";

const WEEKEND_PROMO_EN: &str = "Weekend vibes at {restaurant}!\n\
This weekend, don't miss our {item}.\n\
{description}\n\
See you there!\n\n\
#{hashtag} #WeekendSpecial #{tag} #FoodLovers";

const WEEKEND_PROMO_SR: &str = "Vikend atmosfera u restoranu {restaurant}!\n\
Ovog vikenda, ne propustite naš {item}.\n\
{description}\n\
Vidimo se!\n\n\
#{hashtag} #VikendSpecijal #{tag} #LjubiteljiHrane";

/// Values substituted into a fallback template.
#[derive(Debug, Clone)]
pub struct TemplateContext<'a> {
    pub restaurant: &'a str,
    pub hashtag: &'a str,
    pub item: &'a str,
    pub description: &'a str,
    pub sold: i64,
}

pub(crate) fn daily_special(lang: Language, ctx: &TemplateContext<'_>) -> String {
    let template = match lang {
        Language::En => DAILY_SPECIAL_EN,
        Language::Sr => DAILY_SPECIAL_SR,
    };
    render(template, ctx)
}

pub(crate) fn top_seller(lang: Language, ctx: &TemplateContext<'_>) -> String {
    let template = match lang {
        Language::En => TOP_SELLER_EN,
        Language::Sr => TOP_SELLER_SR,
    };
    render(template, ctx)
}

pub(crate) fn weekend_promo(lang: Language, ctx: &TemplateContext<'_>) -> String {
    let template = match lang {
        Language::En => WEEKEND_PROMO_EN,
        Language::Sr => WEEKEND_PROMO_SR,
    };
    render(template, ctx)
}

fn render(template: &str, ctx: &TemplateContext<'_>) -> String {
    template
        .replace("{restaurant}", ctx.restaurant)
        .replace("{hashtag}", ctx.hashtag)
        .replace("{item}", ctx.item)
        .replace("{description}", ctx.description)
        .replace("{sold}", &ctx.sold.to_string())
        .replace("{tag}", &make_tag(ctx.item))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx<'a>() -> TemplateContext<'a> {
        TemplateContext {
            restaurant: "Konoba",
            hashtag: "Konoba",
            item: "Bao Buns",
            description: "Fluffy and full of flavor.",
            sold: 42,
        }
    }

    #[test]
    fn tags_strip_spaces() {
        assert_eq!(make_tag("Bao Buns"), "BaoBuns");
        assert_eq!(make_tag("Sarma"), "Sarma");
    }

    #[test]
    fn curated_descriptions_resolve() {
        assert!(item_description("Sarma").unwrap().contains("cabbage"));
        assert!(item_description("Mystery Dish").is_none());
    }

    #[test]
    fn templates_substitute_all_placeholders() {
        let text = daily_special(Language::En, &ctx());
        assert!(text.contains("Bao Buns"));
        assert!(text.contains("#BaoBuns"));
        assert!(!text.contains('{'));
    }

    #[test]
    fn serbian_templates_are_serbian() {
        let text = top_seller(Language::Sr, &ctx());
        assert!(text.contains("prodato ove nedelje"));
        assert!(text.contains("42"));
    }
}
