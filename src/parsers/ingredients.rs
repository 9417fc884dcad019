use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{Category, Ingredient};

static INGREDIENTS_SECTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)Grab ingredients\n(.*?)\n(?:Cook & enjoy|$)").unwrap());

// Matches quantity prefixes like "1 cup", "2 medium", "1 (15 oz) can".
static QUANTITY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^([\d/.\s]+(?:\([^)]+\))?\s*(?:cup|tbsp|tsp|oz|lb|fl oz|pkg|can|bunch|stick|clove|medium|small|large)?s?)\s+(.+)$",
    )
    .unwrap()
});

const PRODUCE: &[&str] = &[
    "carrot", "celery", "onion", "garlic", "tomato", "pepper", "kale", "lettuce", "spinach",
    "bean", "apple", "kiwi", "berry", "fruit", "lime", "lemon",
];
const PROTEIN: &[&str] = &[
    "chicken", "beef", "pork", "fish", "turkey", "salmon", "tuna", "shrimp", "tofu",
];
const DAIRY: &[&str] = &[
    "milk", "cheese", "yogurt", "butter", "cream", "cheddar", "mozzarella", "parmesan",
];
const SPICES: &[&str] = &[
    "salt", "pepper", "cumin", "paprika", "oregano", "basil", "thyme", "cinnamon", "turmeric",
    "chili powder", "italian seasoning",
];

/// Categorize an ingredient by keyword lookup.
///
/// Lists are checked in priority order; the first list containing a
/// matching keyword wins, everything else lands in pantry.
pub fn categorize(ingredient: &str) -> Category {
    let lowered = ingredient.to_lowercase();
    let contains_any = |words: &[&str]| words.iter().any(|word| lowered.contains(word));

    if contains_any(PRODUCE) {
        Category::Produce
    } else if contains_any(PROTEIN) {
        Category::Protein
    } else if contains_any(DAIRY) {
        Category::Dairy
    } else if contains_any(SPICES) {
        Category::Spices
    } else {
        Category::Pantry
    }
}

/// Extract ingredients from the "Grab ingredients" section.
///
/// The section runs to the "Cook & enjoy" anchor or the end of the
/// text. Each line is split into a quantity prefix and a name; lines
/// without a recognizable quantity keep the whole line as the name.
pub fn parse_ingredients(text: &str) -> Vec<Ingredient> {
    let Some(captures) = INGREDIENTS_SECTION.captures(text) else {
        return Vec::new();
    };

    let mut ingredients = Vec::new();
    for line in captures[1].split('\n') {
        let line = line.trim();
        if line.is_empty() || line.starts_with("Grab") || line.chars().count() < 3 {
            continue;
        }

        let category = categorize(line);
        let (quantity, name) = match QUANTITY.captures(line) {
            Some(c) => (c[1].trim().to_string(), c[2].trim().to_string()),
            None => (String::new(), line.to_string()),
        };

        ingredients.push(Ingredient {
            name: name.to_lowercase(),
            quantity,
            category,
            original: line.to_string(),
        });
    }
    ingredients
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(lines: &str) -> String {
        format!("Grab ingredients\n{}\nCook & enjoy\n", lines)
    }

    #[test]
    fn test_splits_quantity_and_name() {
        let ingredients = parse_ingredients(&section("1 cup flour"));
        assert_eq!(ingredients.len(), 1);
        assert_eq!(ingredients[0].quantity, "1 cup");
        assert_eq!(ingredients[0].name, "flour");
        assert_eq!(ingredients[0].category, Category::Pantry);
        assert_eq!(ingredients[0].original, "1 cup flour");
    }

    #[test]
    fn test_size_words_count_as_quantity() {
        let ingredients = parse_ingredients(&section("2 medium carrots"));
        assert_eq!(ingredients[0].quantity, "2 medium");
        assert_eq!(ingredients[0].name, "carrots");
        assert_eq!(ingredients[0].category, Category::Produce);
    }

    #[test]
    fn test_parenthetical_quantity() {
        let ingredients = parse_ingredients(&section("1 (15 oz) can beans"));
        assert_eq!(ingredients[0].quantity, "1 (15 oz) can");
        assert_eq!(ingredients[0].name, "beans");
    }

    #[test]
    fn test_line_without_quantity_keeps_full_name() {
        let ingredients = parse_ingredients(&section("fresh cilantro for garnish"));
        assert_eq!(ingredients[0].quantity, "");
        assert_eq!(ingredients[0].name, "fresh cilantro for garnish");
    }

    #[test]
    fn test_name_is_lowercased_original_is_not() {
        let ingredients = parse_ingredients(&section("1 cup Shredded Cheddar"));
        assert_eq!(ingredients[0].name, "shredded cheddar");
        assert_eq!(ingredients[0].original, "1 cup Shredded Cheddar");
        assert_eq!(ingredients[0].category, Category::Dairy);
    }

    #[test]
    fn test_section_runs_to_end_of_text_without_anchor() {
        let ingredients = parse_ingredients("Grab ingredients\n1 cup rice\n2 lb chicken thighs\n");
        assert_eq!(ingredients.len(), 2);
        assert_eq!(ingredients[1].category, Category::Protein);
    }

    #[test]
    fn test_short_lines_are_skipped() {
        let ingredients = parse_ingredients(&section("ok\n1 tsp salt"));
        assert_eq!(ingredients.len(), 1);
        assert_eq!(ingredients[0].category, Category::Spices);
    }

    #[test]
    fn test_missing_section_gives_empty_list() {
        assert!(parse_ingredients("no ingredient section here").is_empty());
    }

    #[test]
    fn test_categorize_priority_produce_before_dairy() {
        // "berry" (produce) and "cream" (dairy) both match; produce wins.
        assert_eq!(categorize("strawberry cream"), Category::Produce);
    }

    #[test]
    fn test_categorize_pepper_is_produce_not_spice() {
        // "pepper" appears in both lists; the produce list is checked first.
        assert_eq!(categorize("1 red bell pepper"), Category::Produce);
        assert_eq!(categorize("black peppercorns"), Category::Produce);
    }

    #[test]
    fn test_categorize_default_is_pantry() {
        assert_eq!(categorize("2 cups jasmine rice"), Category::Pantry);
    }
}
