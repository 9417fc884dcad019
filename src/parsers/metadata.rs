use once_cell::sync::Lazy;
use regex::Regex;

static COOK_TIME: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)\s*minutes").unwrap());
static SERVINGS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)\s*servings?").unwrap());

/// Recipe title, cook time and servings pulled from the top of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeMetadata {
    pub title: String,
    pub cook_time: String,
    pub servings: u32,
}

impl Default for RecipeMetadata {
    fn default() -> Self {
        Self {
            title: "Unknown Recipe".to_string(),
            cook_time: "30 minutes".to_string(),
            servings: 2,
        }
    }
}

/// Extract recipe title, cook time, and servings.
///
/// The title is the first substantial line (more than 20 characters,
/// not the cookware section header) whose immediate next line carries
/// both a minute count and a serving count. Scanning stops at the first
/// line that qualifies; documents with earlier substantial lines will
/// mis-detect, which is accepted behavior for this layout.
pub fn parse_metadata(text: &str) -> RecipeMetadata {
    let lines: Vec<&str> = text.split('\n').collect();

    for (i, raw) in lines.iter().enumerate() {
        let line = raw.trim();

        if line.chars().count() <= 20 || line.starts_with("Find cookware") {
            continue;
        }

        let Some(next_line) = lines.get(i + 1).map(|l| l.trim()) else {
            continue;
        };
        if !next_line.contains("minutes") || !next_line.contains("servings") {
            continue;
        }

        let mut metadata = RecipeMetadata {
            title: line.to_string(),
            ..Default::default()
        };
        if let Some(captures) = COOK_TIME.captures(next_line) {
            metadata.cook_time = format!("{} minutes", &captures[1]);
        }
        if let Some(captures) = SERVINGS.captures(next_line) {
            metadata.servings = captures[1].parse().unwrap_or(metadata.servings);
        }
        return metadata;
    }

    RecipeMetadata::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_title_time_and_servings() {
        let text = "Creamy Garlic Parmesan Chicken Pasta\n25 minutes, 4 servings\nFind cookware\n";
        let metadata = parse_metadata(text);
        assert_eq!(metadata.title, "Creamy Garlic Parmesan Chicken Pasta");
        assert_eq!(metadata.cook_time, "25 minutes");
        assert_eq!(metadata.servings, 4);
    }

    #[test]
    fn test_singular_serving_line_fails_the_gate() {
        // The gate checks for the literal substring "servings", so a
        // "1 serving" line never qualifies and defaults apply.
        let text = "A Very Long Recipe Title Indeed\n15 minutes, 1 serving\n";
        let metadata = parse_metadata(text);
        assert_eq!(metadata.title, "Unknown Recipe");
        assert_eq!(metadata.servings, 2);
    }

    #[test]
    fn test_defaults_when_no_candidate_found() {
        let metadata = parse_metadata("short line\nanother short one\n");
        assert_eq!(metadata.title, "Unknown Recipe");
        assert_eq!(metadata.cook_time, "30 minutes");
        assert_eq!(metadata.servings, 2);
    }

    #[test]
    fn test_skips_long_lines_without_time_servings_follower() {
        let text = "This line is long enough to be a title candidate\nbut nothing useful here\nActual Recipe Title With Enough Length\n30 minutes, 2 servings\n";
        let metadata = parse_metadata(text);
        assert_eq!(metadata.title, "Actual Recipe Title With Enough Length");
    }

    #[test]
    fn test_first_qualifying_line_wins() {
        let text = "First Qualifying Title Line Number One\n10 minutes, 2 servings\nSecond Qualifying Title Line Number Two\n20 minutes, 6 servings\n";
        let metadata = parse_metadata(text);
        assert_eq!(metadata.title, "First Qualifying Title Line Number One");
        assert_eq!(metadata.cook_time, "10 minutes");
        assert_eq!(metadata.servings, 2);
    }

    #[test]
    fn test_cookware_header_is_not_a_title() {
        let text = "Find cookware for this long recipe here\n25 minutes, 4 servings\n";
        let metadata = parse_metadata(text);
        assert_eq!(metadata.title, "Unknown Recipe");
    }
}
