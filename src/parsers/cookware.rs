use once_cell::sync::Lazy;
use regex::Regex;

static COOKWARE_SECTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)Find cookware\n(.*?)\nGrab ingredients").unwrap());
static OPTIONAL_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\(optional\)").unwrap());

/// Extract the cookware list from the "Find cookware" section.
///
/// Returns an empty list when the section anchors are not present.
pub fn parse_cookware(text: &str) -> Vec<String> {
    let Some(captures) = COOKWARE_SECTION.captures(text) else {
        return Vec::new();
    };

    let mut cookware = Vec::new();
    for item in captures[1].split('\n') {
        let item = item.trim();
        if item.is_empty() || item.starts_with("Find") || item.chars().count() <= 2 {
            continue;
        }
        cookware.push(OPTIONAL_MARKER.replace_all(item, "").to_string());
    }
    cookware
}
