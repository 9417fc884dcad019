use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A single recipe extracted from one Mealime PDF export.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub cook_time: String,
    pub servings: u32,
    pub cookware: Vec<String>,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<InstructionStep>,
    /// Always empty at creation; can be filled in manually later
    pub tags: Vec<String>,
}

/// One ingredient line, split into quantity and name where possible.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    /// Lowercased ingredient name
    pub name: String,
    /// Quantity prefix such as "1 cup", empty when none was detected
    pub quantity: String,
    pub category: Category,
    /// The raw line as it appeared in the PDF text
    pub original: String,
}

/// Shopping category assigned by keyword lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Produce,
    Protein,
    Dairy,
    Spices,
    Pantry,
}

/// A numbered cooking instruction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstructionStep {
    pub step: u32,
    pub text: String,
}

/// The document written to the output JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputDocument {
    pub recipes: Vec<Recipe>,
    pub metadata: DocumentMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub total: usize,
    pub generated: String,
    pub source: String,
}

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s-]").unwrap());
static SEPARATOR_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[-\s]+").unwrap());

/// Generate a URL-safe ID from a recipe title.
///
/// Lowercases, strips special characters, and collapses whitespace and
/// hyphen runs into single hyphens.
pub fn generate_id(title: &str) -> String {
    let lowered = title.to_lowercase();
    let stripped = NON_WORD.replace_all(&lowered, "");
    let hyphenated = SEPARATOR_RUN.replace_all(&stripped, "-");
    hyphenated.trim_matches('-').to_string()
}
