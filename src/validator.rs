use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::error::ImportError;

/// How many per-recipe issues to print before summarizing the rest.
const MAX_PRINTED_ISSUES: usize = 10;

/// Aggregate result of validating an output document.
#[derive(Debug)]
pub struct ValidationReport {
    pub total_recipes: usize,
    pub total_ingredients: usize,
    pub total_steps: usize,
    /// One message per recipe with missing required fields
    pub issues: Vec<String>,
}

// Lenient mirror of the output document: validation must tolerate
// documents with missing or partial fields.
#[derive(Debug, Default, Deserialize)]
struct StoredDocument {
    #[serde(default)]
    recipes: Vec<StoredRecipe>,
}

#[derive(Debug, Default, Deserialize)]
struct StoredRecipe {
    id: Option<String>,
    #[serde(default)]
    title: String,
    #[serde(default)]
    ingredients: Vec<Value>,
    #[serde(default)]
    instructions: Vec<Value>,
}

/// Validate a generated JSON document.
///
/// Checks every recipe for a non-empty title, ingredient list and
/// instruction list. A JSON parse failure surfaces as
/// [`ImportError::Json`], distinct from filesystem errors.
pub fn validate_file(path: &Path) -> Result<ValidationReport, ImportError> {
    let raw = fs::read_to_string(path)?;
    let document: StoredDocument = serde_json::from_str(&raw)?;

    let mut issues = Vec::new();
    let mut total_ingredients = 0;
    let mut total_steps = 0;

    for (i, recipe) in document.recipes.iter().enumerate() {
        total_ingredients += recipe.ingredients.len();
        total_steps += recipe.instructions.len();

        let mut missing = Vec::new();
        if recipe.title.is_empty() {
            missing.push("title");
        }
        if recipe.ingredients.is_empty() {
            missing.push("ingredients");
        }
        if recipe.instructions.is_empty() {
            missing.push("instructions");
        }

        if !missing.is_empty() {
            issues.push(format!(
                "Recipe {} ({}): missing {}",
                i + 1,
                recipe.id.as_deref().unwrap_or("unknown"),
                missing.join(", ")
            ));
        }
    }

    Ok(ValidationReport {
        total_recipes: document.recipes.len(),
        total_ingredients,
        total_steps,
        issues,
    })
}

/// Print a human-readable validation summary to stdout.
pub fn print_report(report: &ValidationReport) {
    println!("✓ Valid JSON with {} recipes", report.total_recipes);

    if report.issues.is_empty() {
        println!("✓ All recipes have required fields");
    } else {
        println!("\n⚠️  Validation warnings:");
        for issue in report.issues.iter().take(MAX_PRINTED_ISSUES) {
            println!("   - {}", issue);
        }
        if report.issues.len() > MAX_PRINTED_ISSUES {
            println!("   ... and {} more", report.issues.len() - MAX_PRINTED_ISSUES);
        }
    }

    println!("\nStatistics:");
    println!("  Total recipes: {}", report.total_recipes);
    println!("  Total ingredients: {}", report.total_ingredients);
    println!("  Total instruction steps: {}", report.total_steps);
    if report.total_recipes > 0 {
        let recipes = report.total_recipes as f64;
        println!(
            "  Avg ingredients per recipe: {:.1}",
            report.total_ingredients as f64 / recipes
        );
        println!(
            "  Avg steps per recipe: {:.1}",
            report.total_steps as f64 / recipes
        );
    }
}
