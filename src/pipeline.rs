use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::ImportError;
use crate::extract::extract_text;
use crate::model::{generate_id, DocumentMetadata, OutputDocument, Recipe};
use crate::parsers::{parse_cookware, parse_ingredients, parse_instructions, parse_metadata};

/// Outcome of a directory conversion run.
#[derive(Debug)]
pub struct BatchSummary {
    /// Number of recipes written to the output document
    pub converted: usize,
    /// File names that failed to convert
    pub failed: Vec<String>,
    /// Size of the written JSON document in bytes
    pub output_bytes: u64,
}

/// Assemble a recipe from already-extracted document text.
///
/// The section parsers run independently over the same text; a missing
/// section yields an empty list rather than an error.
pub fn parse_recipe_text(text: &str) -> Recipe {
    let metadata = parse_metadata(text);
    let cookware = parse_cookware(text);
    let ingredients = parse_ingredients(text);
    let instructions = parse_instructions(text);

    Recipe {
        id: generate_id(&metadata.title),
        title: metadata.title,
        cook_time: metadata.cook_time,
        servings: metadata.servings,
        cookware,
        ingredients,
        instructions,
        tags: Vec::new(),
    }
}

/// Parse a single Mealime PDF and extract all recipe data.
///
/// A recipe with empty ingredients or instructions is still returned;
/// only a complete extraction failure is an error.
pub fn parse_recipe_pdf(path: &Path) -> Result<Recipe, ImportError> {
    println!("Processing: {}", file_name_of(path));

    let text = extract_text(path);
    if text.is_empty() {
        println!("  ⚠️  Warning: Could not extract text from {}", path.display());
        return Err(ImportError::Extraction(path.to_path_buf()));
    }

    let recipe = parse_recipe_text(&text);

    if recipe.ingredients.is_empty() || recipe.instructions.is_empty() {
        println!(
            "  ⚠️  Warning: Missing ingredients or instructions in {}",
            path.display()
        );
        println!(
            "     Ingredients: {}, Instructions: {}",
            recipe.ingredients.len(),
            recipe.instructions.len()
        );
    }

    println!(
        "  ✓ Extracted: {} ingredients, {} steps",
        recipe.ingredients.len(),
        recipe.instructions.len()
    );

    Ok(recipe)
}

/// Process all PDF files in a directory and write the JSON output.
///
/// Files are processed in name order; a failing file is recorded and
/// the batch continues. The output document is written even when every
/// file failed, but not when the directory is missing or holds no PDFs.
pub fn process_directory(input_dir: &Path, output_file: &Path) -> Result<BatchSummary, ImportError> {
    if !input_dir.exists() {
        return Err(ImportError::InputDirNotFound(input_dir.to_path_buf()));
    }

    let mut pdf_files: Vec<PathBuf> = fs::read_dir(input_dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "pdf"))
        .collect();
    pdf_files.sort();

    if pdf_files.is_empty() {
        return Err(ImportError::NoPdfFiles(input_dir.to_path_buf()));
    }

    println!("\nFound {} PDF files", pdf_files.len());
    println!("{}", "=".repeat(60));

    let mut recipes = Vec::new();
    let mut failed = Vec::new();

    for pdf_file in &pdf_files {
        let name = file_name_of(pdf_file);
        match parse_recipe_pdf(pdf_file) {
            Ok(recipe) => recipes.push(recipe),
            Err(ImportError::Extraction(_)) => {
                // The extraction warning was already printed per file.
                failed.push(name);
            }
            Err(e) => {
                warn!("failed to convert {}: {}", name, e);
                println!("  ❌ Error processing {}: {}", name, e);
                failed.push(name);
            }
        }
    }

    let total = recipes.len();
    let output_data = OutputDocument {
        recipes,
        metadata: DocumentMetadata {
            total,
            generated: "Generated by mealime-import".to_string(),
            source: input_dir.display().to_string(),
        },
    };

    if let Some(parent) = output_file.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(&output_data)?;
    fs::write(output_file, &json)?;
    let output_bytes = json.len() as u64;
    debug!("wrote {} bytes to {}", output_bytes, output_file.display());

    println!("\n{}", "=".repeat(60));
    println!("✓ Successfully processed: {} recipes", total);
    if !failed.is_empty() {
        println!("❌ Failed: {} recipes", failed.len());
        for name in &failed {
            println!("   - {}", name);
        }
    }
    println!("\n📄 Output written to: {}", output_file.display());
    println!("📊 Total file size: {:.1} KB", output_bytes as f64 / 1024.0);

    Ok(BatchSummary {
        converted: total,
        failed,
        output_bytes,
    })
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    const SAMPLE: &str = "\
Honey Garlic Chicken with Rice
25 minutes, 4 servings
Find cookware
Large skillet
Pot
Grab ingredients
2 lb chicken thighs
1 cup jasmine rice
3 cloves garlic
Cook & enjoy
1
Cook the rice.
2
Sear the chicken until
golden on both sides.
1 of 2
";

    #[test]
    fn test_full_text_assembly() {
        let recipe = parse_recipe_text(SAMPLE);
        assert_eq!(recipe.id, "honey-garlic-chicken-with-rice");
        assert_eq!(recipe.title, "Honey Garlic Chicken with Rice");
        assert_eq!(recipe.cook_time, "25 minutes");
        assert_eq!(recipe.servings, 4);
        assert_eq!(recipe.cookware, vec!["Large skillet", "Pot"]);
        assert_eq!(recipe.ingredients.len(), 3);
        assert_eq!(recipe.ingredients[0].category, Category::Protein);
        assert_eq!(recipe.instructions.len(), 2);
        assert_eq!(
            recipe.instructions[1].text,
            "Sear the chicken until golden on both sides."
        );
        assert!(recipe.tags.is_empty());
    }

    #[test]
    fn test_unparseable_text_still_assembles() {
        let recipe = parse_recipe_text("nothing recognizable in here");
        assert_eq!(recipe.title, "Unknown Recipe");
        assert_eq!(recipe.id, "unknown-recipe");
        assert_eq!(recipe.servings, 2);
        assert_eq!(recipe.cook_time, "30 minutes");
        assert!(recipe.ingredients.is_empty());
        assert!(recipe.instructions.is_empty());
    }
}
