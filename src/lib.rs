//! Converts Mealime PDF recipe exports into a structured JSON document.
//!
//! The text of each PDF is extracted and scanned with positional
//! heuristics tuned to the Mealime export layout: a title line followed
//! by a time/servings line, then "Find cookware", "Grab ingredients"
//! and "Cook & enjoy" sections.

pub mod error;
pub mod extract;
pub mod model;
pub mod parsers;
pub mod pipeline;
pub mod validator;

pub use crate::error::ImportError;
pub use crate::model::{
    generate_id, Category, DocumentMetadata, Ingredient, InstructionStep, OutputDocument, Recipe,
};
pub use crate::pipeline::{parse_recipe_pdf, parse_recipe_text, process_directory, BatchSummary};
pub use crate::validator::{validate_file, ValidationReport};
