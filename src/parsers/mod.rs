mod cookware;
mod ingredients;
mod instructions;
mod metadata;

pub use self::cookware::parse_cookware;
pub use self::ingredients::{categorize, parse_ingredients};
pub use self::instructions::parse_instructions;
pub use self::metadata::{parse_metadata, RecipeMetadata};
