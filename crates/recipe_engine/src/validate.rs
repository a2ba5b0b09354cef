use recipe_core::Recipe;

use crate::{InvalidDataKind, RecipeError};

/// Semantic pass run after decoding: every recipe needs a non-empty name and cuisine.
pub fn validate_recipes(recipes: &[Recipe]) -> Result<(), RecipeError> {
    match recipes
        .iter()
        .find(|recipe| recipe.cuisine.is_empty() || recipe.name.is_empty())
    {
        Some(incomplete) => Err(RecipeError::InvalidData(
            InvalidDataKind::IncompleteRecipe {
                id: incomplete.id.clone(),
            },
        )),
        None => Ok(()),
    }
}
