use url::Url;

use crate::Recipe;

/// The phase a presentation layer renders. `Ready` with no rows is the empty catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Ready,
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub phase: Phase,
    pub rows: Vec<RecipeRowView>,
    pub recipe_count: usize,
    pub is_fetching: bool,
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeRowView {
    pub id: String,
    pub name: String,
    pub cuisine: String,
    pub thumbnail: Option<Url>,
    pub has_video: bool,
    pub has_source: bool,
}

impl From<&Recipe> for RecipeRowView {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id.clone(),
            name: recipe.name.clone(),
            cuisine: recipe.cuisine.clone(),
            thumbnail: recipe.thumbnail().cloned(),
            has_video: recipe.youtube_url.is_some(),
            has_source: recipe.source_url.is_some(),
        }
    }
}
