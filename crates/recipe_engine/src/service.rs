use recipe_core::Recipe;
use recipe_logging::recipe_debug;

use crate::fetch::{FetchSettings, Fetcher, ReqwestFetcher};
use crate::{decode_envelope, parse_endpoint, validate_recipes, RecipeError};

/// Fetch-decode seam consumed by [`crate::RecipeStore`].
#[async_trait::async_trait]
pub trait RecipeService: Send + Sync {
    /// One request, no retries. Returns the validated records in document order.
    async fn fetch_recipes(&self, endpoint: &str) -> Result<Vec<Recipe>, RecipeError>;
}

/// The HTTP-backed service: parse, fetch, decode, reject empty, validate.
#[derive(Debug, Clone)]
pub struct HttpRecipeService<F = ReqwestFetcher> {
    fetcher: F,
}

impl HttpRecipeService<ReqwestFetcher> {
    pub fn with_settings(settings: FetchSettings) -> Self {
        Self::new(ReqwestFetcher::new(settings))
    }
}

impl<F: Fetcher> HttpRecipeService<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }
}

#[async_trait::async_trait]
impl<F: Fetcher> RecipeService for HttpRecipeService<F> {
    async fn fetch_recipes(&self, endpoint: &str) -> Result<Vec<Recipe>, RecipeError> {
        let url = parse_endpoint(endpoint)?;
        let output = self
            .fetcher
            .fetch(&url)
            .await
            .map_err(RecipeError::NetworkError)?;
        recipe_debug!(
            "decoding {} bytes from {} (content type {:?})",
            output.body.len(),
            url,
            output.content_type
        );

        let recipes = decode_envelope(&output.body)?;
        if recipes.is_empty() {
            return Err(RecipeError::EmptyRecipes);
        }
        validate_recipes(&recipes)?;
        Ok(recipes)
    }
}
