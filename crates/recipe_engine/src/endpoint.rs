use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::{InvalidDataKind, RecipeError};

const ALL_RECIPES: &str = "https://d3jbb8n5wk0qxi.cloudfront.net/recipes.json";
const MALFORMED_RECIPES: &str = "https://d3jbb8n5wk0qxi.cloudfront.net/recipes-malformed.json";
const EMPTY_RECIPES: &str = "https://d3jbb8n5wk0qxi.cloudfront.net/recipes-empty.json";

/// Catalog documents served by the origin, plus any other endpoint text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Endpoint {
    #[default]
    All,
    Malformed,
    Empty,
    Custom(String),
}

impl Endpoint {
    pub fn as_str(&self) -> &str {
        match self {
            Endpoint::All => ALL_RECIPES,
            Endpoint::Malformed => MALFORMED_RECIPES,
            Endpoint::Empty => EMPTY_RECIPES,
            Endpoint::Custom(text) => text,
        }
    }
}

impl From<&str> for Endpoint {
    /// Preset names map to their documents; any other text becomes a custom endpoint.
    fn from(text: &str) -> Self {
        match text.trim() {
            "all" => Endpoint::All,
            "malformed" => Endpoint::Malformed,
            "empty" => Endpoint::Empty,
            other => Endpoint::Custom(other.to_string()),
        }
    }
}

impl FromStr for Endpoint {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Endpoint::from(s))
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse endpoint text into a request target.
pub fn parse_endpoint(text: &str) -> Result<Url, RecipeError> {
    Url::parse(text).map_err(|_| RecipeError::InvalidData(InvalidDataKind::MalformedEndpoint))
}
