use url::Url;

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    /// Stable identity, used by list views for diffing.
    pub id: String,
    pub name: String,
    pub cuisine: String,
    pub photo_url_large: Option<Url>,
    pub photo_url_small: Option<Url>,
    pub source_url: Option<Url>,
    pub youtube_url: Option<Url>,
}

impl Recipe {
    /// Small photo if present, otherwise the large one.
    pub fn thumbnail(&self) -> Option<&Url> {
        self.photo_url_small
            .as_ref()
            .or(self.photo_url_large.as_ref())
    }
}
