use crate::view_model::{AppViewModel, Phase, RecipeRowView};
use crate::{FetchOutcome, Recipe};

/// Message shown for any endpoint, payload or record that fails validation.
pub const MALFORMED_DATA_MESSAGE: &str = "The recipes data is malformed. Please try again later.";

/// Pipeline state: `recipes`, `is_fetching` and `error_message` together form
/// one three-way phase (loading, error, ready).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    recipes: Vec<Recipe>,
    is_fetching: bool,
    error_message: Option<String>,
    has_loaded: bool,
    resume: RestPoint,
    dirty: bool,
}

/// What `begin_fetch` overwrote, restored if the fetch never produces an outcome.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct RestPoint {
    error_message: Option<String>,
    has_loaded: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn is_fetching(&self) -> bool {
        self.is_fetching
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn phase(&self) -> Phase {
        if self.is_fetching {
            Phase::Loading
        } else if let Some(message) = &self.error_message {
            Phase::Error(message.clone())
        } else if self.has_loaded {
            Phase::Ready
        } else {
            Phase::Idle
        }
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            phase: self.phase(),
            rows: self.recipes.iter().map(RecipeRowView::from).collect(),
            recipe_count: self.recipes.len(),
            is_fetching: self.is_fetching,
            error_message: self.error_message.clone(),
        }
    }

    /// Returns whether anything changed since the last call and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Enters the loading phase. Returns false when a fetch is already in flight.
    pub(crate) fn begin_fetch(&mut self) -> bool {
        if self.is_fetching {
            return false;
        }
        self.resume = RestPoint {
            error_message: self.error_message.take(),
            has_loaded: self.has_loaded,
        };
        self.is_fetching = true;
        self.dirty = true;
        true
    }

    pub(crate) fn finish_fetch(&mut self, outcome: FetchOutcome) -> bool {
        if !self.is_fetching {
            return false;
        }
        self.is_fetching = false;
        self.has_loaded = true;
        self.resume = RestPoint::default();
        self.dirty = true;
        match outcome {
            FetchOutcome::Loaded(recipes) => {
                self.recipes = recipes;
                self.error_message = None;
            }
            FetchOutcome::Empty => {
                self.recipes.clear();
                self.error_message = None;
            }
            FetchOutcome::MalformedData => {
                self.recipes.clear();
                self.error_message = Some(MALFORMED_DATA_MESSAGE.to_string());
            }
            FetchOutcome::Failed(description) => {
                self.recipes.clear();
                self.error_message = Some(description);
            }
        }
        true
    }

    /// Returns to the rest state the fetch started from.
    pub(crate) fn abandon_fetch(&mut self) -> bool {
        if !self.is_fetching {
            return false;
        }
        let resume = std::mem::take(&mut self.resume);
        self.error_message = resume.error_message;
        self.has_loaded = resume.has_loaded;
        self.is_fetching = false;
        self.dirty = true;
        true
    }
}
