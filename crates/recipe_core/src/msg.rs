use crate::Recipe;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Something (user pull-to-refresh, first appearance, a timer) asked for the catalog.
    FetchRequested,
    /// The in-flight request ended with a classified outcome.
    FetchFinished(FetchOutcome),
    /// The in-flight request was dropped before it produced an outcome.
    FetchAbandoned,
}

/// Terminal result of one fetch, already classified by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Loaded(Vec<Recipe>),
    /// Well-formed response that carried zero recipes.
    Empty,
    /// Endpoint, payload or a record failed validation.
    MalformedData,
    /// Transport failure; carries the description shown to the user.
    Failed(String),
}
