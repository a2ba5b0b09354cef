use std::sync::Arc;

use recipe_core::{update, AppState, AppViewModel, Effect, FetchOutcome, Msg, Recipe};
use recipe_logging::{recipe_debug, recipe_info, recipe_warn};
use tokio::sync::watch;

use crate::{RecipeError, RecipeService};

/// Whether a call to [`RecipeStore::fetch_all`] actually issued a request.
///
/// Failures are reported through the state's error message only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchAttempt {
    /// Another fetch was in flight; nothing was touched.
    Skipped,
    /// A request ran and the state holds its outcome.
    Completed,
}

/// Map a service result onto the outcome the state machine understands.
pub fn classify_outcome(result: Result<Vec<Recipe>, RecipeError>) -> FetchOutcome {
    match result {
        Ok(recipes) => FetchOutcome::Loaded(recipes),
        Err(RecipeError::EmptyRecipes) => FetchOutcome::Empty,
        Err(RecipeError::InvalidData(_)) => FetchOutcome::MalformedData,
        Err(RecipeError::NetworkError(fault)) => FetchOutcome::Failed(fault.to_string()),
    }
}

/// Owns the pipeline state and drives the injected service.
///
/// State lives in a `watch` channel: observers call [`RecipeStore::subscribe`]
/// and are woken after every visible change.
pub struct RecipeStore {
    service: Arc<dyn RecipeService>,
    endpoint: String,
    state: watch::Sender<AppState>,
}

impl RecipeStore {
    pub fn new(service: Arc<dyn RecipeService>, endpoint: impl Into<String>) -> Self {
        let (state, _) = watch::channel(AppState::new());
        Self {
            service,
            endpoint: endpoint.into(),
            state,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.state.subscribe()
    }

    pub fn view(&self) -> AppViewModel {
        self.state.borrow().view()
    }

    pub fn recipes(&self) -> Vec<Recipe> {
        self.state.borrow().recipes().to_vec()
    }

    pub fn is_fetching(&self) -> bool {
        self.state.borrow().is_fetching()
    }

    pub fn error_message(&self) -> Option<String> {
        self.state.borrow().error_message().map(ToOwned::to_owned)
    }

    /// Fetch the whole catalog once and publish the outcome.
    ///
    /// Returns [`FetchAttempt::Skipped`] without side effects while another
    /// fetch is in flight.
    pub async fn fetch_all(&self) -> FetchAttempt {
        // The in-flight check and the transition to loading happen in one
        // critical section, before the first await.
        let effects = self.dispatch(Msg::FetchRequested);
        if !effects.contains(&Effect::StartFetch) {
            recipe_debug!("fetch already in flight, ignoring request");
            return FetchAttempt::Skipped;
        }

        let mut guard = InFlight { store: self, armed: true };
        recipe_info!("fetching recipes from {}", self.endpoint);
        let result = self.service.fetch_recipes(&self.endpoint).await;
        match &result {
            Ok(recipes) => recipe_info!("loaded {} recipes", recipes.len()),
            Err(RecipeError::EmptyRecipes) => recipe_info!("catalog is empty"),
            Err(RecipeError::NetworkError(fault)) => {
                recipe_warn!("fetch from {} failed ({}): {}", self.endpoint, fault.kind, fault)
            }
            Err(err) => recipe_warn!("fetch from {} failed: {}", self.endpoint, err),
        }

        guard.armed = false;
        self.dispatch(Msg::FetchFinished(classify_outcome(result)));
        FetchAttempt::Completed
    }

    fn dispatch(&self, msg: Msg) -> Vec<Effect> {
        let mut effects = Vec::new();
        self.state.send_if_modified(|state| {
            let (mut next, produced) = update(std::mem::take(state), msg);
            effects = produced;
            let changed = next.consume_dirty();
            *state = next;
            changed
        });
        effects
    }
}

/// Clears the loading flag if `fetch_all` is dropped before the service returns.
struct InFlight<'a> {
    store: &'a RecipeStore,
    armed: bool,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.armed {
            recipe_warn!("fetch from {} dropped before completion", self.store.endpoint);
            self.store.dispatch(Msg::FetchAbandoned);
        }
    }
}
