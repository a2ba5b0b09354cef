use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::FetchRequested => {
            // At most one request in flight; a redundant request leaves the
            // error, the recipes and the loading flag untouched.
            if state.begin_fetch() {
                vec![Effect::StartFetch]
            } else {
                Vec::new()
            }
        }
        Msg::FetchFinished(outcome) => {
            state.finish_fetch(outcome);
            Vec::new()
        }
        Msg::FetchAbandoned => {
            state.abandon_fetch();
            Vec::new()
        }
    };

    (state, effects)
}
