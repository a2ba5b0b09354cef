//! Recipe core: pure pipeline state machine and view-model helpers.
mod effect;
mod msg;
mod recipe;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::{FetchOutcome, Msg};
pub use recipe::Recipe;
pub use state::{AppState, MALFORMED_DATA_MESSAGE};
pub use update::update;
pub use view_model::{AppViewModel, Phase, RecipeRowView};
