//! Recipe engine: HTTP fetch, envelope decoding, validation and the fetch orchestrator.
mod decode;
mod endpoint;
mod fetch;
mod service;
mod store;
mod types;
mod validate;

pub use decode::decode_envelope;
pub use endpoint::{parse_endpoint, Endpoint};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use service::{HttpRecipeService, RecipeService};
pub use store::{classify_outcome, FetchAttempt, RecipeStore};
pub use types::{FaultKind, FetchOutput, InvalidDataKind, RecipeError, TransportFault};
pub use validate::validate_recipes;
