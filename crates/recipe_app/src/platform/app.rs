use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use chrono::Local;
use recipe_core::Phase;
use recipe_engine::{HttpRecipeService, RecipeStore};
use recipe_logging::{recipe_debug, recipe_info};

use super::{config, logging, render};

/// Load configuration, fetch the catalog once and print it.
///
/// The first command-line argument, when present, replaces the configured endpoint.
pub fn run_app() -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir().context("failed to resolve working directory")?;
    let mut config = config::load_config(&cwd)?;
    if let Some(endpoint) = std::env::args().nth(1) {
        config.endpoint = endpoint;
    }
    logging::initialize(config.log_destination, config.log_level());

    let endpoint = config.endpoint();
    recipe_info!("recipe_app starting, endpoint {}", endpoint);

    let service = Arc::new(HttpRecipeService::with_settings(config.fetch_settings()));
    let store = RecipeStore::new(service, endpoint.as_str());

    let runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
    let mut observer = store.subscribe();
    runtime.spawn(async move {
        while observer.changed().await.is_ok() {
            let phase = observer.borrow_and_update().phase();
            recipe_debug!("phase -> {:?}", phase);
        }
    });

    runtime.block_on(store.fetch_all());

    let view = store.view();
    for line in render::render(&view, Some(Local::now())) {
        println!("{line}");
    }

    match view.phase {
        Phase::Error(_) => Ok(ExitCode::FAILURE),
        _ => Ok(ExitCode::SUCCESS),
    }
}
