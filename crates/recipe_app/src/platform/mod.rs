//! Headless terminal front end for the recipe store.
mod app;
mod config;
mod logging;
mod render;

pub use app::run_app;
