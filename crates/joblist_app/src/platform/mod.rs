mod app;
pub mod config;
pub mod logging;
mod services;
mod ui;

pub use app::run_app;
