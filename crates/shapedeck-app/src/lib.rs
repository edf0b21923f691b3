//! ShapeDeck Application
//!
//! The application shell providing windowing, the egui panels and the
//! Vello shape preview around the observable shape model.

mod app;
mod config;
mod session;
mod ui;

pub use app::App;
pub use config::{AppConfig, ConfigError};
pub use session::Session;
pub use ui::{render_ui, UiAction, UiState};
