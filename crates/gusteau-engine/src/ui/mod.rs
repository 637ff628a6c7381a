//! User interface layer.
//!
//! `UiContext` owns the main window, its surface and the egui state behind
//! it. What the window shows is supplied by a [`UiContent`] implementation.

mod config;
mod content;
mod context;
mod egui_layer;

pub use config::UiConfig;
pub use content::{show_content, UiContent};
pub use context::UiContext;
