//! Gusteau engine crate.
//!
//! Owns the platform, GPU and UI runtime pieces an application is assembled
//! from: a root graphics context, a UI context, the shared application context
//! and the three engines (state, render, UI) that update them.

pub mod core;
pub mod device;
pub mod engines;
pub mod logging;
pub mod time;
pub mod ui;
pub mod window;
