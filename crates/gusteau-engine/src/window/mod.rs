//! Window + UI runtime loop.
//!
//! Owns the `winit` EventLoop and drives the UI context from it. This is the
//! UI engine; it must run on the main thread.

mod runtime;

pub use runtime::ui_engine;
