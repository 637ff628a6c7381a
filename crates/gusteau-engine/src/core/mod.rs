//! Core engine-facing contracts.
//!
//! Defines the application context shared by every engine, the opaque state
//! and render contexts it bundles, and the join flag used to shut down.

mod app;
mod contexts;
mod join;

pub use app::{AppControl, ApplicationContext};
pub use contexts::{RenderContext, StateContext};
pub use join::JoinFlag;
