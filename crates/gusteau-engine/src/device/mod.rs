//! GPU device + surface management.
//!
//! This module is responsible for:
//! - creating the root wgpu Instance/Adapter/Device/Queue shared by every window
//! - creating & configuring per-window surfaces against that root device
//! - acquiring frames and mapping surface errors to recovery actions

mod error;
mod frame;
mod graphics;
mod surface;

pub use error::SurfaceErrorAction;
pub use frame::SurfaceFrame;
pub use graphics::{create_root_graphics_context, GraphicsConfig, GraphicsContext};
pub use surface::WindowSurface;
