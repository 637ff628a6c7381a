//! Time subsystem.
//!
//! Frame timing and fixed-rate pacing, decoupled from the runtime so both can
//! be tested without a window:
//! - one `FrameClock` per window, ticked once per presented frame
//! - one `Pacer` per loop that wakes on a fixed cadence

mod frame_clock;
mod pacer;

pub use frame_clock::{FrameClock, FrameTime};
pub use pacer::{Pacer, DEFAULT_RATE_HZ};
