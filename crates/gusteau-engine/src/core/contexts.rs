use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;

// Implementation detail of the state context. Created on first use.
#[derive(Debug, Default)]
struct StateDetail {
    ticks: AtomicU64,
}

/// Holds the application state.
///
/// Construction is trivial; the detail behind it is created lazily the first
/// time the state engine touches it.
#[derive(Debug, Default)]
pub struct StateContext {
    detail: OnceLock<StateDetail>,
}

impl StateContext {
    pub fn new() -> Self {
        Self::default()
    }

    fn detail(&self) -> &StateDetail {
        self.detail.get_or_init(|| {
            log::trace!("state context detail created");
            StateDetail::default()
        })
    }

    /// Whether the detail has been created yet.
    pub fn is_initialized(&self) -> bool {
        self.detail.get().is_some()
    }

    /// Records one state engine iteration.
    pub fn tick(&self) {
        self.detail().ticks.fetch_add(1, Ordering::Relaxed);
    }

    /// Number of state engine iterations so far.
    pub fn ticks(&self) -> u64 {
        self.detail
            .get()
            .map_or(0, |d| d.ticks.load(Ordering::Relaxed))
    }
}

#[derive(Debug, Default)]
struct RenderDetail {
    ticks: AtomicU64,
}

/// Holds render-side resources. Same lazy construction as [`StateContext`].
#[derive(Debug, Default)]
pub struct RenderContext {
    detail: OnceLock<RenderDetail>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    fn detail(&self) -> &RenderDetail {
        self.detail.get_or_init(|| {
            log::trace!("render context detail created");
            RenderDetail::default()
        })
    }

    pub fn is_initialized(&self) -> bool {
        self.detail.get().is_some()
    }

    /// Records one render engine iteration.
    pub fn tick(&self) {
        self.detail().ticks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn ticks(&self) -> u64 {
        self.detail
            .get()
            .map_or(0, |d| d.ticks.load(Ordering::Relaxed))
    }
}
