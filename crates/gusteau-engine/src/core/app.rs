use super::{JoinFlag, RenderContext, StateContext};

/// Control directive returned by per-frame callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// The application context shared by every engine.
///
/// Engines receive it as `Arc<dyn ApplicationContext>` and run on different
/// threads, hence the `Send + Sync` bound. The owner of the concrete context
/// (normally `main`) outlives every engine.
pub trait ApplicationContext: Send + Sync + 'static {
    /// Called by the UI engine once per iteration, after the UI has rendered.
    fn update(&self) {}

    /// The `join_now` signal. Once set, every engine leaves its loop.
    fn join_flag(&self) -> &JoinFlag;

    fn state(&self) -> &StateContext;

    fn render(&self) -> &RenderContext;
}
