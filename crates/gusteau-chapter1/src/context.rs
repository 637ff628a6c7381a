use std::sync::Arc;

use gusteau_engine::core::{ApplicationContext, JoinFlag, RenderContext, StateContext};
use gusteau_engine::device::GraphicsContext;

/// Bundles the contexts and the running state of the application.
pub struct Chapter1Context {
    graphics: GraphicsContext,
    state: StateContext,
    render: RenderContext,
    join: JoinFlag,
}

impl Chapter1Context {
    pub fn new(graphics: &GraphicsContext) -> Self {
        Self {
            graphics: graphics.clone(),
            state: StateContext::new(),
            render: RenderContext::new(),
            join: JoinFlag::new(),
        }
    }

    pub fn graphics(&self) -> &GraphicsContext {
        &self.graphics
    }
}

impl ApplicationContext for Chapter1Context {
    // Nothing to update yet.
    fn update(&self) {}

    fn join_flag(&self) -> &JoinFlag {
        &self.join
    }

    fn state(&self) -> &StateContext {
        &self.state
    }

    fn render(&self) -> &RenderContext {
        &self.render
    }
}

pub fn create_application_context(graphics: &GraphicsContext) -> Arc<Chapter1Context> {
    Arc::new(Chapter1Context::new(graphics))
}
