use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use winit::application::ApplicationHandler;
use winit::event::{StartCause, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::WindowId;

use crate::core::{AppControl, ApplicationContext};
use crate::time::Pacer;
use crate::ui::UiContext;

/// Runs the UI engine on the calling thread until `join_now` is set.
///
/// Each wake-up (an event, or the idle timeout derived from
/// `UiConfig::redraw_rate_hz`) requests a redraw; each redraw renders the UI
/// and then calls [`ApplicationContext::update`]. Closing the window or a fatal
/// surface error sets `join_now`.
pub fn ui_engine(app: Arc<dyn ApplicationContext>, ui: UiContext) -> Result<()> {
    let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
    let mut state = UiEngineState::new(app, ui);

    log::debug!("ui engine started");
    event_loop
        .run_app(&mut state)
        .context("winit event loop terminated with error")?;

    if let Some(err) = state.error.take() {
        return Err(err);
    }

    log::debug!("ui engine stopped");
    Ok(())
}

struct UiEngineState {
    app: Arc<dyn ApplicationContext>,
    ui: UiContext,
    pacer: Pacer,
    error: Option<anyhow::Error>,
}

impl UiEngineState {
    fn new(app: Arc<dyn ApplicationContext>, ui: UiContext) -> Self {
        let mut pacer = Pacer::new(ui.config().redraw_rate_hz);
        pacer.mark(Instant::now());
        Self {
            app,
            ui,
            pacer,
            error: None,
        }
    }

    fn join(&self, event_loop: &ActiveEventLoop) {
        self.app.join_flag().request();
        event_loop.exit();
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        self.error = Some(err);
        self.join(event_loop);
    }
}

impl ApplicationHandler for UiEngineState {
    fn new_events(&mut self, event_loop: &ActiveEventLoop, cause: StartCause) {
        if self.app.join_flag().is_set() {
            event_loop.exit();
            return;
        }

        // Idle wake-up. Marked here too, since the redraw may never be
        // delivered (hidden, occluded or minimized windows).
        if let StartCause::ResumeTimeReached { .. } = cause {
            let now = Instant::now();
            if self.pacer.is_due(now) {
                self.pacer.mark(now);
                self.ui.request_redraw();
            }
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if let Err(e) = self.ui.ensure_window(event_loop) {
            self.fail(event_loop, e.context("failed to create main window"));
            return;
        }
        self.ui.request_redraw();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.ui.window_id() != Some(window_id) {
            return;
        }

        let wants_repaint = self.ui.handle_window_event(&event);

        match event {
            WindowEvent::CloseRequested => {
                log::info!("main window closed");
                self.join(event_loop);
            }

            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                if self.ui.render(self.app.as_ref()) == AppControl::Exit {
                    self.fail(event_loop, anyhow::anyhow!("fatal surface error"));
                    return;
                }
                self.app.update();
                self.pacer.mark(now);

                // The content may have asked to join during this frame.
                if self.app.join_flag().is_set() {
                    log::info!("join requested by ui");
                    event_loop.exit();
                }
            }

            _ if wants_repaint => self.ui.request_redraw(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.app.join_flag().is_set() {
            event_loop.exit();
            return;
        }

        // Idle cadence: wake at the next deadline even without input.
        let deadline = self.pacer.wait_deadline(Instant::now());
        event_loop.set_control_flow(ControlFlow::WaitUntil(deadline));
    }
}
