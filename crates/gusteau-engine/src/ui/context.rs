use std::sync::Arc;

use anyhow::{Context, Result};
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowId};

use crate::core::{AppControl, ApplicationContext};
use crate::device::{GraphicsContext, SurfaceErrorAction, WindowSurface};
use crate::time::FrameClock;

use super::egui_layer::EguiLayer;
use super::{show_content, UiConfig, UiContent};

/// Everything that needs a live window. Created on first resume.
struct Detail {
    window: Arc<Window>,
    surface: WindowSurface,
    egui: EguiLayer,
    clock: FrameClock,
}

/// Holds everything the user can see, starting with the main window.
///
/// Creating a `UiContext` does not open anything: the window, its surface and
/// the egui state are created by [`UiContext::ensure_window`] once the event
/// loop is running. The context must stay on the thread running that loop.
pub struct UiContext {
    graphics: GraphicsContext,
    config: UiConfig,
    content: Box<dyn UiContent>,
    detail: Option<Detail>,
}

impl UiContext {
    pub fn new(graphics: &GraphicsContext, config: UiConfig, content: impl UiContent) -> Self {
        Self {
            graphics: graphics.clone(),
            config,
            content: Box::new(content),
            detail: None,
        }
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    /// Id of the main window, once it exists.
    pub fn window_id(&self) -> Option<WindowId> {
        self.detail.as_ref().map(|d| d.window.id())
    }

    /// Creates the window, its surface and the egui state. Idempotent.
    pub fn ensure_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        if self.detail.is_some() {
            return Ok(());
        }

        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );

        let surface = WindowSurface::new(&self.graphics, Arc::clone(&window))
            .context("failed to attach surface to window")?;
        let egui = EguiLayer::new(&self.graphics, surface.format(), &window, self.config.zoom);

        log::info!(
            "window '{}' opened ({}x{} px)",
            self.config.title,
            surface.size().width,
            surface.size().height
        );

        self.detail = Some(Detail {
            window,
            surface,
            egui,
            clock: FrameClock::default(),
        });
        Ok(())
    }

    /// Forwards a window event to egui and keeps the surface sized to the window.
    ///
    /// Returns whether the event asks for a repaint.
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        let Some(detail) = self.detail.as_mut() else {
            return false;
        };

        let response = detail.egui.on_window_event(&detail.window, event);

        match event {
            WindowEvent::Resized(new_size) => {
                if restored_from_zero(detail.surface.size(), *new_size) {
                    // Time spent minimized is not a frame delta.
                    detail.clock.reset();
                }
                detail.surface.resize(*new_size);
                true
            }
            WindowEvent::ScaleFactorChanged { .. } => {
                detail.surface.resize(detail.window.inner_size());
                true
            }
            _ => response.repaint,
        }
    }

    pub fn request_redraw(&self) {
        if let Some(detail) = &self.detail {
            detail.window.request_redraw();
        }
    }

    /// Renders one frame: clears the window, runs the content and draws it.
    ///
    /// Does nothing before the window exists, while it is minimized, or once
    /// the application has been asked to join.
    pub fn render(&mut self, app: &dyn ApplicationContext) -> AppControl {
        if app.join_flag().is_set() {
            return AppControl::Continue;
        }

        let Some(detail) = self.detail.as_mut() else {
            return AppControl::Continue;
        };

        if detail.surface.is_zero_sized() {
            return AppControl::Continue;
        }

        // Acquire before running egui so a skipped frame does not drop
        // texture updates.
        let frame = match detail.surface.acquire() {
            Ok(frame) => frame,
            Err(err) => {
                return match detail.surface.handle_error(err) {
                    SurfaceErrorAction::Fatal => AppControl::Exit,
                    _ => AppControl::Continue,
                };
            }
        };

        let ft = detail.clock.tick();
        log::trace!("ui frame {} (dt {:.4}s)", ft.frame_index, ft.dt);

        let content = self.content.as_mut();
        let output = detail
            .egui
            .run(&detail.window, |ctx| show_content(ctx, &mut *content, app));

        let size = detail.surface.size();
        let mut encoder =
            self.graphics
                .device()
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("gusteau ui encoder"),
                });

        let uploads = detail.egui.paint(
            &self.graphics,
            &mut encoder,
            &frame.view,
            self.config.clear_color_wgpu(),
            [size.width, size.height],
            output,
        );

        self.graphics
            .queue()
            .submit(uploads.into_iter().chain(std::iter::once(encoder.finish())));

        detail.window.pre_present_notify();
        frame.present();

        AppControl::Continue
    }
}

/// True when a window with no drawable area gets one back (un-minimize).
fn restored_from_zero(old: PhysicalSize<u32>, new: PhysicalSize<u32>) -> bool {
    let has_area = |s: PhysicalSize<u32>| s.width > 0 && s.height > 0;
    !has_area(old) && has_area(new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restore_detected_only_when_area_returns() {
        let zero = PhysicalSize::new(0, 0);
        let flat = PhysicalSize::new(800, 0);
        let full = PhysicalSize::new(800, 600);

        assert!(restored_from_zero(zero, full));
        assert!(restored_from_zero(flat, full));
        assert!(!restored_from_zero(full, full));
        assert!(!restored_from_zero(full, zero));
        assert!(!restored_from_zero(zero, flat));
    }
}
