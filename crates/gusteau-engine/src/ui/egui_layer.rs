//! egui integration with wgpu and winit.

use winit::event::WindowEvent;
use winit::window::Window;

use crate::device::GraphicsContext;

/// egui context, its winit platform state and its wgpu renderer.
pub(crate) struct EguiLayer {
    context: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
}

impl EguiLayer {
    pub(crate) fn new(
        graphics: &GraphicsContext,
        output_format: wgpu::TextureFormat,
        window: &Window,
        zoom: f32,
    ) -> Self {
        let context = egui::Context::default();
        context.set_visuals(egui::Visuals::dark());
        context.set_zoom_factor(zoom);

        let max_texture_side = graphics.device().limits().max_texture_dimension_2d as usize;
        let viewport_id = context.viewport_id();
        let state = egui_winit::State::new(
            context.clone(),
            viewport_id,
            window,
            Some(window.scale_factor() as f32),
            window.theme(),
            Some(max_texture_side),
        );

        let renderer = egui_wgpu::Renderer::new(
            graphics.device(),
            output_format,
            egui_wgpu::RendererOptions::default(),
        );

        Self {
            context,
            state,
            renderer,
        }
    }

    /// Forwards a window event. The response says whether egui consumed it
    /// and whether it wants a repaint.
    pub(crate) fn on_window_event(
        &mut self,
        window: &Window,
        event: &WindowEvent,
    ) -> egui_winit::EventResponse {
        self.state.on_window_event(window, event)
    }

    /// Runs one egui pass over the input gathered since the previous pass.
    ///
    /// Platform output (cursor, clipboard, IME) is applied before returning.
    pub(crate) fn run(
        &mut self,
        window: &Window,
        run_ui: impl FnMut(&egui::Context),
    ) -> egui::FullOutput {
        let raw_input = self.state.take_egui_input(window);
        let mut output = self.context.run(raw_input, run_ui);

        let platform_output = std::mem::take(&mut output.platform_output);
        self.state.handle_platform_output(window, platform_output);
        output
    }

    /// Uploads textures/buffers and records the draw into `render_pass`.
    ///
    /// Returns the upload command buffers, which must be submitted before the
    /// encoder that owns `render_pass`.
    pub(crate) fn paint(
        &mut self,
        graphics: &GraphicsContext,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        clear: wgpu::Color,
        size_in_pixels: [u32; 2],
        output: egui::FullOutput,
    ) -> Vec<wgpu::CommandBuffer> {
        let (device, queue) = (graphics.device(), graphics.queue());

        let paint_jobs = self
            .context
            .tessellate(output.shapes, output.pixels_per_point);

        let screen = egui_wgpu::ScreenDescriptor {
            size_in_pixels,
            pixels_per_point: output.pixels_per_point,
        };

        for (id, delta) in &output.textures_delta.set {
            self.renderer.update_texture(device, queue, *id, delta);
        }

        let uploads = self
            .renderer
            .update_buffers(device, queue, encoder, &paint_jobs, &screen);

        {
            let pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("gusteau ui pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                ..Default::default()
            });

            // egui-wgpu records into a 'static pass.
            let mut pass = pass.forget_lifetime();
            self.renderer.render(&mut pass, &paint_jobs, &screen);
        }

        for id in &output.textures_delta.free {
            self.renderer.free_texture(id);
        }

        uploads
    }
}
