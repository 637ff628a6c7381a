use std::sync::Arc;

use anyhow::{Context, Result};
use winit::dpi::PhysicalSize;
use winit::window::Window;

use super::{GraphicsContext, SurfaceErrorAction, SurfaceFrame};

/// A window surface configured against the root graphics device.
///
/// The surface keeps its window alive through the shared `Arc<Window>`.
pub struct WindowSurface {
    graphics: GraphicsContext,
    surface: wgpu::Surface<'static>,
    config: wgpu::SurfaceConfiguration,
    size: PhysicalSize<u32>,
}

impl WindowSurface {
    /// Creates and configures a surface for `window`.
    pub fn new(graphics: &GraphicsContext, window: Arc<Window>) -> Result<Self> {
        let size = window.inner_size();

        let surface = graphics
            .instance()
            .create_surface(window)
            .context("failed to create wgpu surface")?;

        anyhow::ensure!(
            graphics.adapter().is_surface_supported(&surface),
            "root graphics adapter cannot present to this window"
        );

        let caps = surface.get_capabilities(graphics.adapter());
        let gfx = graphics.config();

        let format = choose_surface_format(&caps.formats, gfx.prefer_srgb)
            .context("no supported surface formats")?;
        let alpha_mode = choose_alpha_mode(&caps.alpha_modes, gfx.alpha_mode);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: gfx.present_mode,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: gfx.desired_maximum_frame_latency,
        };

        if size.width > 0 && size.height > 0 {
            surface.configure(graphics.device(), &config);
        }

        log::debug!(
            "surface configured: {}x{} {:?} {:?}",
            config.width,
            config.height,
            format,
            alpha_mode
        );

        Ok(Self {
            graphics: graphics.clone(),
            surface,
            config,
            size,
        })
    }

    /// Returns the active surface format.
    pub fn format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    /// Returns the current drawable size (physical pixels).
    pub fn size(&self) -> PhysicalSize<u32> {
        self.size
    }

    /// True while the window is minimized or otherwise has no drawable area.
    pub fn is_zero_sized(&self) -> bool {
        self.size.width == 0 || self.size.height == 0
    }

    /// Reconfigures the surface after a resize.
    ///
    /// wgpu does not support configuring a surface with a 0x0 size; in that case,
    /// only internal state is updated and configuration is deferred.
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        self.size = new_size;
        if self.is_zero_sized() {
            return;
        }

        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(self.graphics.device(), &self.config);
    }

    /// Acquires the next surface texture.
    pub fn acquire(&self) -> std::result::Result<SurfaceFrame, wgpu::SurfaceError> {
        let texture = self.surface.get_current_texture()?;
        let view = texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        Ok(SurfaceFrame { texture, view })
    }

    /// Converts a `SurfaceError` into a higher-level action, reconfiguring
    /// the surface when that is the remedy.
    pub fn handle_error(&mut self, err: wgpu::SurfaceError) -> SurfaceErrorAction {
        let action = SurfaceErrorAction::classify(&err);
        match action {
            SurfaceErrorAction::Reconfigured if !self.is_zero_sized() => {
                self.surface.configure(self.graphics.device(), &self.config);
            }
            SurfaceErrorAction::Fatal => log::error!("surface error: {err}"),
            _ => log::debug!("surface error: {err} ({action:?})"),
        }
        action
    }
}

pub(crate) fn choose_surface_format(
    formats: &[wgpu::TextureFormat],
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    if prefer_srgb {
        let preferred = [
            wgpu::TextureFormat::Bgra8UnormSrgb,
            wgpu::TextureFormat::Rgba8UnormSrgb,
        ];
        if let Some(f) = preferred.into_iter().find(|f| formats.contains(f)) {
            return Some(f);
        }
    }

    formats.first().copied()
}

pub(crate) fn choose_alpha_mode(
    supported: &[wgpu::CompositeAlphaMode],
    requested: Option<wgpu::CompositeAlphaMode>,
) -> wgpu::CompositeAlphaMode {
    requested
        .filter(|m| supported.contains(m))
        .or_else(|| supported.first().copied())
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgpu::{CompositeAlphaMode as Alpha, TextureFormat as Fmt};

    #[test]
    fn srgb_preferred_when_available() {
        let formats = [Fmt::Bgra8Unorm, Fmt::Rgba8UnormSrgb];
        assert_eq!(choose_surface_format(&formats, true), Some(Fmt::Rgba8UnormSrgb));
    }

    #[test]
    fn bgra_srgb_beats_rgba_srgb() {
        let formats = [Fmt::Rgba8UnormSrgb, Fmt::Bgra8UnormSrgb];
        assert_eq!(choose_surface_format(&formats, true), Some(Fmt::Bgra8UnormSrgb));
    }

    #[test]
    fn first_format_without_srgb_preference() {
        let formats = [Fmt::Bgra8Unorm, Fmt::Rgba8UnormSrgb];
        assert_eq!(choose_surface_format(&formats, false), Some(Fmt::Bgra8Unorm));
    }

    #[test]
    fn no_formats_is_none() {
        assert_eq!(choose_surface_format(&[], true), None);
    }

    #[test]
    fn requested_alpha_mode_honoured_if_supported() {
        let supported = [Alpha::Opaque, Alpha::PreMultiplied];
        assert_eq!(
            choose_alpha_mode(&supported, Some(Alpha::PreMultiplied)),
            Alpha::PreMultiplied
        );
    }

    #[test]
    fn unsupported_alpha_mode_falls_back_to_first() {
        let supported = [Alpha::Opaque];
        assert_eq!(choose_alpha_mode(&supported, Some(Alpha::PostMultiplied)), Alpha::Opaque);
        assert_eq!(choose_alpha_mode(&[], None), Alpha::Auto);
    }
}
