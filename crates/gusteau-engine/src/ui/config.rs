use winit::dpi::LogicalSize;

use crate::time::DEFAULT_RATE_HZ;

/// Main window configuration.
#[derive(Debug, Clone)]
pub struct UiConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,

    /// Colour the window is cleared to before the UI is drawn.
    pub clear_color: egui::Rgba,

    /// How often the window redraws while no events arrive.
    pub redraw_rate_hz: f32,

    /// egui zoom factor (scales text and widgets together).
    pub zoom: f32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: "gusteau".to_string(),
            initial_size: LogicalSize::new(1280.0, 720.0),
            clear_color: egui::Rgba::BLACK,
            redraw_rate_hz: DEFAULT_RATE_HZ,
            zoom: 1.0,
        }
    }
}

impl UiConfig {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.initial_size = LogicalSize::new(width, height);
        self
    }

    pub fn clear_color(mut self, color: egui::Rgba) -> Self {
        self.clear_color = color;
        self
    }

    pub fn redraw_rate(mut self, hz: f32) -> Self {
        self.redraw_rate_hz = hz;
        self
    }

    pub(crate) fn clear_color_wgpu(&self) -> wgpu::Color {
        let c = self.clear_color;
        wgpu::Color {
            r: f64::from(c.r()),
            g: f64::from(c.g()),
            b: f64::from(c.b()),
            a: f64::from(c.a()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_clear_color_is_opaque_black() {
        let c = UiConfig::default().clear_color_wgpu();
        assert_eq!((c.r, c.g, c.b, c.a), (0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn clear_color_converts_channels() {
        let c = UiConfig::default()
            .clear_color(egui::Rgba::from_rgb(1.0, 0.0, 0.0))
            .clear_color_wgpu();
        assert_eq!((c.r, c.g, c.b, c.a), (1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn builder_overrides_defaults() {
        let cfg = UiConfig::default().title("demo").size(640.0, 480.0).redraw_rate(60.0);
        assert_eq!(cfg.title, "demo");
        assert_eq!(cfg.initial_size, LogicalSize::new(640.0, 480.0));
        assert_eq!(cfg.redraw_rate_hz, 60.0);
    }
}
