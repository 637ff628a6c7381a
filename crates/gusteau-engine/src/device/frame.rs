/// Represents a single acquired surface frame.
///
/// This object is short-lived and must be presented promptly. Holding the
/// surface texture prevents acquisition of subsequent frames.
pub struct SurfaceFrame {
    pub texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
}

impl SurfaceFrame {
    /// Schedules the texture for presentation.
    pub fn present(self) {
        drop(self.view);
        self.texture.present();
    }
}
