use std::sync::Arc;

use anyhow::{Context, Result};

/// Initialization parameters for the root graphics context.
///
/// Keep this structure stable and minimal. Add configuration flags only when a
/// concrete platform or backend requirement exists.
#[derive(Debug, Clone)]
pub struct GraphicsConfig {
    /// Backends wgpu may pick an adapter from.
    pub backends: wgpu::Backends,

    /// Adapter selection preference.
    pub power_preference: wgpu::PowerPreference,

    /// Required wgpu features.
    ///
    /// Favor an empty set for portability unless a feature is strictly necessary.
    pub required_features: wgpu::Features,

    /// Limits requested from the adapter/device.
    pub required_limits: wgpu::Limits,

    /// Prefer an sRGB surface format when available.
    ///
    /// sRGB is typically required for correct UI color output.
    pub prefer_srgb: bool,

    /// Present mode (swap behavior) for window surfaces.
    ///
    /// FIFO is broadly supported and generally appropriate for UI workloads.
    pub present_mode: wgpu::PresentMode,

    /// Optional alpha mode preference for window surfaces.
    ///
    /// If provided but unsupported on a surface, a supported mode is selected.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    /// Desired maximum frame latency for window surfaces. A hint only.
    pub desired_maximum_frame_latency: u32,
}

impl Default for GraphicsConfig {
    fn default() -> Self {
        Self {
            backends: wgpu::Backends::all(),
            power_preference: wgpu::PowerPreference::HighPerformance,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            desired_maximum_frame_latency: 2,
        }
    }
}

struct Shared {
    config: GraphicsConfig,
    instance: wgpu::Instance,
    adapter: wgpu::Adapter,
    device: wgpu::Device,
    queue: wgpu::Queue,
}

/// The root graphics context.
///
/// Owns the one Instance/Adapter/Device/Queue that every window surface and
/// offscreen renderer is created against, so buffers, textures and pipelines
/// only need to be created once. The device is not tied to any window.
///
/// Cloning is cheap; all clones refer to the same device.
#[derive(Clone)]
pub struct GraphicsContext {
    shared: Arc<Shared>,
}

impl GraphicsContext {
    /// Creates the root context.
    ///
    /// Adapter/device acquisition is asynchronous under wgpu.
    pub async fn new(config: GraphicsConfig) -> Result<Self> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: config.backends,
            ..Default::default()
        });

        // No surface yet: windows attach theirs later and are checked for
        // compatibility at that point.
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: config.power_preference,
                compatible_surface: None,
                force_fallback_adapter: false,
            })
            .await
            .context("failed to find a suitable GPU adapter")?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("gusteau root device"),
                required_features: config.required_features,
                required_limits: config.required_limits.clone(),
                memory_hints: wgpu::MemoryHints::Performance,
                ..Default::default()
            })
            .await
            .context("failed to create wgpu device/queue")?;

        let info = adapter.get_info();
        log::info!("graphics renderer: {} ({:?})", info.name, info.backend);
        log::info!("graphics driver: {} {}", info.driver, info.driver_info);

        Ok(Self {
            shared: Arc::new(Shared {
                config,
                instance,
                adapter,
                device,
                queue,
            }),
        })
    }

    /// Configuration the context was created with.
    pub fn config(&self) -> &GraphicsConfig {
        &self.shared.config
    }

    pub fn instance(&self) -> &wgpu::Instance {
        &self.shared.instance
    }

    pub fn adapter(&self) -> &wgpu::Adapter {
        &self.shared.adapter
    }

    /// Returns a reference to the logical device.
    pub fn device(&self) -> &wgpu::Device {
        &self.shared.device
    }

    /// Returns a reference to the command queue.
    pub fn queue(&self) -> &wgpu::Queue {
        &self.shared.queue
    }

    pub fn adapter_info(&self) -> wgpu::AdapterInfo {
        self.shared.adapter.get_info()
    }
}

/// Factory for the root graphics context.
///
/// The application only ever sees `GraphicsContext`; which backend and adapter
/// back it is decided here.
pub fn create_root_graphics_context(config: GraphicsConfig) -> Result<GraphicsContext> {
    pollster::block_on(GraphicsContext::new(config))
        .context("failed to create root graphics context")
}
