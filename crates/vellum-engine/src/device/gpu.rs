use anyhow::{Context, Result};

use super::DeviceInit;

/// Owns the wgpu adapter, device and queue.
///
/// No surface is created: presentation belongs to the windowing layer, which
/// is outside this crate. The device and queue are what [`super::WgpuBackend`]
/// borrows to allocate buffers and write uniforms.
pub struct Gpu {
    /// Selected adapter.
    adapter: wgpu::Adapter,

    /// Logical device.
    device: wgpu::Device,

    /// Command queue.
    queue: wgpu::Queue,
}

impl Gpu {
    /// Acquires an adapter and device without a surface.
    ///
    /// Adapter/device acquisition is asynchronous under wgpu.
    pub async fn new(init: DeviceInit) -> Result<Self> {
        let DeviceInit {
            backends,
            power_preference,
            force_fallback_adapter,
            required_features,
            required_limits,
            label,
        } = init;

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends,
            ..Default::default()
        });

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference,
                compatible_surface: None,
                force_fallback_adapter,
            })
            .await
            .context("failed to find a suitable GPU adapter")?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: label.as_deref(),
                required_features,
                required_limits,
                experimental_features: wgpu::ExperimentalFeatures::disabled(),
                memory_hints: wgpu::MemoryHints::MemoryUsage,
                trace: wgpu::Trace::Off,
            })
            .await
            .context("failed to create wgpu device/queue")?;

        let info = adapter.get_info();
        log::info!("gpu ready: {} ({:?})", info.name, info.backend);

        Ok(Self {
            adapter,
            device,
            queue,
        })
    }

    /// Blocking variant of [`Gpu::new`] for callers without an executor.
    pub fn new_blocking(init: DeviceInit) -> Result<Self> {
        pollster::block_on(Self::new(init))
    }

    /// Returns information about the selected adapter.
    pub fn adapter_info(&self) -> wgpu::AdapterInfo {
        self.adapter.get_info()
    }

    /// Returns a reference to the logical device.
    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    /// Returns a reference to the command queue.
    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }
}
