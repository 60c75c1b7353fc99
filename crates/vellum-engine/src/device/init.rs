/// Initialization parameters for the headless GPU layer.
///
/// Keep this structure small; add flags only when a backend requires them.
#[derive(Debug, Clone)]
pub struct DeviceInit {
    /// Backends wgpu may pick from.
    pub backends: wgpu::Backends,

    /// Adapter preference. Low power is enough for buffer and uniform traffic.
    pub power_preference: wgpu::PowerPreference,

    /// Force a software adapter (useful on CI machines without a GPU).
    pub force_fallback_adapter: bool,

    /// Required wgpu features. Favor an empty set for portability.
    pub required_features: wgpu::Features,

    /// Limits requested from the adapter/device.
    pub required_limits: wgpu::Limits,

    /// Debug label attached to the device.
    pub label: Option<String>,
}

impl Default for DeviceInit {
    fn default() -> Self {
        Self {
            backends: wgpu::Backends::all(),
            power_preference: wgpu::PowerPreference::LowPower,
            force_fallback_adapter: false,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::downlevel_defaults(),
            label: Some("vellum-engine device".to_owned()),
        }
    }
}
