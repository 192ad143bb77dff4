/// GPU preferences for the clock window.
///
/// The clock redraws every frame for as long as it runs, often unattended, so
/// the defaults lean towards a low-power adapter and display-paced presents.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Adapter preference. Stroke instancing needs very little GPU.
    pub power: wgpu::PowerPreference,

    /// Pace presents to the display refresh. Off: present as soon as possible.
    pub vsync: bool,

    /// Prefer an sRGB swapchain so stroke colours blend in linear space.
    pub prefer_srgb: bool,

    /// Alpha mode to request; ignored when the surface does not offer it.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    /// Frames the presentation engine may queue ahead. A hint.
    pub frame_latency: u32,
}

impl GpuInit {
    pub fn present_mode(&self) -> wgpu::PresentMode {
        if self.vsync {
            wgpu::PresentMode::Fifo
        } else {
            wgpu::PresentMode::AutoNoVsync
        }
    }

    /// Device limits. The line pipeline uses one uniform and one instance
    /// buffer, which fits the downlevel set.
    pub fn limits(&self) -> wgpu::Limits {
        wgpu::Limits::downlevel_defaults()
    }
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            power: wgpu::PowerPreference::LowPower,
            vsync: true,
            prefer_srgb: true,
            alpha_mode: None,
            frame_latency: 2,
        }
    }
}
