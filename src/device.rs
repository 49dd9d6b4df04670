// Device selection - accelerator probing with CPU fallback

use serde::Deserialize;
use std::fmt;
use tracing::info;

/// Accelerator availability as reported by the framework runtime
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Capabilities {
    /// Dedicated NVIDIA GPU usable through CUDA
    #[serde(default)]
    pub cuda: bool,

    /// Apple GPU usable through Metal Performance Shaders
    #[serde(default)]
    pub mps: bool,

    /// Runtime built against ROCm/HIP
    #[serde(default)]
    pub rocm: bool,
}

impl Capabilities {
    /// No accelerator of any kind
    pub fn cpu_only() -> Self {
        Self::default()
    }
}

/// Compute backend a model is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Device {
    /// NVIDIA CUDA GPU (dedicated GPU)
    Cuda,

    /// Apple Metal GPU (secondary accelerator)
    Mps,

    /// AMD GPU via ROCm (fallback accelerator)
    Rocm,

    /// CPU fallback, always available
    Cpu,
}

impl Device {
    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Device::Cuda => "CUDA (GPU)",
            Device::Mps => "MPS (GPU)",
            Device::Rocm => "ROCm (GPU)",
            Device::Cpu => "CPU",
        }
    }

    /// Value passed to the framework as `device=`
    ///
    /// ROCm builds of torch expose AMD GPUs through the CUDA device API, so both
    /// bind to the first GPU index.
    pub fn framework_arg(&self) -> &'static str {
        match self {
            Device::Cuda | Device::Rocm => "0",
            Device::Mps => "mps",
            Device::Cpu => "cpu",
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Pick the best backend: CUDA, then MPS, then ROCm, then CPU
pub fn detect_device(capabilities: &Capabilities) -> Device {
    if capabilities.cuda {
        info!("NVIDIA GPU detected.");
        Device::Cuda
    } else if capabilities.mps {
        info!("Apple GPU detected (via MPS).");
        Device::Mps
    } else if capabilities.rocm {
        info!("AMD GPU detected (via ROCm).");
        Device::Rocm
    } else {
        info!("No compatible GPU detected. Using CPU.");
        Device::Cpu
    }
}
