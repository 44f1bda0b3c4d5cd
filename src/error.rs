use thiserror::Error;

#[derive(Debug, Error)]
pub enum MeshError {
    #[error("no suitable GPU adapter found")]
    NoAdapter,

    #[error("failed to request device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),

    #[error("grid axis {axis} needs more than one point, got {points}")]
    DegenerateResolution { axis: char, points: u32 },

    #[error("{axis} range must be finite, got {min}..={max}")]
    NonFiniteRange { axis: char, min: f32, max: f32 },

    #[error("grid of {nx}x{ny} points does not fit 32-bit indexing")]
    GridTooLarge { nx: u32, ny: u32 },

    #[error("invalid field parameter `{name}`: {value}")]
    InvalidFieldParameter { name: &'static str, value: f32 },

    #[error("dispatch of {groups} workgroups on axis {axis} exceeds device limit {limit}")]
    DispatchLimit { axis: char, groups: u32, limit: u32 },

    #[error("buffer of {bytes} bytes exceeds device binding limit {limit}")]
    BufferLimit { bytes: u64, limit: u64 },

    #[error("buffer is missing required usage {0:?}")]
    MissingUsage(wgpu::BufferUsages),

    #[error("buffer holds {actual} bytes, {needed} required")]
    BufferTooSmall { needed: u64, actual: u64 },

    #[error("failed to map buffer: {0}")]
    Map(#[from] wgpu::BufferAsyncError),

    #[error("map callback dropped before completion")]
    MapCallbackDropped,
}

pub type Result<T> = std::result::Result<T, MeshError>;
