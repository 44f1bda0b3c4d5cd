pub mod context;
pub mod dispatch;
pub mod readback;

pub use context::GpuContext;
pub use dispatch::{FIELD_WORKGROUP_SIZE, GRID_WORKGROUP_SIZE, Workgroups};
pub use readback::{read_buffer, read_indices, read_vertices};
