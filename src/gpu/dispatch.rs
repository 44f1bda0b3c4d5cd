use glam::UVec2;

use crate::error::{MeshError, Result};

pub const GRID_WORKGROUP_SIZE: UVec2 = UVec2::new(16, 16);
pub const FIELD_WORKGROUP_SIZE: u32 = 256;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Workgroups {
    pub x: u32,
    pub y: u32,
    pub z: u32,
}

impl Workgroups {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y, z: 1 }
    }

    pub fn covering_grid(extent: UVec2) -> Self {
        Self::new(
            dispatch_size(extent.x, GRID_WORKGROUP_SIZE.x),
            dispatch_size(extent.y, GRID_WORKGROUP_SIZE.y),
        )
    }

    pub fn covering_elements(elements: u32) -> Self {
        Self::new(dispatch_size(elements, FIELD_WORKGROUP_SIZE), 1)
    }

    pub fn invocations(&self, workgroup_size: UVec2) -> UVec2 {
        UVec2::new(self.x * workgroup_size.x, self.y * workgroup_size.y)
    }

    pub fn check_limit(&self, limit: u32) -> Result<()> {
        for (axis, groups) in [('x', self.x), ('y', self.y), ('z', self.z)] {
            if groups > limit {
                return Err(MeshError::DispatchLimit {
                    axis,
                    groups,
                    limit,
                });
            }
        }
        Ok(())
    }
}

pub fn dispatch_size(elements: u32, workgroup: u32) -> u32 {
    if elements == 0 {
        0
    } else {
        elements.div_ceil(workgroup)
    }
}
