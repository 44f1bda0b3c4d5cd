use std::ops::RangeInclusive;

use glam::{UVec2, Vec2};

use crate::error::{MeshError, Result};
use crate::mesh::vertex::VERTEX_STRIDE;

pub const INDICES_PER_CELL: u32 = 6;

/// `x_range` and `y_range` store `(min, max)` in their `x` and `y` lanes.
/// Row 0 of the grid maps to `y_range.max`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratorConfig {
    pub resolution: UVec2,
    pub x_range: Vec2,
    pub y_range: Vec2,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            resolution: UVec2::new(32, 32),
            x_range: Vec2::new(-1.0, 1.0),
            y_range: Vec2::new(-1.0, 1.0),
        }
    }
}

impl GeneratorConfig {
    pub fn new(
        resolution: (u32, u32),
        x_range: RangeInclusive<f32>,
        y_range: RangeInclusive<f32>,
    ) -> Result<Self> {
        let config = Self {
            resolution: UVec2::new(resolution.0, resolution.1),
            x_range: Vec2::new(*x_range.start(), *x_range.end()),
            y_range: Vec2::new(*y_range.start(), *y_range.end()),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        for (axis, points) in [('x', self.resolution.x), ('y', self.resolution.y)] {
            if points <= 1 {
                return Err(MeshError::DegenerateResolution { axis, points });
            }
        }

        for (axis, range) in [('x', self.x_range), ('y', self.y_range)] {
            if !range.is_finite() {
                return Err(MeshError::NonFiniteRange {
                    axis,
                    min: range.x,
                    max: range.y,
                });
            }
        }

        let too_large = MeshError::GridTooLarge {
            nx: self.resolution.x,
            ny: self.resolution.y,
        };
        let vertex_elements = self
            .resolution
            .x
            .checked_mul(self.resolution.y)
            .and_then(|n| n.checked_mul(VERTEX_STRIDE as u32));
        let index_elements = (self.resolution.x - 1)
            .checked_mul(self.resolution.y - 1)
            .and_then(|n| n.checked_mul(INDICES_PER_CELL));
        if vertex_elements.is_none() || index_elements.is_none() {
            return Err(too_large);
        }

        Ok(())
    }

    pub fn vertex_count(&self) -> u32 {
        self.resolution.x * self.resolution.y
    }

    pub fn cell_count(&self) -> u32 {
        (self.resolution.x - 1) * (self.resolution.y - 1)
    }

    pub fn index_count(&self) -> u32 {
        self.cell_count() * INDICES_PER_CELL
    }

    pub fn vertex_byte_size(&self) -> u64 {
        self.vertex_count() as u64 * (VERTEX_STRIDE * std::mem::size_of::<f32>()) as u64
    }

    pub fn index_byte_size(&self) -> u64 {
        self.index_count() as u64 * std::mem::size_of::<u32>() as u64
    }

    pub fn uniform(&self) -> GeneratorUniform {
        GeneratorUniform {
            resolution: self.resolution,
            x_range: self.x_range,
            y_range: self.y_range,
        }
    }
}

/// Mirrors `GeneratorConfig` in the WGSL shaders: three `vec2` members at
/// offsets 0, 8 and 16.
#[repr(C)]
#[derive(Clone, Copy, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GeneratorUniform {
    pub resolution: UVec2,
    pub x_range: Vec2,
    pub y_range: Vec2,
}
