use log::debug;

use crate::config::GeneratorConfig;
use crate::error::{MeshError, Result};
use crate::kernels::bindings::check_storage_size;
use crate::kernels::{ConfigUniform, GridIndexGenerator, GridVertexGenerator};
use crate::mesh::{
    Blank, GridMesh, IndexBuffer, IndexState, Positioned, Vertex, VertexBuffer, VertexState,
};

pub struct MeshGenerator {
    vertex_generator: GridVertexGenerator,
    index_generator: GridIndexGenerator,
}

impl MeshGenerator {
    pub fn new(device: &wgpu::Device) -> Self {
        Self {
            vertex_generator: GridVertexGenerator::new(device),
            index_generator: GridIndexGenerator::new(device),
        }
    }

    pub fn generate(
        &self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        config: &GeneratorConfig,
    ) -> Result<GridMesh<Positioned>> {
        config.validate()?;
        let limits = device.limits();
        check_storage_size(&limits, config.vertex_byte_size())?;
        check_storage_size(&limits, config.index_byte_size())?;
        let vertices = VertexBuffer::<Blank>::allocate(device, config.vertex_count());
        let indices = IndexBuffer::<Blank>::allocate(device, config.index_count());
        self.generate_into(device, queue, config, vertices, indices)
    }

    pub fn generate_into<S: VertexState, I: IndexState>(
        &self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        config: &GeneratorConfig,
        vertices: VertexBuffer<S>,
        indices: IndexBuffer<I>,
    ) -> Result<GridMesh<Positioned>> {
        config.validate()?;
        if vertices.vertex_count() < config.vertex_count() {
            return Err(MeshError::BufferTooSmall {
                needed: config.vertex_byte_size(),
                actual: vertices.vertex_count() as u64 * std::mem::size_of::<Vertex>() as u64,
            });
        }
        if indices.index_count() < config.index_count() {
            return Err(MeshError::BufferTooSmall {
                needed: config.index_byte_size(),
                actual: indices.index_count() as u64 * std::mem::size_of::<u32>() as u64,
            });
        }

        let limits = device.limits();
        check_storage_size(&limits, vertices.buffer().size())?;
        check_storage_size(&limits, indices.buffer().size())?;

        let vertex_groups = GridVertexGenerator::workgroups(device, config)?;
        let index_groups = GridIndexGenerator::workgroups(device, config)?;
        let uniform = ConfigUniform::new(device, *config);

        debug!(
            "Generating {}x{} grid over x {:?}, y {:?}",
            config.resolution.x, config.resolution.y, config.x_range, config.y_range
        );

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Mesh Generator Encoder"),
        });
        let (vertices, indices) = {
            let mut pass = encoder.begin_compute_pass(&wgpu::ComputePassDescriptor {
                label: Some("Mesh Generator Pass"),
                timestamp_writes: None,
            });
            let vertices =
                self.vertex_generator
                    .record(device, &mut pass, &uniform, vertices, vertex_groups);
            let indices =
                self.index_generator
                    .record(device, &mut pass, &uniform, indices, index_groups);
            (vertices, indices)
        };
        queue.submit(std::iter::once(encoder.finish()));

        Ok(GridMesh {
            config: *config,
            vertices,
            indices,
        })
    }
}
