use std::collections::HashMap;

use log::debug;

use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::gpu::Workgroups;
use crate::kernels::ConfigUniform;
use crate::kernels::bindings::{compute_pipeline, generator_bind_group, generator_layout};
use crate::mesh::{Positioned, VertexBuffer, VertexState};

pub struct GridVertexGenerator {
    layout: wgpu::BindGroupLayout,
    pipeline: wgpu::ComputePipeline,
}

impl GridVertexGenerator {
    pub fn new(device: &wgpu::Device) -> Self {
        let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("gen_vertex.wgsl"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/gen_vertex.wgsl").into()),
        });
        let layout = generator_layout(device, "Grid Vertex Layout");
        let pipeline = compute_pipeline(
            device,
            "Grid Vertex Pipeline",
            &layout,
            &module,
            "generate_vertex_buffer",
            &HashMap::new(),
        );
        Self { layout, pipeline }
    }

    pub fn workgroups(device: &wgpu::Device, config: &GeneratorConfig) -> Result<Workgroups> {
        let groups = Workgroups::covering_grid(config.resolution);
        groups.check_limit(device.limits().max_compute_workgroups_per_dimension)?;
        Ok(groups)
    }

    pub fn record<S: VertexState>(
        &self,
        device: &wgpu::Device,
        pass: &mut wgpu::ComputePass<'_>,
        uniform: &ConfigUniform,
        vertices: VertexBuffer<S>,
        workgroups: Workgroups,
    ) -> VertexBuffer<Positioned> {
        let bind_group = generator_bind_group(
            device,
            &self.layout,
            "Grid Vertex Bind Group",
            vertices.buffer(),
            &uniform.buffer,
        );
        debug!(
            "Dispatching vertex generation for {} points as {:?}",
            uniform.config.vertex_count(),
            workgroups
        );
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &bind_group, &[]);
        pass.dispatch_workgroups(workgroups.x, workgroups.y, workgroups.z);
        vertices.transition()
    }
}
