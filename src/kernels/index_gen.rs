use std::collections::HashMap;

use log::debug;

use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::gpu::Workgroups;
use crate::kernels::ConfigUniform;
use crate::kernels::bindings::{compute_pipeline, generator_bind_group, generator_layout};
use crate::mesh::{IndexBuffer, IndexState, Triangulated};

pub struct GridIndexGenerator {
    layout: wgpu::BindGroupLayout,
    pipeline: wgpu::ComputePipeline,
}

impl GridIndexGenerator {
    pub fn new(device: &wgpu::Device) -> Self {
        let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("gen_index.wgsl"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/gen_index.wgsl").into()),
        });
        let layout = generator_layout(device, "Grid Index Layout");
        let pipeline = compute_pipeline(
            device,
            "Grid Index Pipeline",
            &layout,
            &module,
            "generate_index_buffer",
            &HashMap::new(),
        );
        Self { layout, pipeline }
    }

    pub fn workgroups(device: &wgpu::Device, config: &GeneratorConfig) -> Result<Workgroups> {
        let groups = Workgroups::covering_grid(config.resolution - 1);
        groups.check_limit(device.limits().max_compute_workgroups_per_dimension)?;
        Ok(groups)
    }

    pub fn record<S: IndexState>(
        &self,
        device: &wgpu::Device,
        pass: &mut wgpu::ComputePass<'_>,
        uniform: &ConfigUniform,
        indices: IndexBuffer<S>,
        workgroups: Workgroups,
    ) -> IndexBuffer<Triangulated> {
        let bind_group = generator_bind_group(
            device,
            &self.layout,
            "Grid Index Bind Group",
            indices.buffer(),
            &uniform.buffer,
        );
        debug!(
            "Dispatching index generation for {} cells as {:?}",
            uniform.config.cell_count(),
            workgroups
        );
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &bind_group, &[]);
        pass.dispatch_workgroups(workgroups.x, workgroups.y, workgroups.z);
        indices.transition()
    }
}
