use std::collections::HashMap;

use log::debug;

use crate::error::Result;
use crate::gpu::Workgroups;
use crate::kernels::bindings::{check_storage_size, compute_pipeline, storage_read_write_entry};
use crate::kernels::field::ScalarField;
use crate::mesh::{Evaluated, GridMesh, HasPositions, VertexBuffer};

const EVALUATE_FIELD_SOURCE: &str = include_str!("shaders/evaluate_field.wgsl");

pub struct FieldEvaluator<F: ScalarField> {
    field: F,
    layout: wgpu::BindGroupLayout,
    pipeline: wgpu::ComputePipeline,
}

impl<F: ScalarField> FieldEvaluator<F> {
    pub fn new(device: &wgpu::Device, field: F) -> Result<Self> {
        field.validate()?;

        let source = format!("{}\n{}", F::SOURCE, EVALUATE_FIELD_SOURCE);
        let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(F::LABEL),
            source: wgpu::ShaderSource::Wgsl(source.into()),
        });

        let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Field Evaluator Layout"),
            entries: &[storage_read_write_entry(0)],
        });

        let remap = field.color_remap();
        let mut constants: HashMap<String, f64> = field
            .constants()
            .into_iter()
            .map(|(name, value)| (name.to_string(), value as f64))
            .collect();
        constants.insert("COLOR_OFFSET".to_string(), remap.offset as f64);
        constants.insert("COLOR_GAIN".to_string(), remap.gain as f64);
        debug!("Building {} evaluator with {:?}", F::LABEL, constants);

        let pipeline = compute_pipeline(
            device,
            "Field Evaluator Pipeline",
            &layout,
            &module,
            "evaluate_field",
            &constants,
        );

        Ok(Self {
            field,
            layout,
            pipeline,
        })
    }

    pub fn field(&self) -> &F {
        &self.field
    }

    pub fn workgroups<S: HasPositions>(
        device: &wgpu::Device,
        vertices: &VertexBuffer<S>,
    ) -> Result<Workgroups> {
        let limits = device.limits();
        check_storage_size(&limits, vertices.buffer().size())?;
        let groups = Workgroups::covering_elements(vertices.vertex_count());
        groups.check_limit(limits.max_compute_workgroups_per_dimension)?;
        Ok(groups)
    }

    pub fn record<S: HasPositions>(
        &self,
        device: &wgpu::Device,
        pass: &mut wgpu::ComputePass<'_>,
        vertices: VertexBuffer<S>,
        workgroups: Workgroups,
    ) -> VertexBuffer<Evaluated> {
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Field Evaluator Bind Group"),
            layout: &self.layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: vertices.buffer().as_entire_binding(),
            }],
        });
        debug!(
            "Dispatching {} evaluation for {} vertices as {:?}",
            F::LABEL,
            vertices.vertex_count(),
            workgroups
        );
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &bind_group, &[]);
        pass.dispatch_workgroups(workgroups.x, workgroups.y, workgroups.z);
        vertices.transition()
    }

    pub fn evaluate<S: HasPositions>(
        &self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        vertices: VertexBuffer<S>,
    ) -> Result<VertexBuffer<Evaluated>> {
        let workgroups = Self::workgroups(device, &vertices)?;
        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Field Evaluator Encoder"),
        });
        let evaluated = {
            let mut pass = encoder.begin_compute_pass(&wgpu::ComputePassDescriptor {
                label: Some("Field Evaluator Pass"),
                timestamp_writes: None,
            });
            self.record(device, &mut pass, vertices, workgroups)
        };
        queue.submit(std::iter::once(encoder.finish()));
        Ok(evaluated)
    }

    pub fn evaluate_mesh<S: HasPositions>(
        &self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        mesh: GridMesh<S>,
    ) -> Result<GridMesh<Evaluated>> {
        let GridMesh {
            config,
            vertices,
            indices,
        } = mesh;
        let vertices = self.evaluate(device, queue, vertices)?;
        Ok(GridMesh {
            config,
            vertices,
            indices,
        })
    }

    pub fn evaluate_many<S: HasPositions>(
        &self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        meshes: Vec<GridMesh<S>>,
    ) -> Result<Vec<GridMesh<Evaluated>>> {
        let workgroups = meshes
            .iter()
            .map(|mesh| Self::workgroups(device, &mesh.vertices))
            .collect::<Result<Vec<_>>>()?;

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Field Evaluator Encoder"),
        });
        let evaluated = {
            let mut pass = encoder.begin_compute_pass(&wgpu::ComputePassDescriptor {
                label: Some("Field Evaluator Pass"),
                timestamp_writes: None,
            });
            meshes
                .into_iter()
                .zip(workgroups)
                .map(|(mesh, groups)| GridMesh {
                    config: mesh.config,
                    vertices: self.record(device, &mut pass, mesh.vertices, groups),
                    indices: mesh.indices,
                })
                .collect::<Vec<_>>()
        };
        queue.submit(std::iter::once(encoder.finish()));
        Ok(evaluated)
    }
}
