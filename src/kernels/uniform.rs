use wgpu::util::DeviceExt;

use crate::config::GeneratorConfig;

pub struct ConfigUniform {
    pub config: GeneratorConfig,
    pub buffer: wgpu::Buffer,
}

impl ConfigUniform {
    pub fn new(device: &wgpu::Device, config: GeneratorConfig) -> Self {
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Generator Uniform Buffer"),
            contents: bytemuck::bytes_of(&config.uniform()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        Self { config, buffer }
    }

    pub fn update(&mut self, queue: &wgpu::Queue, config: GeneratorConfig) {
        queue.write_buffer(&self.buffer, 0, bytemuck::bytes_of(&config.uniform()));
        self.config = config;
    }
}
