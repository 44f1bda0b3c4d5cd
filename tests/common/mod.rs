#![allow(dead_code)]

use heightgrid::{GeneratorConfig, GpuContext, Vertex};
use wgpu::util::DeviceExt;

/// Returns `None` when the machine has no usable adapter.
pub fn context() -> Option<GpuContext> {
    let _ = env_logger::builder().is_test(true).try_init();
    match GpuContext::blocking() {
        Ok(ctx) => Some(ctx),
        Err(e) => {
            log::warn!("skipping GPU test: {e}");
            None
        }
    }
}

pub fn with_pass<T>(ctx: &GpuContext, f: impl FnOnce(&mut wgpu::ComputePass<'_>) -> T) -> T {
    let mut encoder = ctx
        .device
        .create_command_encoder(&wgpu::CommandEncoderDescriptor { label: Some("test") });
    let out = {
        let mut pass = encoder.begin_compute_pass(&wgpu::ComputePassDescriptor {
            label: Some("test"),
            timestamp_writes: None,
        });
        f(&mut pass)
    };
    ctx.queue.submit(Some(encoder.finish()));
    out
}

/// Storage buffer pre-filled with `contents`, as a host would hand it over.
pub fn host_buffer<T: bytemuck::Pod>(ctx: &GpuContext, contents: &[T]) -> wgpu::Buffer {
    ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("host"),
        contents: bytemuck::cast_slice(contents),
        usage: wgpu::BufferUsages::STORAGE
            | wgpu::BufferUsages::COPY_SRC
            | wgpu::BufferUsages::COPY_DST,
    })
}

pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// Position and placeholder color the vertex generator writes at `(x, y)`.
pub fn expected_vertex(config: &GeneratorConfig, x: u32, y: u32) -> Vertex {
    let u = x as f32 / (config.resolution.x - 1) as f32;
    let v = y as f32 / (config.resolution.y - 1) as f32;
    Vertex {
        position: [
            lerp(config.x_range.x, config.x_range.y, u),
            lerp(config.y_range.y, config.y_range.x, v),
        ],
        height: 0.0,
        color: [u, v, 0.0],
    }
}

pub fn assert_close(actual: f32, expected: f32, tol: f32, what: &str) {
    assert!(
        (actual - expected).abs() <= tol,
        "{what}: got {actual}, expected {expected}"
    );
}

pub fn assert_vertex_close(actual: &Vertex, expected: &Vertex, what: &str) {
    let a: &[f32; 6] = bytemuck::cast_ref(actual);
    let e: &[f32; 6] = bytemuck::cast_ref(expected);
    for k in 0..6 {
        assert_close(a[k], e[k], 1e-6, &format!("{what} field {k}"));
    }
}
