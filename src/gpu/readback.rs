use crossbeam::channel;
use log::{debug, trace};

use crate::error::{MeshError, Result};
use crate::mesh::{IndexBuffer, IndexState, Vertex, VertexBuffer, VertexState};

pub fn read_buffer<T: bytemuck::Pod>(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    buffer: &wgpu::Buffer,
    count: usize,
) -> Result<Vec<T>> {
    if !buffer.usage().contains(wgpu::BufferUsages::COPY_SRC) {
        return Err(MeshError::MissingUsage(wgpu::BufferUsages::COPY_SRC));
    }
    let byte_size = (count * std::mem::size_of::<T>()) as u64;
    if byte_size > buffer.size() {
        return Err(MeshError::BufferTooSmall {
            needed: byte_size,
            actual: buffer.size(),
        });
    }
    if byte_size == 0 {
        return Ok(Vec::new());
    }

    let staging_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Readback Staging Buffer"),
        size: byte_size,
        usage: wgpu::BufferUsages::MAP_READ | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
        label: Some("Readback Encoder"),
    });
    encoder.copy_buffer_to_buffer(buffer, 0, &staging_buffer, 0, byte_size);
    queue.submit(std::iter::once(encoder.finish()));

    debug!("Mapping {byte_size} bytes for readback");

    let slice = staging_buffer.slice(..);
    let (tx, rx) = channel::bounded(1);
    slice.map_async(wgpu::MapMode::Read, move |result| {
        let _ = tx.send(result);
    });
    device.poll(wgpu::Maintain::Wait);
    rx.recv().map_err(|_| MeshError::MapCallbackDropped)??;

    let out = {
        let mapped = slice.get_mapped_range();
        bytemuck::cast_slice::<u8, T>(&mapped).to_vec()
    };
    staging_buffer.unmap();
    Ok(out)
}

pub fn read_vertices<S: VertexState>(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    vertices: &VertexBuffer<S>,
) -> Result<Vec<Vertex>> {
    let out = read_buffer::<Vertex>(
        device,
        queue,
        vertices.buffer(),
        vertices.vertex_count() as usize,
    )?;
    if log::log_enabled!(log::Level::Trace) {
        for (i, vtx) in out.iter().enumerate() {
            trace!("{i}: {:.2?}", bytemuck::cast_ref::<Vertex, [f32; 6]>(vtx));
        }
    }
    Ok(out)
}

pub fn read_indices<S: IndexState>(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    indices: &IndexBuffer<S>,
) -> Result<Vec<u32>> {
    let out = read_buffer::<u32>(
        device,
        queue,
        indices.buffer(),
        indices.index_count() as usize,
    )?;
    if log::log_enabled!(log::Level::Trace) {
        for (i, cell) in out.chunks(6).enumerate() {
            trace!("{i}: {cell:?}");
        }
    }
    Ok(out)
}
