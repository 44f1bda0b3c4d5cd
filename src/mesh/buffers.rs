use std::marker::PhantomData;

use crate::error::{MeshError, Result};
use crate::mesh::vertex::Vertex;

pub struct Blank;
pub struct Positioned;
pub struct Evaluated;
pub struct Triangulated;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Blank {}
    impl Sealed for super::Positioned {}
    impl Sealed for super::Evaluated {}
    impl Sealed for super::Triangulated {}
}

pub trait VertexState: sealed::Sealed {}
impl VertexState for Blank {}
impl VertexState for Positioned {}
impl VertexState for Evaluated {}

pub trait HasPositions: VertexState {}
impl HasPositions for Positioned {}
impl HasPositions for Evaluated {}

pub trait IndexState: sealed::Sealed {}
impl IndexState for Blank {}
impl IndexState for Triangulated {}

const VERTEX_USAGE: wgpu::BufferUsages = wgpu::BufferUsages::STORAGE
    .union(wgpu::BufferUsages::VERTEX)
    .union(wgpu::BufferUsages::COPY_SRC)
    .union(wgpu::BufferUsages::COPY_DST);

const INDEX_USAGE: wgpu::BufferUsages = wgpu::BufferUsages::STORAGE
    .union(wgpu::BufferUsages::INDEX)
    .union(wgpu::BufferUsages::COPY_SRC)
    .union(wgpu::BufferUsages::COPY_DST);

pub struct VertexBuffer<S: VertexState> {
    buffer: wgpu::Buffer,
    vertex_count: u32,
    _state: PhantomData<S>,
}

impl VertexBuffer<Blank> {
    pub fn allocate(device: &wgpu::Device, vertex_count: u32) -> Self {
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Grid Vertex Buffer"),
            size: vertex_count as u64 * std::mem::size_of::<Vertex>() as u64,
            usage: VERTEX_USAGE,
            mapped_at_creation: false,
        });
        Self {
            buffer,
            vertex_count,
            _state: PhantomData,
        }
    }

    /// Takes over a host-created buffer. It must be usable as storage;
    /// trailing bytes that do not form a whole vertex are never written.
    pub fn wrap(buffer: wgpu::Buffer) -> Result<Self> {
        if !buffer.usage().contains(wgpu::BufferUsages::STORAGE) {
            return Err(MeshError::MissingUsage(wgpu::BufferUsages::STORAGE));
        }
        let vertex_count = (buffer.size() / std::mem::size_of::<Vertex>() as u64) as u32;
        Ok(Self {
            buffer,
            vertex_count,
            _state: PhantomData,
        })
    }
}

impl<S: VertexState> VertexBuffer<S> {
    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    pub fn into_inner(self) -> wgpu::Buffer {
        self.buffer
    }

    pub(crate) fn transition<T: VertexState>(self) -> VertexBuffer<T> {
        VertexBuffer {
            buffer: self.buffer,
            vertex_count: self.vertex_count,
            _state: PhantomData,
        }
    }
}

pub struct IndexBuffer<S: IndexState> {
    buffer: wgpu::Buffer,
    index_count: u32,
    _state: PhantomData<S>,
}

impl IndexBuffer<Blank> {
    pub fn allocate(device: &wgpu::Device, index_count: u32) -> Self {
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Grid Index Buffer"),
            size: index_count as u64 * std::mem::size_of::<u32>() as u64,
            usage: INDEX_USAGE,
            mapped_at_creation: false,
        });
        Self {
            buffer,
            index_count,
            _state: PhantomData,
        }
    }

    pub fn wrap(buffer: wgpu::Buffer) -> Result<Self> {
        if !buffer.usage().contains(wgpu::BufferUsages::STORAGE) {
            return Err(MeshError::MissingUsage(wgpu::BufferUsages::STORAGE));
        }
        let index_count = (buffer.size() / std::mem::size_of::<u32>() as u64) as u32;
        Ok(Self {
            buffer,
            index_count,
            _state: PhantomData,
        })
    }
}

impl<S: IndexState> IndexBuffer<S> {
    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }

    pub fn index_count(&self) -> u32 {
        self.index_count
    }

    pub fn index_format(&self) -> wgpu::IndexFormat {
        wgpu::IndexFormat::Uint32
    }

    pub fn into_inner(self) -> wgpu::Buffer {
        self.buffer
    }

    pub(crate) fn transition<T: IndexState>(self) -> IndexBuffer<T> {
        IndexBuffer {
            buffer: self.buffer,
            index_count: self.index_count,
            _state: PhantomData,
        }
    }
}
