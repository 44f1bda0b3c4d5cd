pub mod buffers;
pub mod vertex;

pub use buffers::{
    Blank, Evaluated, HasPositions, IndexBuffer, IndexState, Positioned, Triangulated,
    VertexBuffer, VertexState,
};
pub use vertex::{VERTEX_STRIDE, Vertex};

use crate::config::GeneratorConfig;

pub struct GridMesh<S: VertexState> {
    pub config: GeneratorConfig,
    pub vertices: VertexBuffer<S>,
    pub indices: IndexBuffer<Triangulated>,
}

impl<S: VertexState> GridMesh<S> {
    pub fn vertex_count(&self) -> u32 {
        self.config.vertex_count()
    }

    pub fn index_count(&self) -> u32 {
        self.config.index_count()
    }

    pub fn index_format(&self) -> wgpu::IndexFormat {
        self.indices.index_format()
    }

    pub fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
        Vertex::desc()
    }
}
