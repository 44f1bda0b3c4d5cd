pub mod config;
pub mod error;
pub mod gpu;
pub mod kernels;
pub mod mesh;

pub use config::{GeneratorConfig, GeneratorUniform};
pub use error::{MeshError, Result};
pub use gpu::{GpuContext, Workgroups};
pub use kernels::{
    ColorRemap, ConfigUniform, FieldEvaluator, GridIndexGenerator, GridVertexGenerator,
    MeshGenerator, Paraboloid, RadialSinc, ScalarField,
};
pub use mesh::{
    Blank, Evaluated, GridMesh, IndexBuffer, Positioned, Triangulated, Vertex, VertexBuffer,
};
