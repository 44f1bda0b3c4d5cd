pub mod bindings;
pub mod field;
pub mod field_eval;
pub mod generator;
pub mod index_gen;
pub mod uniform;
pub mod vertex_gen;

pub use field::{ColorRemap, Paraboloid, RadialSinc, ScalarField};
pub use field_eval::FieldEvaluator;
pub use generator::MeshGenerator;
pub use index_gen::GridIndexGenerator;
pub use uniform::ConfigUniform;
pub use vertex_gen::GridVertexGenerator;
