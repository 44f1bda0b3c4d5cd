use log::{error, info};

use heightgrid::gpu::{read_indices, read_vertices};
use heightgrid::{FieldEvaluator, GeneratorConfig, GpuContext, MeshGenerator, RadialSinc};

fn run() -> heightgrid::Result<()> {
    let ctx = GpuContext::blocking()?;

    let config = GeneratorConfig::new((5, 5), -1.0..=1.0, -1.0..=1.0)?;
    let generator = MeshGenerator::new(&ctx.device);
    let mesh = generator.generate(&ctx.device, &ctx.queue, &config)?;

    let evaluator = FieldEvaluator::new(&ctx.device, RadialSinc::default())?;
    let mesh = evaluator.evaluate_mesh(&ctx.device, &ctx.queue, mesh)?;

    let vertices = read_vertices(&ctx.device, &ctx.queue, &mesh.vertices)?;
    let indices = read_indices(&ctx.device, &ctx.queue, &mesh.indices)?;

    info!(
        "Generated {} vertices and {} indices ({:?})",
        vertices.len(),
        indices.len(),
        mesh.index_format()
    );
    for (i, vtx) in vertices.iter().enumerate() {
        info!(
            "{i}: position {:.2?} height {:.3} color {:.2?}",
            vtx.position, vtx.height, vtx.color
        );
    }
    for (cell, tris) in indices.chunks(6).enumerate() {
        info!("cell {cell}: {tris:?}");
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        error!("{e}");
        std::process::exit(1);
    }
}
