mod common;

use heightgrid::gpu::{read_buffer, read_indices, read_vertices};
use heightgrid::{
    ConfigUniform, Evaluated, FieldEvaluator, GeneratorConfig, GridIndexGenerator, GridMesh,
    GridVertexGenerator, IndexBuffer, MeshError, MeshGenerator, RadialSinc, Vertex, VertexBuffer,
    Workgroups,
};

use common::{assert_vertex_close, context, expected_vertex, host_buffer, with_pass};

#[test]
fn four_by_four_grid() {
    let Some(ctx) = context() else { return };
    let config = GeneratorConfig::new((4, 4), -1.0..=1.0, -1.0..=1.0).unwrap();
    let mesh = MeshGenerator::new(&ctx.device)
        .generate(&ctx.device, &ctx.queue, &config)
        .unwrap();

    let vertices = read_vertices(&ctx.device, &ctx.queue, &mesh.vertices).unwrap();
    let indices = read_indices(&ctx.device, &ctx.queue, &mesh.indices).unwrap();

    assert_eq!(vertices.len(), 16);
    assert_eq!(indices.len(), 54);
    assert_eq!(indices.chunks(6).count(), 9);
    assert_eq!(vertices[0].position, [-1.0, 1.0]);
    assert_eq!(vertices[15].position, [1.0, -1.0]);
    assert_eq!(&indices[..6], &[0, 4, 1, 1, 4, 5]);
    assert_eq!(&indices[48..], &[10, 14, 11, 11, 14, 15]);

    let evaluator = FieldEvaluator::new(&ctx.device, RadialSinc::default()).unwrap();
    let mesh = evaluator.evaluate_mesh(&ctx.device, &ctx.queue, mesh).unwrap();
    let shaded = read_vertices(&ctx.device, &ctx.queue, &mesh.vertices).unwrap();
    for (before, after) in vertices.iter().zip(&shaded) {
        assert_eq!(before.position, after.position);
        assert!(after.height.is_finite());
    }

    assert_eq!(GridMesh::<Evaluated>::vertex_layout().array_stride, 24);
    let usage = mesh.vertices.buffer().usage();
    assert!(usage.contains(wgpu::BufferUsages::VERTEX));
    assert!(mesh.indices.buffer().usage().contains(wgpu::BufferUsages::INDEX));
}

#[test]
fn over_dispatch_stays_inside_the_grid() {
    let Some(ctx) = context() else { return };
    let config = GeneratorConfig::new((16, 16), -1.0..=1.0, -1.0..=1.0).unwrap();
    let uniform = ConfigUniform::new(&ctx.device, config);
    let vertex_generator = GridVertexGenerator::new(&ctx.device);
    let index_generator = GridIndexGenerator::new(&ctx.device);

    // Slack past the grid so stray writes would be visible.
    let vertex_slack = 64usize;
    let index_slack = 60usize;
    let vertex_total = 16 * 16 + vertex_slack;
    let index_total = 15 * 15 * 6 + index_slack;
    let vertices =
        VertexBuffer::wrap(host_buffer(&ctx, &vec![-7.0f32; vertex_total * 6])).unwrap();
    let indices = IndexBuffer::wrap(host_buffer(&ctx, &vec![u32::MAX; index_total])).unwrap();

    // Thread ids up to (31, 31).
    let groups = Workgroups::new(2, 2);
    let (vertices, indices) = with_pass(&ctx, |pass| {
        (
            vertex_generator.record(&ctx.device, pass, &uniform, vertices, groups),
            index_generator.record(&ctx.device, pass, &uniform, indices, groups),
        )
    });

    let out_vertices: Vec<Vertex> =
        read_buffer(&ctx.device, &ctx.queue, vertices.buffer(), vertex_total).unwrap();
    for (i, vtx) in out_vertices[..256].iter().enumerate() {
        let (x, y) = (i as u32 % 16, i as u32 / 16);
        assert_vertex_close(vtx, &expected_vertex(&config, x, y), &format!("vertex {i}"));
    }
    let untouched = Vertex {
        position: [-7.0; 2],
        height: -7.0,
        color: [-7.0; 3],
    };
    assert!(out_vertices[256..].iter().all(|v| *v == untouched));

    let out_indices = read_indices(&ctx.device, &ctx.queue, &indices).unwrap();
    assert_eq!(out_indices.len(), index_total);
    assert!(out_indices[..1350].iter().all(|&i| i < 256));
    assert!(out_indices[1350..].iter().all(|&i| i == u32::MAX));
}

#[test]
fn generate_into_rejects_short_buffers() {
    let Some(ctx) = context() else { return };
    let config = GeneratorConfig::new((4, 4), -1.0..=1.0, -1.0..=1.0).unwrap();
    let vertices = VertexBuffer::allocate(&ctx.device, 15);
    let indices = IndexBuffer::allocate(&ctx.device, config.index_count());

    let result = MeshGenerator::new(&ctx.device).generate_into(
        &ctx.device,
        &ctx.queue,
        &config,
        vertices,
        indices,
    );
    assert!(matches!(
        result,
        Err(MeshError::BufferTooSmall { needed: 384, actual: 360 })
    ));
}

fn binding_limit(ctx: &heightgrid::GpuContext) -> u64 {
    let limits = ctx.device.limits();
    (limits.max_storage_buffer_binding_size as u64).min(limits.max_buffer_size)
}

#[test]
fn generate_rejects_grids_over_the_binding_limit() {
    let Some(ctx) = context() else { return };
    let limit = binding_limit(&ctx);
    let side = ((limit / 24) as f64).sqrt() as u32 + 2;
    let config = GeneratorConfig::new((side, side), -1.0..=1.0, -1.0..=1.0).unwrap();
    assert!(config.vertex_byte_size() > limit);

    let result = MeshGenerator::new(&ctx.device).generate(&ctx.device, &ctx.queue, &config);
    match result {
        Err(MeshError::BufferLimit { bytes, limit: reported }) => {
            assert_eq!(bytes, config.vertex_byte_size());
            assert_eq!(reported, limit);
        }
        other => panic!("expected BufferLimit, got {:?}", other.map(|m| m.vertex_count())),
    }
}

#[test]
fn generate_into_rejects_buffers_over_the_binding_limit() {
    let Some(ctx) = context() else { return };
    let limit = binding_limit(&ctx);
    if limit >= ctx.device.limits().max_buffer_size {
        return;
    }
    let config = GeneratorConfig::new((4, 4), -1.0..=1.0, -1.0..=1.0).unwrap();
    let count = (limit / 24) as u32 + 1;
    let vertices = VertexBuffer::allocate(&ctx.device, count);
    let indices = IndexBuffer::allocate(&ctx.device, config.index_count());

    let result = MeshGenerator::new(&ctx.device).generate_into(
        &ctx.device,
        &ctx.queue,
        &config,
        vertices,
        indices,
    );
    assert!(matches!(result, Err(MeshError::BufferLimit { .. })));
}
