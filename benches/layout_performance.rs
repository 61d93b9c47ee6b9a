use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fluidgrid::{render_frame, DisplayArea, GridDimensions, ImageExporter, RecordingCanvas, Scene};

fn benchmark_render_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_frame");
    let area = DisplayArea::new(512.0, 512.0);

    for size in [32, 128, 512].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let dims = GridDimensions::new(size, size);
            b.iter(|| {
                let mut covered = 0.0f32;
                render_frame(dims, black_box(area), |rect, _, _| covered += rect.w * rect.h).unwrap();
                black_box(covered)
            });
        });
    }
    group.finish();
}

fn benchmark_scene(c: &mut Criterion) {
    let scene = Scene::default();

    c.bench_function("scene_record_32x32", |b| {
        b.iter(|| {
            let mut canvas = RecordingCanvas::new();
            scene.draw(&mut canvas, black_box(DisplayArea::new(512.0, 512.0))).unwrap();
            black_box(canvas.commands.len())
        });
    });

    let exporter = ImageExporter::new(800, 800);
    c.bench_function("scene_raster_800x800", |b| {
        b.iter(|| black_box(exporter.render_frame(&scene).unwrap()));
    });
}

criterion_group!(benches, benchmark_render_frame, benchmark_scene);
criterion_main!(benches);
