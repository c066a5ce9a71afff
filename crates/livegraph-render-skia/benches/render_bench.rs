use anyhow::Result;
use criterion::{criterion_group, criterion_main, Criterion, black_box};
use livegraph_core::{AxisTickSet, Chart};
use livegraph_render_skia::SkiaRenderer;

fn build_chart_xy(n: usize) -> Chart {
    let mut ch = Chart::with_capacity(n).unwrap();
    for i in 0..n {
        let x = i as f64;
        let y = (i as f64 * 0.01).sin() * 10.0 + (i as f64 * 0.0001);
        ch.insert(x, y);
    }
    ch.set_crop_to_data(true)
        .set_x_ticks(AxisTickSet::from_integers((0..n as i64).step_by(n / 10).collect::<Vec<_>>()))
        .set_y_ticks(AxisTickSet::from_integers(vec![-10, -5, 0, 5, 10]))
        .show_tick_labels(false);
    ch
}

fn bench_render(c: &mut Criterion) {
    let renderer = SkiaRenderer::new();
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[10_000usize, 50_000usize] {
        group.bench_function(format!("xy_{n}"), |b| {
            let mut ch = build_chart_xy(n);
            b.iter(|| -> Result<()> {
                let bytes = renderer.render_to_png_bytes(&mut ch, 800, 500)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
