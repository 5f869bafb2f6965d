use cheatsheet_rs::api::DashboardComposer;
use cheatsheet_rs::cheatsheet::CheatSheet;
use cheatsheet_rs::core::{ChartKind, PlotData, StyleDefaults};
use cheatsheet_rs::render::{NullRenderer, SvgRenderer};
use cheatsheet_rs::template::{HtmlOptions, TemplateConfig, render_page_html};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_compose_sheet_null(c: &mut Criterion) {
    let defaults = CheatSheet::default_style_defaults(&CheatSheet::default_thumbnail());

    c.bench_function("compose_sheet_null", |b| {
        b.iter(|| {
            let mut composer = DashboardComposer::new(&defaults, NullRenderer::default());
            let page = CheatSheet::compose(&mut composer, TemplateConfig::default())
                .expect("compose sheet");
            black_box(page.plot_count());
        })
    });
}

fn bench_compose_sheet_svg_html(c: &mut Criterion) {
    let defaults = CheatSheet::default_style_defaults(&CheatSheet::default_thumbnail());

    c.bench_function("compose_sheet_svg_html", |b| {
        b.iter(|| {
            let mut composer = DashboardComposer::new(&defaults, SvgRenderer::new());
            let page = CheatSheet::compose(&mut composer, TemplateConfig::default())
                .expect("compose sheet");
            let html = render_page_html(&page, &HtmlOptions::default()).expect("render html");
            black_box(html.len());
        })
    });
}

fn bench_image_plot_64x64(c: &mut Criterion) {
    let defaults = StyleDefaults::default();
    let axis: Vec<f64> = (0..64_i32).map(f64::from).collect();
    let rows: Vec<Vec<f64>> = (0..64_i32)
        .map(|row| (0..64_i32).map(|col| f64::from(row * 64 + col).sin()).collect())
        .collect();
    let row_refs: Vec<&[f64]> = rows.iter().map(Vec::as_slice).collect();
    let data = PlotData::grid(&axis, &axis, &row_refs);

    c.bench_function("image_plot_64x64", |b| {
        b.iter(|| {
            let mut composer = DashboardComposer::new(&defaults, SvgRenderer::new());
            let plot = composer
                .build_plot(ChartKind::Image, black_box(data.clone()), None)
                .expect("image plot");
            black_box(plot.artifact().markup.len());
        })
    });
}

criterion_group!(
    benches,
    bench_compose_sheet_null,
    bench_compose_sheet_svg_html,
    bench_image_plot_64x64
);
criterion_main!(benches);
