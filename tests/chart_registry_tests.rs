use approx::assert_relative_eq;
use cheatsheet_rs::api::{ChartRendererRegistry, FALLBACK_PLOT_SIZE_PX, PlotArea};
use cheatsheet_rs::core::{ChartKind, PlotData, PlotSpec, StyleDefaults, StyleOptions, Viewport};
use cheatsheet_rs::error::SheetError;

fn thumbnail() -> StyleOptions {
    StyleOptions::new()
        .with_size(50, 50)
        .with_axes(false, false)
        .with_grid(true)
}

#[test]
fn builtin_registry_covers_every_kind() {
    let registry = ChartRendererRegistry::builtin();
    assert_eq!(registry.kinds().len(), ChartKind::ALL.len());
    for kind in ChartKind::ALL {
        assert!(registry.supports(kind), "missing painter for {kind}");
    }

    let empty = ChartRendererRegistry::empty();
    assert!(!empty.supports(ChartKind::Curve));
}

#[test]
fn unregister_reports_whether_painter_existed() {
    let mut registry = ChartRendererRegistry::default();
    assert!(registry.unregister(ChartKind::Arrow));
    assert!(!registry.unregister(ChartKind::Arrow));
    assert!(!registry.supports(ChartKind::Arrow));
    assert_eq!(registry.kinds().len(), ChartKind::ALL.len() - 1);
}

#[test]
fn curve_fills_padded_area_with_fallback_size() {
    let registry = ChartRendererRegistry::builtin();
    let defaults = StyleDefaults::default();

    let frame = registry
        .render(
            ChartKind::Curve,
            &PlotData::values(&[0.0, 1.0]),
            &StyleOptions::new(),
            &defaults,
        )
        .expect("curve frame");

    assert_eq!(
        frame.viewport,
        Viewport::new(FALLBACK_PLOT_SIZE_PX, FALLBACK_PLOT_SIZE_PX)
    );
    // Axis rules are drawn unless hidden; no grid unless requested.
    assert_eq!(frame.lines.len(), 2);
    assert_eq!(frame.polylines.len(), 1);

    let points = &frame.polylines[0].points;
    let padding = 300.0 * 0.08;
    assert_relative_eq!(points[0].0, padding, epsilon = 1e-9);
    assert_relative_eq!(points[0].1, 300.0 - padding, epsilon = 1e-9);
    assert_relative_eq!(points[1].0, 300.0 - padding, epsilon = 1e-9);
    assert_relative_eq!(points[1].1, padding, epsilon = 1e-9);
}

#[test]
fn thumbnail_style_draws_grid_without_axes() {
    let registry = ChartRendererRegistry::builtin();
    let defaults = StyleDefaults::default();

    let frame = registry
        .render(
            ChartKind::Scatter,
            &PlotData::values(&[0.0, 1.0, 0.5]),
            &thumbnail(),
            &defaults,
        )
        .expect("scatter frame");

    assert_eq!(frame.viewport, Viewport::new(50, 50));
    assert_eq!(frame.lines.len(), 6);
    assert_eq!(frame.circles.len(), 3);
}

#[test]
fn hline_sits_at_mid_height_of_unit_range() {
    let registry = ChartRendererRegistry::builtin();
    let defaults = StyleDefaults::default();
    let style = StyleOptions::new().with_axes(false, false);

    let frame = registry
        .render(ChartKind::HLine, &PlotData::Reference(0.5), &style, &defaults)
        .expect("hline frame");

    assert_eq!(frame.lines.len(), 1);
    let line = frame.lines[0];
    assert_relative_eq!(line.y1, 150.0, epsilon = 1e-9);
    assert_relative_eq!(line.y2, 150.0, epsilon = 1e-9);
    assert_relative_eq!(line.x2 - line.x1, 300.0 - 2.0 * 24.0, epsilon = 1e-9);
}

#[test]
fn layout_splits_children_into_side_by_side_panels() {
    let registry = ChartRendererRegistry::builtin();
    let defaults = StyleDefaults::default();
    let data = PlotData::Composite(vec![
        PlotSpec::new(ChartKind::Curve, PlotData::values(&[1.0, 0.0, 1.0])),
        PlotSpec::new(ChartKind::Curve, PlotData::values(&[0.0, 1.0, 0.0])),
    ]);

    let frame = registry
        .render(
            ChartKind::Layout,
            &data,
            &StyleOptions::new().with_size(100, 50),
            &defaults,
        )
        .expect("layout frame");

    assert_eq!(frame.polylines.len(), 2);
    // Each panel carries its own axis rules.
    assert_eq!(frame.lines.len(), 4);
    let first_max_x = frame.polylines[0]
        .points
        .iter()
        .map(|(x, _)| *x)
        .fold(f64::MIN, f64::max);
    let second_min_x = frame.polylines[1]
        .points
        .iter()
        .map(|(x, _)| *x)
        .fold(f64::MAX, f64::min);
    assert!(first_max_x < second_min_x);
}

#[test]
fn image_draws_one_cell_per_value() {
    let registry = ChartRendererRegistry::builtin();
    let defaults = StyleDefaults::default();
    let data = PlotData::grid(
        &[0.0, 1.0, 0.0],
        &[0.0, 1.0, 2.0],
        &[&[6.0, 7.0, 8.0], &[9.0, 8.0, 10.0]],
    );

    let image = registry
        .render(ChartKind::Image, &data, &thumbnail(), &defaults)
        .expect("image frame");
    assert_eq!(image.rects.len(), 6);
    assert!(image.rects.iter().all(|rect| rect.stroke.is_none()));

    let mesh = registry
        .render(ChartKind::QuadMesh, &data, &thumbnail(), &defaults)
        .expect("quadmesh frame");
    assert!(mesh.rects.iter().all(|rect| rect.stroke.is_some()));
}

#[test]
fn unknown_colormap_is_invalid_data() {
    let registry = ChartRendererRegistry::builtin();
    let defaults = StyleDefaults::default();
    let data = PlotData::grid(&[0.0, 1.0], &[0.0, 1.0], &[&[1.0, 2.0]]);

    let result = registry.render(
        ChartKind::Image,
        &data,
        &StyleOptions::new().with_cmap("not-a-map"),
        &defaults,
    );
    assert!(matches!(result, Err(SheetError::InvalidData(_))));
}

#[test]
fn arrow_uses_label_and_arrow_colors() {
    let registry = ChartRendererRegistry::builtin();
    let defaults = StyleDefaults::default();
    let style = thumbnail()
        .with_extra("arrow_color", "lightblue")
        .with_extra("text_color", "red")
        .with_extra("fontsize", 3.0);
    let data = PlotData::arrow(
        0.2,
        0.2,
        "Arrow",
        cheatsheet_rs::core::ArrowDirection::Down,
    );

    let frame = registry
        .render(ChartKind::Arrow, &data, &style, &defaults)
        .expect("arrow frame");

    assert_eq!(frame.texts.len(), 1);
    assert_eq!(frame.texts[0].text, "Arrow");
    assert_relative_eq!(frame.texts[0].font_size_px, 3.0);
    assert_eq!(frame.texts[0].color.to_hex(), "#ff0000");
    assert_eq!(frame.polygons.len(), 1);
    assert_eq!(frame.polygons[0].fill.to_hex(), "#add8e6");
}

#[test]
fn plot_area_split_keeps_gaps_between_panels() {
    let area = PlotArea {
        x: 0.0,
        y: 0.0,
        width: 100.0,
        height: 40.0,
    };
    let panels = area.split_horizontal(2, 4.0);

    assert_eq!(panels.len(), 2);
    assert_relative_eq!(panels[0].width, 48.0);
    assert_relative_eq!(panels[1].x, 52.0);
    assert_relative_eq!(panels[1].right(), 100.0);
    assert!(area.split_horizontal(0, 4.0).is_empty());

    let inset = area.inset(5.0);
    assert_relative_eq!(inset.x, 5.0);
    assert_relative_eq!(inset.height, 30.0);
}
