//! Per-kind thumbnail painters registered by `ChartRendererRegistry::builtin`.
//!
//! Painters receive a canvas whose scales already fit the plot data and only
//! push primitives; validation of the finished frame happens in the backend.

use std::f64::consts::PI;

use indexmap::IndexMap;

use crate::core::{ArrowDirection, PlotData, StyleOptions, finite_extent};
use crate::error::{SheetError, SheetResult};
use crate::render::{
    CirclePrimitive, Color, Colormap, LinePrimitive, PolygonPrimitive, PolylinePrimitive,
    RectPrimitive, TextHAlign, TextPrimitive,
};

use super::chart_registry::{PaintContext, PlotCanvas};

/// Color cycle applied to overlay children without an explicit color.
pub const SERIES_CYCLE: [&str; 5] = ["#30a2da", "#fc4f30", "#e5ae38", "#6d904f", "#8b8b8b"];

const DEFAULT_FILL_ALPHA: f64 = 0.6;
const TILE_WATER: Color = Color::rgb(0.667, 0.827, 0.875);
const TILE_LAND: Color = Color::rgb(0.949, 0.937, 0.914);
const TILE_SEAM: Color = Color::rgba(1.0, 1.0, 1.0, 0.8);
const TILE_LABEL: Color = Color::rgb(0.3, 0.3, 0.3);

fn series_color(style: &StyleOptions) -> SheetResult<Color> {
    match &style.color {
        Some(css) => Color::parse_css(css),
        None => Color::parse_css(SERIES_CYCLE[0]),
    }
}

/// First of the named extras that is set, else the series color.
fn extra_color(style: &StyleOptions, keys: &[&str]) -> SheetResult<Color> {
    for key in keys {
        if let Some(css) = style.extra_str(key) {
            return Color::parse_css(css);
        }
    }
    series_color(style)
}

fn colormap(style: &StyleOptions) -> SheetResult<Colormap> {
    match &style.cmap {
        Some(name) => Colormap::named(name),
        None => Ok(Colormap::default()),
    }
}

fn stroke_width(style: &StyleOptions, canvas: &PlotCanvas<'_>) -> f64 {
    style
        .extra_f64("line_width")
        .filter(|width| width.is_finite() && *width > 0.0)
        .unwrap_or_else(|| (canvas.area().min_side() / 25.0).max(1.0))
}

fn fill_alpha(style: &StyleOptions, default: f64) -> f64 {
    style
        .extra_f64("fill_alpha")
        .filter(|alpha| (0.0..=1.0).contains(alpha))
        .unwrap_or(default)
}

fn font_size(style: &StyleOptions, canvas: &PlotCanvas<'_>, fraction: f64) -> f64 {
    style
        .extra_f64("fontsize")
        .filter(|size| size.is_finite() && *size > 0.0)
        .unwrap_or_else(|| (canvas.area().min_side() * fraction).max(1.0))
}

fn value_points(values: &[f64], canvas: &PlotCanvas<'_>) -> SheetResult<Vec<(f64, f64)>> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| canvas.project(index as f64, *value))
        .collect()
}

fn mismatch(kind: &str, data: &PlotData) -> SheetError {
    SheetError::InvalidData(format!("{kind} cannot draw {} data", data.shape_name()))
}

pub(super) fn paint_curve(
    data: &PlotData,
    style: &StyleOptions,
    canvas: &mut PlotCanvas<'_>,
    _context: &PaintContext<'_>,
) -> SheetResult<()> {
    let PlotData::Values(values) = data else {
        return Err(mismatch("Curve", data));
    };
    let color = series_color(style)?;
    let width = stroke_width(style, canvas);
    let points = value_points(values, canvas)?;

    if let [(x, y)] = points.as_slice() {
        canvas
            .frame_mut()
            .circles
            .push(CirclePrimitive::new(*x, *y, width, color));
    } else {
        canvas
            .frame_mut()
            .polylines
            .push(PolylinePrimitive::new(points, width, color));
    }
    Ok(())
}

pub(super) fn paint_scatter(
    data: &PlotData,
    style: &StyleOptions,
    canvas: &mut PlotCanvas<'_>,
    _context: &PaintContext<'_>,
) -> SheetResult<()> {
    let PlotData::Values(values) = data else {
        return Err(mismatch("Scatter", data));
    };
    let color = series_color(style)?;
    let radius = style
        .extra_f64("size")
        .filter(|size| size.is_finite() && *size > 0.0)
        .unwrap_or_else(|| (canvas.area().min_side() / 14.0).max(1.5));

    for (x, y) in value_points(values, canvas)? {
        canvas
            .frame_mut()
            .circles
            .push(CirclePrimitive::new(x, y, radius, color));
    }
    Ok(())
}

pub(super) fn paint_bars(
    data: &PlotData,
    style: &StyleOptions,
    canvas: &mut PlotCanvas<'_>,
    _context: &PaintContext<'_>,
) -> SheetResult<()> {
    let PlotData::Values(values) = data else {
        return Err(mismatch("Bars", data));
    };
    let fill = extra_color(style, &["fill_color"])?.with_alpha(fill_alpha(style, 1.0));
    let area = canvas.area();
    let band = area.width / values.len() as f64;
    let bar_width = band
        * style
            .extra_f64("bar_width")
            .filter(|ratio| *ratio > 0.0 && *ratio <= 1.0)
            .unwrap_or(0.8);
    let baseline = canvas.baseline_y(0.0)?;

    for (index, value) in values.iter().enumerate() {
        let top = canvas.project_y(*value)?;
        let x = area.x + band * index as f64 + (band - bar_width) / 2.0;
        let (y, height) = if top <= baseline {
            (top, baseline - top)
        } else {
            (baseline, top - baseline)
        };
        canvas
            .frame_mut()
            .rects
            .push(RectPrimitive::new(x, y, bar_width, height, fill));
    }
    Ok(())
}

pub(super) fn paint_area(
    data: &PlotData,
    style: &StyleOptions,
    canvas: &mut PlotCanvas<'_>,
    _context: &PaintContext<'_>,
) -> SheetResult<()> {
    let (xs, upper, lower): (Vec<f64>, &[f64], Option<&[f64]>) = match data {
        PlotData::Values(values) => (
            (0..values.len()).map(|i| i as f64).collect(),
            values.as_slice(),
            None,
        ),
        PlotData::Area { xs, upper, lower } => (xs.to_vec(), upper.as_slice(), lower.as_deref()),
        other => return Err(mismatch("Area", other)),
    };
    let color = series_color(style)?;

    let mut outline = Vec::with_capacity(xs.len());
    for (x, y) in xs.iter().zip(upper) {
        outline.push(canvas.project(*x, *y)?);
    }
    let mut polygon = outline.clone();
    match lower {
        Some(lower) => {
            for (x, y) in xs.iter().zip(lower).rev() {
                polygon.push(canvas.project(*x, *y)?);
            }
        }
        None => {
            let baseline = canvas.baseline_y(0.0)?;
            for x in xs.iter().rev() {
                polygon.push((canvas.project_x(*x)?, baseline));
            }
        }
    }

    if polygon.len() >= 3 {
        canvas.frame_mut().polygons.push(PolygonPrimitive::new(
            polygon,
            color.with_alpha(fill_alpha(style, DEFAULT_FILL_ALPHA)),
        ));
    }
    if outline.len() >= 2 {
        let width = stroke_width(style, canvas) / 2.0;
        canvas
            .frame_mut()
            .polylines
            .push(PolylinePrimitive::new(outline, width.max(0.5), color));
    }
    Ok(())
}

fn paint_cells(
    data: &PlotData,
    style: &StyleOptions,
    canvas: &mut PlotCanvas<'_>,
    outline: Option<Color>,
) -> SheetResult<()> {
    let PlotData::Grid { zs, .. } = data else {
        return Err(mismatch("gridded plot", data));
    };
    let cmap = colormap(style)?;
    let (min, max) = finite_extent(&data.z_values()).unwrap_or((0.0, 1.0));
    let area = canvas.area();
    let rows = zs.len();
    let cell_height = area.height / rows as f64;

    for (row_index, row) in zs.iter().enumerate() {
        let cell_width = area.width / row.len() as f64;
        let y = area.y + cell_height * row_index as f64;
        for (col_index, value) in row.iter().enumerate() {
            let x = area.x + cell_width * col_index as f64;
            let mut rect =
                RectPrimitive::new(x, y, cell_width, cell_height, cmap.sample_range(*value, min, max));
            if let Some(stroke) = outline {
                rect = rect.with_stroke(stroke);
            }
            canvas.frame_mut().rects.push(rect);
        }
    }
    Ok(())
}

pub(super) fn paint_image(
    data: &PlotData,
    style: &StyleOptions,
    canvas: &mut PlotCanvas<'_>,
    _context: &PaintContext<'_>,
) -> SheetResult<()> {
    paint_cells(data, style, canvas, None)
}

pub(super) fn paint_quadmesh(
    data: &PlotData,
    style: &StyleOptions,
    canvas: &mut PlotCanvas<'_>,
    _context: &PaintContext<'_>,
) -> SheetResult<()> {
    paint_cells(data, style, canvas, Some(Color::rgba(1.0, 1.0, 1.0, 0.6)))
}

/// Draws one path per value row, each nested further toward the centroid so
/// the rows read as successive levels.
pub(super) fn paint_contours(
    data: &PlotData,
    style: &StyleOptions,
    canvas: &mut PlotCanvas<'_>,
    _context: &PaintContext<'_>,
) -> SheetResult<()> {
    let PlotData::Samples { xs, ys, zs } = data else {
        return Err(mismatch("Contours", data));
    };
    let cmap = colormap(style)?;
    let width = stroke_width(style, canvas);

    let mut path = Vec::with_capacity(xs.len());
    for (x, y) in xs.iter().zip(ys.iter()) {
        path.push(canvas.project(*x, *y)?);
    }
    if path.len() < 2 {
        return Ok(());
    }
    let count = path.len() as f64;
    let centroid = path
        .iter()
        .fold((0.0, 0.0), |acc, (x, y)| (acc.0 + x / count, acc.1 + y / count));

    let level_means: Vec<f64> = zs
        .iter()
        .map(|row| row.iter().sum::<f64>() / row.len() as f64)
        .collect();
    let (min, max) = finite_extent(&level_means).unwrap_or((0.0, 1.0));

    for (level, mean) in level_means.iter().enumerate() {
        let shrink = 1.0 - 0.3 * level as f64 / level_means.len() as f64;
        let points = path
            .iter()
            .map(|(x, y)| {
                (
                    centroid.0 + (x - centroid.0) * shrink,
                    centroid.1 + (y - centroid.1) * shrink,
                )
            })
            .collect();
        canvas.frame_mut().polylines.push(PolylinePrimitive::new(
            points,
            width,
            cmap.sample_range(*mean, min, max),
        ));
    }
    Ok(())
}

/// Bins samples into pointy-top hexagons and colors each by its count.
pub(super) fn paint_hextiles(
    data: &PlotData,
    style: &StyleOptions,
    canvas: &mut PlotCanvas<'_>,
    _context: &PaintContext<'_>,
) -> SheetResult<()> {
    let PlotData::Samples { xs, ys, .. } = data else {
        return Err(mismatch("HexTiles", data));
    };
    let cmap = colormap(style)?;
    let area = canvas.area();
    let max_radius = (area.min_side() / 2.0).max(2.0);
    let radius = style
        .extra_f64("scale")
        .filter(|scale| scale.is_finite() && *scale > 0.0)
        .unwrap_or(area.min_side() / 6.0)
        .clamp(2.0, max_radius);

    let sqrt3 = 3.0_f64.sqrt();
    let mut bins: IndexMap<(i64, i64), usize> = IndexMap::new();
    for (x, y) in xs.iter().zip(ys.iter()) {
        let (px, py) = canvas.project(*x, *y)?;
        let (lx, ly) = (px - area.x, py - area.y);
        let q = (sqrt3 / 3.0 * lx - ly / 3.0) / radius;
        let r = (2.0 / 3.0 * ly) / radius;
        *bins.entry(round_axial(q, r)).or_insert(0) += 1;
    }

    let max_count = bins.values().copied().max().unwrap_or(1) as f64;
    for ((q, r), count) in bins {
        let (q, r) = (q as f64, r as f64);
        let cx = area.x + radius * sqrt3 * (q + r / 2.0);
        let cy = area.y + radius * 1.5 * r;
        let corners = (0..6_i32)
            .map(|corner| {
                let angle = PI / 180.0 * (60.0 * f64::from(corner) - 30.0);
                (cx + radius * angle.cos(), cy + radius * angle.sin())
            })
            .collect();
        canvas.frame_mut().polygons.push(PolygonPrimitive::new(
            corners,
            cmap.sample(count as f64 / max_count),
        ));
    }
    Ok(())
}

fn round_axial(q: f64, r: f64) -> (i64, i64) {
    let s = -q - r;
    let (mut rq, mut rr, rs) = (q.round(), r.round(), s.round());
    let (dq, dr, ds) = ((rq - q).abs(), (rr - r).abs(), (rs - s).abs());
    if dq > dr && dq > ds {
        rq = -rr - rs;
    } else if dr > ds {
        rr = -rq - rs;
    }
    (rq as i64, rr as i64)
}

pub(super) fn paint_text(
    data: &PlotData,
    style: &StyleOptions,
    canvas: &mut PlotCanvas<'_>,
    _context: &PaintContext<'_>,
) -> SheetResult<()> {
    let PlotData::Annotation { x, y, text } = data else {
        return Err(mismatch("Text", data));
    };
    let color = extra_color(style, &["text_color"])?;
    let size = font_size(style, canvas, 0.3);
    let (px, py) = canvas.project(*x, *y)?;
    canvas.frame_mut().texts.push(TextPrimitive::new(
        text.clone(),
        px,
        py,
        size,
        color,
        TextHAlign::Center,
    ));
    Ok(())
}

pub(super) fn paint_hline(
    data: &PlotData,
    style: &StyleOptions,
    canvas: &mut PlotCanvas<'_>,
    _context: &PaintContext<'_>,
) -> SheetResult<()> {
    let PlotData::Reference(value) = data else {
        return Err(mismatch("HLine", data));
    };
    let color = extra_color(style, &["line_color"])?;
    let width = stroke_width(style, canvas);
    let area = canvas.area();
    let y = canvas.project_y(*value)?;
    canvas
        .frame_mut()
        .lines
        .push(LinePrimitive::new(area.x, y, area.right(), y, width, color));
    Ok(())
}

pub(super) fn paint_vline(
    data: &PlotData,
    style: &StyleOptions,
    canvas: &mut PlotCanvas<'_>,
    _context: &PaintContext<'_>,
) -> SheetResult<()> {
    let PlotData::Reference(value) = data else {
        return Err(mismatch("VLine", data));
    };
    let color = extra_color(style, &["line_color"])?;
    let width = stroke_width(style, canvas);
    let area = canvas.area();
    let x = canvas.project_x(*value)?;
    canvas
        .frame_mut()
        .lines
        .push(LinePrimitive::new(x, area.y, x, area.bottom(), width, color));
    Ok(())
}

/// Shaft ends at the anchor point; the label sits at the tail.
pub(super) fn paint_arrow(
    data: &PlotData,
    style: &StyleOptions,
    canvas: &mut PlotCanvas<'_>,
    _context: &PaintContext<'_>,
) -> SheetResult<()> {
    let PlotData::Arrow {
        x,
        y,
        text,
        direction,
    } = data
    else {
        return Err(mismatch("Arrow", data));
    };
    let arrow_color = extra_color(style, &["arrow_color"])?;
    let text_color = extra_color(style, &["text_color", "arrow_color"])?;
    let width = stroke_width(style, canvas) / 2.0;
    let size = font_size(style, canvas, 0.2);
    let (tip_x, tip_y) = canvas.project(*x, *y)?;
    let length = canvas.area().min_side() * 0.35;
    let head = (length * 0.3).max(2.0);

    // Unit vector pointing from tail to tip.
    let (ux, uy) = match direction {
        ArrowDirection::Up => (0.0, -1.0),
        ArrowDirection::Down => (0.0, 1.0),
        ArrowDirection::Left => (-1.0, 0.0),
        ArrowDirection::Right => (1.0, 0.0),
    };
    let (tail_x, tail_y) = (tip_x - ux * length, tip_y - uy * length);
    let (base_x, base_y) = (tip_x - ux * head, tip_y - uy * head);
    let (nx, ny) = (-uy * head / 2.0, ux * head / 2.0);

    let frame = canvas.frame_mut();
    frame.lines.push(LinePrimitive::new(
        tail_x,
        tail_y,
        base_x,
        base_y,
        width.max(0.5),
        arrow_color,
    ));
    frame.polygons.push(PolygonPrimitive::new(
        vec![
            (tip_x, tip_y),
            (base_x + nx, base_y + ny),
            (base_x - nx, base_y - ny),
        ],
        arrow_color,
    ));
    frame.texts.push(TextPrimitive::new(
        text.clone(),
        tail_x - ux * size,
        tail_y - uy * size,
        size,
        text_color,
        TextHAlign::Center,
    ));
    Ok(())
}

/// Offline stand-in for a web tile layer: water, a few land masses, tile
/// seams and the provider attribution.
pub(super) fn paint_tiles(
    data: &PlotData,
    _style: &StyleOptions,
    canvas: &mut PlotCanvas<'_>,
    _context: &PaintContext<'_>,
) -> SheetResult<()> {
    let PlotData::Tiles { provider } = data else {
        return Err(mismatch("Tiles", data));
    };
    let area = canvas.area();
    let (w, h) = (area.width, area.height);
    let at = |fx: f64, fy: f64| (area.x + w * fx, area.y + h * fy);
    let label_size = (area.min_side() / 6.0).max(1.0);

    let frame = canvas.frame_mut();
    frame
        .rects
        .push(RectPrimitive::new(area.x, area.y, w, h, TILE_WATER));
    frame.polygons.push(PolygonPrimitive::new(
        vec![at(0.05, 0.15), at(0.4, 0.1), at(0.45, 0.5), at(0.2, 0.65), at(0.08, 0.45)],
        TILE_LAND,
    ));
    frame.polygons.push(PolygonPrimitive::new(
        vec![at(0.55, 0.2), at(0.95, 0.25), at(0.9, 0.7), at(0.7, 0.85), at(0.5, 0.55)],
        TILE_LAND,
    ));
    let (mid_x, mid_y) = at(0.5, 0.5);
    frame
        .lines
        .push(LinePrimitive::new(mid_x, area.y, mid_x, area.bottom(), 0.5, TILE_SEAM));
    frame
        .lines
        .push(LinePrimitive::new(area.x, mid_y, area.right(), mid_y, 0.5, TILE_SEAM));
    frame.texts.push(TextPrimitive::new(
        provider.clone(),
        area.right() - 1.0,
        area.bottom() - label_size / 2.0,
        label_size,
        TILE_LABEL,
        TextHAlign::Right,
    ));
    Ok(())
}

/// Children share the parent's scales; uncolored children take the next
/// color in the series cycle.
pub(super) fn paint_overlay(
    data: &PlotData,
    _style: &StyleOptions,
    canvas: &mut PlotCanvas<'_>,
    context: &PaintContext<'_>,
) -> SheetResult<()> {
    let PlotData::Composite(children) = data else {
        return Err(mismatch("Overlay", data));
    };
    for (index, child) in children.iter().enumerate() {
        let mut style = context.child_style(child);
        if style.color.is_none() {
            style.color = Some(SERIES_CYCLE[index % SERIES_CYCLE.len()].to_owned());
        }
        context.paint_child(child, &style, canvas)?;
    }
    Ok(())
}

/// Children are drawn as independent side-by-side panels.
pub(super) fn paint_layout(
    data: &PlotData,
    _style: &StyleOptions,
    canvas: &mut PlotCanvas<'_>,
    context: &PaintContext<'_>,
) -> SheetResult<()> {
    let PlotData::Composite(children) = data else {
        return Err(mismatch("Layout", data));
    };
    let area = canvas.area();
    let gap = (area.width * 0.04).max(1.0);
    for (child, panel) in children
        .iter()
        .zip(area.split_horizontal(children.len(), gap))
    {
        context.paint_panel(child, panel, canvas.frame_mut())?;
    }
    Ok(())
}
