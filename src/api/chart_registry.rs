use indexmap::IndexMap;
use tracing::trace;

use crate::core::{
    Bounds, ChartKind, LinearScale, PlotData, PlotSpec, StyleDefaults, StyleOptions, Viewport,
};
use crate::error::{SheetError, SheetResult};
use crate::render::{Color, LinePrimitive, RenderFrame};

use super::painters;

/// Edge length used when a style leaves `width` or `height` unset.
pub const FALLBACK_PLOT_SIZE_PX: u32 = 300;

/// Draws one chart kind onto a prepared canvas.
pub type PaintFn =
    fn(&PlotData, &StyleOptions, &mut PlotCanvas<'_>, &PaintContext<'_>) -> SheetResult<()>;

/// Pixel rectangle a plot draws into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    #[must_use]
    pub fn from_viewport(viewport: Viewport) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: f64::from(viewport.width),
            height: f64::from(viewport.height),
        }
    }

    /// Shrinks the area by `padding` on every side, never below one pixel.
    #[must_use]
    pub fn inset(self, padding: f64) -> Self {
        let pad_x = padding.min((self.width - 1.0).max(0.0) / 2.0);
        let pad_y = padding.min((self.height - 1.0).max(0.0) / 2.0);
        Self {
            x: self.x + pad_x,
            y: self.y + pad_y,
            width: self.width - 2.0 * pad_x,
            height: self.height - 2.0 * pad_y,
        }
    }

    /// Splits the area into `count` equal side-by-side panels separated by `gap`.
    #[must_use]
    pub fn split_horizontal(self, count: usize, gap: f64) -> Vec<Self> {
        if count == 0 {
            return Vec::new();
        }
        let total_gap = gap * (count - 1) as f64;
        let panel_width = ((self.width - total_gap) / count as f64).max(1.0);
        (0..count)
            .map(|index| Self {
                x: self.x + index as f64 * (panel_width + gap),
                y: self.y,
                width: panel_width,
                height: self.height,
            })
            .collect()
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn min_side(self) -> f64 {
        self.width.min(self.height)
    }
}

/// Frame region plus data-to-pixel scales for one plot panel.
pub struct PlotCanvas<'f> {
    frame: &'f mut RenderFrame,
    area: PlotArea,
    bounds: Bounds,
    x_scale: LinearScale,
    y_scale: LinearScale,
}

impl<'f> PlotCanvas<'f> {
    pub fn new(frame: &'f mut RenderFrame, area: PlotArea, bounds: Bounds) -> SheetResult<Self> {
        let x_scale = LinearScale::fit(bounds.x_min, bounds.x_max, area.x, area.right())?;
        // Pixel y grows downwards.
        let y_scale = LinearScale::fit(bounds.y_min, bounds.y_max, area.bottom(), area.y)?;
        Ok(Self {
            frame,
            area,
            bounds,
            x_scale,
            y_scale,
        })
    }

    #[must_use]
    pub fn area(&self) -> PlotArea {
        self.area
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn project(&self, x: f64, y: f64) -> SheetResult<(f64, f64)> {
        Ok((self.x_scale.project(x)?, self.y_scale.project(y)?))
    }

    pub fn project_x(&self, x: f64) -> SheetResult<f64> {
        self.x_scale.project(x)
    }

    pub fn project_y(&self, y: f64) -> SheetResult<f64> {
        self.y_scale.project(y)
    }

    /// Pixel y of `value` clamped into the visible data range.
    pub fn baseline_y(&self, value: f64) -> SheetResult<f64> {
        let (start, end) = self.y_scale.domain();
        self.y_scale.project(value.clamp(start.min(end), start.max(end)))
    }

    pub fn frame_mut(&mut self) -> &mut RenderFrame {
        &mut *self.frame
    }
}

/// Shared state for painters that draw child plots.
pub struct PaintContext<'a> {
    registry: &'a ChartRendererRegistry,
    defaults: &'a StyleDefaults,
}

impl<'a> PaintContext<'a> {
    #[must_use]
    pub fn defaults(&self) -> &'a StyleDefaults {
        self.defaults
    }

    /// Effective style of a composite child.
    #[must_use]
    pub fn child_style(&self, spec: &PlotSpec) -> StyleOptions {
        self.defaults.resolve(spec.kind, &spec.overrides)
    }

    /// Paints `spec` onto an existing canvas, sharing its scales.
    pub fn paint_child(
        &self,
        spec: &PlotSpec,
        style: &StyleOptions,
        canvas: &mut PlotCanvas<'_>,
    ) -> SheetResult<()> {
        let painter = self.registry.painter(spec.kind, &spec.data)?;
        painter(&spec.data, style, canvas, self)
    }

    /// Paints `spec` as an independent panel inside `area` of `frame`.
    pub fn paint_panel(
        &self,
        spec: &PlotSpec,
        area: PlotArea,
        frame: &mut RenderFrame,
    ) -> SheetResult<()> {
        let style = self.child_style(spec);
        let painter = self.registry.painter(spec.kind, &spec.data)?;
        let area = area.inset(panel_padding(area));
        let mut canvas = PlotCanvas::new(frame, area, spec.data.bounds())?;
        decorate(&mut canvas, &style)?;
        painter(&spec.data, &style, &mut canvas, self)
    }
}

/// Chart renderer: maps each chart kind to the painter that draws it.
#[derive(Debug, Clone)]
pub struct ChartRendererRegistry {
    painters: IndexMap<ChartKind, PaintFn>,
}

impl ChartRendererRegistry {
    /// Registry without any painter; every kind is unsupported.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            painters: IndexMap::new(),
        }
    }

    /// Registry with a painter for every built-in chart kind.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry
            .register(ChartKind::Curve, painters::paint_curve)
            .register(ChartKind::Scatter, painters::paint_scatter)
            .register(ChartKind::Bars, painters::paint_bars)
            .register(ChartKind::Area, painters::paint_area)
            .register(ChartKind::Image, painters::paint_image)
            .register(ChartKind::QuadMesh, painters::paint_quadmesh)
            .register(ChartKind::Contours, painters::paint_contours)
            .register(ChartKind::HexTiles, painters::paint_hextiles)
            .register(ChartKind::Text, painters::paint_text)
            .register(ChartKind::Tiles, painters::paint_tiles)
            .register(ChartKind::HLine, painters::paint_hline)
            .register(ChartKind::VLine, painters::paint_vline)
            .register(ChartKind::Arrow, painters::paint_arrow)
            .register(ChartKind::Overlay, painters::paint_overlay)
            .register(ChartKind::Layout, painters::paint_layout);
        registry
    }

    /// Registers or replaces the painter for `kind`.
    pub fn register(&mut self, kind: ChartKind, painter: PaintFn) -> &mut Self {
        self.painters.insert(kind, painter);
        self
    }

    /// Removes the painter for `kind`. Returns `true` when one was removed.
    pub fn unregister(&mut self, kind: ChartKind) -> bool {
        self.painters.shift_remove(&kind).is_some()
    }

    #[must_use]
    pub fn supports(&self, kind: ChartKind) -> bool {
        self.painters.contains_key(&kind)
    }

    #[must_use]
    pub fn kinds(&self) -> Vec<ChartKind> {
        self.painters.keys().copied().collect()
    }

    fn painter(&self, kind: ChartKind, data: &PlotData) -> SheetResult<PaintFn> {
        let painter = *self
            .painters
            .get(&kind)
            .ok_or(SheetError::UnsupportedKind { kind })?;
        if !kind.accepts(data) {
            return Err(SheetError::InvalidData(format!(
                "{kind} cannot draw {} data",
                data.shape_name()
            )));
        }
        Ok(painter)
    }

    /// Produces the backend-agnostic frame for one plot.
    ///
    /// `style` is the already-resolved effective style; `defaults` is only
    /// consulted for the children of composite kinds.
    pub fn render(
        &self,
        kind: ChartKind,
        data: &PlotData,
        style: &StyleOptions,
        defaults: &StyleDefaults,
    ) -> SheetResult<RenderFrame> {
        let painter = self.painter(kind, data)?;
        data.validate()?;

        let viewport = Viewport::new(
            style.width.unwrap_or(FALLBACK_PLOT_SIZE_PX),
            style.height.unwrap_or(FALLBACK_PLOT_SIZE_PX),
        );
        if !viewport.is_valid() {
            return Err(SheetError::InvalidData(format!(
                "plot size must be non-zero, got {}x{}",
                viewport.width, viewport.height
            )));
        }

        let mut frame = RenderFrame::new(viewport);
        let context = PaintContext {
            registry: self,
            defaults,
        };
        let full = PlotArea::from_viewport(viewport);
        let area = if kind == ChartKind::Layout {
            full
        } else {
            full.inset(panel_padding(full))
        };
        {
            let mut canvas = PlotCanvas::new(&mut frame, area, data.bounds())?;
            if kind != ChartKind::Layout {
                decorate(&mut canvas, style)?;
            }
            painter(data, style, &mut canvas, &context)?;
        }

        trace!(
            kind = %kind,
            width = viewport.width,
            height = viewport.height,
            primitives = frame.primitive_count(),
            "render plot frame"
        );
        Ok(frame)
    }
}

impl Default for ChartRendererRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

fn panel_padding(area: PlotArea) -> f64 {
    (area.min_side() * 0.08).max(2.0)
}

const GRID_COLOR: Color = Color::rgba(0.5, 0.5, 0.5, 0.35);
const AXIS_COLOR: Color = Color::rgba(0.6, 0.6, 0.6, 1.0);

/// Grid lines and axis rules requested by the style.
fn decorate(canvas: &mut PlotCanvas<'_>, style: &StyleOptions) -> SheetResult<()> {
    let area = canvas.area();
    let stroke = (area.min_side() / 100.0).max(0.5);

    if style.show_grid == Some(true) {
        for step in 1..4_i32 {
            let fraction = f64::from(step) / 4.0;
            let x = area.x + area.width * fraction;
            let y = area.y + area.height * fraction;
            let frame = canvas.frame_mut();
            frame
                .lines
                .push(LinePrimitive::new(x, area.y, x, area.bottom(), stroke, GRID_COLOR));
            frame
                .lines
                .push(LinePrimitive::new(area.x, y, area.right(), y, stroke, GRID_COLOR));
        }
    }
    if style.show_xaxis != Some(false) {
        let y = area.bottom();
        canvas
            .frame_mut()
            .lines
            .push(LinePrimitive::new(area.x, y, area.right(), y, stroke, AXIS_COLOR));
    }
    if style.show_yaxis != Some(false) {
        let x = area.x;
        canvas
            .frame_mut()
            .lines
            .push(LinePrimitive::new(x, area.y, x, area.bottom(), stroke, AXIS_COLOR));
    }
    Ok(())
}
