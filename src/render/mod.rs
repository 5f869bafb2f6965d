mod colormap;
mod frame;
mod null_renderer;
mod primitives;
mod svg_renderer;

pub use colormap::Colormap;
pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, LinePrimitive, PolygonPrimitive, PolylinePrimitive, RectPrimitive,
    TextHAlign, TextPrimitive,
};
pub use svg_renderer::{SvgRenderer, escape_markup};

use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::SheetResult;

/// Displayable output of one backend pass over a `RenderFrame`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlotArtifact {
    pub viewport: Viewport,
    /// Backend markup (an SVG document for `SvgRenderer`, empty for headless
    /// backends).
    pub markup: String,
}

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code remains isolated from chart-kind and style logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> SheetResult<PlotArtifact>;
}
