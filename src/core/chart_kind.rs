use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::PlotData;
use crate::error::SheetError;

/// Visualization types the cheat sheet can illustrate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ChartKind {
    Curve,
    Scatter,
    Bars,
    Area,
    Image,
    Contours,
    HexTiles,
    QuadMesh,
    Text,
    Tiles,
    Overlay,
    HLine,
    VLine,
    Arrow,
    Layout,
}

impl ChartKind {
    /// Element kinds that receive the shared thumbnail defaults.
    pub const ELEMENTS: [Self; 14] = [
        Self::Curve,
        Self::Scatter,
        Self::Bars,
        Self::Area,
        Self::Image,
        Self::Contours,
        Self::HexTiles,
        Self::QuadMesh,
        Self::Text,
        Self::Tiles,
        Self::Overlay,
        Self::HLine,
        Self::VLine,
        Self::Arrow,
    ];

    pub const ALL: [Self; 15] = [
        Self::Curve,
        Self::Scatter,
        Self::Bars,
        Self::Area,
        Self::Image,
        Self::Contours,
        Self::HexTiles,
        Self::QuadMesh,
        Self::Text,
        Self::Tiles,
        Self::Overlay,
        Self::HLine,
        Self::VLine,
        Self::Arrow,
        Self::Layout,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Curve => "Curve",
            Self::Scatter => "Scatter",
            Self::Bars => "Bars",
            Self::Area => "Area",
            Self::Image => "Image",
            Self::Contours => "Contours",
            Self::HexTiles => "HexTiles",
            Self::QuadMesh => "QuadMesh",
            Self::Text => "Text",
            Self::Tiles => "Tiles",
            Self::Overlay => "Overlay",
            Self::HLine => "HLine",
            Self::VLine => "VLine",
            Self::Arrow => "Arrow",
            Self::Layout => "Layout",
        }
    }

    /// Composite kinds hold other plots instead of literal data.
    #[must_use]
    pub const fn is_composite(self) -> bool {
        matches!(self, Self::Overlay | Self::Layout)
    }

    /// Whether `data` has a shape this kind knows how to draw.
    #[must_use]
    pub fn accepts(self, data: &PlotData) -> bool {
        match (self, data) {
            (Self::Curve | Self::Scatter | Self::Bars, PlotData::Values(_)) => true,
            (Self::Area, PlotData::Values(_) | PlotData::Area { .. }) => true,
            (Self::Image | Self::QuadMesh, PlotData::Grid { .. }) => true,
            (Self::Contours | Self::HexTiles, PlotData::Samples { .. }) => true,
            (Self::Text, PlotData::Annotation { .. }) => true,
            (Self::HLine | Self::VLine, PlotData::Reference(_)) => true,
            (Self::Arrow, PlotData::Arrow { .. }) => true,
            (Self::Tiles, PlotData::Tiles { .. }) => true,
            (Self::Overlay | Self::Layout, PlotData::Composite(_)) => true,
            _ => false,
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChartKind {
    type Err = SheetError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(input))
            .ok_or_else(|| SheetError::InvalidData(format!("unknown chart kind `{input}`")))
    }
}
