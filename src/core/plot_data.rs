use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Bounds, ChartKind, StyleOptions, finite_extent};
use crate::error::{SheetError, SheetResult};

/// Short literal series; cheat-sheet examples rarely exceed four samples.
pub type Series = SmallVec<[f64; 4]>;

/// Where an arrow points relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrowDirection {
    Up,
    Down,
    Left,
    Right,
}

impl ArrowDirection {
    /// Parses the single-character markers `^`, `v`, `<` and `>`.
    pub fn from_marker(marker: &str) -> SheetResult<Self> {
        match marker {
            "^" => Ok(Self::Up),
            "v" => Ok(Self::Down),
            "<" => Ok(Self::Left),
            ">" => Ok(Self::Right),
            other => Err(SheetError::InvalidData(format!(
                "arrow direction must be one of ^ v < >, got `{other}`"
            ))),
        }
    }
}

/// One child of a composite plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotSpec {
    pub kind: ChartKind,
    pub data: PlotData,
    #[serde(default)]
    pub overrides: StyleOptions,
}

impl PlotSpec {
    #[must_use]
    pub fn new(kind: ChartKind, data: PlotData) -> Self {
        Self {
            kind,
            data,
            overrides: StyleOptions::default(),
        }
    }

    #[must_use]
    pub fn with_overrides(mut self, overrides: StyleOptions) -> Self {
        self.overrides = overrides;
        self
    }
}

/// Literal example data backing one thumbnail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", content = "data", rename_all = "snake_case")]
pub enum PlotData {
    /// `y` samples with implicit `x = index`.
    Values(Series),
    /// Band between `upper` and `lower` (or the zero baseline).
    Area {
        xs: Series,
        upper: Series,
        lower: Option<Series>,
    },
    /// Regular grid of `zs[row][col]` values over `xs`/`ys` coordinates.
    Grid {
        xs: Series,
        ys: Series,
        zs: Vec<Series>,
    },
    /// Scattered `(x, y)` samples with associated values.
    Samples {
        xs: Series,
        ys: Series,
        zs: Vec<Series>,
    },
    Annotation { x: f64, y: f64, text: String },
    /// Position of a horizontal or vertical reference line.
    Reference(f64),
    Arrow {
        x: f64,
        y: f64,
        text: String,
        direction: ArrowDirection,
    },
    Tiles { provider: String },
    Composite(Vec<PlotSpec>),
}

impl PlotData {
    #[must_use]
    pub fn values(values: &[f64]) -> Self {
        Self::Values(Series::from_slice(values))
    }

    #[must_use]
    pub fn area(xs: &[f64], upper: &[f64], lower: Option<&[f64]>) -> Self {
        Self::Area {
            xs: Series::from_slice(xs),
            upper: Series::from_slice(upper),
            lower: lower.map(Series::from_slice),
        }
    }

    #[must_use]
    pub fn grid(xs: &[f64], ys: &[f64], zs: &[&[f64]]) -> Self {
        Self::Grid {
            xs: Series::from_slice(xs),
            ys: Series::from_slice(ys),
            zs: zs.iter().map(|row| Series::from_slice(row)).collect(),
        }
    }

    #[must_use]
    pub fn samples(xs: &[f64], ys: &[f64], zs: &[&[f64]]) -> Self {
        Self::Samples {
            xs: Series::from_slice(xs),
            ys: Series::from_slice(ys),
            zs: zs.iter().map(|row| Series::from_slice(row)).collect(),
        }
    }

    #[must_use]
    pub fn annotation(x: f64, y: f64, text: impl Into<String>) -> Self {
        Self::Annotation {
            x,
            y,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn arrow(x: f64, y: f64, text: impl Into<String>, direction: ArrowDirection) -> Self {
        Self::Arrow {
            x,
            y,
            text: text.into(),
            direction,
        }
    }

    #[must_use]
    pub fn tiles(provider: impl Into<String>) -> Self {
        Self::Tiles {
            provider: provider.into(),
        }
    }

    /// Data-space extent used to fit the thumbnail scales.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        match self {
            Self::Values(values) => match finite_extent(values) {
                Some((min, max)) => {
                    let last = values.len().saturating_sub(1) as f64;
                    Bounds::new(0.0, last, min, max)
                }
                None => Bounds::unit(),
            },
            Self::Area { xs, upper, lower } => {
                let base = Bounds::from_points(xs, upper).unwrap_or_else(Bounds::unit);
                match lower {
                    Some(lower) => lower.iter().fold(base, |acc, y| acc.include_y(*y)),
                    None => base.include_y(0.0),
                }
            }
            Self::Grid { xs, ys, .. } | Self::Samples { xs, ys, .. } => {
                Bounds::from_points(xs, ys).unwrap_or_else(Bounds::unit)
            }
            Self::Annotation { x, y, .. } | Self::Arrow { x, y, .. } => {
                Bounds::unit().include_point(*x, *y)
            }
            Self::Reference(value) => Bounds::unit().include_point(*value, *value),
            Self::Tiles { .. } => Bounds::unit(),
            Self::Composite(children) => children
                .iter()
                .map(|child| child.data.bounds())
                .reduce(Bounds::union)
                .unwrap_or_else(Bounds::unit),
        }
    }

    /// Every `z` value in row-major order (grids and samples only).
    #[must_use]
    pub fn z_values(&self) -> Vec<f64> {
        match self {
            Self::Grid { zs, .. } | Self::Samples { zs, .. } => {
                zs.iter().flat_map(|row| row.iter().copied()).collect()
            }
            _ => Vec::new(),
        }
    }

    pub fn validate(&self) -> SheetResult<()> {
        match self {
            Self::Values(values) => {
                if values.is_empty() {
                    return Err(SheetError::InvalidData(
                        "value series must not be empty".to_owned(),
                    ));
                }
                ensure_finite(values, "value series")
            }
            Self::Area { xs, upper, lower } => {
                if xs.is_empty() || xs.len() != upper.len() {
                    return Err(SheetError::InvalidData(format!(
                        "area needs matching non-empty x/y columns, got {} and {}",
                        xs.len(),
                        upper.len()
                    )));
                }
                if let Some(lower) = lower {
                    if lower.len() != xs.len() {
                        return Err(SheetError::InvalidData(format!(
                            "area lower bound has {} samples, expected {}",
                            lower.len(),
                            xs.len()
                        )));
                    }
                    ensure_finite(lower, "area lower bound")?;
                }
                ensure_finite(xs, "area x column")?;
                ensure_finite(upper, "area y column")
            }
            Self::Grid { xs, ys, zs } | Self::Samples { xs, ys, zs } => {
                if xs.is_empty() || ys.is_empty() {
                    return Err(SheetError::InvalidData(
                        "gridded data needs non-empty x and y coordinates".to_owned(),
                    ));
                }
                if zs.is_empty() || zs.iter().any(|row| row.is_empty()) {
                    return Err(SheetError::InvalidData(
                        "gridded data needs non-empty value rows".to_owned(),
                    ));
                }
                ensure_finite(xs, "x coordinates")?;
                ensure_finite(ys, "y coordinates")?;
                zs.iter().try_for_each(|row| ensure_finite(row, "values"))
            }
            Self::Annotation { x, y, text } | Self::Arrow { x, y, text, .. } => {
                if text.is_empty() {
                    return Err(SheetError::InvalidData(
                        "annotation text must not be empty".to_owned(),
                    ));
                }
                ensure_finite(&[*x, *y], "annotation position")
            }
            Self::Reference(value) => ensure_finite(&[*value], "reference position"),
            Self::Tiles { provider } => {
                if provider.is_empty() {
                    return Err(SheetError::InvalidData(
                        "tile provider must not be empty".to_owned(),
                    ));
                }
                Ok(())
            }
            Self::Composite(children) => {
                if children.is_empty() {
                    return Err(SheetError::InvalidData(
                        "composite plot must have at least one child".to_owned(),
                    ));
                }
                for child in children {
                    if !child.kind.accepts(&child.data) {
                        return Err(SheetError::InvalidData(format!(
                            "{} cannot draw {} data",
                            child.kind,
                            child.data.shape_name()
                        )));
                    }
                    child.data.validate()?;
                }
                Ok(())
            }
        }
    }

    #[must_use]
    pub fn shape_name(&self) -> &'static str {
        match self {
            Self::Values(_) => "values",
            Self::Area { .. } => "area",
            Self::Grid { .. } => "grid",
            Self::Samples { .. } => "samples",
            Self::Annotation { .. } => "annotation",
            Self::Reference(_) => "reference",
            Self::Arrow { .. } => "arrow",
            Self::Tiles { .. } => "tiles",
            Self::Composite(_) => "composite",
        }
    }
}

fn ensure_finite(values: &[f64], what: &str) -> SheetResult<()> {
    if values.iter().all(|value| value.is_finite()) {
        Ok(())
    } else {
        Err(SheetError::InvalidData(format!("{what} must be finite")))
    }
}
