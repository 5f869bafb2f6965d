use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Direction in which a container lays out its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Children side by side (a row).
    Horizontal,
    /// Children stacked top to bottom (a column).
    Vertical,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => f.write_str("row"),
            Self::Vertical => f.write_str("column"),
        }
    }
}

/// Axis-aligned data-space extent of a plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    #[must_use]
    pub const fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Unit square used by plots whose data carries no extent of its own.
    #[must_use]
    pub const fn unit() -> Self {
        Self::new(0.0, 1.0, 0.0, 1.0)
    }

    /// Smallest bounds containing every finite `(x, y)` pair.
    #[must_use]
    pub fn from_points(xs: &[f64], ys: &[f64]) -> Option<Self> {
        let x = finite_extent(xs)?;
        let y = finite_extent(ys)?;
        Some(Self::new(x.0, x.1, y.0, y.1))
    }

    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self::new(
            self.x_min.min(other.x_min),
            self.x_max.max(other.x_max),
            self.y_min.min(other.y_min),
            self.y_max.max(other.y_max),
        )
    }

    #[must_use]
    pub fn include_y(mut self, y: f64) -> Self {
        if y.is_finite() {
            self.y_min = self.y_min.min(y);
            self.y_max = self.y_max.max(y);
        }
        self
    }

    #[must_use]
    pub fn include_point(mut self, x: f64, y: f64) -> Self {
        if x.is_finite() {
            self.x_min = self.x_min.min(x);
            self.x_max = self.x_max.max(x);
        }
        self.include_y(y)
    }
}

/// Returns `(min, max)` over the finite values, or `None` when there are none.
#[must_use]
pub fn finite_extent(values: &[f64]) -> Option<(f64, f64)> {
    values
        .iter()
        .copied()
        .filter(|value| value.is_finite())
        .fold(None, |acc, value| match acc {
            None => Some((value, value)),
            Some((min, max)) => Some((min.min(value), max.max(value))),
        })
}
