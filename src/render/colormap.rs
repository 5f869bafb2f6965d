use crate::error::{SheetError, SheetResult};
use crate::render::Color;

const VIRIDIS: &[(u8, u8, u8)] = &[
    (68, 1, 84),
    (59, 82, 139),
    (33, 145, 140),
    (94, 201, 98),
    (253, 231, 37),
];
const FIRE: &[(u8, u8, u8)] = &[
    (0, 0, 0),
    (134, 0, 0),
    (230, 64, 0),
    (255, 170, 40),
    (255, 255, 255),
];
const BLUES: &[(u8, u8, u8)] = &[(247, 251, 255), (158, 202, 225), (33, 113, 181), (8, 48, 107)];
const GREYS: &[(u8, u8, u8)] = &[(255, 255, 255), (150, 150, 150), (0, 0, 0)];

/// Piecewise-linear color ramp sampled over `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Colormap {
    name: &'static str,
    stops: Vec<Color>,
}

impl Colormap {
    pub const DEFAULT_NAME: &'static str = "viridis";

    /// Looks up a built-in ramp by name; a `_r` suffix reverses it.
    pub fn named(name: &str) -> SheetResult<Self> {
        let (base, reversed) = match name.strip_suffix("_r") {
            Some(base) => (base, true),
            None => (name, false),
        };
        let (canonical, table) = match base.to_ascii_lowercase().as_str() {
            "viridis" => ("viridis", VIRIDIS),
            "fire" => ("fire", FIRE),
            "blues" => ("blues", BLUES),
            "greys" | "grays" => ("greys", GREYS),
            _ => {
                return Err(SheetError::InvalidData(format!(
                    "unknown colormap `{name}`"
                )));
            }
        };

        let mut stops: Vec<Color> = table
            .iter()
            .map(|(r, g, b)| Color::from_rgb8(*r, *g, *b))
            .collect();
        if reversed {
            stops.reverse();
        }
        Ok(Self {
            name: canonical,
            stops,
        })
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Color at normalized position `t`; out-of-range input is clamped.
    #[must_use]
    pub fn sample(&self, t: f64) -> Color {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        let segments = self.stops.len() - 1;
        let scaled = t * segments as f64;
        let index = (scaled.floor() as usize).min(segments - 1);
        self.stops[index].lerp(self.stops[index + 1], scaled - index as f64)
    }

    /// Color for `value` normalized against `[min, max]`.
    #[must_use]
    pub fn sample_range(&self, value: f64, min: f64, max: f64) -> Color {
        if max <= min {
            return self.sample(0.5);
        }
        self.sample((value - min) / (max - min))
    }
}

impl Default for Colormap {
    fn default() -> Self {
        Self {
            name: Self::DEFAULT_NAME,
            stops: VIRIDIS
                .iter()
                .map(|(r, g, b)| Color::from_rgb8(*r, *g, *b))
                .collect(),
        }
    }
}
