use crate::error::{SheetError, SheetResult};

/// Linear mapping from a data domain onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(
        domain_start: f64,
        domain_end: f64,
        range_start: f64,
        range_end: f64,
    ) -> SheetResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(SheetError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(SheetError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    /// Builds a scale over `[min, max]`, widening a degenerate domain by half a
    /// unit on each side so single-valued data still lands mid-range.
    pub fn fit(min: f64, max: f64, range_start: f64, range_end: f64) -> SheetResult<Self> {
        if min == max {
            return Self::new(min - 0.5, max + 0.5, range_start, range_end);
        }
        Self::new(min, max, range_start, range_end)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    pub fn project(self, value: f64) -> SheetResult<f64> {
        if !value.is_finite() {
            return Err(SheetError::InvalidData("value must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        Ok(self.range_start + normalized * (self.range_end - self.range_start))
    }

    pub fn invert(self, pixel: f64) -> SheetResult<f64> {
        if !pixel.is_finite() {
            return Err(SheetError::InvalidData("pixel must be finite".to_owned()));
        }
        let range_span = self.range_end - self.range_start;
        if range_span == 0.0 {
            return Err(SheetError::InvalidData(
                "cannot invert a zero-width range".to_owned(),
            ));
        }

        let normalized = (pixel - self.range_start) / range_span;
        Ok(self.domain_start + normalized * (self.domain_end - self.domain_start))
    }
}
