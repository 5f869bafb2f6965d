use std::fmt;

use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Value of a kind-specific style attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Bool(bool),
    Number(OrderedFloat<f64>),
    Text(String),
}

impl StyleValue {
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(value.into_inner()),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Number(value) => write!(f, "{}", value.into_inner()),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<bool> for StyleValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        Self::Number(OrderedFloat(value))
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Named visual attributes of a plot.
///
/// Every attribute is optional: `None` means "not specified here" and lets a
/// lower-priority record (usually the per-kind default) decide. Attributes
/// that only some chart kinds understand live in `extra`, keyed by name in
/// insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_xaxis: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_yaxis: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_grid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_toolbar: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_axes: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cmap: Option<String>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub extra: IndexMap<String, StyleValue>,
}

impl StyleOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Right-biased merge: every attribute set in `overrides` wins, the rest
    /// comes from `base`. Extras merge key by key.
    #[must_use]
    pub fn merge(base: &Self, overrides: &Self) -> Self {
        let mut extra = base.extra.clone();
        for (key, value) in &overrides.extra {
            extra.insert(key.clone(), value.clone());
        }

        Self {
            width: overrides.width.or(base.width),
            height: overrides.height.or(base.height),
            show_xaxis: overrides.show_xaxis.or(base.show_xaxis),
            show_yaxis: overrides.show_yaxis.or(base.show_yaxis),
            show_grid: overrides.show_grid.or(base.show_grid),
            show_toolbar: overrides.show_toolbar.or(base.show_toolbar),
            shared_axes: overrides.shared_axes.or(base.shared_axes),
            color: overrides.color.clone().or_else(|| base.color.clone()),
            cmap: overrides.cmap.clone().or_else(|| base.cmap.clone()),
            extra,
        }
    }

    #[must_use]
    pub fn merged_with(&self, overrides: &Self) -> Self {
        Self::merge(self, overrides)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Number of attributes that are set, extras included.
    #[must_use]
    pub fn len(&self) -> usize {
        [
            self.width.is_some(),
            self.height.is_some(),
            self.show_xaxis.is_some(),
            self.show_yaxis.is_some(),
            self.show_grid.is_some(),
            self.show_toolbar.is_some(),
            self.shared_axes.is_some(),
            self.color.is_some(),
            self.cmap.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
            + self.extra.len()
    }

    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    #[must_use]
    pub fn with_axes(mut self, show_xaxis: bool, show_yaxis: bool) -> Self {
        self.show_xaxis = Some(show_xaxis);
        self.show_yaxis = Some(show_yaxis);
        self
    }

    #[must_use]
    pub fn with_grid(mut self, show_grid: bool) -> Self {
        self.show_grid = Some(show_grid);
        self
    }

    #[must_use]
    pub fn with_toolbar(mut self, show_toolbar: bool) -> Self {
        self.show_toolbar = Some(show_toolbar);
        self
    }

    #[must_use]
    pub fn with_shared_axes(mut self, shared_axes: bool) -> Self {
        self.shared_axes = Some(shared_axes);
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_cmap(mut self, cmap: impl Into<String>) -> Self {
        self.cmap = Some(cmap.into());
        self
    }

    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn extra_f64(&self, key: &str) -> Option<f64> {
        self.extra.get(key).and_then(StyleValue::as_f64)
    }

    #[must_use]
    pub fn extra_str(&self, key: &str) -> Option<&str> {
        self.extra.get(key).and_then(StyleValue::as_str)
    }
}
