use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{ChartKind, StyleOptions};

/// Write-once table of default styles keyed by chart kind.
///
/// Built through [`StyleDefaultsBuilder`] before any plot is constructed and
/// read by reference afterwards; there is no way to mutate a built table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleDefaults {
    by_kind: IndexMap<ChartKind, StyleOptions>,
}

impl StyleDefaults {
    #[must_use]
    pub fn builder() -> StyleDefaultsBuilder {
        StyleDefaultsBuilder::default()
    }

    /// Default options recorded for `kind`, if any.
    #[must_use]
    pub fn get(&self, kind: ChartKind) -> Option<&StyleOptions> {
        self.by_kind.get(&kind)
    }

    /// Effective style for a plot of `kind`: its default merged with
    /// `overrides`. Kinds without a default start from an empty record.
    #[must_use]
    pub fn resolve(&self, kind: ChartKind, overrides: &StyleOptions) -> StyleOptions {
        match self.by_kind.get(&kind) {
            Some(base) => base.merged_with(overrides),
            None => overrides.clone(),
        }
    }

    #[must_use]
    pub fn kinds(&self) -> Vec<ChartKind> {
        self.by_kind.keys().copied().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_kind.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_kind.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct StyleDefaultsBuilder {
    by_kind: IndexMap<ChartKind, StyleOptions>,
}

impl StyleDefaultsBuilder {
    /// Records `options` as the default for every kind in `kinds`.
    ///
    /// A kind that already has defaults keeps them, with `options` merged on
    /// top.
    pub fn set_global_defaults(&mut self, kinds: &[ChartKind], options: &StyleOptions) -> &mut Self {
        for kind in kinds {
            let merged = match self.by_kind.get(kind) {
                Some(existing) => existing.merged_with(options),
                None => options.clone(),
            };
            debug!(kind = %kind, attributes = merged.len(), "set global style defaults");
            self.by_kind.insert(*kind, merged);
        }
        self
    }

    #[must_use]
    pub fn build(self) -> StyleDefaults {
        StyleDefaults {
            by_kind: self.by_kind,
        }
    }
}
