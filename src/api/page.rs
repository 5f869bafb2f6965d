use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{SheetError, SheetResult};
use crate::template::TemplateConfig;

use super::{ContainerNode, DisplayNode, PaneLayout, SizingMode, TreeBuilder};

/// Root of a finished dashboard: a row of columns plus template metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageLayout {
    root: ContainerNode,
    template: TemplateConfig,
}

impl PageLayout {
    /// Wraps `columns` into the root row.
    ///
    /// When the template names an expected column count, any other count is
    /// rejected; without one, only an empty page is rejected.
    pub fn assemble(columns: Vec<ContainerNode>, template: TemplateConfig) -> SheetResult<Self> {
        if let Some(expected) = template.expected_columns {
            if columns.len() != expected {
                warn!(
                    expected,
                    actual = columns.len(),
                    "page column count does not match template"
                );
                return Err(SheetError::ColumnCountMismatch {
                    expected,
                    actual: columns.len(),
                });
            }
        }

        let root = TreeBuilder::row()
            .with_layout(PaneLayout {
                sizing: SizingMode::StretchWidth,
                ..PaneLayout::default()
            })
            .children(columns)
            .build()?;
        debug!(
            title = template.title.as_str(),
            columns = root.len(),
            "assemble page"
        );
        Ok(Self { root, template })
    }

    #[must_use]
    pub fn root(&self) -> &ContainerNode {
        &self.root
    }

    #[must_use]
    pub fn template(&self) -> &TemplateConfig {
        &self.template
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.root.len()
    }

    /// Column containers in display order.
    pub fn columns(&self) -> impl Iterator<Item = &ContainerNode> {
        self.root
            .children()
            .iter()
            .filter_map(DisplayNode::as_container)
    }

    #[must_use]
    pub fn plot_count(&self) -> usize {
        self.root
            .children()
            .iter()
            .map(DisplayNode::plot_count)
            .sum()
    }

    pub fn to_json_pretty(&self) -> SheetResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SheetError::InvalidData(format!("failed to serialize page layout: {e}")))
    }
}
