use tracing::trace;

use crate::core::Orientation;
use crate::error::{SheetError, SheetResult};

use super::{ContainerNode, DisplayNode, PaneLayout};

/// Accumulates children for one container and freezes them on `build`.
#[derive(Debug, Clone)]
pub struct TreeBuilder {
    orientation: Orientation,
    children: Vec<DisplayNode>,
    layout: PaneLayout,
}

impl TreeBuilder {
    #[must_use]
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            children: Vec::new(),
            layout: PaneLayout::default(),
        }
    }

    #[must_use]
    pub fn row() -> Self {
        Self::new(Orientation::Horizontal)
    }

    #[must_use]
    pub fn column() -> Self {
        Self::new(Orientation::Vertical)
    }

    pub fn add_child(&mut self, child: impl Into<DisplayNode>) -> &mut Self {
        self.children.push(child.into());
        self
    }

    #[must_use]
    pub fn child(mut self, child: impl Into<DisplayNode>) -> Self {
        self.children.push(child.into());
        self
    }

    #[must_use]
    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<DisplayNode>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_layout(mut self, layout: PaneLayout) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Freezes the container. An empty container is an authoring mistake.
    pub fn build(self) -> SheetResult<ContainerNode> {
        if self.children.is_empty() {
            return Err(SheetError::EmptyContainer {
                orientation: self.orientation,
            });
        }
        trace!(
            orientation = %self.orientation,
            children = self.children.len(),
            "build container"
        );
        Ok(ContainerNode::new(
            self.orientation,
            self.children,
            self.layout,
        ))
    }
}
