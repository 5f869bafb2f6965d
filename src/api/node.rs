use serde::{Deserialize, Serialize};

use crate::core::{ChartKind, Orientation, PlotData, StyleOptions};
use crate::render::PlotArtifact;

/// How a pane claims horizontal space inside its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizingMode {
    #[default]
    Fixed,
    StretchWidth,
}

/// Cross-axis alignment of a pane inside its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    #[default]
    Start,
    Center,
    End,
}

/// Display hints attached to any node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PaneLayout {
    pub width: Option<u32>,
    pub min_width: Option<u32>,
    pub sizing: SizingMode,
    pub align: Align,
}

impl PaneLayout {
    /// Fixed-width pane centred on the cross axis.
    #[must_use]
    pub fn centered(width: u32) -> Self {
        Self {
            width: Some(width),
            min_width: None,
            sizing: SizingMode::Fixed,
            align: Align::Center,
        }
    }

    /// Pane that fills the available width but never shrinks below `min_width`.
    #[must_use]
    pub fn stretch(min_width: u32) -> Self {
        Self {
            width: None,
            min_width: Some(min_width),
            sizing: SizingMode::StretchWidth,
            align: Align::Start,
        }
    }
}

/// Static label or trusted HTML fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextNode {
    content: String,
    caption: Option<String>,
    layout: PaneLayout,
}

impl TextNode {
    pub(crate) fn new(content: String, caption: Option<String>) -> Self {
        Self {
            content,
            caption,
            layout: PaneLayout::default(),
        }
    }

    #[must_use]
    pub fn with_layout(mut self, layout: PaneLayout) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    #[must_use]
    pub fn layout(&self) -> PaneLayout {
        self.layout
    }
}

/// Pre-rendered chart thumbnail.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotNode {
    kind: ChartKind,
    data: PlotData,
    style: StyleOptions,
    artifact: PlotArtifact,
    layout: PaneLayout,
}

impl PlotNode {
    pub(crate) fn new(
        kind: ChartKind,
        data: PlotData,
        style: StyleOptions,
        artifact: PlotArtifact,
    ) -> Self {
        Self {
            kind,
            data,
            style,
            artifact,
            layout: PaneLayout::default(),
        }
    }

    #[must_use]
    pub fn with_layout(mut self, layout: PaneLayout) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    #[must_use]
    pub fn data(&self) -> &PlotData {
        &self.data
    }

    /// Default style for the kind merged with the construction overrides.
    #[must_use]
    pub fn style(&self) -> &StyleOptions {
        &self.style
    }

    #[must_use]
    pub fn artifact(&self) -> &PlotArtifact {
        &self.artifact
    }

    #[must_use]
    pub fn layout(&self) -> PaneLayout {
        self.layout
    }
}

/// Ordered group of nodes laid out along one axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContainerNode {
    orientation: Orientation,
    children: Vec<DisplayNode>,
    layout: PaneLayout,
}

impl ContainerNode {
    pub(crate) fn new(
        orientation: Orientation,
        children: Vec<DisplayNode>,
        layout: PaneLayout,
    ) -> Self {
        Self {
            orientation,
            children,
            layout,
        }
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[must_use]
    pub fn children(&self) -> &[DisplayNode] {
        &self.children
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Always `false` for containers produced by the builders.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    #[must_use]
    pub fn layout(&self) -> PaneLayout {
        self.layout
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum DisplayNode {
    Text(TextNode),
    Plot(PlotNode),
    Container(ContainerNode),
}

impl DisplayNode {
    #[must_use]
    pub fn as_text(&self) -> Option<&TextNode> {
        match self {
            Self::Text(node) => Some(node),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_plot(&self) -> Option<&PlotNode> {
        match self {
            Self::Plot(node) => Some(node),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_container(&self) -> Option<&ContainerNode> {
        match self {
            Self::Container(node) => Some(node),
            _ => None,
        }
    }

    /// Depth-first visit of this node and all descendants.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a DisplayNode)) {
        visit(self);
        if let Self::Container(container) = self {
            for child in &container.children {
                child.walk(visit);
            }
        }
    }

    #[must_use]
    pub fn plot_count(&self) -> usize {
        let mut count = 0;
        self.walk(&mut |node| {
            if matches!(node, DisplayNode::Plot(_)) {
                count += 1;
            }
        });
        count
    }
}

impl From<TextNode> for DisplayNode {
    fn from(node: TextNode) -> Self {
        Self::Text(node)
    }
}

impl From<PlotNode> for DisplayNode {
    fn from(node: PlotNode) -> Self {
        Self::Plot(node)
    }
}

impl From<ContainerNode> for DisplayNode {
    fn from(node: ContainerNode) -> Self {
        Self::Container(node)
    }
}

/// Heading, optional thumbnail badge beside it, and example rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    heading: TextNode,
    badge: Option<PlotNode>,
    rows: Vec<ContainerNode>,
}

impl Section {
    pub(crate) fn new(heading: TextNode, badge: Option<PlotNode>, rows: Vec<ContainerNode>) -> Self {
        Self {
            heading,
            badge,
            rows,
        }
    }

    #[must_use]
    pub fn heading(&self) -> &TextNode {
        &self.heading
    }

    #[must_use]
    pub fn badge(&self) -> Option<&PlotNode> {
        self.badge.as_ref()
    }

    #[must_use]
    pub fn rows(&self) -> &[ContainerNode] {
        &self.rows
    }

    /// Lays the section out as a column: heading row first, then each row.
    #[must_use]
    pub fn into_container(self) -> ContainerNode {
        let heading_row = match self.badge {
            Some(badge) => ContainerNode::new(
                Orientation::Horizontal,
                vec![self.heading.into(), badge.into()],
                PaneLayout::default(),
            )
            .into(),
            None => DisplayNode::from(self.heading),
        };

        let mut children = Vec::with_capacity(self.rows.len() + 1);
        children.push(heading_row);
        children.extend(self.rows.into_iter().map(DisplayNode::from));
        ContainerNode::new(Orientation::Vertical, children, PaneLayout::default())
    }
}

impl From<Section> for DisplayNode {
    fn from(section: Section) -> Self {
        Self::Container(section.into_container())
    }
}
