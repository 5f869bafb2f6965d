//! Dashboard composition: display nodes, builders, chart rendering registry.

mod chart_registry;
mod composer;
mod node;
mod page;
mod painters;
mod tree_builder;

pub use chart_registry::{
    ChartRendererRegistry, FALLBACK_PLOT_SIZE_PX, PaintContext, PaintFn, PlotArea, PlotCanvas,
};
pub use composer::DashboardComposer;
pub use node::{
    Align, ContainerNode, DisplayNode, PaneLayout, PlotNode, Section, SizingMode, TextNode,
};
pub use page::PageLayout;
pub use painters::SERIES_CYCLE;
pub use tree_builder::TreeBuilder;
