use tracing::{debug, trace};

use crate::core::{ChartKind, PlotData, StyleDefaults, StyleOptions};
use crate::error::{SheetError, SheetResult};
use crate::render::Renderer;

use super::{
    ChartRendererRegistry, ContainerNode, DisplayNode, PageLayout, PlotNode, Section, TextNode,
    TreeBuilder,
};
use crate::template::TemplateConfig;

/// Builds display-node trees against a fixed default-style table.
///
/// The defaults are borrowed, so they must be fully built before the first
/// plot is constructed and cannot change while the composer is alive.
pub struct DashboardComposer<'a, R: Renderer> {
    defaults: &'a StyleDefaults,
    registry: ChartRendererRegistry,
    renderer: R,
    plots_built: usize,
}

impl<'a, R: Renderer> DashboardComposer<'a, R> {
    /// Composer with the built-in chart registry.
    #[must_use]
    pub fn new(defaults: &'a StyleDefaults, renderer: R) -> Self {
        Self::with_registry(defaults, ChartRendererRegistry::builtin(), renderer)
    }

    #[must_use]
    pub fn with_registry(
        defaults: &'a StyleDefaults,
        registry: ChartRendererRegistry,
        renderer: R,
    ) -> Self {
        Self {
            defaults,
            registry,
            renderer,
            plots_built: 0,
        }
    }

    #[must_use]
    pub fn defaults(&self) -> &'a StyleDefaults {
        self.defaults
    }

    #[must_use]
    pub fn registry(&self) -> &ChartRendererRegistry {
        &self.registry
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn plots_built(&self) -> usize {
        self.plots_built
    }

    /// Wraps literal text or trusted HTML, optionally with a caption.
    ///
    /// Any content is accepted, including empty or whitespace-only text.
    #[must_use]
    pub fn build_text(&self, content: impl Into<String>, caption: Option<&str>) -> TextNode {
        let content = content.into();
        trace!(
            caption = caption.unwrap_or(""),
            bytes = content.len(),
            "build text node"
        );
        TextNode::new(content, caption.map(str::to_owned))
    }

    /// Builds and eagerly renders one thumbnail.
    ///
    /// The effective style is the default for `kind` with `overrides` merged
    /// on top.
    pub fn build_plot(
        &mut self,
        kind: ChartKind,
        data: PlotData,
        overrides: Option<&StyleOptions>,
    ) -> SheetResult<PlotNode> {
        if !self.registry.supports(kind) {
            return Err(SheetError::UnsupportedKind { kind });
        }

        let style = match overrides {
            Some(overrides) => self.defaults.resolve(kind, overrides),
            None => self.defaults.resolve(kind, &StyleOptions::default()),
        };
        let frame = self.registry.render(kind, &data, &style, self.defaults)?;
        let artifact = self.renderer.render(&frame)?;
        self.plots_built += 1;

        debug!(
            kind = %kind,
            width = artifact.viewport.width,
            height = artifact.viewport.height,
            primitives = frame.primitive_count(),
            "build plot node"
        );
        Ok(PlotNode::new(kind, data, style, artifact))
    }

    pub fn build_row(&self, children: Vec<DisplayNode>) -> SheetResult<ContainerNode> {
        TreeBuilder::row().children(children).build()
    }

    pub fn build_column(&self, children: Vec<DisplayNode>) -> SheetResult<ContainerNode> {
        TreeBuilder::column().children(children).build()
    }

    pub fn build_section(&self, heading: TextNode, rows: Vec<ContainerNode>) -> Section {
        trace!(heading = heading.content(), rows = rows.len(), "build section");
        Section::new(heading, None, rows)
    }

    /// Section whose heading is shown beside a thumbnail badge.
    pub fn build_badged_section(
        &self,
        heading: TextNode,
        badge: PlotNode,
        rows: Vec<ContainerNode>,
    ) -> Section {
        trace!(
            heading = heading.content(),
            badge = %badge.kind(),
            rows = rows.len(),
            "build badged section"
        );
        Section::new(heading, Some(badge), rows)
    }

    pub fn assemble_page(
        &self,
        columns: Vec<ContainerNode>,
        template: TemplateConfig,
    ) -> SheetResult<PageLayout> {
        PageLayout::assemble(columns, template)
    }
}
