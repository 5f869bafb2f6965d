//! The HoloViews cheat sheet: thumbnail defaults and the three-column page.

mod content;

use tracing::info;

use crate::api::{DashboardComposer, PageLayout};
use crate::core::{ChartKind, StyleDefaults, StyleOptions};
use crate::error::SheetResult;
use crate::render::Renderer;
use crate::template::TemplateConfig;

pub const THUMBNAIL_SIZE_PX: u32 = 50;
/// Width of the pane that holds an example thumbnail beside its snippet.
pub const EXAMPLE_PANE_WIDTH_PX: u32 = 75;
/// Minimum width of a snippet or option pane.
pub const TEXT_MIN_WIDTH_PX: u32 = 550;

pub struct CheatSheet;

impl CheatSheet {
    /// Small, chrome-free thumbnail style shared by every element kind.
    #[must_use]
    pub fn default_thumbnail() -> StyleOptions {
        StyleOptions::new()
            .with_size(THUMBNAIL_SIZE_PX, THUMBNAIL_SIZE_PX)
            .with_axes(false, false)
            .with_shared_axes(false)
            .with_toolbar(false)
            .with_grid(true)
    }

    /// Installs `thumbnail` for the fourteen element kinds and turns off
    /// shared axes and the toolbar for layouts.
    #[must_use]
    pub fn default_style_defaults(thumbnail: &StyleOptions) -> StyleDefaults {
        let mut builder = StyleDefaults::builder();
        builder
            .set_global_defaults(&ChartKind::ELEMENTS, thumbnail)
            .set_global_defaults(
                &[ChartKind::Layout],
                &StyleOptions::new()
                    .with_shared_axes(false)
                    .with_toolbar(false),
            );
        builder.build()
    }

    /// Builds every section and assembles the page.
    pub fn compose<R: Renderer>(
        composer: &mut DashboardComposer<'_, R>,
        template: TemplateConfig,
    ) -> SheetResult<PageLayout> {
        let columns = vec![
            content::getting_started_column(composer)?,
            content::element_column(composer)?,
            content::options_column(composer)?,
        ];
        let page = composer.assemble_page(columns, template)?;
        info!(
            columns = page.column_count(),
            plots = page.plot_count(),
            "cheat sheet composed"
        );
        Ok(page)
    }
}
