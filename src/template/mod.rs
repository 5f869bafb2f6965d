//! Page chrome: the template metadata wrapped around a `PageLayout` and the
//! HTML document renderer.

mod html;

pub use html::{HtmlOptions, render_page_html};

use serde::{Deserialize, Serialize};

use crate::error::{SheetError, SheetResult};
use crate::render::Color;

pub const DEFAULT_TITLE: &str = "Cheat Sheet (Bokeh Backend)";
pub const DEFAULT_LOGO: &str = "https://holoviews.org/_static/logo_horizontal_theme.png";
pub const DEFAULT_ACCENT: &str = "#2b3e50";
pub const DEFAULT_COLUMN_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    #[must_use]
    pub fn background(self) -> &'static str {
        match self {
            Self::Dark => "#181818",
            Self::Light => "#ffffff",
        }
    }

    #[must_use]
    pub fn surface(self) -> &'static str {
        match self {
            Self::Dark => "#232323",
            Self::Light => "#f4f4f4",
        }
    }

    #[must_use]
    pub fn foreground(self) -> &'static str {
        match self {
            Self::Dark => "#e0e0e0",
            Self::Light => "#212121",
        }
    }

    #[must_use]
    pub fn code_background(self) -> &'static str {
        match self {
            Self::Dark => "#2e2e2e",
            Self::Light => "#e8e8e8",
        }
    }
}

/// Presentation metadata applied once around the finished page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    pub title: String,
    pub logo: Option<String>,
    /// Header color as `#rrggbb` (or any color `Color::parse_css` accepts).
    pub accent: String,
    pub theme: Theme,
    /// Column count the author expects; `None` disables the check.
    pub expected_columns: Option<usize>,
}

impl TemplateConfig {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_logo(mut self, logo: impl Into<String>) -> Self {
        self.logo = Some(logo.into());
        self
    }

    #[must_use]
    pub fn with_accent(mut self, accent: impl Into<String>) -> Self {
        self.accent = accent.into();
        self
    }

    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub fn with_expected_columns(mut self, expected_columns: Option<usize>) -> Self {
        self.expected_columns = expected_columns;
        self
    }

    /// Accent normalized to `#rrggbb`.
    pub fn accent_color(&self) -> SheetResult<Color> {
        Color::parse_css(&self.accent)
    }

    pub fn validate(&self) -> SheetResult<()> {
        if self.title.trim().is_empty() {
            return Err(SheetError::InvalidData(
                "template title must not be empty".to_owned(),
            ));
        }
        self.accent_color().map(|_| ())
    }
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_owned(),
            logo: Some(DEFAULT_LOGO.to_owned()),
            accent: DEFAULT_ACCENT.to_owned(),
            theme: Theme::Dark,
            expected_columns: Some(DEFAULT_COLUMN_COUNT),
        }
    }
}
