use std::fmt::{self, Write as _};

use chrono::{DateTime, SecondsFormat, Utc};
use tracing::debug;

use crate::api::{Align, ContainerNode, DisplayNode, PageLayout, PaneLayout, PlotNode, SizingMode, TextNode};
use crate::core::Orientation;
use crate::error::SheetResult;
use crate::render::escape_markup;

/// Knobs for one HTML rendering pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Written as `<meta name="generated-at">` when present.
    pub generated_at: Option<DateTime<Utc>>,
}

impl HtmlOptions {
    #[must_use]
    pub fn generated_now() -> Self {
        Self {
            generated_at: Some(Utc::now()),
        }
    }
}

/// Renders the page into a standalone HTML5 document.
///
/// Text node content is authoring HTML and is emitted verbatim; captions,
/// the title and attribute values are escaped.
pub fn render_page_html(page: &PageLayout, options: &HtmlOptions) -> SheetResult<String> {
    let template = page.template();
    let accent = template.accent_color()?.to_hex();
    let theme = template.theme;
    let title = escape_markup(&template.title);

    let mut out = String::with_capacity(64 * 1024);
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    if let Some(generated_at) = options.generated_at {
        writeln!(
            out,
            "<meta name=\"generated-at\" content=\"{}\">",
            generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
        )?;
    }
    writeln!(out, "<title>{title}</title>")?;
    writeln!(
        out,
        "<style>\n:root {{ --accent: {accent}; --background: {}; --surface: {}; --foreground: {}; --code: {}; }}\n{}</style>",
        theme.background(),
        theme.surface(),
        theme.foreground(),
        theme.code_background(),
        BASE_CSS
    )?;
    out.push_str("</head>\n<body>\n<header class=\"sheet-header\">");
    if let Some(logo) = &template.logo {
        write!(
            out,
            "<img class=\"sheet-logo\" src=\"{}\" alt=\"logo\">",
            escape_markup(logo)
        )?;
    }
    writeln!(out, "<h1 class=\"sheet-title\">{title}</h1></header>")?;
    out.push_str("<main class=\"sheet-main\">\n");
    write_container(&mut out, page.root(), 0)?;
    out.push_str("</main>\n</body>\n</html>\n");

    debug!(bytes = out.len(), columns = page.column_count(), "render page html");
    Ok(out)
}

const BASE_CSS: &str = "\
* { box-sizing: border-box; }
body { margin: 0; background: var(--background); color: var(--foreground); font-family: -apple-system, 'Segoe UI', Roboto, Helvetica, Arial, sans-serif; font-size: 14px; }
.sheet-header { display: flex; align-items: center; gap: 16px; padding: 8px 16px; background: var(--accent); color: #ffffff; }
.sheet-logo { height: 40px; }
.sheet-title { margin: 0; font-size: 22px; font-weight: 400; }
.sheet-main { padding: 12px; }
.row { display: flex; flex-direction: row; gap: 8px; }
.column { display: flex; flex-direction: column; gap: 6px; }
.sheet-main > .row > .column { flex: 1 1 0; background: var(--surface); padding: 8px 12px; border-radius: 4px; }
.stretch { flex: 1 1 auto; }
.align-center { align-self: center; }
.align-end { align-self: flex-end; }
.static-text h2 { margin: 8px 0 4px; font-size: 18px; }
.static-text code { background: var(--code); padding: 1px 3px; border-radius: 2px; }
.static-text .caption { font-weight: 600; }
.plot-pane svg { display: block; }
";

fn pane_attrs(layout: PaneLayout, base_class: &str) -> String {
    let mut classes = vec![base_class];
    if layout.sizing == SizingMode::StretchWidth {
        classes.push("stretch");
    }
    match layout.align {
        Align::Start => {}
        Align::Center => classes.push("align-center"),
        Align::End => classes.push("align-end"),
    }

    let mut styles = Vec::new();
    if let Some(width) = layout.width {
        styles.push(format!("width: {width}px"));
    }
    if let Some(min_width) = layout.min_width {
        styles.push(format!("min-width: {min_width}px"));
    }

    if styles.is_empty() {
        format!("class=\"{}\"", classes.join(" "))
    } else {
        format!(
            "class=\"{}\" style=\"{}\"",
            classes.join(" "),
            styles.join("; ")
        )
    }
}

fn write_node(out: &mut String, node: &DisplayNode, depth: usize) -> fmt::Result {
    match node {
        DisplayNode::Text(text) => write_text(out, text, depth),
        DisplayNode::Plot(plot) => write_plot(out, plot, depth),
        DisplayNode::Container(container) => write_container(out, container, depth),
    }
}

fn write_container(out: &mut String, container: &ContainerNode, depth: usize) -> fmt::Result {
    let class = match container.orientation() {
        Orientation::Horizontal => "row",
        Orientation::Vertical => "column",
    };
    writeln!(
        out,
        "{}<div {}>",
        indent(depth),
        pane_attrs(container.layout(), class)
    )?;
    for child in container.children() {
        write_node(out, child, depth + 1)?;
    }
    writeln!(out, "{}</div>", indent(depth))
}

fn write_text(out: &mut String, text: &TextNode, depth: usize) -> fmt::Result {
    write!(
        out,
        "{}<div {}>",
        indent(depth),
        pane_attrs(text.layout(), "static-text")
    )?;
    if let Some(caption) = text.caption().filter(|caption| !caption.is_empty()) {
        write!(
            out,
            "<span class=\"caption\">{}:</span> ",
            escape_markup(caption)
        )?;
    }
    out.push_str(text.content().trim());
    out.push_str("</div>\n");
    Ok(())
}

fn write_plot(out: &mut String, plot: &PlotNode, depth: usize) -> fmt::Result {
    writeln!(
        out,
        "{}<div {} data-kind=\"{}\">{}</div>",
        indent(depth),
        pane_attrs(plot.layout(), "plot-pane"),
        plot.kind(),
        plot.artifact().markup
    )
}

fn indent(depth: usize) -> String {
    "  ".repeat(depth)
}
