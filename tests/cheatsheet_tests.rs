use cheatsheet_rs::api::{DashboardComposer, DisplayNode, PaneLayout, PlotNode, SizingMode};
use cheatsheet_rs::cheatsheet::CheatSheet;
use cheatsheet_rs::core::ChartKind;
use cheatsheet_rs::render::{NullRenderer, SvgRenderer};
use cheatsheet_rs::template::{HtmlOptions, TemplateConfig, render_page_html};

fn collect_plots(page: &cheatsheet_rs::PageLayout) -> Vec<PlotNode> {
    let mut plots = Vec::new();
    for column in page.columns() {
        DisplayNode::from(column.clone()).walk(&mut |node| {
            if let Some(plot) = node.as_plot() {
                plots.push(plot.clone());
            }
        });
    }
    plots
}

#[test]
fn thumbnail_defaults_cover_elements_and_layout() {
    let thumbnail = CheatSheet::default_thumbnail();
    let defaults = CheatSheet::default_style_defaults(&thumbnail);

    assert_eq!(defaults.len(), 15);
    for kind in ChartKind::ELEMENTS {
        assert_eq!(defaults.get(kind), Some(&thumbnail), "default for {kind}");
    }
    assert_eq!(thumbnail.width, Some(50));
    assert_eq!(thumbnail.show_xaxis, Some(false));
    assert_eq!(thumbnail.show_grid, Some(true));

    let layout = defaults.get(ChartKind::Layout).expect("layout default");
    assert_eq!(layout.shared_axes, Some(false));
    assert_eq!(layout.show_toolbar, Some(false));
    assert_eq!(layout.width, None);
}

#[test]
fn full_sheet_composes_three_columns_of_sections() {
    let defaults = CheatSheet::default_style_defaults(&CheatSheet::default_thumbnail());
    let mut composer = DashboardComposer::new(&defaults, NullRenderer::default());

    let page = CheatSheet::compose(&mut composer, TemplateConfig::default()).expect("cheat sheet");

    assert_eq!(page.column_count(), 3);
    assert_eq!(page.template().title, "Cheat Sheet (Bokeh Backend)");
    let sections: Vec<usize> = page.columns().map(|column| column.len()).collect();
    assert_eq!(sections, vec![5, 3, 2]);

    assert_eq!(page.plot_count(), 18);
    assert_eq!(composer.plots_built(), 18);
    assert_eq!(composer.renderer().frames_rendered, 18);
}

#[test]
fn options_section_lists_usage_and_fourteen_entries() {
    let defaults = CheatSheet::default_style_defaults(&CheatSheet::default_thumbnail());
    let mut composer = DashboardComposer::new(&defaults, NullRenderer::default());
    let page = CheatSheet::compose(&mut composer, TemplateConfig::default()).expect("cheat sheet");

    let options_column = page.columns().nth(2).expect("third column");
    let options = options_column.children()[0]
        .as_container()
        .expect("options section");
    // Heading, usage line, then one row per option.
    assert_eq!(options.len(), 16);

    let heading = options.children()[0].as_text().expect("heading");
    assert!(heading.content().contains("Customizable Options"));

    let last = options.children()[15]
        .as_container()
        .and_then(|row| row.children()[0].as_text())
        .expect("last option");
    assert_eq!(last.caption(), Some("See Options"));
    assert_eq!(last.content(), "<code>hv.help(obj)</code>");
}

#[test]
fn help_links_keep_default_layout_while_options_stretch() {
    let defaults = CheatSheet::default_style_defaults(&CheatSheet::default_thumbnail());
    let mut composer = DashboardComposer::new(&defaults, NullRenderer::default());
    let page = CheatSheet::compose(&mut composer, TemplateConfig::default()).expect("cheat sheet");

    let first_column = page.columns().next().expect("first column");
    let help = first_column.children()[1]
        .as_container()
        .expect("help section");
    assert!(help.children()[0]
        .as_text()
        .expect("help heading")
        .content()
        .contains("Getting Help"));
    let links: Vec<_> = help.children()[1..]
        .iter()
        .map(|row| {
            row.as_container()
                .and_then(|row| row.children()[0].as_text())
                .expect("help link")
        })
        .collect();
    assert_eq!(links.len(), 3);
    assert_eq!(links[0].caption(), Some("Docs Page"));
    assert!(links.iter().all(|link| link.layout() == PaneLayout::default()));

    let options_column = page.columns().nth(2).expect("third column");
    let options = options_column.children()[0]
        .as_container()
        .expect("options section");
    let first_option = options.children()[2]
        .as_container()
        .and_then(|row| row.children()[0].as_text())
        .expect("first option");
    assert_eq!(first_option.caption(), Some("Add Labels"));
    assert_eq!(first_option.layout().sizing, SizingMode::StretchWidth);
    assert_eq!(first_option.layout().min_width, Some(550));
}

#[test]
fn plots_carry_merged_thumbnail_styles() {
    let defaults = CheatSheet::default_style_defaults(&CheatSheet::default_thumbnail());
    let mut composer = DashboardComposer::new(&defaults, SvgRenderer::new());
    let page = CheatSheet::compose(&mut composer, TemplateConfig::default()).expect("cheat sheet");

    let plots = collect_plots(&page);
    assert_eq!(plots.len(), 18);
    assert!(plots.iter().all(|plot| plot.artifact().markup.starts_with("<svg")));

    let hextiles = plots
        .iter()
        .find(|plot| plot.kind() == ChartKind::HexTiles)
        .expect("hextiles plot");
    assert_eq!(hextiles.style().extra_f64("scale"), Some(20.0));
    assert_eq!(hextiles.style().width, Some(50));
    assert_eq!(hextiles.layout().width, Some(75));

    let layout = plots
        .iter()
        .find(|plot| plot.kind() == ChartKind::Layout)
        .expect("layout badge");
    assert_eq!(layout.artifact().viewport.width, 100);
    assert_eq!(layout.layout().width, Some(100));

    let arrow = plots
        .iter()
        .find(|plot| plot.kind() == ChartKind::Arrow)
        .expect("arrow plot");
    assert_eq!(arrow.style().extra_str("arrow_color"), Some("lightblue"));
    assert_eq!(arrow.style().extra_f64("fontsize"), Some(3.0));

    let kinds: Vec<ChartKind> = plots.iter().map(PlotNode::kind).collect();
    for kind in ChartKind::ALL {
        assert!(kinds.contains(&kind), "no {kind} thumbnail on the sheet");
    }
}

#[test]
fn full_sheet_renders_to_html() {
    let defaults = CheatSheet::default_style_defaults(&CheatSheet::default_thumbnail());
    let mut composer = DashboardComposer::new(&defaults, SvgRenderer::new());
    let page = CheatSheet::compose(&mut composer, TemplateConfig::default()).expect("cheat sheet");

    let html = render_page_html(&page, &HtmlOptions::default()).expect("html");

    assert!(html.contains("<h2>Quick Start &nbsp🏁</h2>"));
    assert!(html.contains("<h2>Reference Plot</h2>"));
    assert!(html.contains(r#"<span class="caption">GitHub Repo:</span> https://github.com/holoviz/holoviews/"#));
    assert_eq!(html.matches("<svg").count(), 18);
}
