use crate::api::{ContainerNode, DashboardComposer, PaneLayout, PlotNode, Section, TextNode};
use crate::core::{ArrowDirection, ChartKind, PlotData, PlotSpec, StyleOptions};
use crate::error::SheetResult;
use crate::render::Renderer;

use super::{EXAMPLE_PANE_WIDTH_PX, TEXT_MIN_WIDTH_PX, THUMBNAIL_SIZE_PX};

const LAYOUT_BADGE_WIDTH_PX: u32 = 100;
const REFERENCE_COLOR: &str = "lightblue";

const QUICK_START_CODE: &str = r#"<code>
import pandas as pd<br>
import holoviews as hv<br>
hv.extension("bokeh")<br><br>
df = pd.DataFrame({"x": [1, 2, 3], "y": [0, 0, 1]})<br>
curve = hv.Curve(df, kdims="x", vdims="y")<br>
hv.save(curve, "document.html")
</code>"#;

const ANIMATE_CODE: &str = r#"<code>
import pandas as pd<br>
import holoviews as hv<br>
df = pd.DataFrame({<br>
&nbsp&nbsp&nbsp"x": [1, 2, 3, 4],<br>
&nbsp&nbsp&nbsp"y": [2, 3, 4, 5],<br>
&nbsp&nbsp&nbsp"t": [1, 1, 2, 2],<br>
})<br>
hv.Dataset(df).to.curve(kdims=["x"], vdims="y")
</code>"#;

const INTERACTION_CODE: &str = r#"<code>
import holoviews as hv<br>
import numpy as np<br>
hv.extension("bokeh")<br><br>
# Create an empty Points element<br>
points = hv.Points([])<br><br>
# Create the Tap stream with the points element as the source<br>
stream = hv.streams.Tap(source=points, x=np.nan, y=np.nan)<br><br>
# Define what happens on click<br>
def location(x, y):<br>
&nbsp&nbsp# Create a plot with a moving dot and label upon click<br>
&nbsp&nbspreturn hv.Points((x, y), label='x: %0.3f, y: %0.3f' % (x, y))<br><br>
# Connect the Tap stream to the location callback<br>
tap_dmap = hv.DynamicMap(location, streams=[stream])<br>
(points * tap_dmap)
</code>"#;

const HELP_LINKS: [(&str, &str); 3] = [
    ("Docs Page", "https://holoviews.org/"),
    ("GitHub Repo", "https://github.com/holoviz/holoviews/"),
    ("Discourse Forum", "https://discourse.holoviz.org/"),
];

const LAYOUT_RECIPES: [(&str, &str); 4] = [
    ("Individually", "<code>(obj1 + obj2).cols(2)</code>"),
    ("From List", "<code>hv.Layout([obj1, obj2])</code>"),
    ("From Dict", "<code>hv.NdLayout({'a': obj1, 'b': obj2})</code>"),
    ("From HoloMap", "<code>holomap.layout()</code>"),
];

const OVERLAY_RECIPES: [(&str, &str); 4] = [
    ("Individually", "<code>(obj1 * obj2)</code>"),
    ("From List", "<code>hv.Overlay([obj1, obj2])</code>"),
    ("From Dict", "<code>hv.NdOverlay({'a': obj1, 'b': obj2})</code>"),
    ("From HoloMap", "<code>holomap.overlay()</code>"),
];

const OPTION_RECIPES: [(&str, &str); 14] = [
    ("Add Labels", r#"<code>title="t", xlabel="x", ylabel="y", clabel="c"</code>"#),
    ("Canvas Size", "<code>width=300, height=300</code>"),
    ("Show Legend", "<code>show_legend=True</code>"),
    ("Show Grid", "<code>show_grid=True</code>"),
    ("Show Colorbar", "<code>colorbar=True</code>"),
    ("Show Tooltips", r#"<code>tools=["hover"]</code>"#),
    ("Active Tools", r#"<code>active_tools=["pan", "wheel_zoom"]</code>"#),
    ("Share Axes", "<code>shared_axes=True</code>"),
    ("Specify Ticks", "<code>xticks=[-1, 0, 1], yticks=[-1, 0, 1]</code>"),
    ("Enlarge Labels", "<code>fontscale=2</code>"),
    ("Hide Toolbar", "<code>toolbar=False</code>"),
    ("Hide Axes", "<code>xaxis=None, yaxis=None</code>"),
    ("Invert Axes", "<code>invert_xaxis=True, invert_yaxis=True</code>"),
    ("See Options", "<code>hv.help(obj)</code>"),
];

const GRID_XS: [f64; 3] = [0.0, 1.0, 0.0];
const GRID_YS: [f64; 3] = [0.0, 1.0, 2.0];
const GRID_ZS: [&[f64]; 2] = [&[6.0, 7.0, 8.0], &[9.0, 8.0, 10.0]];

const SAMPLE_XS: [f64; 4] = [0.0, 1.0, 0.0, 2.0];
const SAMPLE_YS: [f64; 4] = [0.0, 1.0, 2.0, 3.0];
const SAMPLE_ZS: [&[f64]; 2] = [&[6.0, 7.0, 8.0], &[7.0, 6.0, 5.0]];

fn heading<R: Renderer>(composer: &DashboardComposer<'_, R>, title: &str) -> TextNode {
    composer.build_text(format!("<h2>{title}</h2>"), None)
}

/// One single-pane row per `(caption, content)` entry.
fn captioned_rows<R: Renderer>(
    composer: &DashboardComposer<'_, R>,
    entries: &[(&str, &str)],
    layout: PaneLayout,
) -> SheetResult<Vec<ContainerNode>> {
    entries
        .iter()
        .map(|(caption, content)| {
            let text = composer
                .build_text(*content, Some(*caption))
                .with_layout(layout);
            composer.build_row(vec![text.into()])
        })
        .collect()
}

fn recipe_rows<R: Renderer>(
    composer: &DashboardComposer<'_, R>,
    recipes: &[(&str, &str)],
) -> SheetResult<Vec<ContainerNode>> {
    captioned_rows(composer, recipes, PaneLayout::stretch(TEXT_MIN_WIDTH_PX))
}

fn badge<R: Renderer>(
    composer: &mut DashboardComposer<'_, R>,
    kind: ChartKind,
    data: PlotData,
    overrides: Option<&StyleOptions>,
    width: u32,
) -> SheetResult<PlotNode> {
    Ok(composer
        .build_plot(kind, data, overrides)?
        .with_layout(PaneLayout::centered(width)))
}

/// Thumbnail on the left, constructor snippet and its notable options on the
/// right.
fn example_row<R: Renderer>(
    composer: &mut DashboardComposer<'_, R>,
    kind: ChartKind,
    data: PlotData,
    overrides: Option<&StyleOptions>,
    constructor: &str,
    options: &str,
) -> SheetResult<ContainerNode> {
    let plot = badge(composer, kind, data, overrides, EXAMPLE_PANE_WIDTH_PX)?;
    let text = composer
        .build_text(
            format!("<code>{constructor}</code><br>\nOpts: <code>{options}</code>"),
            None,
        )
        .with_layout(PaneLayout::stretch(TEXT_MIN_WIDTH_PX));
    composer.build_row(vec![plot.into(), text.into()])
}

fn code_section<R: Renderer>(
    composer: &DashboardComposer<'_, R>,
    title: &str,
    code: &str,
) -> SheetResult<Section> {
    let code = composer.build_text(code, None);
    let rows = vec![composer.build_row(vec![code.into()])?];
    Ok(composer.build_section(heading(composer, title), rows))
}

fn curve_pair() -> Vec<PlotSpec> {
    vec![
        PlotSpec::new(ChartKind::Curve, PlotData::values(&[1.0, 0.0, 1.0])),
        PlotSpec::new(ChartKind::Curve, PlotData::values(&[0.0, 1.0, 0.0])),
    ]
}

fn combinator_section<R: Renderer>(
    composer: &mut DashboardComposer<'_, R>,
    title: &str,
    kind: ChartKind,
    width: u32,
    recipes: &[(&str, &str)],
) -> SheetResult<Section> {
    let overrides = StyleOptions::new().with_size(width, THUMBNAIL_SIZE_PX);
    let badge = badge(
        composer,
        kind,
        PlotData::Composite(curve_pair()),
        Some(&overrides),
        width,
    )?;
    let rows = recipe_rows(composer, recipes)?;
    Ok(composer.build_badged_section(heading(composer, title), badge, rows))
}

/// Quick start, help links, layout and overlay recipes, animation.
pub(super) fn getting_started_column<R: Renderer>(
    composer: &mut DashboardComposer<'_, R>,
) -> SheetResult<ContainerNode> {
    let quick_start = code_section(composer, "Quick Start &nbsp🏁", QUICK_START_CODE)?;

    let help_rows = captioned_rows(composer, &HELP_LINKS, PaneLayout::default())?;
    let help = composer.build_section(heading(composer, "Getting Help &nbspℹ️"), help_rows);

    let layout = combinator_section(
        composer,
        "Layout Plots",
        ChartKind::Layout,
        LAYOUT_BADGE_WIDTH_PX,
        &LAYOUT_RECIPES,
    )?;
    let overlay = combinator_section(
        composer,
        "Overlay Plots",
        ChartKind::Overlay,
        THUMBNAIL_SIZE_PX,
        &OVERLAY_RECIPES,
    )?;
    let animate = code_section(composer, "Animate Plots", ANIMATE_CODE)?;

    composer.build_column(vec![
        quick_start.into(),
        help.into(),
        layout.into(),
        overlay.into(),
        animate.into(),
    ])
}

fn basic_plot_section<R: Renderer>(
    composer: &mut DashboardComposer<'_, R>,
) -> SheetResult<Section> {
    let values = [0.0, 1.0, 0.5];
    let badge = badge(
        composer,
        ChartKind::Curve,
        PlotData::values(&[0.0, 1.0, 1.0]),
        None,
        THUMBNAIL_SIZE_PX,
    )?;
    let rows = vec![
        example_row(
            composer,
            ChartKind::Curve,
            PlotData::values(&values),
            None,
            r#"hv.Curve(data, kdims="x", vdims="y", label="C")"#,
            "color, line_dash, line_width",
        )?,
        example_row(
            composer,
            ChartKind::Scatter,
            PlotData::values(&values),
            None,
            r#"hv.Scatter(data, kdims="x", vdims="y", label="S")"#,
            "color, marker, size",
        )?,
        example_row(
            composer,
            ChartKind::Bars,
            PlotData::values(&values),
            None,
            r#"hv.Bars(data, kdims="x", vdims="y", label="B")"#,
            "color, fill_alpha, fill_color",
        )?,
        example_row(
            composer,
            ChartKind::Area,
            PlotData::area(&[0.0, 1.0, 2.0], &values, Some(&[0.0, 0.5, 0.25][..])),
            None,
            r#"hv.Area(data, kdims="x", vdims=["y", "y2"], label="A")"#,
            "color, fill_alpha, bar_width",
        )?,
    ];
    Ok(composer.build_badged_section(heading(composer, "Basic Plot"), badge, rows))
}

fn gridded_plot_section<R: Renderer>(
    composer: &mut DashboardComposer<'_, R>,
) -> SheetResult<Section> {
    let grid = PlotData::grid(&GRID_XS, &GRID_YS, &GRID_ZS);
    let samples = PlotData::samples(&SAMPLE_XS, &SAMPLE_YS, &SAMPLE_ZS);
    let badge = badge(composer, ChartKind::Image, grid.clone(), None, THUMBNAIL_SIZE_PX)?;
    let rows = vec![
        example_row(
            composer,
            ChartKind::Image,
            grid.clone(),
            None,
            r#"hv.Image(data, kdims=["x", "y"], vdims="z", label="I")"#,
            "cmap, nodata, color_levels",
        )?,
        example_row(
            composer,
            ChartKind::QuadMesh,
            grid,
            None,
            r#"hv.QuadMesh(data, kdims=["x", "y"], vdims="z", label="Q")"#,
            "cmap, nodata, color_levels",
        )?,
        example_row(
            composer,
            ChartKind::Contours,
            samples.clone(),
            None,
            r#"hv.Contours(data, kdims=["x", "y"], vdims="z", label="C")"#,
            "cmap, levels, color_levels",
        )?,
        example_row(
            composer,
            ChartKind::HexTiles,
            samples,
            Some(&StyleOptions::new().with_extra("scale", 20.0)),
            r#"hv.HexTiles(data, kdims=["x", "y"], vdims="z", label="H")"#,
            "cmap, scale, color_levels",
        )?,
    ];
    Ok(composer.build_badged_section(heading(composer, "Gridded Plot"), badge, rows))
}

fn reference_plot_section<R: Renderer>(
    composer: &mut DashboardComposer<'_, R>,
) -> SheetResult<Section> {
    let badge = badge(
        composer,
        ChartKind::Text,
        PlotData::annotation(0.5, 0.5, "Ref"),
        Some(&StyleOptions::new().with_color(REFERENCE_COLOR)),
        THUMBNAIL_SIZE_PX,
    )?;
    let arrow_style = StyleOptions::new()
        .with_extra("arrow_color", REFERENCE_COLOR)
        .with_extra("text_color", REFERENCE_COLOR)
        .with_extra("fontsize", 3.0);
    let rows = vec![
        example_row(
            composer,
            ChartKind::Text,
            PlotData::annotation(0.5, 0.5, "Labels"),
            Some(&StyleOptions::new().with_extra("text_color", REFERENCE_COLOR)),
            r#"hv.Labels(data, kdims=["x", "y"], vdims="labels")"#,
            "text_font_size, text_align, text_baseline",
        )?,
        example_row(
            composer,
            ChartKind::HLine,
            PlotData::Reference(0.5),
            None,
            "hv.HLine(y)",
            "line_color, line_width, line_alpha",
        )?,
        example_row(
            composer,
            ChartKind::VLine,
            PlotData::Reference(0.5),
            None,
            "hv.VLine(x)",
            "line_color, line_width, line_alpha",
        )?,
        example_row(
            composer,
            ChartKind::Arrow,
            PlotData::arrow(0.2, 0.2, "Arrow", ArrowDirection::from_marker("v")?),
            Some(&arrow_style),
            r#"hv.Arrow(x, y, "Text", "v")"#,
            "arrow_color, text_color, font_size",
        )?,
        example_row(
            composer,
            ChartKind::Tiles,
            PlotData::tiles("Wikipedia"),
            None,
            "hv.element.tiles.Wikipedia()",
            "level, max_zoom, min_zoom",
        )?,
    ];
    Ok(composer.build_badged_section(heading(composer, "Reference Plot"), badge, rows))
}

/// One example row per element kind, grouped by data shape.
pub(super) fn element_column<R: Renderer>(
    composer: &mut DashboardComposer<'_, R>,
) -> SheetResult<ContainerNode> {
    let basic = basic_plot_section(composer)?;
    let gridded = gridded_plot_section(composer)?;
    let reference = reference_plot_section(composer)?;
    composer.build_column(vec![basic.into(), gridded.into(), reference.into()])
}

pub(super) fn options_column<R: Renderer>(
    composer: &mut DashboardComposer<'_, R>,
) -> SheetResult<ContainerNode> {
    let usage = composer.build_text("Usage: <code>obj.opts(**options)</code>", None);
    let mut rows = vec![composer.build_row(vec![usage.into()])?];
    rows.extend(recipe_rows(composer, &OPTION_RECIPES)?);
    let options = composer.build_section(
        heading(composer, "Customizable Options &nbsp⚙️"),
        rows,
    );

    let interaction = code_section(composer, "User Interaction &nbsp🤏", INTERACTION_CODE)?;
    composer.build_column(vec![options.into(), interaction.into()])
}
