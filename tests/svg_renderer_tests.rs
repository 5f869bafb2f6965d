use cheatsheet_rs::core::Viewport;
use cheatsheet_rs::error::SheetError;
use cheatsheet_rs::render::{
    Color, LinePrimitive, NullRenderer, RectPrimitive, RenderFrame, Renderer, SvgRenderer,
    TextHAlign, TextPrimitive,
};

#[test]
fn svg_document_wraps_primitives_in_viewport() {
    let mut frame = RenderFrame::new(Viewport::new(10, 20));
    frame.lines.push(LinePrimitive::new(
        0.0,
        0.0,
        10.0,
        20.0,
        1.0,
        Color::rgb(1.0, 0.0, 0.0),
    ));
    frame.rects.push(RectPrimitive::new(
        1.0,
        2.0,
        3.5,
        4.0,
        Color::rgba(0.0, 0.0, 1.0, 0.5),
    ));
    let mut renderer = SvgRenderer::new();

    let artifact = renderer.render(&frame).expect("svg render");

    assert_eq!(artifact.viewport, Viewport::new(10, 20));
    assert!(artifact.markup.starts_with(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="20" viewBox="0 0 10 20">"#
    ));
    assert!(artifact.markup.contains(
        r##"<line x1="0" y1="0" x2="10" y2="20" stroke="#ff0000" stroke-width="1"/>"##
    ));
    assert!(artifact.markup.contains(
        r##"<rect x="1" y="2" width="3.5" height="4" fill="#0000ff" fill-opacity="0.5"/>"##
    ));
    assert!(artifact.markup.ends_with("</svg>"));
    assert_eq!(renderer.documents_rendered(), 1);
}

#[test]
fn svg_text_is_escaped() {
    let mut frame = RenderFrame::new(Viewport::new(50, 50));
    frame.texts.push(TextPrimitive::new(
        "<b>&</b>",
        25.0,
        25.0,
        3.0,
        Color::rgb(0.0, 0.0, 0.0),
        TextHAlign::Center,
    ));

    let artifact = SvgRenderer::new().render(&frame).expect("svg render");

    assert!(artifact.markup.contains("&lt;b&gt;&amp;&lt;/b&gt;"));
    assert!(artifact.markup.contains(r#"text-anchor="middle""#));
}

#[test]
fn invalid_frames_are_rejected_by_every_backend() {
    let zero = RenderFrame::new(Viewport::new(0, 50));
    let mut svg = SvgRenderer::new();
    assert!(matches!(svg.render(&zero), Err(SheetError::InvalidData(_))));
    assert_eq!(svg.documents_rendered(), 0);

    let mut bad_line = RenderFrame::new(Viewport::new(10, 10));
    bad_line.lines.push(LinePrimitive::new(
        0.0,
        f64::NAN,
        1.0,
        1.0,
        1.0,
        Color::rgb(0.0, 0.0, 0.0),
    ));
    let mut null = NullRenderer::default();
    assert!(matches!(null.render(&bad_line), Err(SheetError::InvalidData(_))));
    assert_eq!(null.frames_rendered, 0);
}

#[test]
fn null_renderer_counts_primitives() {
    let mut frame = RenderFrame::new(Viewport::new(10, 10));
    frame
        .lines
        .push(LinePrimitive::new(0.0, 0.0, 1.0, 1.0, 1.0, Color::rgb(0.0, 0.0, 0.0)));
    frame
        .rects
        .push(RectPrimitive::new(0.0, 0.0, 1.0, 1.0, Color::rgb(1.0, 1.0, 1.0)));
    let mut renderer = NullRenderer::default();

    let artifact = renderer.render(&frame).expect("null render");

    assert!(artifact.markup.is_empty());
    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_primitive_count, 2);
}
