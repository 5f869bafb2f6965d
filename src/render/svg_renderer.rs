use std::fmt::{self, Write as _};

use crate::error::SheetResult;
use crate::render::{Color, PlotArtifact, RenderFrame, Renderer, TextHAlign};

/// Backend that serializes frames into standalone inline SVG documents.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    documents_rendered: usize,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn documents_rendered(&self) -> usize {
        self.documents_rendered
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> SheetResult<PlotArtifact> {
        frame.validate()?;
        let mut markup = String::with_capacity(256 + frame.primitive_count() * 96);
        write_svg(&mut markup, frame)?;
        self.documents_rendered += 1;
        Ok(PlotArtifact {
            viewport: frame.viewport,
            markup,
        })
    }
}

/// Appends one `<svg>` document for `frame` to `out`, primitives in draw order.
fn write_svg(out: &mut String, frame: &RenderFrame) -> fmt::Result {
    let width = frame.viewport.width;
    let height = frame.viewport.height;
    write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    )?;

    for rect in &frame.rects {
        write!(
            out,
            r#"<rect x="{}" y="{}" width="{}" height="{}" {}{}/>"#,
            num(rect.x),
            num(rect.y),
            num(rect.width),
            num(rect.height),
            fill_attrs(rect.fill),
            rect.stroke.map(stroke_attrs).unwrap_or_default()
        )?;
    }
    for polygon in &frame.polygons {
        write!(
            out,
            r#"<polygon points="{}" {}{}/>"#,
            points_attr(&polygon.points),
            fill_attrs(polygon.fill),
            polygon.stroke.map(stroke_attrs).unwrap_or_default()
        )?;
    }
    for polyline in &frame.polylines {
        write!(
            out,
            r#"<polyline points="{}" fill="none" stroke="{}" stroke-width="{}"{}/>"#,
            points_attr(&polyline.points),
            polyline.color.to_hex(),
            num(polyline.stroke_width),
            opacity_attr("stroke-opacity", polyline.color)
        )?;
    }
    for line in &frame.lines {
        write!(
            out,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"{}/>"#,
            num(line.x1),
            num(line.y1),
            num(line.x2),
            num(line.y2),
            line.color.to_hex(),
            num(line.stroke_width),
            opacity_attr("stroke-opacity", line.color)
        )?;
    }
    for circle in &frame.circles {
        write!(
            out,
            r#"<circle cx="{}" cy="{}" r="{}" {}/>"#,
            num(circle.cx),
            num(circle.cy),
            num(circle.radius),
            fill_attrs(circle.fill)
        )?;
    }
    for text in &frame.texts {
        let anchor = match text.h_align {
            TextHAlign::Left => "start",
            TextHAlign::Center => "middle",
            TextHAlign::Right => "end",
        };
        write!(
            out,
            r#"<text x="{}" y="{}" font-size="{}" text-anchor="{anchor}" dominant-baseline="middle" {}>{}</text>"#,
            num(text.x),
            num(text.y),
            num(text.font_size_px),
            fill_attrs(text.color),
            escape_markup(&text.text)
        )?;
    }

    out.push_str("</svg>");
    Ok(())
}

/// Formats a coordinate with at most two decimals and no trailing zeros.
fn num(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    let text = format!("{rounded:.2}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_owned()
    } else {
        text.to_owned()
    }
}

fn points_attr(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{},{}", num(*x), num(*y)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn fill_attrs(color: Color) -> String {
    format!(
        r#"fill="{}"{}"#,
        color.to_hex(),
        opacity_attr("fill-opacity", color)
    )
}

fn stroke_attrs(color: Color) -> String {
    format!(
        r#" stroke="{}"{}"#,
        color.to_hex(),
        opacity_attr("stroke-opacity", color)
    )
}

fn opacity_attr(name: &str, color: Color) -> String {
    if color.alpha >= 1.0 {
        String::new()
    } else {
        format!(r#" {name}="{}""#, num(color.alpha))
    }
}

/// Escapes text for safe inclusion in XML/HTML text and attribute values.
#[must_use]
pub fn escape_markup(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{escape_markup, num, write_svg};
    use crate::core::Viewport;
    use crate::render::{CirclePrimitive, Color, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive};

    #[test]
    fn coordinates_drop_trailing_zeros() {
        assert_eq!(num(12.0), "12");
        assert_eq!(num(12.5), "12.5");
        assert_eq!(num(1.005_1), "1.01");
        assert_eq!(num(-0.001), "0");
    }

    #[test]
    fn primitives_are_written_in_draw_order() {
        let black = Color::rgb(0.0, 0.0, 0.0);
        let mut frame = RenderFrame::new(Viewport::new(8, 8));
        frame
            .texts
            .push(TextPrimitive::new("t", 4.0, 4.0, 2.0, black, TextHAlign::Left));
        frame.circles.push(CirclePrimitive::new(4.0, 4.0, 1.0, black));
        frame.rects.push(RectPrimitive::new(0.0, 0.0, 8.0, 8.0, black));

        let mut out = String::from("<!-- prefix -->");
        write_svg(&mut out, &frame).expect("write into string");

        let rect = out.find("<rect").expect("rect");
        let circle = out.find("<circle").expect("circle");
        let text = out.find("<text").expect("text");
        assert!(out.starts_with("<!-- prefix --><svg "));
        assert!(rect < circle && circle < text);
        assert!(out.contains(r#"text-anchor="start""#));
        assert!(out.ends_with("</text></svg>"));
    }

    #[test]
    fn markup_escaping_covers_attribute_quotes() {
        assert_eq!(
            escape_markup(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;"
        );
    }
}
