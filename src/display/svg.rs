use crate::compose::{Primitive, Scene};
use crate::geometry::{Point, Rect};
use crate::style::RenderStyle;
use std::fmt::Write;

/// Serializes a scene as a standalone SVG document.
///
/// Scenes live in y-up diagram space; every coordinate is mirrored on the way out
/// so the picture reads the same way up as the graph editor showed it.
pub fn render_svg(scene: &Scene, style: &RenderStyle) -> String {
    let mut out = String::new();
    let m = style.margin;
    let (x, y, w, h) = match scene.bounds() {
        Some(b) => (b.min.x - m, -b.max.y - m, b.width() + 2.0 * m, b.height() + 2.0 * m),
        None => (0.0, 0.0, 2.0 * m, 2.0 * m),
    };

    let _ = writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" width="{w:.2}" height="{h:.2}" viewBox="{x:.2} {y:.2} {w:.2} {h:.2}">"#
    );
    let _ = writeln!(out, "<title>timepoint {}</title>", scene.timepoint);

    for primitive in &scene.primitives {
        write_primitive(&mut out, primitive, style);
    }

    let _ = writeln!(out, "</svg>");
    out
}

fn write_primitive(out: &mut String, primitive: &Primitive, style: &RenderStyle) {
    let node = &style.node;
    match primitive {
        Primitive::Box { bounds } => {
            let Rect { min, max } = *bounds;
            let _ = writeln!(
                out,
                r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}" fill-opacity="{}" stroke="{}" stroke-width="{}"/>"#,
                min.x,
                -max.y,
                bounds.width(),
                bounds.height(),
                escape_xml(&node.fill),
                node.fill_opacity,
                escape_xml(&node.stroke),
                node.stroke_width
            );
        }
        Primitive::Circle { center, radius } => {
            let _ = writeln!(
                out,
                r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}" fill-opacity="{}" stroke="{}" stroke-width="{}"/>"#,
                center.x,
                -center.y,
                radius,
                escape_xml(&node.fill),
                node.fill_opacity,
                escape_xml(&node.stroke),
                node.stroke_width
            );
        }
        Primitive::Arrow { node: id, arrow } => {
            let a = &style.arrow;
            let color = escape_xml(arrow.direction.color(a));
            let _ = writeln!(
                out,
                r#"<polygon data-node="{}" points="{}" fill="{color}" fill-opacity="{}" stroke="{color}" stroke-opacity="{}"/>"#,
                id,
                points(&arrow.outline),
                a.fill_opacity,
                a.stroke_opacity
            );
        }
        Primitive::Label { anchor, text, .. } => {
            let l = &style.label;
            let _ = writeln!(
                out,
                r#"<text x="{:.2}" y="{:.2}" text-anchor="middle" dominant-baseline="central" font-family="{}" font-size="{}" fill="{}">{}</text>"#,
                anchor.x,
                -anchor.y,
                escape_xml(&l.font_family),
                l.font_size,
                escape_xml(&l.color),
                escape_xml(text)
            );
        }
        Primitive::Connector(c) => {
            let s = &style.connector;
            let _ = writeln!(
                out,
                r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="{}"/>"#,
                c.start.x,
                -c.start.y,
                c.end.x,
                -c.end.y,
                escape_xml(&s.color),
                s.width
            );
            let _ = writeln!(out, r#"<polygon points="{}" fill="{}"/>"#, points(&c.head), escape_xml(&s.color));
        }
    }
}

fn points(polygon: &[Point]) -> String {
    polygon
        .iter()
        .map(|p| format!("{:.2},{:.2}", p.x, -p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn escape_xml(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
