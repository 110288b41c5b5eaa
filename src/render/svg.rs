//! SVG document form of a chart, the input to PNG rasterization

use crate::render::{Chart, DrawCommand};
use rgb::RGBA8;
use std::fmt::Write as _;

/// Font families tried for chart symbols before falling back to any face with the glyph
pub const SYMBOL_FONT_FAMILIES: &str =
    "'DejaVu Sans', 'Noto Sans Symbols 2', 'Noto Sans Symbols', 'Segoe UI Symbol', sans-serif";

fn hex(color: RGBA8) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
}

fn opacity(color: RGBA8) -> String {
    format!("{:.4}", f32::from(color.a) / 255.0)
}

fn escape(symbol: char) -> String {
    match symbol {
        '&' => "&amp;".to_string(),
        '<' => "&lt;".to_string(),
        '>' => "&gt;".to_string(),
        '"' => "&quot;".to_string(),
        other => other.to_string(),
    }
}

/// Serialize a chart as a standalone SVG document
///
/// Commands become elements in paint order. Fills use crisp edges so adjacent cells
/// meet without seams; glyphs are centered on their anchor point.
pub fn chart_svg(chart: &Chart) -> String {
    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" \
         viewBox=\"0 0 {w} {h}\">\n",
        w = chart.width,
        h = chart.height
    );

    for command in &chart.commands {
        let _ = match *command {
            DrawCommand::FillRect {
                x,
                y,
                width,
                height,
                color,
            } => writeln!(
                svg,
                "<rect x=\"{x}\" y=\"{y}\" width=\"{width}\" height=\"{height}\" \
                 fill=\"{}\" fill-opacity=\"{}\" shape-rendering=\"crispEdges\"/>",
                hex(color),
                opacity(color)
            ),
            DrawCommand::StrokeRect {
                x,
                y,
                width,
                height,
                line_width,
                color,
            } => writeln!(
                svg,
                "<rect x=\"{x}\" y=\"{y}\" width=\"{width}\" height=\"{height}\" fill=\"none\" \
                 stroke=\"{}\" stroke-opacity=\"{}\" stroke-width=\"{line_width}\"/>",
                hex(color),
                opacity(color)
            ),
            DrawCommand::Glyph {
                x,
                y,
                size,
                symbol,
                bold,
                color,
            } => writeln!(
                svg,
                "<text x=\"{x}\" y=\"{y}\" font-size=\"{size}\" font-family=\"{SYMBOL_FONT_FAMILIES}\" \
                 font-weight=\"{}\" text-anchor=\"middle\" dominant-baseline=\"central\" \
                 fill=\"{}\" fill-opacity=\"{}\">{}</text>",
                if bold { "bold" } else { "normal" },
                hex(color),
                opacity(color),
                escape(symbol)
            ),
            DrawCommand::Line {
                from,
                to,
                line_width,
                color,
            } => writeln!(
                svg,
                "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" \
                 stroke-opacity=\"{}\" stroke-width=\"{line_width}\"/>",
                from[0],
                from[1],
                to[0],
                to[1],
                hex(color),
                opacity(color)
            ),
        };
    }

    svg.push_str("</svg>\n");
    svg
}
