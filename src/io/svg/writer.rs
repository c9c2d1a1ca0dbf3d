//! SVG writing operations.

use std::io::Write;

use geo::{Coord, CoordsIter, LineString, MultiPolygon};

/// Wraps any byte sink; `write!` / `writeln!` work through `std::io::Write`.
pub(crate) struct SvgWriter<W: Write> {
    writer: W,
}

impl<W: Write> Write for SvgWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> { self.writer.write(buf) }

    fn flush(&mut self) -> std::io::Result<()> { self.writer.flush() }

    fn write_all(&mut self, buf: &[u8]) -> std::io::Result<()> { self.writer.write_all(buf) }
}

impl<W: Write> SvgWriter<W> {
    pub(crate) fn new(writer: W) -> Self {
        Self { writer }
    }

    pub(crate) fn into_inner(self) -> W { self.writer }

    /// Write the XML declaration, opening <svg> tag and background.
    pub(crate) fn write_header(&mut self, width: f64, height: f64) -> std::io::Result<()> {
        writeln!(self, r##"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"##)?;
        writeln!(self, r##"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"##)?;
        writeln!(self, r##"<rect width="100%" height="100%" fill="#ffffff"/>"##)
    }

    /// Write SVG styles for map features.
    pub(crate) fn write_styles(&mut self) -> std::io::Result<()> {
        writeln!(self, r##"<defs>
<style>
    .state {{ stroke: #ffffff; stroke-width: 0.5; fill-rule: evenodd; }}
    .nodata {{ stroke-dasharray: 2 1; }}
    .title {{ font: bold 16px sans-serif; fill: #111827; }}
    .legend {{ font: 11px sans-serif; fill: #111827; }}
</style>
</defs>"##)
    }

    pub(crate) fn write_title(&mut self, x: f64, y: f64, title: &str) -> std::io::Result<()> {
        writeln!(self, r#"<text class="title" x="{x:.1}" y="{y:.1}">{}</text>"#, escape_xml(title))
    }

    /// One filled state outline with a hover tooltip.
    pub(crate) fn write_region(&mut self, path: &str, fill: &str, tooltip: &str, no_data: bool) -> std::io::Result<()> {
        let class = if no_data { "state nodata" } else { "state" };
        writeln!(self, r#"<path class="{class}" d="{path}" style="fill:{fill}"><title>{}</title></path>"#, escape_xml(tooltip))
    }

    /// One legend swatch with its label.
    pub(crate) fn write_swatch(&mut self, x: f64, y: f64, size: f64, fill: &str, label: &str) -> std::io::Result<()> {
        writeln!(self, r##"<rect x="{x:.1}" y="{y:.1}" width="{size:.1}" height="{size:.1}" style="fill:{fill};stroke:#6b7280;stroke-width:0.5"/>"##)?;
        writeln!(self, r#"<text class="legend" x="{:.1}" y="{:.1}">{}</text>"#, x + size + 4.0, y + size - 2.0, escape_xml(label))
    }

    /// Write the closing </svg> tag.
    pub(crate) fn write_footer(&mut self) -> std::io::Result<()> {
        writeln!(self, "</svg>")
    }
}

/// Build a compact SVG path string for a MultiPolygon (exteriors + holes).
pub(crate) fn multipolygon_to_path(shape: &MultiPolygon<f64>, project: impl Fn(&Coord<f64>) -> (f64, f64)) -> String {
    let mut out = String::new();

    for polygon in &shape.0 {
        out.push_str(&ring_to_path(polygon.exterior(), &project));
        for interior in polygon.interiors() {
            out.push_str(&ring_to_path(interior, &project));
        }
    }

    out
}

/// Build a compact SVG path string for a LineString (ring).
fn ring_to_path(ring: &LineString<f64>, project: &impl Fn(&Coord<f64>) -> (f64, f64)) -> String {
    let mut out = String::new();

    let mut coords = ring.coords_iter()
        .map(|coord| project(&coord));
    if let Some((x, y)) = coords.next() {
        out.push_str(&format!(" M{x:.3},{y:.3}"));
        for (x, y) in coords {
            out.push_str(&format!(" L{x:.3},{y:.3}"));
        }
        out.push('Z');
    }

    out
}

pub(crate) fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}
