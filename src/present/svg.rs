use std::{fs::File, io::{BufWriter, Write}, path::Path};

use geo::MultiPolygon;
use log::debug;

use super::{color, map::MapSpec};
use crate::{error::{Result, TurnoutError}, io::svg::{self, SvgWriter, Viewport}};

const MARGIN: f64 = 10.0;
const TITLE_HEIGHT: f64 = 28.0;
const LEGEND_HEIGHT: f64 = 24.0;
const SWATCH: f64 = 12.0;
const SWATCH_SPACING: f64 = 64.0;

impl MapSpec {
    /// Render as a standalone SVG document.
    pub fn to_svg_string(&self) -> Result<String> {
        let shapes = self.projected_shapes()?;
        let mut writer = SvgWriter::new(Vec::new());
        self.write_svg_to(&mut writer, &shapes)
            .map_err(|e| TurnoutError::io("<memory>", e))?;
        String::from_utf8(writer.into_inner())
            .map_err(|e| TurnoutError::io("<memory>", std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
    }

    /// Render as an SVG file at `path`.
    pub fn write_svg(&self, path: &Path) -> Result<()> {
        let shapes = self.projected_shapes()?;
        let file = File::create(path).map_err(|e| TurnoutError::io(path, e))?;
        let mut writer = SvgWriter::new(BufWriter::new(file));
        self.write_svg_to(&mut writer, &shapes)
            .and_then(|()| writer.flush())
            .map_err(|e| TurnoutError::io(path, e))
    }

    /// Mark geometries in US Albers meters, in mark order.
    fn projected_shapes(&self) -> Result<Vec<MultiPolygon<f64>>> {
        svg::project_albers(&self.marks.iter().map(|mark| &*mark.geometry).collect::<Vec<_>>())
    }

    fn write_svg_to<W: Write>(&self, writer: &mut SvgWriter<W>, shapes: &[MultiPolygon<f64>]) -> std::io::Result<()> {
        let (width, height) = (self.width as f64, self.height as f64);

        let viewport = Viewport::fit(
            shapes,
            MARGIN,
            MARGIN + TITLE_HEIGHT,
            width - 2.0 * MARGIN,
            height - 2.0 * MARGIN - TITLE_HEIGHT - LEGEND_HEIGHT,
        );

        writer.write_header(width, height)?;
        writer.write_styles()?;
        writer.write_title(MARGIN, MARGIN + 16.0, &self.title)?;

        if let Some(viewport) = viewport {
            for (mark, shape) in self.marks.iter().zip(shapes) {
                let path = svg::multipolygon_to_path(shape, |c| viewport.project(c));
                let tooltip = mark.tooltip.iter()
                    .map(|field| field.display())
                    .collect::<Vec<_>>()
                    .join("\n");
                writer.write_region(&path, &mark.fill.to_hex(), &tooltip, !mark.has_data())?;
            }
        } else {
            debug!("[present::svg] no geometry to draw for {:?}", self.title);
        }

        // Legend: scale stops, then the "no data" swatch.
        let legend_y = height - MARGIN - LEGEND_HEIGHT + (LEGEND_HEIGHT - SWATCH) / 2.0;
        let mut x = MARGIN;
        for (value, rgb) in self.scale.stops() {
            writer.write_swatch(x, legend_y, SWATCH, &rgb.to_hex(), &format!("{value}"))?;
            x += SWATCH_SPACING;
        }
        writer.write_swatch(x, legend_y, SWATCH, &color::NO_DATA.to_hex(), "No data")?;

        writer.write_footer()
    }
}
