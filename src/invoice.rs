//! Fixed content plan for the test invoice fixture.

use std::io::Write;
use std::path::Path;

use crate::canvas::Canvas;
use crate::error::Result;
use crate::fonts::Font;

/// Output path the binary writes, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "test_factura.pdf";

/// US Letter page size in points.
pub const LETTER: (f64, f64) = (612.0, 792.0);

const PAGE_H: f64 = LETTER.1;
const LEFT: f64 = 100.0;

/// One text placement: absolute position, font state, literal content.
struct Line {
    x: f64,
    y: f64,
    font: Font,
    size: f64,
    text: &'static str,
}

/// Drawn in array order. Coordinates measure from the bottom-left
/// corner of the page.
const LINES: &[Line] = &[
    // Título
    Line {
        x: LEFT,
        y: PAGE_H - 100.0,
        font: Font::HelveticaBold,
        size: 16.0,
        text: "FACTURA MÉDICA",
    },
    // Información de la factura
    Line {
        x: LEFT,
        y: PAGE_H - 150.0,
        font: Font::Helvetica,
        size: 12.0,
        text: "Fecha: 26/10/2023",
    },
    Line {
        x: LEFT,
        y: PAGE_H - 180.0,
        font: Font::Helvetica,
        size: 12.0,
        text: "Proveedor: Clínica San José",
    },
    Line {
        x: LEFT,
        y: PAGE_H - 210.0,
        font: Font::Helvetica,
        size: 12.0,
        text: "Descripción: Consulta médica general",
    },
    Line {
        x: LEFT,
        y: PAGE_H - 240.0,
        font: Font::Helvetica,
        size: 12.0,
        text: "Monto: 75.50 €",
    },
    // Pie de página
    Line {
        x: LEFT,
        y: 100.0,
        font: Font::Helvetica,
        size: 10.0,
        text: "Esta es una factura de prueba para testing",
    },
];

/// Replay the content plan onto an open canvas.
pub fn draw<W: Write>(canvas: &mut Canvas<W>) -> Result<()> {
    for line in LINES {
        canvas.set_font(line.font, line.size);
        canvas.draw_string(line.x, line.y, line.text)?;
    }
    Ok(())
}

/// Generate the invoice at `path`, overwriting any existing file.
pub fn generate<P: AsRef<Path>>(path: P) -> Result<()> {
    let mut canvas = Canvas::create(path, LETTER)?;
    canvas.set_info("Title", "Factura de prueba");
    canvas.set_info("Producer", "factura-fixture");
    draw(&mut canvas)?;
    canvas.save()?;
    Ok(())
}
