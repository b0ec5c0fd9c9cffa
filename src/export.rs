//! PDF export of rendered artwork.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use printpdf::{BuiltinFont, Mm, PdfDocument};

/// Page size: A4 portrait.
const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;

/// Artwork is set in Courier at 3 pt so even wide renders fit a page.
const FONT_SIZE_PT: f32 = 3.0;

/// 1.5 mm per text row.
const LINE_HEIGHT_PT: f32 = 4.25;

/// Errors that can occur while exporting the artwork document.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to build PDF document: {0}")]
    Pdf(#[from] printpdf::Error),
}

/// Remove ANSI escape sequences, leaving only the printable artwork.
///
/// Color tokens are terminal-only; the document gets plain text.
pub fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // Skip the CSI sequence through its final letter
            for follow in chars.by_ref() {
                if follow.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Write the artwork into a single-page PDF at `path`.
///
/// One text line per artwork row, no pagination; rows that overflow the page
/// are left to the viewer's clipping.
pub fn write_pdf(artwork: &str, path: &Path) -> Result<(), ExportError> {
    let plain = strip_ansi(artwork);

    let (doc, page, layer) = PdfDocument::new(
        "ascii art",
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "artwork",
    );
    let font = doc.add_builtin_font(BuiltinFont::Courier)?;

    let layer = doc.get_page(page).get_layer(layer);
    layer.begin_text_section();
    layer.set_font(&font, FONT_SIZE_PT);
    layer.set_line_height(LINE_HEIGHT_PT);
    layer.set_text_cursor(Mm(5.0), Mm(PAGE_HEIGHT_MM - 5.0));
    for line in plain.lines() {
        layer.write_text(line, &font);
        layer.add_line_break();
    }
    layer.end_text_section();

    let file = File::create(path).map_err(|e| ExportError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    doc.save(&mut BufWriter::new(file))?;

    log::debug!("wrote PDF to {}", path.display());
    Ok(())
}
