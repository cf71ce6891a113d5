use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::mem;
use std::path::Path;

use flate2::write::ZlibEncoder;
use flate2::Compression;
use log::debug;

use crate::error::{Error, Result};
use crate::fonts::{winansi, Font};
use crate::objects::{Object, ObjectId};
use crate::writer::{escape_literal, DocWriter};

const CATALOG_ID: ObjectId = ObjectId(1);
const PAGES_ID: ObjectId = ObjectId(2);
const FIRST_FREE_OBJ: u32 = 3;

/// Canvas-style PDF emitter: open a surface, set font state, place
/// text at absolute coordinates, save.
///
/// Generic over `Write` so it works with files (`BufWriter<File>`)
/// and in-memory buffers (`Vec<u8>`). Pages are flushed to the writer
/// as they close rather than accumulated until `save`, so memory use
/// stays flat for long documents.
///
/// Output is deterministic: no timestamps or random IDs are written,
/// so the same call sequence yields byte-identical files.
pub struct Canvas<W: Write> {
    writer: DocWriter<W>,
    info: Vec<(String, String)>,
    page_ids: Vec<ObjectId>,
    page: Page,
    font: Font,
    font_size: f64,
    compress: bool,
    used_fonts: BTreeMap<Font, ObjectId>,
    next_obj: u32,
}

struct Page {
    width: f64,
    height: f64,
    ops: Vec<u8>,
    fonts: BTreeSet<Font>,
}

impl Page {
    fn blank(width: f64, height: f64) -> Self {
        Page {
            width,
            height,
            ops: Vec::new(),
            fonts: BTreeSet::new(),
        }
    }
}

impl Canvas<BufWriter<File>> {
    /// Open a canvas backed by a file. Truncates any existing file at
    /// `path`.
    pub fn create<P: AsRef<Path>>(path: P, page_size: (f64, f64)) -> Result<Self> {
        let file = File::create(path)?;
        Self::new(BufWriter::new(file), page_size)
    }
}

impl<W: Write> Canvas<W> {
    /// Open a canvas over the given writer. Writes the PDF header and
    /// opens the first page immediately; font state starts at
    /// Helvetica 12.
    pub fn new(out: W, (width, height): (f64, f64)) -> Result<Self> {
        let mut writer = DocWriter::new(out);
        writer.write_header()?;
        Ok(Canvas {
            writer,
            info: Vec::new(),
            page_ids: Vec::new(),
            page: Page::blank(width, height),
            font: Font::Helvetica,
            font_size: 12.0,
            compress: false,
            used_fonts: BTreeMap::new(),
            next_obj: FIRST_FREE_OBJ,
        })
    }

    /// Set a document info entry (e.g. "Title", "Producer").
    pub fn set_info(&mut self, key: &str, value: &str) -> &mut Self {
        self.info.push((key.to_owned(), value.to_owned()));
        self
    }

    /// Compress page content streams with FlateDecode.
    pub fn set_compression(&mut self, compress: bool) -> &mut Self {
        self.compress = compress;
        self
    }

    /// Set the font state for subsequent text operations.
    pub fn set_font(&mut self, font: Font, size: f64) -> &mut Self {
        self.font = font;
        self.font_size = size;
        self
    }

    /// Place a string at (x, y) in the current font. Coordinates use
    /// PDF's bottom-left origin, in points.
    pub fn draw_string(&mut self, x: f64, y: f64, text: &str) -> Result<()> {
        let encoded = winansi::encode(text).map_err(Error::Unencodable)?;
        self.font_object_id(self.font);
        self.page.fonts.insert(self.font);

        let ops = &mut self.page.ops;
        ops.extend_from_slice(b"BT\n");
        ops.extend_from_slice(
            format!(
                "/{} {} Tf\n{} {} Td\n(",
                self.font.resource_name(),
                fmt_coord(self.font_size),
                fmt_coord(x),
                fmt_coord(y),
            )
            .as_bytes(),
        );
        ops.extend_from_slice(&escape_literal(&encoded));
        ops.extend_from_slice(b") Tj\nET\n");
        Ok(())
    }

    /// Close the current page and open a new one of the same size.
    pub fn show_page(&mut self) -> Result<()> {
        self.flush_page()
    }

    /// Finish the document: flush the open page (unless it is a blank
    /// trailing page), then write font objects, the info dictionary,
    /// pages tree, catalog, xref and trailer. Returns the inner
    /// writer, flushed.
    pub fn save(mut self) -> Result<W> {
        if !self.page.ops.is_empty() || self.page_ids.is_empty() {
            self.flush_page()?;
        }

        let fonts: Vec<(Font, ObjectId)> = self
            .used_fonts
            .iter()
            .map(|(&font, &id)| (font, id))
            .collect();
        for (font, id) in fonts {
            let dict = Object::dict(vec![
                ("Type", Object::name("Font")),
                ("Subtype", Object::name("Type1")),
                ("BaseFont", Object::name(font.base_name())),
                ("Encoding", Object::name("WinAnsiEncoding")),
            ]);
            self.writer.write_object(id, &dict)?;
        }

        let info_id = if self.info.is_empty() {
            None
        } else {
            let id = self.alloc_id();
            let entries: Vec<(String, Object)> = self
                .info
                .iter()
                .map(|(k, v)| (k.clone(), Object::text_lossy(v)))
                .collect();
            self.writer.write_object(id, &Object::Dict(entries))?;
            Some(id)
        };

        let kids: Vec<Object> =
            self.page_ids.iter().map(|&id| Object::Ref(id)).collect();
        let pages = Object::dict(vec![
            ("Type", Object::name("Pages")),
            ("Kids", Object::Array(kids)),
            ("Count", Object::Integer(self.page_ids.len() as i64)),
        ]);
        self.writer.write_object(PAGES_ID, &pages)?;

        let catalog = Object::dict(vec![
            ("Type", Object::name("Catalog")),
            ("Pages", Object::Ref(PAGES_ID)),
        ]);
        self.writer.write_object(CATALOG_ID, &catalog)?;

        self.writer.write_xref_and_trailer(CATALOG_ID, info_id)?;

        debug!("document saved, {} page(s)", self.page_ids.len());
        let mut out = self.writer.into_inner();
        out.flush()?;
        Ok(out)
    }

    fn alloc_id(&mut self) -> ObjectId {
        let id = ObjectId(self.next_obj);
        self.next_obj += 1;
        id
    }

    /// Object id for a font dictionary, allocated on first use. The
    /// dictionary itself is written in `save`; pages may reference it
    /// earlier because xref order is independent of file order.
    fn font_object_id(&mut self, font: Font) -> ObjectId {
        if let Some(&id) = self.used_fonts.get(&font) {
            return id;
        }
        let id = self.alloc_id();
        self.used_fonts.insert(font, id);
        id
    }

    /// Write the current page's content stream and page dictionary,
    /// then reset to a blank page of the same size.
    fn flush_page(&mut self) -> Result<()> {
        let (width, height) = (self.page.width, self.page.height);
        let page = mem::replace(&mut self.page, Page::blank(width, height));

        let mut stream_dict = Vec::new();
        let data = if self.compress {
            let mut enc = ZlibEncoder::new(Vec::new(), Compression::default());
            enc.write_all(&page.ops)?;
            stream_dict.push(("Filter", Object::name("FlateDecode")));
            enc.finish()?
        } else {
            page.ops
        };
        let content_len = data.len();

        let content_id = self.alloc_id();
        self.writer
            .write_object(content_id, &Object::stream(stream_dict, data))?;

        let mut font_entries: Vec<(String, Object)> = Vec::new();
        for &font in &page.fonts {
            let id = self.used_fonts[&font];
            font_entries.push((font.resource_name().to_owned(), Object::Ref(id)));
        }
        let resources = if font_entries.is_empty() {
            Object::Dict(Vec::new())
        } else {
            Object::Dict(vec![("Font".to_owned(), Object::Dict(font_entries))])
        };

        let page_id = self.alloc_id();
        let page_dict = Object::dict(vec![
            ("Type", Object::name("Page")),
            ("Parent", Object::Ref(PAGES_ID)),
            (
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Real(width),
                    Object::Real(height),
                ]),
            ),
            ("Contents", Object::Ref(content_id)),
            ("Resources", resources),
        ]);
        self.writer.write_object(page_id, &page_dict)?;
        self.page_ids.push(page_id);

        debug!(
            "flushed page {} ({} content bytes)",
            self.page_ids.len(),
            content_len,
        );
        Ok(())
    }
}

/// Format a coordinate or font size for content streams: bare integer
/// when whole, trimmed decimal otherwise. Content-stream operands drop
/// the trailing `.0` ("100 692 Td"), unlike object reals, which keep
/// it ("/MediaBox [0 0 612.0 792.0]"); keep the two formats separate.
fn fmt_coord(v: f64) -> String {
    if v == v.floor() && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        let s = format!("{:.4}", v);
        s.trim_end_matches('0').trim_end_matches('.').to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coord_formatting() {
        assert_eq!(fmt_coord(100.0), "100");
        assert_eq!(fmt_coord(0.0), "0");
        assert_eq!(fmt_coord(12.5), "12.5");
        assert_eq!(fmt_coord(641.9999), "641.9999");
    }
}
