use std::io::{self, Write};

use crate::objects::{Object, ObjectId};

/// Low-level PDF serializer. Writes indirect objects to any `Write`
/// target and records each object's byte offset for the
/// cross-reference table.
pub struct DocWriter<W: Write> {
    out: W,
    offset: u64,
    offsets: Vec<(u32, u64)>,
}

impl<W: Write> DocWriter<W> {
    pub fn new(out: W) -> Self {
        DocWriter {
            out,
            offset: 0,
            offsets: Vec::new(),
        }
    }

    fn emit(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.out.write_all(bytes)?;
        self.offset += bytes.len() as u64;
        Ok(())
    }

    /// PDF 1.7 header plus the conventional binary-detection comment
    /// (four bytes >= 128).
    pub fn write_header(&mut self) -> io::Result<()> {
        self.emit(b"%PDF-1.7\n")?;
        self.emit(b"%\xe2\xe3\xcf\xd3\n")
    }

    /// Write an indirect object, recording its offset for the xref.
    pub fn write_object(&mut self, id: ObjectId, obj: &Object) -> io::Result<()> {
        self.offsets.push((id.0, self.offset));
        self.emit(format!("{} 0 obj\n", id.0).as_bytes())?;
        let mut body = Vec::new();
        serialize(&mut body, obj);
        self.emit(&body)?;
        self.emit(b"\nendobj\n")
    }

    /// Write the xref table, trailer, startxref and %%EOF marker.
    pub fn write_xref_and_trailer(
        &mut self,
        root: ObjectId,
        info: Option<ObjectId>,
    ) -> io::Result<()> {
        let xref_start = self.offset;
        let size = self
            .offsets
            .iter()
            .map(|&(num, _)| num)
            .max()
            .unwrap_or(0)
            + 1;

        // Offsets indexed by object number; unassigned numbers stay
        // free entries.
        let mut table: Vec<Option<u64>> = vec![None; size as usize];
        for &(num, off) in &self.offsets {
            table[num as usize] = Some(off);
        }

        self.emit(format!("xref\n0 {}\n", size).as_bytes())?;
        // Object 0: head of the free list. Entries are exactly 20 bytes.
        self.emit(b"0000000000 65535 f\r\n")?;
        for entry in table.into_iter().skip(1) {
            match entry {
                Some(off) => {
                    self.emit(format!("{:010} 00000 n\r\n", off).as_bytes())?
                }
                None => self.emit(b"0000000000 00000 f\r\n")?,
            }
        }

        let mut trailer = format!("trailer\n<< /Size {} /Root {} 0 R", size, root.0);
        if let Some(info) = info {
            trailer.push_str(&format!(" /Info {} 0 R", info.0));
        }
        trailer.push_str(" >>\n");
        self.emit(trailer.as_bytes())?;
        self.emit(format!("startxref\n{}\n%%EOF\n", xref_start).as_bytes())
    }

    /// Return the inner writer, consuming this DocWriter.
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Serialize an object to its PDF text representation. Infallible:
/// builds into a buffer, I/O happens only in `emit`.
fn serialize(out: &mut Vec<u8>, obj: &Object) {
    match obj {
        Object::Integer(n) => out.extend_from_slice(n.to_string().as_bytes()),
        Object::Real(v) => out.extend_from_slice(format_real(*v).as_bytes()),
        Object::Name(name) => {
            out.push(b'/');
            out.extend_from_slice(name.as_bytes());
        }
        Object::Text(bytes) => {
            out.push(b'(');
            out.extend_from_slice(&escape_literal(bytes));
            out.push(b')');
        }
        Object::Array(items) => {
            out.push(b'[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(b' ');
                }
                serialize(out, item);
            }
            out.push(b']');
        }
        Object::Dict(entries) => {
            out.extend_from_slice(b"<<");
            for (key, val) in entries {
                out.extend_from_slice(b" /");
                out.extend_from_slice(key.as_bytes());
                out.push(b' ');
                serialize(out, val);
            }
            out.extend_from_slice(b" >>");
        }
        Object::Stream { dict, data } => {
            out.extend_from_slice(b"<<");
            for (key, val) in dict {
                out.extend_from_slice(b" /");
                out.extend_from_slice(key.as_bytes());
                out.push(b' ');
                serialize(out, val);
            }
            out.extend_from_slice(
                format!(" /Length {} >>\nstream\n", data.len()).as_bytes(),
            );
            out.extend_from_slice(data);
            out.extend_from_slice(b"\nendstream");
        }
        Object::Ref(id) => {
            out.extend_from_slice(format!("{} 0 R", id.0).as_bytes())
        }
    }
}

/// Escape encoded bytes for a PDF literal string: backslash-escape
/// the delimiters, octal-escape everything outside printable ASCII.
pub fn escape_literal(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len());
    for &b in bytes {
        match b {
            b'\\' => out.extend_from_slice(b"\\\\"),
            b'(' => out.extend_from_slice(b"\\("),
            b')' => out.extend_from_slice(b"\\)"),
            0x20..=0x7e => out.push(b),
            _ => out.extend_from_slice(format!("\\{:03o}", b).as_bytes()),
        }
    }
    out
}

/// Format a real for PDF output: no trailing zeros, no scientific
/// notation, whole values keep one decimal place.
fn format_real(v: f64) -> String {
    if v == v.floor() && v.abs() < 1e15 {
        format!("{:.1}", v)
    } else {
        let s = format!("{:.6}", v);
        s.trim_end_matches('0').trim_end_matches('.').to_owned()
    }
}
