//! PDF Object Model
//!
//! The handful of PDF object types the export writer needs, plus a
//! serializer that writes them in PDF syntax.

use std::collections::BTreeMap;
use std::io::{self, Write};

/// PDF object types
#[derive(Debug, Clone, PartialEq)]
pub enum PdfObject {
    Integer(i64),
    Real(f64),
    /// Literal string; bytes are already in the target encoding
    String(Vec<u8>),
    /// Name object (written with a leading /)
    Name(String),
    Array(Vec<PdfObject>),
    Dictionary(PdfDictionary),
    /// Indirect reference to an object number (generation is always 0)
    Reference(u32),
}

impl PdfObject {
    pub fn name(s: impl Into<String>) -> Self {
        PdfObject::Name(s.into())
    }

    pub fn string(bytes: impl Into<Vec<u8>>) -> Self {
        PdfObject::String(bytes.into())
    }
}

/// PDF dictionary. Keys are kept sorted so output is stable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PdfDictionary {
    entries: BTreeMap<String, PdfObject>,
}

impl PdfDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dictionary with its /Type entry set
    pub fn typed(type_name: &str) -> Self {
        let mut dict = Self::new();
        dict.insert("Type", PdfObject::name(type_name));
        dict
    }

    pub fn insert(&mut self, key: impl Into<String>, value: PdfObject) {
        self.entries.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&PdfObject> {
        self.entries.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &PdfObject)> {
        self.entries.iter()
    }
}

/// Writes objects in PDF syntax
pub struct PdfSerializer<W: Write> {
    writer: W,
}

impl<W: Write> PdfSerializer<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_object(&mut self, obj: &PdfObject) -> io::Result<()> {
        match obj {
            PdfObject::Integer(n) => write!(self.writer, "{}", n),
            PdfObject::Real(n) => write!(self.writer, "{}", format_real(*n)),
            PdfObject::String(bytes) => self.write_string(bytes),
            PdfObject::Name(name) => self.write_name(name),
            PdfObject::Array(items) => {
                write!(self.writer, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(self.writer, " ")?;
                    }
                    self.write_object(item)?;
                }
                write!(self.writer, "]")
            }
            PdfObject::Dictionary(dict) => self.write_dictionary(dict),
            PdfObject::Reference(num) => write!(self.writer, "{} 0 R", num),
        }
    }

    pub fn write_dictionary(&mut self, dict: &PdfDictionary) -> io::Result<()> {
        write!(self.writer, "<<")?;
        for (key, value) in dict.iter() {
            write!(self.writer, " ")?;
            self.write_name(key)?;
            write!(self.writer, " ")?;
            self.write_object(value)?;
        }
        write!(self.writer, " >>")
    }

    fn write_string(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.writer.write_all(&escape_string(bytes))
    }

    fn write_name(&mut self, name: &str) -> io::Result<()> {
        write!(self.writer, "/")?;
        for byte in name.bytes() {
            let delimiter = matches!(
                byte,
                b'#' | b'(' | b')' | b'<' | b'>' | b'[' | b']' | b'{' | b'}' | b'/' | b'%'
            );
            if (0x21..=0x7E).contains(&byte) && !delimiter {
                self.writer.write_all(&[byte])?;
            } else {
                write!(self.writer, "#{:02X}", byte)?;
            }
        }
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Parenthesized literal string. Bytes outside printable ASCII are written
/// as octal escapes so the file body stays 7-bit clean.
pub fn escape_string(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len() + 2);
    out.push(b'(');
    for &byte in bytes {
        match byte {
            b'(' | b')' | b'\\' => {
                out.push(b'\\');
                out.push(byte);
            }
            b'\n' => out.extend_from_slice(b"\\n"),
            b'\r' => out.extend_from_slice(b"\\r"),
            b'\t' => out.extend_from_slice(b"\\t"),
            0x20..=0x7E => out.push(byte),
            _ => out.extend_from_slice(format!("\\{:03o}", byte).as_bytes()),
        }
    }
    out.push(b')');
    out
}

/// Shortest decimal form with at most four fractional digits
pub fn format_real(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{:.0}", n)
    } else {
        let s = format!("{:.4}", n);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
