//! PDF Writer
//!
//! File-level PDF generation:
//! - object numbering and the cross-reference table
//! - header, body, xref and trailer
//! - FlateDecode compression of content streams

use super::document::{create_catalog, create_pages, DocumentInfo, PDF_VERSION};
use super::encoding::WinAnsiEncoder;
use super::fonts::{PdfFont, PT_PER_MM};
use super::objects::{PdfDictionary, PdfObject, PdfSerializer};
use super::page::{render_page, PageRenderInfo};
use std::io::{self, Write};
use thiserror::Error;

/// Error type for PDF operations
#[derive(Debug, Error)]
pub enum PdfError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    #[error("Invalid layout: {0}")]
    InvalidLayout(String),

    #[error("Character {character:?} cannot be drawn with the standard fonts (in {text:?})")]
    UnsupportedCharacter { character: char, text: String },
}

/// Result type for PDF operations
pub type Result<T> = std::result::Result<T, PdfError>;

/// Low-level writer that tracks byte offsets for the xref table
pub struct PdfWriter<W: Write> {
    writer: W,
    position: u64,
    /// (object number, byte offset)
    offsets: Vec<(u32, u64)>,
    next_obj_num: u32,
    compress: bool,
}

impl<W: Write> PdfWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            position: 0,
            offsets: Vec::new(),
            next_obj_num: 1,
            compress: true,
        }
    }

    pub fn set_compression(&mut self, compress: bool) {
        self.compress = compress;
    }

    fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
        self.writer.write_all(data)?;
        self.position += data.len() as u64;
        Ok(())
    }

    fn write_str(&mut self, s: &str) -> Result<()> {
        self.write_bytes(s.as_bytes())
    }

    /// Reserve the next object number
    pub fn allocate_object(&mut self) -> u32 {
        let num = self.next_obj_num;
        self.next_obj_num += 1;
        num
    }

    pub fn write_header(&mut self) -> Result<()> {
        self.write_str(&format!("%PDF-{}\n", PDF_VERSION))?;
        // Binary marker so transfer tools treat the file as binary
        self.write_bytes(&[b'%', 0xE2, 0xE3, 0xCF, 0xD3, b'\n'])
    }

    fn begin_object(&mut self, obj_num: u32) -> Result<()> {
        self.offsets.push((obj_num, self.position));
        self.write_str(&format!("{} 0 obj\n", obj_num))
    }

    /// Write an indirect object
    pub fn write_object(&mut self, obj_num: u32, object: &PdfObject) -> Result<()> {
        self.begin_object(obj_num)?;
        let mut serializer = PdfSerializer::new(Vec::new());
        serializer.write_object(object)?;
        self.write_bytes(&serializer.into_inner())?;
        self.write_str("\nendobj\n")
    }

    /// Write a stream object, compressing it if enabled
    pub fn write_stream_object(&mut self, obj_num: u32, mut dict: PdfDictionary, data: Vec<u8>) -> Result<()> {
        let data = if self.compress {
            dict.insert("Filter", PdfObject::name("FlateDecode"));
            compress(&data)?
        } else {
            data
        };
        dict.insert("Length", PdfObject::Integer(data.len() as i64));

        self.begin_object(obj_num)?;
        let mut serializer = PdfSerializer::new(Vec::new());
        serializer.write_dictionary(&dict)?;
        self.write_bytes(&serializer.into_inner())?;
        self.write_str("\nstream\n")?;
        self.write_bytes(&data)?;
        self.write_str("\nendstream\nendobj\n")
    }

    /// Write the cross-reference table and trailer
    pub fn write_xref_and_trailer(&mut self, catalog_ref: u32, info_ref: u32) -> Result<()> {
        let xref_offset = self.position;

        let mut offsets = std::mem::take(&mut self.offsets);
        offsets.sort_by_key(|(num, _)| *num);

        let mut table = String::new();
        table.push_str("xref\n");
        table.push_str(&format!("0 {}\n", self.next_obj_num));
        table.push_str("0000000000 65535 f \n");

        let mut expected = 1u32;
        for (num, offset) in &offsets {
            while expected < *num {
                table.push_str("0000000000 65535 f \n");
                expected += 1;
            }
            table.push_str(&format!("{:010} 00000 n \n", offset));
            expected = num + 1;
        }
        self.write_str(&table)?;

        let mut trailer = PdfDictionary::new();
        trailer.insert("Size", PdfObject::Integer(self.next_obj_num as i64));
        trailer.insert("Root", PdfObject::Reference(catalog_ref));
        trailer.insert("Info", PdfObject::Reference(info_ref));

        self.write_str("trailer\n")?;
        let mut serializer = PdfSerializer::new(Vec::new());
        serializer.write_dictionary(&trailer)?;
        self.write_bytes(&serializer.into_inner())?;
        self.write_str(&format!("\nstartxref\n{}\n%%EOF\n", xref_offset))
    }

    pub fn finish(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

fn compress(data: &[u8]) -> Result<Vec<u8>> {
    use flate2::write::ZlibEncoder;
    use flate2::Compression;

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}

/// Writes composed pages out as a complete PDF file
pub struct PdfDocumentWriter {
    info: DocumentInfo,
    encoder: WinAnsiEncoder,
    compress: bool,
}

impl PdfDocumentWriter {
    pub fn new(info: DocumentInfo, encoder: WinAnsiEncoder, compress: bool) -> Self {
        Self {
            info,
            encoder,
            compress,
        }
    }

    pub fn write<W: Write>(&self, pages: &[PageRenderInfo], writer: W) -> Result<()> {
        if pages.is_empty() {
            return Err(PdfError::InvalidDocument("No pages to export".to_string()));
        }

        // Encode every page first so a rejected character fails before any
        // bytes are written
        let streams = pages
            .iter()
            .map(|page| render_page(page, &self.encoder))
            .collect::<Result<Vec<_>>>()?;

        let mut pdf = PdfWriter::new(writer);
        pdf.set_compression(self.compress);
        pdf.write_header()?;

        let catalog_ref = pdf.allocate_object();
        let pages_ref = pdf.allocate_object();
        let info_ref = pdf.allocate_object();
        let font_refs: Vec<(PdfFont, u32)> = PdfFont::ALL
            .iter()
            .map(|font| (*font, pdf.allocate_object()))
            .collect();
        let page_refs: Vec<(u32, u32)> = pages
            .iter()
            .map(|_| (pdf.allocate_object(), pdf.allocate_object()))
            .collect();

        pdf.write_object(catalog_ref, &PdfObject::Dictionary(create_catalog(pages_ref)))?;
        let kids: Vec<u32> = page_refs.iter().map(|(page_ref, _)| *page_ref).collect();
        pdf.write_object(pages_ref, &PdfObject::Dictionary(create_pages(&kids)))?;
        pdf.write_object(info_ref, &PdfObject::Dictionary(self.info.to_dictionary()))?;

        for (font, font_ref) in &font_refs {
            pdf.write_object(*font_ref, &PdfObject::Dictionary(font.font_dict()))?;
        }

        let mut font_resources = PdfDictionary::new();
        for (font, font_ref) in &font_refs {
            font_resources.insert(font.resource_name(), PdfObject::Reference(*font_ref));
        }
        let mut resources = PdfDictionary::new();
        resources.insert("Font", PdfObject::Dictionary(font_resources));
        resources.insert(
            "ProcSet",
            PdfObject::Array(vec![PdfObject::name("PDF"), PdfObject::name("Text")]),
        );

        for ((page, content), (page_ref, content_ref)) in pages.iter().zip(streams).zip(&page_refs) {
            pdf.write_stream_object(*content_ref, PdfDictionary::new(), content.into_bytes())?;

            let mut page_dict = PdfDictionary::typed("Page");
            page_dict.insert("Parent", PdfObject::Reference(pages_ref));
            page_dict.insert(
                "MediaBox",
                PdfObject::Array(vec![
                    PdfObject::Integer(0),
                    PdfObject::Integer(0),
                    PdfObject::Real(page.width * PT_PER_MM),
                    PdfObject::Real(page.height * PT_PER_MM),
                ]),
            );
            page_dict.insert("Contents", PdfObject::Reference(*content_ref));
            page_dict.insert("Resources", PdfObject::Dictionary(resources.clone()));
            pdf.write_object(*page_ref, &PdfObject::Dictionary(page_dict))?;
        }

        pdf.write_xref_and_trailer(catalog_ref, info_ref)?;
        pdf.finish()?;
        Ok(())
    }

    pub fn write_to_bytes(&self, pages: &[PageRenderInfo]) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.write(pages, &mut buffer)?;
        Ok(buffer)
    }
}
