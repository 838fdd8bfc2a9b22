//! DOCX Writer Infrastructure
//!
//! Assembles the package parts into a ZIP archive.

use super::content_types::{create_default_content_types, ContentTypes};
use super::core_props::write_core_properties;
use super::document_writer::DocumentWriter;
use super::error::{DocxError, DocxResult};
use super::flow::FlowDocument;
use super::footer_writer::write_footer;
use super::relationships::{create_document_rels, create_root_rels};
use super::style::DocxStyle;
use super::styles_writer::StylesWriter;
use chrono::Local;
use std::io::{Cursor, Seek, Write};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Writes one flow document as a DOCX archive
pub struct DocxWriter<W: Write + Seek> {
    zip: ZipWriter<W>,
    content_types: ContentTypes,
}

impl<W: Write + Seek> DocxWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            zip: ZipWriter::new(writer),
            content_types: create_default_content_types(),
        }
    }

    /// Write every part and finish the archive, returning the inner writer
    pub fn write(mut self, document: &FlowDocument, style: &DocxStyle) -> DocxResult<W> {
        style.validate()?;

        let root_rels = create_root_rels();
        let (doc_rels, footer_id) = create_document_rels();
        let created = style
            .creation_date
            .unwrap_or_else(|| Local::now().fixed_offset());

        // Content types lead the archive
        let content_types_xml = self.content_types.to_xml();
        self.write_file("[Content_Types].xml", &content_types_xml)?;
        self.write_file("_rels/.rels", &root_rels.to_xml())?;
        self.write_file(
            "docProps/core.xml",
            &write_core_properties(&document.metadata, created),
        )?;
        self.write_file(
            "word/document.xml",
            &DocumentWriter::new(style).write(document, &footer_id),
        )?;
        self.write_file("word/styles.xml", &StylesWriter::new(style).write())?;
        self.write_file("word/footer1.xml", &write_footer(&document.footer))?;
        self.write_file("word/_rels/document.xml.rels", &doc_rels.to_xml())?;

        Ok(self.zip.finish()?)
    }

    /// Write a file to the ZIP archive. The part must have a declared
    /// content type.
    fn write_file(&mut self, path: &str, content: &str) -> DocxResult<()> {
        if path != "[Content_Types].xml" && self.content_types.get_content_type(path).is_none() {
            return Err(DocxError::InvalidContentType(path.to_string()));
        }

        let options = SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Deflated);
        self.zip.start_file(path, options)?;
        self.zip.write_all(content.as_bytes())?;
        Ok(())
    }
}

/// Package a flow document into DOCX bytes in memory
pub fn pack_to_bytes(document: &FlowDocument, style: &DocxStyle) -> DocxResult<Vec<u8>> {
    let cursor = DocxWriter::new(Cursor::new(Vec::new())).write(document, style)?;
    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docx::flow::build_flow_document;
    use project_model::{Author, Project, ProjectType};
    use std::io::Read;
    use zip::ZipArchive;

    fn read_part(bytes: &[u8], name: &str) -> String {
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut file = archive.by_name(name).unwrap();
        let mut content = String::new();
        file.read_to_string(&mut content).unwrap();
        content
    }

    #[test]
    fn test_package_parts() {
        let document = build_flow_document(&Project::new(ProjectType::Fiction), &Author::new("Ruth"));
        let bytes = pack_to_bytes(&document, &DocxStyle::default()).unwrap();

        let archive = ZipArchive::new(Cursor::new(bytes.as_slice())).unwrap();
        let names: Vec<&str> = archive.file_names().collect();
        for part in [
            "[Content_Types].xml",
            "_rels/.rels",
            "docProps/core.xml",
            "word/document.xml",
            "word/styles.xml",
            "word/footer1.xml",
            "word/_rels/document.xml.rels",
        ] {
            assert!(names.contains(&part), "missing {}", part);
        }

        assert!(read_part(&bytes, "word/document.xml").contains("Untitled Project"));
        assert!(read_part(&bytes, "docProps/core.xml").contains("<dc:creator>Ruth</dc:creator>"));
    }

    #[test]
    fn test_footer_relationship_matches_section() {
        let document = build_flow_document(&Project::new(ProjectType::Nonfiction), &Author::anonymous());
        let bytes = pack_to_bytes(&document, &DocxStyle::default()).unwrap();

        let rels = read_part(&bytes, "word/_rels/document.xml.rels");
        assert!(rels.contains(r#"Id="rId2""#));
        assert!(rels.contains(r#"Target="footer1.xml""#));
        let body = read_part(&bytes, "word/document.xml");
        assert!(body.contains(r#"r:id="rId2""#));
    }

    #[test]
    fn test_invalid_style_fails() {
        let document = build_flow_document(&Project::new(ProjectType::Fiction), &Author::anonymous());
        let style = DocxStyle {
            body_font: " ".into(),
            ..Default::default()
        };
        assert!(matches!(pack_to_bytes(&document, &style), Err(DocxError::InvalidStyle(_))));
    }
}
