//! [Content_Types].xml generation
//!
//! Declares the content type of every part in the package.

use super::content_type_values;
use super::namespaces;
use super::xml::{escape_xml, XML_DECLARATION};

/// Content types for a DOCX package, kept in insertion order
#[derive(Debug, Clone, Default)]
pub struct ContentTypes {
    /// Content types by extension (e.g., "xml" -> "application/xml")
    defaults: Vec<(String, String)>,
    /// Content types by part name (e.g., "/word/document.xml" -> "...")
    overrides: Vec<(String, String)>,
}

impl ContentTypes {
    /// Content types with the standard `rels` and `xml` defaults
    pub fn new() -> Self {
        let mut ct = Self::default();
        ct.add_default("rels", content_type_values::RELATIONSHIPS);
        ct.add_default("xml", content_type_values::XML);
        ct
    }

    pub fn add_default(&mut self, extension: &str, content_type: &str) {
        upsert(&mut self.defaults, extension.to_string(), content_type);
    }

    /// Add an override for a specific part
    pub fn add_override(&mut self, part_name: &str, content_type: &str) {
        let normalized = if part_name.starts_with('/') {
            part_name.to_string()
        } else {
            format!("/{}", part_name)
        };
        upsert(&mut self.overrides, normalized, content_type);
    }

    /// Get the content type for a given path
    pub fn get_content_type(&self, path: &str) -> Option<&str> {
        let normalized = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path)
        };
        if let Some((_, ct)) = self.overrides.iter().find(|(part, _)| *part == normalized) {
            return Some(ct);
        }

        let ext = path.rsplit('.').next()?;
        self.defaults
            .iter()
            .find(|(e, _)| e == ext)
            .map(|(_, ct)| ct.as_str())
    }

    /// Generate XML content for [Content_Types].xml
    pub fn to_xml(&self) -> String {
        let mut xml = String::new();
        xml.push_str(XML_DECLARATION);
        xml.push('\n');
        xml.push_str(&format!(r#"<Types xmlns="{}">"#, namespaces::CT));

        for (ext, ct) in &self.defaults {
            xml.push_str(&format!(
                r#"<Default Extension="{}" ContentType="{}"/>"#,
                escape_xml(ext),
                escape_xml(ct)
            ));
        }
        for (part, ct) in &self.overrides {
            xml.push_str(&format!(
                r#"<Override PartName="{}" ContentType="{}"/>"#,
                escape_xml(part),
                escape_xml(ct)
            ));
        }

        xml.push_str("</Types>");
        xml
    }
}

fn upsert(entries: &mut Vec<(String, String)>, key: String, value: &str) {
    match entries.iter_mut().find(|(k, _)| *k == key) {
        Some(entry) => entry.1 = value.to_string(),
        None => entries.push((key, value.to_string())),
    }
}

/// Content types for every part the export writer produces
pub fn create_default_content_types() -> ContentTypes {
    let mut ct = ContentTypes::new();
    ct.add_override("/word/document.xml", content_type_values::DOCUMENT);
    ct.add_override("/word/styles.xml", content_type_values::STYLES);
    ct.add_override("/word/footer1.xml", content_type_values::FOOTER);
    ct.add_override("/docProps/core.xml", content_type_values::CORE_PROPERTIES);
    ct
}
