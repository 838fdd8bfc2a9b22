//! docProps/core.xml writer

use super::flow::DocumentMetadata;
use super::namespaces;
use super::xml::{escape_xml, XML_DECLARATION};
use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};

/// Generate the core properties part
pub fn write_core_properties(metadata: &DocumentMetadata, created: DateTime<FixedOffset>) -> String {
    let created = created
        .with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Secs, true);

    let mut xml = String::new();
    xml.push_str(XML_DECLARATION);
    xml.push('\n');
    xml.push_str(&format!(
        r#"<cp:coreProperties xmlns:cp="{}" xmlns:dc="{}" xmlns:dcterms="{}" xmlns:xsi="{}">"#,
        namespaces::CP,
        namespaces::DC,
        namespaces::DCTERMS,
        namespaces::XSI,
    ));
    xml.push_str(&format!("<dc:title>{}</dc:title>", escape_xml(&metadata.title)));
    xml.push_str(&format!("<dc:creator>{}</dc:creator>", escape_xml(&metadata.creator)));
    xml.push_str(&format!(
        "<dc:description>{}</dc:description>",
        escape_xml(&metadata.description)
    ));
    xml.push_str(&format!(
        "<cp:lastModifiedBy>{}</cp:lastModifiedBy>",
        escape_xml(&metadata.creator)
    ));
    xml.push_str(&format!(
        r#"<dcterms:created xsi:type="dcterms:W3CDTF">{c}</dcterms:created><dcterms:modified xsi:type="dcterms:W3CDTF">{c}</dcterms:modified>"#,
        c = created
    ));
    xml.push_str("</cp:coreProperties>");
    xml
}
