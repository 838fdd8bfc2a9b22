//! Word Export
//!
//! A flow-document renderer. The content plan becomes an ordered list of
//! blocks (title, headings, paragraphs and explicit page breaks) and the
//! block list is packaged as a WordprocessingML (DOCX) archive. Word does
//! its own pagination, so nothing here measures text.
//!
//! ## Package layout
//!
//! - `[Content_Types].xml` - Content type definitions
//! - `_rels/.rels` - Root relationships
//! - `docProps/core.xml` - Creator, title and description
//! - `word/document.xml` - Body blocks and section properties
//! - `word/styles.xml` - Normal, Title, Heading1-3 and Footer styles
//! - `word/footer1.xml` - Branding footer shown on every page
//! - `word/_rels/document.xml.rels` - Document relationships

mod content_types;
mod core_props;
mod document_writer;
mod error;
mod flow;
mod footer_writer;
mod packer;
mod relationships;
mod style;
mod styles_writer;
mod writer;
mod xml;

pub use error::{DocxError, DocxResult};
pub use flow::{build_flow_document, DocumentMetadata, FlowBlock, FlowDocument};
pub use packer::DocxPacker;
pub use style::DocxStyle;
pub use writer::{pack_to_bytes, DocxWriter};

/// XML namespaces used in the generated parts
pub mod namespaces {
    /// Main WordprocessingML namespace
    pub const W: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
    /// Relationships namespace
    pub const R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
    /// Package relationships namespace
    pub const PKG_REL: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
    /// Content types namespace
    pub const CT: &str = "http://schemas.openxmlformats.org/package/2006/content-types";
    /// Core properties namespace
    pub const CP: &str = "http://schemas.openxmlformats.org/package/2006/metadata/core-properties";
    pub const DC: &str = "http://purl.org/dc/elements/1.1/";
    pub const DCTERMS: &str = "http://purl.org/dc/terms/";
    pub const XSI: &str = "http://www.w3.org/2001/XMLSchema-instance";
}

/// Relationship types used in the package
pub mod relationship_types {
    pub const DOCUMENT: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
    pub const CORE_PROPERTIES: &str = "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";
    pub const STYLES: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";
    pub const FOOTER: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/footer";
}

/// Content types for package parts
pub mod content_type_values {
    pub const DOCUMENT: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml";
    pub const STYLES: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml";
    pub const FOOTER: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.footer+xml";
    pub const CORE_PROPERTIES: &str = "application/vnd.openxmlformats-package.core-properties+xml";
    pub const RELATIONSHIPS: &str = "application/vnd.openxmlformats-package.relationships+xml";
    pub const XML: &str = "application/xml";
}
