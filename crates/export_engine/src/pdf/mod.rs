//! PDF Export
//!
//! A paginated, absolute-position renderer. Pages are composed from the
//! content plan in millimetres (cover page, part headings, sections with
//! wrapped text, running footers) and then written as a PDF 1.4 file using
//! the standard Times fonts.
//!
//! # Example
//!
//! ```ignore
//! use export_engine::pdf::{render_pdf, PdfLayout};
//!
//! let bytes = render_pdf(&project, &author, &PdfLayout::default())?;
//! std::fs::write("export.pdf", bytes)?;
//! ```

mod api;
mod content;
mod document;
mod encoding;
mod fonts;
mod layout;
mod objects;
mod options;
mod page;
mod wrap;
mod writer;

pub use api::{cover_page, document_info, render_pdf};
pub use document::DocumentInfo;
pub use encoding::WinAnsiEncoder;
pub use fonts::{text_width_mm, PdfFont};
pub use layout::{compose, CoverPage, Cursor};
pub use options::PdfLayout;
pub use page::{PageRenderInfo, TextRenderInfo};
pub use wrap::wrap_text;
pub use writer::{PdfDocumentWriter, PdfError, Result};
