//! Export Engine - PDF and Word export of book planning projects
//!
//! The pipeline turns a [`project_model::Project`] into a downloadable
//! document. A format-agnostic content plan decides which sections exist and
//! in what order; two backends render that plan:
//!
//! - `pdf`: an absolute-position, paginated renderer with a cover page and
//!   numbered branded footers
//! - `docx`: a flow-document renderer that leaves pagination to Word, apart
//!   from explicit page breaks
//!
//! The `export` module is the single entry point that picks a backend,
//! hands the finished bytes to a [`SaveTarget`], and reports a two-valued
//! outcome.

pub mod branding;
pub mod docx;
mod error;
pub mod export;
pub mod pdf;
pub mod plan;
mod save;
mod settings;

pub use error::*;
pub use export::{ExportFormat, ExportOutcome, Exporter, Packer};
pub use plan::{ContentPlan, GroupField, Part, Section, SectionContent};
pub use save::*;
pub use settings::*;
