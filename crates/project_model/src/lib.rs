//! Project Model - Book planning records
//!
//! This crate defines the read-only project and author records that the
//! export pipeline consumes. The shapes mirror the JSON produced by the
//! persistence layer: camelCase keys, every content field optional.

mod author;
mod error;
mod fiction;
mod nonfiction;
mod project;

pub use author::*;
pub use error::*;
pub use fiction::*;
pub use nonfiction::*;
pub use project::*;
