//! # seed-sql
//!
//! Renders a [`seed_core::SeedDataset`] into a PostgreSQL seed script.
//!
//! The pipeline is strictly linear:
//!
//! ```text
//! DatasetSource::load ─→ SeedDocument::build ─→ SeedDocument::render ─→ RenderedSeed::write_to
//!   (read input)           (collect INSERTs)      (join lines)             (single write)
//! ```
//!
//! Each record type has an `INSERT` builder in [`emit`]; every value passes
//! through [`literal::SqlLiteral`] so quoting, `NULL`s, integers and arrays
//! are rendered in one place.

pub mod document;
pub mod emit;
pub mod error;
pub mod literal;
pub mod source;
pub mod statement;
pub mod tables;

pub use document::{DocumentHeader, RenderedSeed, SeedDocument, WriteSummary};
pub use error::SqlError;
pub use literal::SqlLiteral;
pub use source::DatasetSource;
pub use statement::InsertStatement;
