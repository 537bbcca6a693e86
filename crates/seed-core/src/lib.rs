//! # seed-core
//!
//! Record types, dataset container, and ID generation for vseed.
//!
//! This crate provides the foundational types shared across the vseed crates:
//! - Record structs for every seeded table family (styles, glossary, stages, prompts, courses)
//! - The [`dataset::SeedDataset`] container and the built-in literal dataset
//! - The [`ids::IdGenerator`] seam with UUID and sequential implementations
//! - Cross-cutting error types

pub mod builtin;
pub mod dataset;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;

pub use dataset::SeedDataset;
pub use errors::CoreError;
