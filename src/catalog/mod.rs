//! Built-in tile catalogs
//!
//! Catalogs are content: symbolic names, glyphs, colours and the adjacency
//! data that implements the [`crate::rules::ruleset::Ruleset`] contract.
//! The solver only ever sees integer tile ids.

/// Catalog selection and per-catalog lookup tables
pub mod builtin;
/// Road and junction tiles
pub mod road;
/// Biome and transition tiles
pub mod terrain;

pub use builtin::Catalog;
