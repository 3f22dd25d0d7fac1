//! Unit test infrastructure for transcds
//!
//! Tests are organized by module:
//! - `gencode` - Genetic-code tables and the registry
//! - `ambiguity` - IUPAC ambiguity resolution
//! - `translate` - The CDS translation driver
//! - `digests` - Normalized sequence digests

pub mod digests;
pub mod gencode;
