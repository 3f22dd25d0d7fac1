//! transcds: coding-sequence translation and sequence digests
//!
//! Translates a CDS (DNA or RNA) into a one-letter protein sequence against
//! a choice of genetic-code table, with IUPAC ambiguity handling, start-codon
//! overrides, per-position exceptions, and partial-codon support. Also
//! provides the common normalized sequence digests (SEGUID, MD5, SHA-1,
//! SHA-512, VMC/GA4GH truncated SHA-512).
//!
//! # Example
//!
//! ```
//! use transcds::{translate_cds, TranslationOptions, TranslationTable};
//!
//! let protein = translate_cds("AUGCGA", &TranslationOptions::default()).unwrap();
//! assert_eq!(protein, "MR");
//!
//! let mito = TranslationOptions {
//!     table: TranslationTable::VertebrateMitochondrial,
//!     ..Default::default()
//! };
//! assert_eq!(translate_cds("ATATGA", &mito).unwrap(), "MW");
//! ```

pub mod ambiguity;
pub mod digests;
pub mod error;
pub mod gencode;
pub mod translate;

// Re-export the public surface
pub use ambiguity::{resolve_codon, ResolvedCodon};
pub use digests::{
    normalize_sequence, seq_md5, seq_seguid, seq_sha1, seq_sha512, seq_vmc_digest,
    truncated_digest,
};
pub use error::{Result, TranscdsError};
pub use gencode::{GeneticCode, TranslationTable};
pub use translate::{translate_cds, translate_cds_opt, TranslationOptions};
