//! Custom error types for translation and digest operations.

use thiserror::Error;

/// Result type alias for transcds operations
pub type Result<T> = std::result::Result<T, TranscdsError>;

/// Error type for transcds operations
///
/// All variants are terminal for the call that produced them: no partial
/// output is ever returned alongside an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranscdsError {
    /// A character outside the recognized nucleotide/ambiguity alphabet
    #[error("Invalid base {base:?} at offset {offset}")]
    InvalidBase {
        /// The offending character
        base: char,
        /// Zero-based offset of the character within the sequence
        offset: usize,
    },

    /// Sequence length is not a multiple of three while full codons are required
    #[error("Incomplete codon: {remainder} trailing base(s) (sequence length must be a multiple of 3)")]
    IncompleteCodon {
        /// Number of leftover bases (1 or 2)
        remainder: usize,
    },

    /// An unrecognized genetic-code table name was requested
    #[error("Unknown translation table '{name}'")]
    UnknownTable {
        /// The rejected table name
        name: String,
    },

    /// Digest normalization left a character other than A-Z in the sequence
    #[error("Non-alphabetic character {character:?} in normalized sequence at offset {offset}")]
    NonAlphabeticSequence {
        /// The offending character
        character: char,
        /// Zero-based offset within the whitespace-stripped sequence
        offset: usize,
    },
}
