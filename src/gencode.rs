//! Genetic code tables
//!
//! Reference: https://www.ncbi.nlm.nih.gov/Taxonomy/Utils/wprintgc.cgi
//!
//! This module provides the registry of genetic-code tables used for
//! translating nucleotide codons to amino acids. Each table is a 64-entry
//! amino-acid map in TCAG codon order (index `b1*16 + b2*4 + b3` with T=0,
//! C=1, A=2, G=3) together with the set of codons accepted as translation
//! initiators for that table. Stop codons are the `*` entries of the map.
//!
//! Tables are process-wide immutable constants; concurrent reads need no
//! synchronization.

use std::str::FromStr;

use crate::error::{Result, TranscdsError};

/// Standard nuclear code (NCBI transl_table=1)
static STANDARD_AA: &[u8; 64] = b"FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG";

/// Standard code with TGA recoded from stop to selenocysteine (U)
static SELENOCYSTEINE_AA: &[u8; 64] = b"FFLLSSSSYY**CCUWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG";

/// Vertebrate mitochondrial code (NCBI transl_table=2):
/// TGA -> W, ATA -> M, AGA/AGG -> stop
static VERTEBRATE_MITOCHONDRIAL_AA: &[u8; 64] =
    b"FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNKKSS**VVVVAAAADDEEGGGG";

/// Map an unambiguous nucleotide byte to its 2-bit table index (TCAG order).
///
/// Only used in constant context to build start-codon masks, so an
/// out-of-alphabet byte is a compile-time error.
const fn base_index(base: u8) -> usize {
    match base {
        b'T' => 0,
        b'C' => 1,
        b'A' => 2,
        b'G' => 3,
        _ => panic!("start codons must be unambiguous DNA triplets"),
    }
}

/// Bit for one codon within a 64-bit start-codon mask
const fn codon_bit(codon: &[u8; 3]) -> u64 {
    1 << (base_index(codon[0]) * 16 + base_index(codon[1]) * 4 + base_index(codon[2]))
}

/// Initiators of the standard code: ATG plus the alternatives CTG and TTG
const STANDARD_STARTS: u64 = codon_bit(b"ATG") | codon_bit(b"CTG") | codon_bit(b"TTG");

/// Initiators of the vertebrate mitochondrial code
const VERTEBRATE_MITOCHONDRIAL_STARTS: u64 = codon_bit(b"ATT")
    | codon_bit(b"ATC")
    | codon_bit(b"ATA")
    | codon_bit(b"ATG")
    | codon_bit(b"GTG");

/// Genetic code translation table
///
/// Holds the amino-acid symbol for each of the 64 unambiguous codons and the
/// table's start-codon set. Obtained from [`TranslationTable::code`]; never
/// constructed by callers.
pub struct GeneticCode {
    table: &'static [u8; 64],
    starts: u64,
}

pub static STANDARD: GeneticCode = GeneticCode { table: STANDARD_AA, starts: STANDARD_STARTS };

pub static SELENOCYSTEINE: GeneticCode =
    GeneticCode { table: SELENOCYSTEINE_AA, starts: STANDARD_STARTS };

pub static VERTEBRATE_MITOCHONDRIAL: GeneticCode = GeneticCode {
    table: VERTEBRATE_MITOCHONDRIAL_AA,
    starts: VERTEBRATE_MITOCHONDRIAL_STARTS,
};

impl GeneticCode {
    /// Amino-acid symbol at a 0..64 codon index
    pub(crate) fn aa_at(&self, index: usize) -> u8 {
        self.table[index]
    }

    /// Whether the codon at `index` is a start codon of this table
    pub(crate) fn is_start_index(&self, index: usize) -> bool {
        self.starts >> index & 1 == 1
    }

    /// Translate an unambiguous codon to an amino acid
    ///
    /// Accepts upper- or lower-case bases and U for T. Anything that is not
    /// an unambiguous triplet (wrong length, ambiguity code, out-of-alphabet
    /// byte) yields `X`, the unknown amino acid.
    pub fn codon_to_aa(&self, codon: &[u8]) -> u8 {
        match codon_index(codon) {
            Some(idx) => self.table[idx],
            None => b'X',
        }
    }

    /// Whether `codon` is in this table's start-codon set
    pub fn is_start_codon(&self, codon: &[u8]) -> bool {
        match codon_index(codon) {
            Some(idx) => self.is_start_index(idx),
            None => false,
        }
    }

    /// Whether `codon` is a stop codon of this table
    pub fn is_stop_codon(&self, codon: &[u8]) -> bool {
        match codon_index(codon) {
            Some(idx) => self.table[idx] == b'*',
            None => false,
        }
    }
}

/// TCAG table index of an unambiguous codon, or `None` for anything else
fn codon_index(codon: &[u8]) -> Option<usize> {
    if codon.len() != 3 {
        return None;
    }
    let mut idx = 0;
    for &b in codon {
        idx <<= 2;
        match b.to_ascii_uppercase() {
            b'T' | b'U' => idx |= 0,
            b'C' => idx |= 1,
            b'A' => idx |= 2,
            b'G' => idx |= 3,
            _ => return None,
        }
    }
    Some(idx)
}

/// Registered genetic-code tables
///
/// The table set is closed and known at build time; every variant selects a
/// `static` [`GeneticCode`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TranslationTable {
    /// Standard nuclear code (NCBI transl_table=1)
    #[default]
    Standard,
    /// Standard code with TGA recoded to selenocysteine
    Selenocysteine,
    /// Vertebrate mitochondrial code (NCBI transl_table=2)
    VertebrateMitochondrial,
}

impl TranslationTable {
    /// Look up a table by its registry name
    ///
    /// Recognized names: `standard`, `selenocysteine`,
    /// `vertebrate_mitochondrial`.
    pub fn lookup(name: &str) -> Result<Self> {
        match name {
            "standard" => Ok(Self::Standard),
            "selenocysteine" => Ok(Self::Selenocysteine),
            "vertebrate_mitochondrial" => Ok(Self::VertebrateMitochondrial),
            _ => Err(TranscdsError::UnknownTable { name: name.to_string() }),
        }
    }

    /// Registry name of this table
    pub fn name(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Selenocysteine => "selenocysteine",
            Self::VertebrateMitochondrial => "vertebrate_mitochondrial",
        }
    }

    /// The table's codon-to-amino-acid map and start set
    pub fn code(self) -> &'static GeneticCode {
        match self {
            Self::Standard => &STANDARD,
            Self::Selenocysteine => &SELENOCYSTEINE,
            Self::VertebrateMitochondrial => &VERTEBRATE_MITOCHONDRIAL,
        }
    }
}

impl FromStr for TranslationTable {
    type Err = TranscdsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::lookup(s)
    }
}
