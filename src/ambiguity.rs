//! IUPAC ambiguity resolution
//!
//! Reference: https://www.bioinformatics.org/sms/iupac.html
//!
//! An ambiguity code stands for a set of literal bases (N = any, R = A/G,
//! Y = C/T, ...). A codon containing ambiguity codes is resolved by
//! expanding every position into its candidate set, translating each
//! combination of the Cartesian product (at most 4x4x4 = 64), and collapsing
//! the outcomes: if all combinations agree on one amino acid, that amino
//! acid is the result; otherwise the result is `X`, the unknown amino acid.
//!
//! Start and stop classification follows the same rule. A codon is a start
//! only when every expansion is in the table's start set, and a stop only
//! when every expansion is a stop; `X` never counts as a stop. The two flags
//! are independent of symbol agreement, so a codon whose expansions disagree
//! on the amino acid can still be a unanimous start (ATN in the vertebrate
//! mitochondrial table).

use crate::error::{Result, TranscdsError};
use crate::gencode::GeneticCode;

/// Candidate-base mask per input byte, over TCAG order
/// (bit 0 = T, bit 1 = C, bit 2 = A, bit 3 = G).
/// Zero marks a byte outside the recognized alphabet.
static BASE_MASKS: [u8; 256] = {
    let mut table = [0u8; 256];
    table[b'T' as usize] = 0b0001;
    table[b'U' as usize] = 0b0001; // RNA, same as T
    table[b'C' as usize] = 0b0010;
    table[b'A' as usize] = 0b0100;
    table[b'G' as usize] = 0b1000;
    table[b'R' as usize] = 0b1100; // A/G (purine)
    table[b'Y' as usize] = 0b0011; // C/T (pyrimidine)
    table[b'S' as usize] = 0b1010; // C/G
    table[b'W' as usize] = 0b0101; // A/T
    table[b'K' as usize] = 0b1001; // G/T
    table[b'M' as usize] = 0b0110; // A/C
    table[b'B' as usize] = 0b1011; // C/G/T
    table[b'D' as usize] = 0b1101; // A/G/T
    table[b'H' as usize] = 0b0111; // A/C/T
    table[b'V' as usize] = 0b1110; // A/C/G
    table[b'N' as usize] = 0b1111; // any
    table
};

/// Outcome of resolving one complete codon against a genetic code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedCodon {
    /// Resolved amino-acid symbol, or `X` when the expansions disagree
    pub aa: u8,
    /// Every expansion is in the table's start-codon set
    pub is_start: bool,
    /// Every expansion is a stop codon (`aa` is the stop symbol)
    pub is_stop: bool,
}

/// Resolve a complete 3-base codon, expanding any ambiguity codes.
///
/// `offset` is the zero-based position of the codon's first base within the
/// full sequence; it is only used to report `InvalidBase` locations. Bases
/// are folded to upper case and U is accepted for T.
pub fn resolve_codon(codon: &[u8], code: &GeneticCode, offset: usize) -> Result<ResolvedCodon> {
    debug_assert_eq!(codon.len(), 3);
    let mut masks = [0u8; 3];
    for (pos, &base) in codon.iter().enumerate() {
        let mask = BASE_MASKS[base.to_ascii_uppercase() as usize];
        if mask == 0 {
            return Err(TranscdsError::InvalidBase { base: base as char, offset: offset + pos });
        }
        masks[pos] = mask;
    }

    let mut aa = 0u8;
    let mut uniform = true;
    let mut all_start = true;
    for b1 in 0..4 {
        if masks[0] & (1 << b1) == 0 {
            continue;
        }
        for b2 in 0..4 {
            if masks[1] & (1 << b2) == 0 {
                continue;
            }
            for b3 in 0..4 {
                if masks[2] & (1 << b3) == 0 {
                    continue;
                }
                let index = b1 * 16 + b2 * 4 + b3;
                let symbol = code.aa_at(index);
                if aa == 0 {
                    aa = symbol;
                } else if aa != symbol {
                    uniform = false;
                }
                if !code.is_start_index(index) {
                    all_start = false;
                }
            }
        }
    }

    let aa = if uniform { aa } else { b'X' };
    Ok(ResolvedCodon { aa, is_start: all_start, is_stop: aa == b'*' })
}
