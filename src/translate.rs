//! Coding-sequence translation
//!
//! The driver walks a CDS codon by codon and assembles the protein string.
//! Per codon, precedence is: caller-supplied exception map, then
//! partial-codon handling, then start-codon override, then table lookup via
//! ambiguity resolution. Stop codons are emitted as the configurable
//! terminator symbol and do not end the walk; a CDS with internal stops
//! yields one terminator per stop.
//!
//! RNA input is accepted everywhere (U is normalized to T up front) and
//! letter case is ignored.

use rustc_hash::FxHashMap;

use crate::ambiguity::resolve_codon;
use crate::error::{Result, TranscdsError};
use crate::gencode::TranslationTable;

/// Options for [`translate_cds`]
///
/// `Default` produces the common case: standard table, full codons
/// required, `*` terminator, start-codon override on, no exceptions.
/// Overrides read naturally with struct-update syntax:
///
/// ```
/// use transcds::TranslationOptions;
///
/// let options = TranslationOptions { full_codons: false, ..Default::default() };
/// ```
#[derive(Debug, Clone)]
pub struct TranslationOptions {
    /// Genetic-code table to translate against
    pub table: TranslationTable,
    /// Require the sequence length to be a multiple of three; when false, a
    /// trailing 1- or 2-base remainder is permitted and contributes the
    /// terminator symbol
    pub full_codons: bool,
    /// Symbol substituted for stop codons and for a permitted trailing
    /// remainder; the empty string suppresses it
    pub ter_symbol: String,
    /// Per-position overrides: zero-based offset of a codon's first base to
    /// the literal symbol emitted for that codon, bypassing table lookup,
    /// start-codon logic, and terminator substitution
    pub exception_map: Option<FxHashMap<usize, char>>,
    /// Emit the initiator M when the codon at offset 0 is a start codon of
    /// the active table
    pub starts_at_first_codon: bool,
}

impl Default for TranslationOptions {
    fn default() -> Self {
        Self {
            table: TranslationTable::Standard,
            full_codons: true,
            ter_symbol: "*".to_string(),
            exception_map: None,
            starts_at_first_codon: true,
        }
    }
}

impl TranslationOptions {
    fn exception_for(&self, offset: usize) -> Option<char> {
        self.exception_map.as_ref().and_then(|map| map.get(&offset)).copied()
    }
}

/// Translate a coding sequence to a one-letter protein sequence.
///
/// The sequence may be DNA or RNA, in either case, and may contain IUPAC
/// ambiguity codes; a codon whose literal expansions disagree translates to
/// `X`. An empty sequence yields an empty protein.
///
/// # Errors
///
/// * [`TranscdsError::IncompleteCodon`] when the length is not a multiple of
///   three and `options.full_codons` is set. The check runs up front; no
///   partial protein is produced.
/// * [`TranscdsError::InvalidBase`] when a complete codon contains a
///   character outside the base/ambiguity alphabet. Bases of a permitted
///   trailing remainder are never inspected.
pub fn translate_cds(sequence: &str, options: &TranslationOptions) -> Result<String> {
    if sequence.is_empty() {
        return Ok(String::new());
    }
    let remainder = sequence.len() % 3;
    if options.full_codons && remainder != 0 {
        return Err(TranscdsError::IncompleteCodon { remainder });
    }

    // One normalization pass: fold case, RNA to DNA
    let seq: Vec<u8> = sequence
        .bytes()
        .map(|b| match b.to_ascii_uppercase() {
            b'U' => b'T',
            upper => upper,
        })
        .collect();

    let code = options.table.code();
    let whole = seq.len() - remainder;
    let mut protein = String::with_capacity(seq.len() / 3 + 1);

    for i in (0..whole).step_by(3) {
        if let Some(symbol) = options.exception_for(i) {
            protein.push(symbol);
            continue;
        }
        let resolved = resolve_codon(&seq[i..i + 3], code, i)?;
        if i == 0 && options.starts_at_first_codon && resolved.is_start {
            protein.push('M');
            continue;
        }
        if resolved.is_stop {
            protein.push_str(&options.ter_symbol);
        } else {
            protein.push(resolved.aa as char);
        }
    }

    if remainder != 0 {
        match options.exception_for(whole) {
            Some(symbol) => protein.push(symbol),
            None => protein.push_str(&options.ter_symbol),
        }
    }

    Ok(protein)
}

/// [`translate_cds`] with the "no sequence" sentinel passed through:
/// `None` in, `Ok(None)` out.
pub fn translate_cds_opt(
    sequence: Option<&str>,
    options: &TranslationOptions,
) -> Result<Option<String>> {
    sequence.map(|seq| translate_cds(seq, options)).transpose()
}
