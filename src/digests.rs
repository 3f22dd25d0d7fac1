//! Normalized sequence digests
//!
//! Reference: https://github.com/ga4gh/vmc (truncated digest)
//! Reference: Babnigg & Giometti 2006, the SEGUID checksum
//!
//! Digests identify a sequence independently of formatting: by default the
//! input is normalized first (whitespace and `*` stripped, letters
//! uppercased), so `"acgt"`, `"ACGT"` and `" A C G T "` all hash alike.
//! Pass `normalize = false` to hash the bytes exactly as supplied.

use std::borrow::Cow;

use base64::engine::general_purpose::{STANDARD, URL_SAFE};
use base64::Engine as _;
use md5::{Digest, Md5};
use sha1::Sha1;
use sha2::Sha512;

use crate::error::{Result, TranscdsError};

/// Normalize a sequence for hashing: strip ASCII whitespace and `*`,
/// uppercase the rest.
///
/// Unlike translation input handling, U is kept as U; RNA and DNA hash
/// differently on purpose.
///
/// # Errors
///
/// [`TranscdsError::NonAlphabeticSequence`] when a character other than A-Z
/// remains after stripping.
pub fn normalize_sequence(seq: &str) -> Result<String> {
    let mut normalized = String::with_capacity(seq.len());
    for ch in seq.chars() {
        if ch.is_ascii_whitespace() || ch == '*' {
            continue;
        }
        let upper = ch.to_ascii_uppercase();
        if !upper.is_ascii_uppercase() {
            return Err(TranscdsError::NonAlphabeticSequence {
                character: ch,
                offset: normalized.len(),
            });
        }
        normalized.push(upper);
    }
    Ok(normalized)
}

fn prepared(seq: &str, normalize: bool) -> Result<Cow<'_, str>> {
    if normalize {
        Ok(Cow::Owned(normalize_sequence(seq)?))
    } else {
        Ok(Cow::Borrowed(seq))
    }
}

/// SEGUID of a sequence: base64 SHA-1 with the trailing `=` stripped,
/// compatible with BioPython's `seguid`.
pub fn seq_seguid(seq: &str, normalize: bool) -> Result<String> {
    let seq = prepared(seq, normalize)?;
    let digest = Sha1::digest(seq.as_bytes());
    Ok(STANDARD.encode(digest).trim_end_matches('=').to_string())
}

/// MD5 hex digest of a sequence
pub fn seq_md5(seq: &str, normalize: bool) -> Result<String> {
    let seq = prepared(seq, normalize)?;
    Ok(format!("{:x}", Md5::digest(seq.as_bytes())))
}

/// SHA-1 hex digest of a sequence
pub fn seq_sha1(seq: &str, normalize: bool) -> Result<String> {
    let seq = prepared(seq, normalize)?;
    Ok(format!("{:x}", Sha1::digest(seq.as_bytes())))
}

/// SHA-512 hex digest of a sequence
pub fn seq_sha512(seq: &str, normalize: bool) -> Result<String> {
    let seq = prepared(seq, normalize)?;
    Ok(format!("{:x}", Sha512::digest(seq.as_bytes())))
}

/// 24-byte VMC Global Sequence Digest of a sequence (`sha512t24u`):
/// URL-safe base64 of the truncated SHA-512, always 32 characters.
pub fn seq_vmc_digest(seq: &str, normalize: bool) -> Result<String> {
    let seq = prepared(seq, normalize)?;
    Ok(truncated_digest(seq.as_bytes(), 24))
}

/// URL-safe base64 of the first `digest_size` bytes of the SHA-512 digest
pub fn truncated_digest(data: &[u8], digest_size: usize) -> String {
    let digest = Sha512::digest(data);
    URL_SAFE.encode(&digest[..digest_size])
}
