//! Unit tests for normalized sequence digests

use transcds::{
    normalize_sequence, seq_md5, seq_seguid, seq_sha1, seq_sha512, seq_vmc_digest, TranscdsError,
};

#[test]
fn test_normalization_is_shared_across_digests() {
    // Whitespace, case, and trailing '*' never change a normalized digest
    let variants = ["ACGT", "acgt", "ACGT*", " A C G T ", "acg\tt"];
    for variant in variants {
        assert_eq!(seq_seguid(variant, true).unwrap(), "IQiZThf2zKn/I1KtqStlEdsHYDQ");
        assert_eq!(seq_md5(variant, true).unwrap(), "f1f8f4bf413b16ad135722aa4591043e");
        assert_eq!(
            seq_sha1(variant, true).unwrap(),
            "2108994e17f6cca9ff2352ada92b6511db076034"
        );
        assert_eq!(
            seq_vmc_digest(variant, true).unwrap(),
            "aKF498dAxcJAqme6QYQ7EZ07-fiw8Kw2"
        );
    }
}

#[test]
fn test_raw_digests_are_case_sensitive() {
    assert_eq!(seq_seguid("acgt", false).unwrap(), "lII0AoG1/I8qKY271rgv5CFZtsU");
    assert_eq!(seq_md5("acgt", false).unwrap(), "db516c3913e179338b162b2476d1c23f");
    assert_eq!(seq_sha1("acgt", false).unwrap(), "9482340281b5fc8f2a298dbbd6b82fe42159b6c5");
    assert_eq!(seq_vmc_digest("acgt", false).unwrap(), "eFwawHHdibaZBDcs9kW3gm31h1NNJcQe");
    assert_ne!(seq_md5("acgt", false).unwrap(), seq_md5("acgt", true).unwrap());
}

#[test]
fn test_empty_sequence_digests() {
    assert_eq!(seq_seguid("", true).unwrap(), "2jmj7l5rSw0yVb/vlWAYkK/YBwk");
    assert_eq!(seq_md5("", true).unwrap(), "d41d8cd98f00b204e9800998ecf8427e");
    assert_eq!(seq_sha1("", true).unwrap(), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
    assert_eq!(seq_vmc_digest("", true).unwrap(), "z4PhNX7vuL3xVChQ1m2AB9Yg5AULVxXc");
    assert_eq!(seq_sha512("", true).unwrap().len(), 128);
}

#[test]
fn test_vmc_digest_is_32_urlsafe_chars() {
    let digest = seq_vmc_digest("ACGTACGTACGT", true).unwrap();
    assert_eq!(digest.len(), 32);
    assert!(digest
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
}

#[test]
fn test_normalize_rejects_non_alphabetic() {
    assert_eq!(normalize_sequence("tgg ca").unwrap(), "TGGCA");
    let err = normalize_sequence("ACGT-ACGT").unwrap_err();
    assert_eq!(err, TranscdsError::NonAlphabeticSequence { character: '-', offset: 4 });

    // The same failure propagates through every digest entry point
    assert!(seq_seguid("AC>GT", true).is_err());
    assert!(seq_sha512("AC>GT", true).is_err());
    // ...but raw hashing accepts anything
    assert!(seq_sha512("AC>GT", false).is_ok());
}
