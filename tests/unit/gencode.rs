//! Unit tests for genetic-code tables and the registry

use transcds::{TranscdsError, TranslationTable};

const BASES: [u8; 4] = [b'T', b'C', b'A', b'G'];

fn all_codons() -> Vec<[u8; 3]> {
    let mut codons = Vec::with_capacity(64);
    for &b1 in &BASES {
        for &b2 in &BASES {
            for &b3 in &BASES {
                codons.push([b1, b2, b3]);
            }
        }
    }
    codons
}

#[test]
fn test_registry_names() {
    assert_eq!(TranslationTable::lookup("standard").unwrap(), TranslationTable::Standard);
    assert_eq!(
        TranslationTable::lookup("selenocysteine").unwrap(),
        TranslationTable::Selenocysteine
    );
    assert_eq!(
        TranslationTable::lookup("vertebrate_mitochondrial").unwrap(),
        TranslationTable::VertebrateMitochondrial
    );

    let err = TranslationTable::lookup("yeast_mitochondrial").unwrap_err();
    assert_eq!(err, TranscdsError::UnknownTable { name: "yeast_mitochondrial".to_string() });

    // FromStr goes through the same registry
    let parsed: TranslationTable = "selenocysteine".parse().unwrap();
    assert_eq!(parsed, TranslationTable::Selenocysteine);
    assert!("".parse::<TranslationTable>().is_err());
}

#[test]
fn test_default_table_is_standard() {
    assert_eq!(TranslationTable::default(), TranslationTable::Standard);
    assert_eq!(TranslationTable::Standard.name(), "standard");
}

#[test]
fn test_selenocysteine_differs_from_standard_only_at_tga() {
    let standard = TranslationTable::Standard.code();
    let sec = TranslationTable::Selenocysteine.code();
    for codon in all_codons() {
        let expected = if &codon == b"TGA" { b'U' } else { standard.codon_to_aa(&codon) };
        assert_eq!(
            sec.codon_to_aa(&codon),
            expected,
            "{}",
            std::str::from_utf8(&codon).unwrap()
        );
    }
}

#[test]
fn test_vertebrate_mitochondrial_recodings() {
    let standard = TranslationTable::Standard.code();
    let mito = TranslationTable::VertebrateMitochondrial.code();
    for codon in all_codons() {
        let expected = match &codon {
            b"TGA" => b'W',
            b"ATA" => b'M',
            b"AGA" | b"AGG" => b'*',
            other => standard.codon_to_aa(other),
        };
        assert_eq!(
            mito.codon_to_aa(&codon),
            expected,
            "{}",
            std::str::from_utf8(&codon).unwrap()
        );
    }
}

#[test]
fn test_stop_codon_sets() {
    let standard = TranslationTable::Standard.code();
    let stops: Vec<String> = all_codons()
        .into_iter()
        .filter(|codon| standard.is_stop_codon(codon))
        .map(|codon| String::from_utf8(codon.to_vec()).unwrap())
        .collect();
    assert_eq!(stops, ["TAA", "TAG", "TGA"]);

    let mito = TranslationTable::VertebrateMitochondrial.code();
    let stops: Vec<String> = all_codons()
        .into_iter()
        .filter(|codon| mito.is_stop_codon(codon))
        .map(|codon| String::from_utf8(codon.to_vec()).unwrap())
        .collect();
    assert_eq!(stops, ["TAA", "TAG", "AGA", "AGG"]);

    let sec = TranslationTable::Selenocysteine.code();
    assert!(!sec.is_stop_codon(b"TGA"));
}

#[test]
fn test_start_codon_predicates() {
    let standard = TranslationTable::Standard.code();
    for codon in [b"ATG", b"CTG", b"TTG"] {
        assert!(standard.is_start_codon(codon));
    }
    assert!(!standard.is_start_codon(b"GTG"));

    let mito = TranslationTable::VertebrateMitochondrial.code();
    for codon in [b"ATT", b"ATC", b"ATA", b"ATG", b"GTG"] {
        assert!(mito.is_start_codon(codon));
    }
    assert!(!mito.is_start_codon(b"TTG"));
}
