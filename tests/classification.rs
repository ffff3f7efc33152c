//! Reference texts, normalization invariance, and case invariance.

use license_detectr::{classify, License, LicenseError, LicenseId, KNOWN_LICENSES};
use proptest::prelude::*;

const FIXTURES: [(LicenseId, &str); 15] = [
    (LicenseId::Mit, include_str!("fixtures/MIT.txt")),
    (LicenseId::Isc, include_str!("fixtures/ISC.txt")),
    (LicenseId::Bsd3Clause, include_str!("fixtures/BSD-3-Clause.txt")),
    (LicenseId::Bsd2Clause, include_str!("fixtures/BSD-2-Clause.txt")),
    (LicenseId::Apache20, include_str!("fixtures/Apache-2.0.txt")),
    (LicenseId::Mpl20, include_str!("fixtures/MPL-2.0.txt")),
    (LicenseId::Gpl20, include_str!("fixtures/GPL-2.0.txt")),
    (LicenseId::Gpl30, include_str!("fixtures/GPL-3.0.txt")),
    (LicenseId::Lgpl21, include_str!("fixtures/LGPL-2.1.txt")),
    (LicenseId::Lgpl30, include_str!("fixtures/LGPL-3.0.txt")),
    (LicenseId::Agpl30, include_str!("fixtures/AGPL-3.0.txt")),
    (LicenseId::Cddl10, include_str!("fixtures/CDDL-1.0.txt")),
    (LicenseId::Epl10, include_str!("fixtures/EPL-1.0.txt")),
    (LicenseId::Zlib, include_str!("fixtures/zlib.txt")),
    (LicenseId::Unlicense, include_str!("fixtures/Unlicense.txt")),
];

// ---------------------------------------------------------------------------
// Reference texts
// ---------------------------------------------------------------------------

#[test]
fn every_reference_text_classifies_to_its_identifier() {
    for (id, text) in FIXTURES {
        assert_eq!(classify(text).unwrap(), id, "reference text for {id}");
    }
}

#[test]
fn fixtures_cover_the_whole_registry() {
    for id in KNOWN_LICENSES {
        assert!(FIXTURES.iter().any(|(f, _)| *f == id), "no fixture for {id}");
    }
}

#[test]
fn crlf_line_endings_do_not_change_the_result() {
    for (id, text) in FIXTURES {
        let crlf = text.replace('\n', "\r\n");
        assert_eq!(classify(&crlf).unwrap(), id, "CRLF text for {id}");
    }
}

#[test]
fn blank_lines_do_not_change_the_result() {
    for (id, text) in FIXTURES {
        let spaced = text.replace('\n', "\n\n\n");
        assert_eq!(classify(&spaced).unwrap(), id, "double-spaced text for {id}");
    }
}

#[test]
fn upper_and_lower_case_do_not_change_the_result() {
    for (id, text) in FIXTURES {
        assert_eq!(classify(&text.to_uppercase()).unwrap(), id, "upper case {id}");
        assert_eq!(classify(&text.to_lowercase()).unwrap(), id, "lower case {id}");
    }
}

#[test]
fn bsd_preamble_alone_is_bsd2_and_with_endorsement_clause_is_bsd3() {
    let preamble = "Redistribution and use in source and binary forms, with or without\n\
                    modification, are permitted provided that the following conditions are met:\n";
    assert_eq!(classify(preamble).unwrap(), LicenseId::Bsd2Clause);

    let with_clause = format!(
        "{preamble}3. Neither the name of the copyright holder nor the names of its contributors\n"
    );
    assert_eq!(classify(&with_clause).unwrap(), LicenseId::Bsd3Clause);
}

#[test]
fn unrelated_text_is_unrecognized() {
    assert!(matches!(classify("hello world"), Err(LicenseError::UnrecognizedLicense)));
    assert!(matches!(
        License::from_text("All rights reserved."),
        Err(LicenseError::UnrecognizedLicense)
    ));
}

#[test]
fn entity_built_from_text_has_no_source_path() {
    let (_, text) = FIXTURES[0];
    let license = License::from_text(text).unwrap();
    assert_eq!(license.identifier(), "MIT");
    assert!(license.is_recognized());
    assert!(license.source_path().is_none());
    assert_eq!(license.text(), text);
}

// ---------------------------------------------------------------------------
// Property: any whitespace run between words normalizes away
// ---------------------------------------------------------------------------

fn whitespace_run() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![" ", "  ", "\n", "\r\n", "\n\n", "\r\n\r\n", "\t\t", "   \n  "])
}

fn fixture() -> impl Strategy<Value = (LicenseId, &'static str)> {
    prop::sample::select(FIXTURES.to_vec())
}

proptest! {
    #[test]
    fn whitespace_between_words_is_irrelevant(
        (id, text) in fixture(),
        runs in prop::collection::vec(whitespace_run(), 1..64),
    ) {
        let mut i = 0;
        let mangled: String = text
            .split(' ')
            .enumerate()
            .map(|(n, word)| {
                if n == 0 {
                    word.to_string()
                } else {
                    i += 1;
                    format!("{}{}", runs[i % runs.len()], word)
                }
            })
            .collect();
        prop_assert_eq!(classify(&mangled).unwrap(), id);
    }

    #[test]
    fn mixed_case_is_irrelevant(
        (id, text) in fixture(),
        mask in prop::collection::vec(any::<bool>(), 1..32),
    ) {
        let mixed: String = text
            .chars()
            .enumerate()
            .map(|(n, c)| {
                if mask[n % mask.len()] {
                    c.to_ascii_uppercase()
                } else {
                    c.to_ascii_lowercase()
                }
            })
            .collect();
        prop_assert_eq!(classify(&mixed).unwrap(), id);
    }

    #[test]
    fn classification_is_deterministic((id, text) in fixture()) {
        let mut license = License::new("", text);
        prop_assert_eq!(license.classify().unwrap(), id);
        prop_assert_eq!(license.classify().unwrap(), id);
        prop_assert_eq!(license.identifier(), id.as_str());
    }
}
