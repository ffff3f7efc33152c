use crate::error::{LicenseError, Result};
use crate::license::normalize::{contains, normalize};
use crate::models::LicenseId;

/// Phrase test evaluated against normalized text.
#[derive(Debug, Clone, Copy)]
pub enum Predicate {
    /// Every phrase must be present.
    AllOf(&'static [&'static str]),
    /// At least one phrase must be present.
    AnyOf(&'static [&'static str]),
}

impl Predicate {
    pub fn holds(&self, normalized: &str) -> bool {
        match self {
            Predicate::AllOf(phrases) => phrases.iter().all(|p| contains(normalized, p)),
            Predicate::AnyOf(phrases) => phrases.iter().any(|p| contains(normalized, p)),
        }
    }
}

/// What a matching rule resolves to.
#[derive(Debug, Clone, Copy)]
pub enum Outcome {
    Is(LicenseId),
    /// Second-level decision between two families sharing boilerplate.
    Refine {
        phrase: &'static str,
        then: LicenseId,
        otherwise: LicenseId,
    },
}

impl Outcome {
    fn resolve(&self, normalized: &str) -> LicenseId {
        match *self {
            Outcome::Is(id) => id,
            Outcome::Refine {
                phrase,
                then,
                otherwise,
            } => {
                if contains(normalized, phrase) {
                    then
                } else {
                    otherwise
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub when: Predicate,
    pub outcome: Outcome,
}

impl Rule {
    /// The identifier this rule yields for `normalized`, if it fires.
    pub fn evaluate(&self, normalized: &str) -> Option<LicenseId> {
        self.when
            .holds(normalized)
            .then(|| self.outcome.resolve(normalized))
    }
}

/// Classification rules, evaluated top to bottom; the first that fires wins.
///
/// Phrases are lower case with single spaces, matching [`normalize`] output.
/// The GPL family is ordered so that each version's dated title line is
/// checked before the families that merely refer to it.
pub static RULES: &[Rule] = &[
    Rule {
        when: Predicate::AllOf(&[
            "permission is hereby granted, free of charge, to any person obtaining a copy of this software",
        ]),
        outcome: Outcome::Is(LicenseId::Mit),
    },
    Rule {
        when: Predicate::AllOf(&[
            "permission to use, copy, modify, and/or distribute this software for any",
        ]),
        outcome: Outcome::Is(LicenseId::Isc),
    },
    Rule {
        when: Predicate::AnyOf(&[
            "apache license version 2.0, january 2004",
            "http://www.apache.org/licenses/license-2.0",
        ]),
        outcome: Outcome::Is(LicenseId::Apache20),
    },
    Rule {
        when: Predicate::AllOf(&["gnu general public license version 2, june 1991"]),
        outcome: Outcome::Is(LicenseId::Gpl20),
    },
    Rule {
        when: Predicate::AllOf(&["gnu general public license version 3, 29 june 2007"]),
        outcome: Outcome::Is(LicenseId::Gpl30),
    },
    Rule {
        when: Predicate::AllOf(&["gnu lesser general public license version 2.1, february 1999"]),
        outcome: Outcome::Is(LicenseId::Lgpl21),
    },
    Rule {
        when: Predicate::AllOf(&["gnu lesser general public license version 3, 29 june 2007"]),
        outcome: Outcome::Is(LicenseId::Lgpl30),
    },
    Rule {
        when: Predicate::AllOf(&["gnu affero general public license version 3, 19 november 2007"]),
        outcome: Outcome::Is(LicenseId::Agpl30),
    },
    Rule {
        when: Predicate::AllOf(&["mozilla public license", "version 2.0"]),
        outcome: Outcome::Is(LicenseId::Mpl20),
    },
    // BSD-2 and BSD-3 share the preamble; only BSD-3 has the
    // non-endorsement clause. Anything else defaults to BSD-2.
    Rule {
        when: Predicate::AllOf(&["redistribution and use in source and binary forms"]),
        outcome: Outcome::Refine {
            phrase: "neither the name of",
            then: LicenseId::Bsd3Clause,
            otherwise: LicenseId::Bsd2Clause,
        },
    },
    Rule {
        when: Predicate::AllOf(&["common development and distribution license (cddl) version 1.0"]),
        outcome: Outcome::Is(LicenseId::Cddl10),
    },
    Rule {
        when: Predicate::AllOf(&["eclipse public license - v 1.0"]),
        outcome: Outcome::Is(LicenseId::Epl10),
    },
    Rule {
        when: Predicate::AllOf(&[
            "permission is granted to anyone to use this software for any purpose",
        ]),
        outcome: Outcome::Is(LicenseId::Zlib),
    },
    Rule {
        when: Predicate::AllOf(&[
            "this is free and unencumbered software released into the public domain",
        ]),
        outcome: Outcome::Is(LicenseId::Unlicense),
    },
];

/// Identify the license family of raw `text`.
///
/// Keys on short, legally stable phrases rather than scoring similarity
/// against full reference texts: heavily edited or translated licenses come
/// back as [`LicenseError::UnrecognizedLicense`] instead of a wrong guess.
pub fn classify(text: &str) -> Result<LicenseId> {
    classify_normalized(&normalize(text))
}

/// Same as [`classify`] for text that has already been through [`normalize`].
pub fn classify_normalized(normalized: &str) -> Result<LicenseId> {
    let id = RULES
        .iter()
        .find_map(|rule| rule.evaluate(normalized))
        .ok_or(LicenseError::UnrecognizedLicense)?;
    tracing::trace!(license = %id, "classification rule matched");
    Ok(id)
}
