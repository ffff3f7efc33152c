//! License text normalization and phrase-based classification.
//!
//! - [`normalize`] — folds raw text into the canonical comparison form and
//!   provides the literal containment primitive.
//! - [`classifier`] — the ordered rule table mapping normalized text to a
//!   [`LicenseId`](crate::models::LicenseId).

pub mod classifier;
pub mod normalize;
