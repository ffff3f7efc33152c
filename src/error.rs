//! Error taxonomy shared by every detection entry point.

use thiserror::Error;

/// Convenience alias used across the library.
pub type Result<T> = std::result::Result<T, LicenseError>;

/// Everything that can stop a license from being identified.
#[derive(Error, Debug)]
pub enum LicenseError {
    /// The text matched none of the classification rules.
    #[error("license: could not guess license type")]
    UnrecognizedLicense,

    /// No file name in the scanned directory looked like a license file.
    #[error("license: unable to find any license file")]
    NoLicenseFileFound,

    /// Reserved for single-result callers that want to reject ambiguity.
    /// Directory scans return every match instead of raising this.
    #[error("license: multiple license files found")]
    MultipleLicensesFound,

    /// A file-name pattern could not be compiled.
    #[error("license: invalid file pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A string was parsed as a license identifier but is not in the registry.
    #[error("license: unknown license identifier {0:?}")]
    UnknownIdentifier(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
