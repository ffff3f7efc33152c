use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::detector::FilePatterns;
use crate::error::{LicenseError, Result};
use crate::license::classifier::classify;
use crate::scanner::{read_license_file, scan_directory, scan_directory_first};

/// A license family recognized by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LicenseId {
    #[serde(rename = "MIT")]
    Mit,
    #[serde(rename = "ISC")]
    Isc,
    #[serde(rename = "BSD-3-Clause")]
    Bsd3Clause,
    #[serde(rename = "BSD-2-Clause")]
    Bsd2Clause,
    #[serde(rename = "Apache-2.0")]
    Apache20,
    #[serde(rename = "MPL-2.0")]
    Mpl20,
    #[serde(rename = "GPL-2.0")]
    Gpl20,
    #[serde(rename = "GPL-3.0")]
    Gpl30,
    #[serde(rename = "LGPL-2.1")]
    Lgpl21,
    #[serde(rename = "LGPL-3.0")]
    Lgpl30,
    #[serde(rename = "AGPL-3.0")]
    Agpl30,
    #[serde(rename = "CDDL-1.0")]
    Cddl10,
    #[serde(rename = "EPL-1.0")]
    Epl10,
    #[serde(rename = "zlib")]
    Zlib,
    #[serde(rename = "Unlicense")]
    Unlicense,
}

/// The registry of recognized identifiers, in catalog order.
pub const KNOWN_LICENSES: [LicenseId; 15] = LicenseId::ALL;

impl LicenseId {
    pub const ALL: [LicenseId; 15] = [
        LicenseId::Mit,
        LicenseId::Isc,
        LicenseId::Bsd3Clause,
        LicenseId::Bsd2Clause,
        LicenseId::Apache20,
        LicenseId::Mpl20,
        LicenseId::Gpl20,
        LicenseId::Gpl30,
        LicenseId::Lgpl21,
        LicenseId::Lgpl30,
        LicenseId::Agpl30,
        LicenseId::Cddl10,
        LicenseId::Epl10,
        LicenseId::Zlib,
        LicenseId::Unlicense,
    ];

    /// The standardized identifier string, e.g. `"Apache-2.0"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            LicenseId::Mit => "MIT",
            LicenseId::Isc => "ISC",
            LicenseId::Bsd3Clause => "BSD-3-Clause",
            LicenseId::Bsd2Clause => "BSD-2-Clause",
            LicenseId::Apache20 => "Apache-2.0",
            LicenseId::Mpl20 => "MPL-2.0",
            LicenseId::Gpl20 => "GPL-2.0",
            LicenseId::Gpl30 => "GPL-3.0",
            LicenseId::Lgpl21 => "LGPL-2.1",
            LicenseId::Lgpl30 => "LGPL-3.0",
            LicenseId::Agpl30 => "AGPL-3.0",
            LicenseId::Cddl10 => "CDDL-1.0",
            LicenseId::Epl10 => "EPL-1.0",
            LicenseId::Zlib => "zlib",
            LicenseId::Unlicense => "Unlicense",
        }
    }
}

impl std::fmt::Display for LicenseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LicenseId {
    type Err = LicenseError;

    /// Exact, case-sensitive lookup against the registry.
    fn from_str(s: &str) -> Result<Self> {
        KNOWN_LICENSES
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| LicenseError::UnknownIdentifier(s.to_string()))
    }
}

/// Whether `identifier` names a license in the registry.
pub fn is_known(identifier: &str) -> bool {
    identifier.parse::<LicenseId>().is_ok()
}

/// A body of license text together with its identifier and provenance.
///
/// `identifier` is empty until classification succeeds. Classification only
/// ever writes registry identifiers, but [`License::new`] accepts whatever
/// the caller supplies; use [`License::is_recognized`] to tell them apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct License {
    identifier: String,
    /// Raw text exactly as supplied or read; never normalized.
    text: String,
    source_path: Option<PathBuf>,
}

impl License {
    /// Build a license from an explicit identifier and text. No
    /// classification is performed.
    pub fn new(identifier: impl Into<String>, text: impl Into<String>) -> Self {
        License {
            identifier: identifier.into(),
            text: text.into(),
            source_path: None,
        }
    }

    /// Classify caller-supplied text.
    pub fn from_text(text: impl Into<String>) -> Result<Self> {
        let mut license = License::new(String::new(), text);
        license.classify()?;
        Ok(license)
    }

    /// Read `path` and classify its contents.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        read_license_file(path.as_ref())
    }

    /// First license classified from the candidate files in `dir`.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        scan_directory_first(dir.as_ref(), &FilePatterns::default())
    }

    /// Every license classified from the candidate files in `dir`, in
    /// listing order.
    pub fn all_from_dir(dir: impl AsRef<Path>) -> Result<Vec<Self>> {
        scan_directory(dir.as_ref(), &FilePatterns::default())
    }

    pub(crate) fn with_source(text: String, path: PathBuf) -> Self {
        License {
            identifier: String::new(),
            text,
            source_path: Some(path),
        }
    }

    /// The identifier, or `""` when the license has not been classified.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The identifier as a registry entry, if it is one.
    pub fn license_id(&self) -> Option<LicenseId> {
        self.identifier.parse().ok()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Path the text was read from; `None` for caller-supplied text.
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Whether the identifier is a member of the registry.
    pub fn is_recognized(&self) -> bool {
        is_known(&self.identifier)
    }

    /// Run the classification rules over the text and store the result.
    ///
    /// On failure the identifier is left as it was. Repeated calls over the
    /// same text give the same outcome.
    pub fn classify(&mut self) -> Result<LicenseId> {
        let id = classify(&self.text)?;
        self.identifier = id.as_str().to_string();
        Ok(id)
    }
}
