//! Directory scanning: find candidate license files and classify each one.

use std::path::Path;

use crate::detector::{locate_license_files, FilePatterns};
use crate::error::{LicenseError, Result};
use crate::models::License;

/// Read `path` and classify its contents, keeping the path as provenance.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD, so a Latin-1
/// file is still classified; [`License::text`] holds the decoded text.
pub fn read_license_file(path: &Path) -> Result<License> {
    let bytes = std::fs::read(path)?;
    let text = String::from_utf8_lossy(&bytes).into_owned();
    let mut license = License::with_source(text, path.to_path_buf());
    license.classify()?;
    Ok(license)
}

/// Names of the entries directly inside `dir`, sorted byte-wise.
/// Names that are not valid UTF-8 are skipped.
fn read_directory(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        if let Ok(name) = entry?.file_name().into_string() {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

/// Classify every candidate license file in `dir` (non-recursive).
///
/// Candidates that cannot be read or classified are skipped so that one bad
/// file does not hide the others. Fails with
/// [`LicenseError::NoLicenseFileFound`] when no name matches `patterns`, and
/// with [`LicenseError::UnrecognizedLicense`] when every candidate was
/// skipped. Listing errors are returned as [`LicenseError::Io`].
pub fn scan_directory(dir: &Path, patterns: &FilePatterns) -> Result<Vec<License>> {
    let files = read_directory(dir)?;
    let candidates = locate_license_files(patterns, &files)?;

    let licenses: Vec<License> = candidates
        .into_iter()
        .filter_map(|name| {
            let path = dir.join(name);
            match read_license_file(&path) {
                Ok(license) => Some(license),
                Err(e) => {
                    tracing::debug!(path = %path.display(), error = %e, "skipping license candidate");
                    None
                }
            }
        })
        .collect();

    if licenses.is_empty() {
        return Err(LicenseError::UnrecognizedLicense);
    }
    Ok(licenses)
}

/// The first license [`scan_directory`] would return.
pub fn scan_directory_first(dir: &Path, patterns: &FilePatterns) -> Result<License> {
    scan_directory(dir, patterns)?
        .into_iter()
        .next()
        .ok_or(LicenseError::UnrecognizedLicense)
}
