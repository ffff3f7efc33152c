//! `license-detectr` — identify the license governing a text, file, or directory.
//!
//! # Flow
//! 1. Locate candidate files by name ([`detector::locate_license_files`]).
//! 2. Read each candidate ([`scanner`]).
//! 3. Normalize the text ([`license::normalize`]).
//! 4. Walk the ordered rule table; first match wins ([`license::classifier`]).
//! 5. Return a [`License`] carrying identifier, raw text, and source path.
//!
//! ```no_run
//! use license_detectr::License;
//!
//! let license = License::from_dir(".")?;
//! println!("{}", license.identifier());
//! # Ok::<(), license_detectr::LicenseError>(())
//! ```

pub mod config;
pub mod detector;
pub mod error;
pub mod license;
pub mod models;
pub mod scanner;

pub use detector::{locate_license_files, FilePatterns, DEFAULT_LICENSE_FILES};
pub use error::{LicenseError, Result};
pub use license::classifier::classify;
pub use license::normalize::{contains, normalize};
pub use models::{is_known, License, LicenseId, KNOWN_LICENSES};
pub use scanner::{scan_directory, scan_directory_first};
