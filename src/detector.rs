use std::sync::LazyLock;

use regex::Regex;

use crate::error::{LicenseError, Result};

/// File names that usually hold license text. Case does not matter.
pub const DEFAULT_LICENSE_FILES: [&str; 4] = ["license*", "licence*", "copying*", "unlicense"];

static DEFAULT_PATTERNS: LazyLock<FilePatterns> = LazyLock::new(|| {
    FilePatterns::new(DEFAULT_LICENSE_FILES).expect("default license file patterns must compile")
});

/// An ordered set of case-insensitive file-name patterns.
///
/// `*` stands for any run of characters; everything else is literal. A
/// pattern is anchored at the start of the name only, so `unlicense` also
/// matches `UNLICENSE.txt`.
#[derive(Debug, Clone)]
pub struct FilePatterns {
    patterns: Vec<(String, Regex)>,
}

impl FilePatterns {
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = FilePatterns {
            patterns: Vec::new(),
        };
        set.extend(patterns)?;
        Ok(set)
    }

    /// Append more patterns after the existing ones.
    pub fn extend<I, S>(&mut self, patterns: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for pattern in patterns {
            let pattern = pattern.as_ref();
            self.patterns.push((pattern.to_string(), compile(pattern)?));
        }
        Ok(())
    }

    pub fn matches(&self, file_name: &str) -> bool {
        self.patterns.iter().any(|(_, re)| re.is_match(file_name))
    }

    /// The source patterns, in order.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(|(p, _)| p.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Default for FilePatterns {
    fn default() -> Self {
        DEFAULT_PATTERNS.clone()
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    let body = pattern
        .split('*')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(".*");
    Regex::new(&format!("(?i)^{body}")).map_err(|source| LicenseError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Pick the names that look like license files, keeping the order they were
/// given in. A name matching several patterns is returned once.
///
/// Fails with [`LicenseError::NoLicenseFileFound`] when nothing matches.
pub fn locate_license_files<'a, S>(patterns: &FilePatterns, files: &'a [S]) -> Result<Vec<&'a str>>
where
    S: AsRef<str>,
{
    let matches: Vec<&str> = files
        .iter()
        .map(|file| file.as_ref())
        .filter(|name| patterns.matches(name))
        .collect();

    if matches.is_empty() {
        return Err(LicenseError::NoLicenseFileFound);
    }
    tracing::debug!(candidates = ?matches, "located license file candidates");
    Ok(matches)
}
