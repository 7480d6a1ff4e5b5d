use std::str::FromStr;

use semver::{BuildMetadata, Prerelease, Version};

use crate::error::{PluginCtlError, Result};

/// Selects which semantic-version component to increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum BumpMode {
    Major,
    Minor,
    Patch,
}

impl FromStr for BumpMode {
    type Err = PluginCtlError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "major" => Ok(BumpMode::Major),
            "minor" => Ok(BumpMode::Minor),
            "patch" => Ok(BumpMode::Patch),
            other => Err(PluginCtlError::InvalidMode(other.to_string())),
        }
    }
}

impl std::fmt::Display for BumpMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BumpMode::Major => write!(f, "major"),
            BumpMode::Minor => write!(f, "minor"),
            BumpMode::Patch => write!(f, "patch"),
        }
    }
}

/// Parses a semantic version string from a manifest.
///
/// # Arguments
/// * `s` - Version string (e.g., "0.1.0" or "1.2.3-beta.1")
///
/// # Returns
/// * `Ok(Version)` - Successfully parsed version
/// * `Err` - If the string does not conform to the semantic-versioning grammar
pub fn parse_version(s: &str) -> Result<Version> {
    Version::parse(s).map_err(|e| PluginCtlError::version(format!("'{}': {}", s, e)))
}

/// Bumps a version according to the specified bump mode.
///
/// Increments the appropriate version component and resets lower components to 0:
/// - **Major**: major += 1, minor = 0, patch = 0
/// - **Minor**: minor += 1, patch = 0
/// - **Patch**: patch += 1
///
/// Every increment clears any pre-release and build metadata, per the standard
/// semantic-versioning increment rule.
///
/// # Example
/// ```
/// # use pluginctl::version::{bump_version, parse_version, BumpMode};
/// let v = parse_version("1.2.3").unwrap();
/// assert_eq!(bump_version(&v, BumpMode::Major).to_string(), "2.0.0");
/// assert_eq!(bump_version(&v, BumpMode::Minor).to_string(), "1.3.0");
/// assert_eq!(bump_version(&v, BumpMode::Patch).to_string(), "1.2.4");
/// ```
pub fn bump_version(version: &Version, mode: BumpMode) -> Version {
    let mut next = version.clone();
    match mode {
        BumpMode::Major => {
            next.major += 1;
            next.minor = 0;
            next.patch = 0;
        }
        BumpMode::Minor => {
            next.minor += 1;
            next.patch = 0;
        }
        BumpMode::Patch => {
            next.patch += 1;
        }
    }
    next.pre = Prerelease::EMPTY;
    next.build = BuildMetadata::EMPTY;
    next
}
