//! The version model: an immutable `MAJOR.MINOR.PATCH[-PRE][+BUILD]` value

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::{Result, SemverError};
use crate::identifier::{self, Identifier};
use crate::version_parser::parse_version;

/// A parsed semantic version.
///
/// Equality, ordering and hashing ignore build metadata, so
/// `1.0.0+a == 1.0.0+b`. Every mutating operation returns a new value.
#[derive(Debug, Clone)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    pre: Vec<Identifier>,
    build: Vec<String>,
}

impl Version {
    /// Create a release version without prerelease or build metadata
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version::from_parts(major, minor, patch, Vec::new(), Vec::new())
    }

    pub(crate) fn from_parts(
        major: u64,
        minor: u64,
        patch: u64,
        pre: Vec<Identifier>,
        build: Vec<String>,
    ) -> Self {
        Version {
            major,
            minor,
            patch,
            pre,
            build,
        }
    }

    /// Parse a version string such as `1.2.3`, `v1.2.3-rc.1` or `1.2.3+build.7`
    pub fn parse(input: &str) -> Result<Self> {
        parse_version(input)
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// Prerelease identifiers; empty for a release version
    pub fn pre(&self) -> &[Identifier] {
        &self.pre
    }

    /// Build metadata identifiers
    pub fn build(&self) -> &[String] {
        &self.build
    }

    /// Prerelease as text, empty if absent
    pub fn prerelease(&self) -> String {
        identifier::join(&self.pre)
    }

    /// Build metadata as text, empty if absent
    pub fn metadata(&self) -> String {
        identifier::join(&self.build)
    }

    pub fn is_prerelease(&self) -> bool {
        !self.pre.is_empty()
    }

    /// Check if both versions share major, minor and patch
    pub fn same_core(&self, other: &Version) -> bool {
        self.major == other.major && self.minor == other.minor && self.patch == other.patch
    }

    /// Increment major, reset minor and patch, drop prerelease and build
    pub fn inc_major(&self) -> Result<Self> {
        let major = checked_inc(self, self.major, "major")?;
        Ok(Version::new(major, 0, 0))
    }

    /// Increment minor, reset patch, drop prerelease and build
    pub fn inc_minor(&self) -> Result<Self> {
        let minor = checked_inc(self, self.minor, "minor")?;
        Ok(Version::new(self.major, minor, 0))
    }

    /// Increment patch, drop prerelease and build
    pub fn inc_patch(&self) -> Result<Self> {
        let patch = checked_inc(self, self.patch, "patch")?;
        Ok(Version::new(self.major, self.minor, patch))
    }

    /// Dispatch an increment by component; only `major`, `minor` and `patch` can be incremented
    pub fn increment(&self, component: Component) -> Result<Self> {
        match component {
            Component::Major => self.inc_major(),
            Component::Minor => self.inc_minor(),
            Component::Patch => self.inc_patch(),
            other => Err(SemverError::UnknownComponent(other.to_string())),
        }
    }

    /// Read a component as text
    pub fn get(&self, component: Component) -> String {
        match component {
            Component::Major => self.major.to_string(),
            Component::Minor => self.minor.to_string(),
            Component::Patch => self.patch.to_string(),
            Component::Prerelease => self.prerelease(),
            Component::Metadata => self.metadata(),
        }
    }

    /// Replace the prerelease; an empty value turns the version into a release
    pub fn set_prerelease(&self, value: &str) -> Result<Self> {
        let pre = identifier::parse_prerelease(value)
            .map_err(|e| SemverError::identifier(value, e.to_string()))?;
        Ok(Version {
            pre,
            ..self.clone()
        })
    }

    /// Replace the build metadata; an empty value removes it
    pub fn set_metadata(&self, value: &str) -> Result<Self> {
        let build = identifier::parse_build(value)
            .map_err(|e| SemverError::identifier(value, e.to_string()))?;
        Ok(Version {
            build,
            ..self.clone()
        })
    }

    /// Dispatch a setter by component; only `prerelease` and `metadata` can be set
    pub fn set(&self, component: Component, value: &str) -> Result<Self> {
        match component {
            Component::Prerelease => self.set_prerelease(value),
            Component::Metadata => self.set_metadata(value),
            other => Err(SemverError::UnknownComponent(other.to_string())),
        }
    }
}

fn checked_inc(version: &Version, value: u64, name: &str) -> Result<u64> {
    value.checked_add(1).ok_or_else(|| {
        SemverError::format(&version.to_string(), format!("{} component cannot be incremented past {}", name, u64::MAX))
    })
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.same_core(other) && self.pre == other.pre
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.pre.hash(state);
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
            .then_with(|| compare_prerelease(&self.pre, &other.pre))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn compare_prerelease(a: &[Identifier], b: &[Identifier]) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        // A release outranks any prerelease of the same core
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        // Slice ordering compares element-wise, then the shorter list is smaller
        (false, false) => a.cmp(b),
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.pre.is_empty() {
            write!(f, "-{}", self.prerelease())?;
        }
        if !self.build.is_empty() {
            write!(f, "+{}", self.metadata())?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = SemverError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

/// Named field of a version, as accepted by `inc`, `get` and `set`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Major,
    Minor,
    Patch,
    Prerelease,
    Metadata,
}

impl Component {
    pub fn as_str(&self) -> &'static str {
        match self {
            Component::Major => "major",
            Component::Minor => "minor",
            Component::Patch => "patch",
            Component::Prerelease => "prerelease",
            Component::Metadata => "metadata",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Component {
    type Err = SemverError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "major" => Ok(Component::Major),
            "minor" => Ok(Component::Minor),
            "patch" => Ok(Component::Patch),
            "prerelease" => Ok(Component::Prerelease),
            "metadata" => Ok(Component::Metadata),
            _ => Err(SemverError::UnknownComponent(s.to_string())),
        }
    }
}
