//! Semver facade providing high-level operations over raw strings

use std::cmp::Ordering;

use log::debug;

use crate::constraint::{Constraints, MatchOptions, ValidationResult};
use crate::error::Result;
use crate::version::Version;

/// Which versions `Semver::greatest` ignores before picking the maximum
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GreatestFilter {
    /// Drop versions with a prerelease
    pub pre_release: bool,
    /// Drop versions with build metadata
    pub build: bool,
}

/// Main facade for semantic versioning operations
pub struct Semver;

impl Semver {
    /// Check if a version satisfies a constraint expression
    pub fn satisfies(version: &str, constraints: &str) -> Result<bool> {
        Self::satisfies_with(version, constraints, &MatchOptions::default())
    }

    pub fn satisfies_with(version: &str, constraints: &str, options: &MatchOptions) -> Result<bool> {
        let version = Version::parse(version)?;
        let constraints = Constraints::parse(constraints)?;
        Ok(constraints.check_with(&version, options))
    }

    /// Check a version and explain every failed clause
    pub fn validate(version: &str, constraints: &str) -> Result<ValidationResult> {
        Self::validate_with(version, constraints, &MatchOptions::default())
    }

    pub fn validate_with(version: &str, constraints: &str, options: &MatchOptions) -> Result<ValidationResult> {
        let version = Version::parse(version)?;
        let constraints = Constraints::parse(constraints)?;
        Ok(constraints.validate_with(&version, options))
    }

    /// Return all versions that satisfy the given constraints, as given
    pub fn satisfied_by(versions: &[&str], constraints: &str) -> Result<Vec<String>> {
        let constraints = Constraints::parse(constraints)?;
        let mut matching = Vec::new();
        for input in versions {
            if constraints.check(&Version::parse(input)?) {
                matching.push(input.to_string());
            }
        }
        Ok(matching)
    }

    /// Sort versions in ascending order
    pub fn sort(versions: &[&str]) -> Result<Vec<String>> {
        Self::usort(versions, true)
    }

    /// Sort versions in descending order (reverse sort)
    pub fn rsort(versions: &[&str]) -> Result<Vec<String>> {
        Self::usort(versions, false)
    }

    fn usort(versions: &[&str], ascending: bool) -> Result<Vec<String>> {
        let mut parsed = versions
            .iter()
            .map(|input| Version::parse(input).map(|version| (version, *input)))
            .collect::<Result<Vec<_>>>()?;

        // Stable, so versions differing only in build metadata keep their order
        parsed.sort_by(|(a, _), (b, _)| {
            let cmp: Ordering = a.cmp(b);
            if ascending {
                cmp
            } else {
                cmp.reverse()
            }
        });

        Ok(parsed.into_iter().map(|(_, input)| input.to_string()).collect())
    }

    /// Pick the greatest version after filtering.
    ///
    /// Every input must parse. Returns `None` when the filters leave nothing;
    /// among versions of equal precedence the last one wins.
    pub fn greatest(versions: &[&str], filter: GreatestFilter) -> Result<Option<Version>> {
        let parsed = versions
            .iter()
            .map(|input| Version::parse(input))
            .collect::<Result<Vec<_>>>()?;

        let remaining: Vec<Version> = parsed
            .into_iter()
            .filter(|v| !(filter.pre_release && v.is_prerelease()))
            .filter(|v| !(filter.build && !v.build().is_empty()))
            .collect();

        debug!(
            "{} of {} version(s) left after filtering ({:?})",
            remaining.len(),
            versions.len(),
            filter
        );

        Ok(remaining.into_iter().max())
    }
}
