//! Parsed constraint expressions and their evaluation

use std::fmt;
use std::str::FromStr;

use log::debug;

use super::lower::{ComparatorExpr, PrimitiveClause};
use super::parser::parse_groups;
use super::partial::{PartialVersion, Precision};
use crate::error::{Result, SemverError};
use crate::version::Version;

/// Evaluation settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchOptions {
    /// Let prerelease versions match clauses that carry no prerelease on the same core
    pub allow_prerelease_across_core: bool,
}

/// Outcome of validating a version against constraints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub satisfied: bool,
    /// One message per failed clause, in declaration order; empty when satisfied
    pub reasons: Vec<String>,
}

/// One clause of a group, e.g. `^1.2.3` or `1.0.0 - 2.0.0`, with its lowered form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    source: String,
    expr: ComparatorExpr,
    primitives: Vec<PrimitiveClause>,
}

impl Clause {
    pub(crate) fn new(source: String, expr: ComparatorExpr, primitives: Vec<PrimitiveClause>) -> Self {
        Clause {
            source,
            expr,
            primitives,
        }
    }

    pub fn expr(&self) -> &ComparatorExpr {
        &self.expr
    }

    /// Primitive comparisons that must all hold; empty matches everything
    pub fn primitives(&self) -> &[PrimitiveClause] {
        &self.primitives
    }

    /// A prerelease may only match when some bound is a prerelease of the same core
    fn admits_prerelease(&self, version: &Version) -> bool {
        self.primitives
            .iter()
            .any(|p| p.version().is_prerelease() && p.version().same_core(version))
    }

    /// Evaluate this clause, explaining the failure
    pub fn check(&self, version: &Version, options: &MatchOptions) -> std::result::Result<(), String> {
        if version.is_prerelease() && !options.allow_prerelease_across_core && !self.admits_prerelease(version) {
            return Err(format!(
                "{} is a prerelease version and the constraint {} is only looking for release versions",
                version, self.source
            ));
        }

        match self.primitives.iter().find(|p| !p.matches(version)) {
            None => Ok(()),
            Some(failed) => Err(self.failure_message(version, failed)),
        }
    }

    fn failure_message(&self, version: &Version, failed: &PrimitiveClause) -> String {
        let (target, scope) = match &self.expr {
            ComparatorExpr::Compare(operator, target) => {
                return operator.failure_message(version, target.as_str());
            }
            ComparatorExpr::Hyphen(lower, upper) => {
                return if failed.is_lower_bound() {
                    format!("{} is less than {}", version, lower)
                } else {
                    format!("{} is greater than {}", version, upper)
                };
            }
            ComparatorExpr::Tilde(target) => (target, tilde_scope(target)),
            ComparatorExpr::Caret(target) => (target, caret_scope(target)),
        };

        if failed.is_lower_bound() {
            format!("{} is less than {}", version, target)
        } else {
            format!("{} does not have same {} version as {}", version, scope, target)
        }
    }
}

fn tilde_scope(target: &PartialVersion) -> &'static str {
    match target.precision() {
        Precision::Any | Precision::Major => "major",
        Precision::Minor | Precision::Patch => "major and minor",
    }
}

fn caret_scope(target: &PartialVersion) -> &'static str {
    let major = target.major.unwrap_or(0);
    let minor = target.minor.unwrap_or(0);
    match target.precision() {
        Precision::Major => "major",
        _ if major > 0 => "major",
        Precision::Minor => "major and minor",
        _ if minor > 0 => "major and minor",
        _ => "major, minor and patch",
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

/// Clauses that must all hold
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintGroup {
    clauses: Vec<Clause>,
}

impl ConstraintGroup {
    pub(crate) fn new(clauses: Vec<Clause>) -> Self {
        ConstraintGroup { clauses }
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    fn failures(&self, version: &Version, options: &MatchOptions) -> Vec<String> {
        self.clauses
            .iter()
            .filter_map(|clause| clause.check(version, options).err())
            .collect()
    }

    fn holds(&self, version: &Version, options: &MatchOptions) -> bool {
        self.clauses.iter().all(|clause| clause.check(version, options).is_ok())
    }
}

impl fmt::Display for ConstraintGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let clauses: Vec<String> = self.clauses.iter().map(|c| c.to_string()).collect();
        write!(f, "{}", clauses.join(" "))
    }
}

/// A parsed constraint expression: an OR of AND-groups.
///
/// ```
/// use svtool_semver::{Constraints, Version};
///
/// let constraints = Constraints::parse(">=1.2.0 <2.0.0 || ^3.1").unwrap();
/// assert!(constraints.check(&Version::parse("1.5.0").unwrap()));
/// assert!(constraints.check(&Version::parse("3.4.1").unwrap()));
/// assert!(!constraints.check(&Version::parse("2.0.0").unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraints {
    groups: Vec<ConstraintGroup>,
    pretty_string: String,
}

impl Constraints {
    /// Parse a constraint expression; an empty or blank expression is an error
    pub fn parse(input: &str) -> Result<Self> {
        let groups = parse_groups(input)?;
        Ok(Constraints {
            groups,
            pretty_string: input.trim().to_string(),
        })
    }

    /// OR-groups in declaration order
    pub fn groups(&self) -> &[ConstraintGroup] {
        &self.groups
    }

    /// The expression as it was written, without surrounding whitespace
    pub fn pretty_string(&self) -> &str {
        &self.pretty_string
    }

    /// Check a version with default options
    pub fn check(&self, version: &Version) -> bool {
        self.check_with(version, &MatchOptions::default())
    }

    /// Check a version, stopping at the first satisfied group
    pub fn check_with(&self, version: &Version, options: &MatchOptions) -> bool {
        self.groups.iter().any(|group| group.holds(version, options))
    }

    /// Validate a version with default options
    pub fn validate(&self, version: &Version) -> ValidationResult {
        self.validate_with(version, &MatchOptions::default())
    }

    /// Validate a version, collecting a reason for every failed clause of every group
    pub fn validate_with(&self, version: &Version, options: &MatchOptions) -> ValidationResult {
        let mut reasons = Vec::new();

        for (i, group) in self.groups.iter().enumerate() {
            let failures = group.failures(version, options);
            if failures.is_empty() {
                debug!("{} satisfies group {} of \"{}\"", version, i, self.pretty_string);
                return ValidationResult {
                    satisfied: true,
                    reasons: Vec::new(),
                };
            }
            reasons.extend(failures);
        }

        debug!(
            "{} does not satisfy \"{}\" ({} failed clause(s))",
            version,
            self.pretty_string,
            reasons.len()
        );
        ValidationResult {
            satisfied: false,
            reasons,
        }
    }
}

impl fmt::Display for Constraints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let groups: Vec<String> = self.groups.iter().map(|g| g.to_string()).collect();
        write!(f, "{}", groups.join(" || "))
    }
}

impl FromStr for Constraints {
    type Err = SemverError;

    fn from_str(s: &str) -> Result<Self> {
        Constraints::parse(s)
    }
}
