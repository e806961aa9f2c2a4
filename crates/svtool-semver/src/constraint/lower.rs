//! Lowering of range syntax into primitive comparisons
//!
//! Tilde, caret, hyphen and wildcard clauses are rewritten into at most two
//! primitive clauses over concrete versions when the constraint is parsed:
//!
//! - `~1.2.3` becomes `>=1.2.3 <1.3.0-0`, `~1` becomes `>=1.0.0 <2.0.0-0`
//! - `^1.2.3` becomes `>=1.2.3 <2.0.0-0`, `^0.2.3` becomes `>=0.2.3 <0.3.0-0`
//! - `1.2.3 - 2.3` becomes `>=1.2.3 <2.4.0-0`
//! - `1.2.x` becomes `>=1.2.0 <1.3.0-0`, `*` lowers to nothing and matches anything
//!
//! Exclusive upper bounds carry the `-0` prerelease, the lowest version of
//! that core, so prereleases of the bound itself stay out of range.

use std::fmt;

use super::operator::Operator;
use super::partial::{PartialVersion, Precision};
use crate::comparator::Comparator;
use crate::identifier::Identifier;
use crate::version::Version;

/// A clause as written, before lowering
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComparatorExpr {
    /// Plain comparison, including bare and wildcard versions (`1.2.x`, `>=1.2`)
    Compare(Operator, PartialVersion),
    /// `~1.2.3`, `~>1.2.3`
    Tilde(PartialVersion),
    /// `^1.2.3`
    Caret(PartialVersion),
    /// `1.2.3 - 2.3.4`
    Hyphen(PartialVersion, PartialVersion),
}

/// A comparison against a concrete version, the only thing the evaluator runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimitiveClause {
    operator: Operator,
    version: Version,
}

impl PrimitiveClause {
    pub fn new(operator: Operator, version: Version) -> Self {
        PrimitiveClause { operator, version }
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn version(&self) -> &Version {
        &self.version
    }

    /// Check `version <operator> self.version`
    pub fn matches(&self, version: &Version) -> bool {
        Comparator::compare(version, self.operator, &self.version)
    }

    /// Lower bounds are `>` and `>=`; every other operator caps the range from above or pins it
    pub(crate) fn is_lower_bound(&self) -> bool {
        matches!(self.operator, Operator::GreaterThan | Operator::GreaterThanOrEqual)
    }
}

impl fmt::Display for PrimitiveClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.operator, self.version)
    }
}

/// Rewrite a clause into primitive comparisons that must all hold.
///
/// An empty result matches every version.
pub fn lower(expr: &ComparatorExpr) -> Result<Vec<PrimitiveClause>, String> {
    let lowered = match expr {
        ComparatorExpr::Compare(operator, version) => lower_compare(*operator, version)?,
        ComparatorExpr::Tilde(version) => lower_tilde(version),
        ComparatorExpr::Caret(version) => lower_caret(version),
        ComparatorExpr::Hyphen(from, to) => lower_hyphen(from, to),
    };
    Ok(lowered)
}

fn lower_compare(operator: Operator, version: &PartialVersion) -> Result<Vec<PrimitiveClause>, String> {
    match version.precision() {
        Precision::Patch => Ok(vec![PrimitiveClause::new(operator, version.floor())]),
        Precision::Any => Ok(match operator {
            Operator::Equal | Operator::GreaterThanOrEqual | Operator::LessThanOrEqual => Vec::new(),
            Operator::NotEqual | Operator::GreaterThan | Operator::LessThan => vec![nothing()],
        }),
        precision => {
            let floor = version.floor();
            let ceil = next_release(&floor, precision);
            Ok(match operator {
                Operator::Equal => range(floor, ceil),
                Operator::GreaterThan => match ceil {
                    Some(ceil) => vec![at_least(ceil)],
                    None => vec![nothing()],
                },
                Operator::GreaterThanOrEqual => vec![at_least(floor)],
                Operator::LessThan => vec![below(floor)],
                Operator::LessThanOrEqual => ceil.map(below).into_iter().collect(),
                Operator::NotEqual => {
                    return Err(format!("operator \"!=\" does not accept the partial version \"{}\"", version));
                }
            })
        }
    }
}

fn lower_tilde(version: &PartialVersion) -> Vec<PrimitiveClause> {
    match version.precision() {
        Precision::Any => Vec::new(),
        Precision::Major => {
            let floor = version.floor();
            let ceil = next_release(&floor, Precision::Major);
            range(floor, ceil)
        }
        Precision::Minor | Precision::Patch => {
            let floor = version.floor();
            let ceil = next_release(&floor, Precision::Minor);
            range(floor, ceil)
        }
    }
}

fn lower_caret(version: &PartialVersion) -> Vec<PrimitiveClause> {
    let precision = version.precision();
    if precision == Precision::Any {
        return Vec::new();
    }

    let floor = version.floor();
    // The leftmost non-zero component given is the one that must not change
    let fixed = if floor.major() > 0 || precision == Precision::Major {
        Precision::Major
    } else if floor.minor() > 0 || precision == Precision::Minor {
        Precision::Minor
    } else {
        Precision::Patch
    };
    let ceil = next_release(&floor, fixed);
    range(floor, ceil)
}

fn lower_hyphen(from: &PartialVersion, to: &PartialVersion) -> Vec<PrimitiveClause> {
    let mut primitives = Vec::with_capacity(2);

    if from.precision() != Precision::Any {
        primitives.push(at_least(from.floor()));
    }

    match to.precision() {
        Precision::Any => {}
        Precision::Patch => primitives.push(PrimitiveClause::new(Operator::LessThanOrEqual, to.floor())),
        precision => {
            if let Some(ceil) = next_release(&to.floor(), precision) {
                primitives.push(below(ceil));
            }
        }
    }

    primitives
}

/// First release after every version sharing `version` up to `precision`.
///
/// Carries into the next component on overflow; `None` when even the major
/// component cannot grow, meaning the range is unbounded above.
fn next_release(version: &Version, precision: Precision) -> Option<Version> {
    let (major, minor, patch) = (version.major(), version.minor(), version.patch());
    match precision {
        Precision::Any => None,
        Precision::Major => major.checked_add(1).map(|major| Version::new(major, 0, 0)),
        Precision::Minor => match minor.checked_add(1) {
            Some(minor) => Some(Version::new(major, minor, 0)),
            None => next_release(version, Precision::Major),
        },
        Precision::Patch => match patch.checked_add(1) {
            Some(patch) => Some(Version::new(major, minor, patch)),
            None => next_release(version, Precision::Minor),
        },
    }
}

fn range(floor: Version, ceil: Option<Version>) -> Vec<PrimitiveClause> {
    let mut primitives = vec![at_least(floor)];
    primitives.extend(ceil.map(below));
    primitives
}

fn at_least(version: Version) -> PrimitiveClause {
    PrimitiveClause::new(Operator::GreaterThanOrEqual, version)
}

/// `< version-0`: excludes the release and all of its prereleases
fn below(version: Version) -> PrimitiveClause {
    let bound = Version::from_parts(
        version.major(),
        version.minor(),
        version.patch(),
        vec![Identifier::Numeric(0)],
        Vec::new(),
    );
    PrimitiveClause::new(Operator::LessThan, bound)
}

/// A clause no version can satisfy: nothing sorts below `0.0.0-0`
fn nothing() -> PrimitiveClause {
    below(Version::new(0, 0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn partial(s: &str) -> PartialVersion {
        PartialVersion::parse(s).unwrap()
    }

    fn render(primitives: &[PrimitiveClause]) -> String {
        primitives
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn compare(op: Operator, s: &str) -> String {
        render(&lower(&ComparatorExpr::Compare(op, partial(s))).unwrap())
    }

    fn tilde(s: &str) -> String {
        render(&lower(&ComparatorExpr::Tilde(partial(s))).unwrap())
    }

    fn caret(s: &str) -> String {
        render(&lower(&ComparatorExpr::Caret(partial(s))).unwrap())
    }

    fn hyphen(from: &str, to: &str) -> String {
        render(&lower(&ComparatorExpr::Hyphen(partial(from), partial(to))).unwrap())
    }

    #[test]
    fn test_lower_full_versions_unchanged() {
        assert_eq!(compare(Operator::Equal, "1.2.3"), "=1.2.3");
        assert_eq!(compare(Operator::NotEqual, "1.2.3"), "!=1.2.3");
        assert_eq!(compare(Operator::GreaterThan, "v1.2.3"), ">1.2.3");
        assert_eq!(compare(Operator::LessThanOrEqual, "1.2.3-rc.1+b"), "<=1.2.3-rc.1");
    }

    #[test]
    fn test_lower_wildcards() {
        assert_eq!(compare(Operator::Equal, "*"), "");
        assert_eq!(compare(Operator::Equal, "1.x"), ">=1.0.0 <2.0.0-0");
        assert_eq!(compare(Operator::Equal, "1.2.x"), ">=1.2.0 <1.3.0-0");
        assert_eq!(compare(Operator::Equal, "1.2"), ">=1.2.0 <1.3.0-0");
        assert_eq!(compare(Operator::Equal, "0"), ">=0.0.0 <1.0.0-0");
    }

    #[test]
    fn test_lower_partial_comparisons() {
        assert_eq!(compare(Operator::GreaterThan, "1.2"), ">=1.3.0");
        assert_eq!(compare(Operator::GreaterThan, "1"), ">=2.0.0");
        assert_eq!(compare(Operator::GreaterThanOrEqual, "1.2"), ">=1.2.0");
        assert_eq!(compare(Operator::LessThan, "1.2"), "<1.2.0-0");
        assert_eq!(compare(Operator::LessThanOrEqual, "1.2"), "<1.3.0-0");
        assert_eq!(compare(Operator::LessThanOrEqual, "1"), "<2.0.0-0");
        assert_eq!(compare(Operator::GreaterThan, "*"), "<0.0.0-0");
        assert_eq!(compare(Operator::LessThan, "x"), "<0.0.0-0");
        assert_eq!(compare(Operator::GreaterThanOrEqual, "*"), "");
    }

    #[test]
    fn test_lower_not_equal_partial_fails() {
        assert!(lower(&ComparatorExpr::Compare(Operator::NotEqual, partial("1.2"))).is_err());
        assert_eq!(compare(Operator::NotEqual, "*"), "<0.0.0-0");
    }

    #[test]
    fn test_lower_tilde() {
        assert_eq!(tilde("1.2.3"), ">=1.2.3 <1.3.0-0");
        assert_eq!(tilde("1.2"), ">=1.2.0 <1.3.0-0");
        assert_eq!(tilde("1"), ">=1.0.0 <2.0.0-0");
        assert_eq!(tilde("0.2.3"), ">=0.2.3 <0.3.0-0");
        assert_eq!(tilde("1.2.3-beta.2"), ">=1.2.3-beta.2 <1.3.0-0");
        assert_eq!(tilde("*"), "");
    }

    #[test]
    fn test_lower_caret() {
        assert_eq!(caret("1.2.3"), ">=1.2.3 <2.0.0-0");
        assert_eq!(caret("0.2.3"), ">=0.2.3 <0.3.0-0");
        assert_eq!(caret("0.0.3"), ">=0.0.3 <0.0.4-0");
        assert_eq!(caret("1.2"), ">=1.2.0 <2.0.0-0");
        assert_eq!(caret("0.2"), ">=0.2.0 <0.3.0-0");
        assert_eq!(caret("0.0"), ">=0.0.0 <0.1.0-0");
        assert_eq!(caret("0"), ">=0.0.0 <1.0.0-0");
        assert_eq!(caret("0.0.x"), ">=0.0.0 <0.1.0-0");
        assert_eq!(caret("1.2.3-beta.2"), ">=1.2.3-beta.2 <2.0.0-0");
        assert_eq!(caret("0.0.3-alpha"), ">=0.0.3-alpha <0.0.4-0");
    }

    #[test]
    fn test_lower_hyphen() {
        assert_eq!(hyphen("1.2.3", "2.3.4"), ">=1.2.3 <=2.3.4");
        assert_eq!(hyphen("1.2", "2.3.4"), ">=1.2.0 <=2.3.4");
        assert_eq!(hyphen("1.2.3", "2.3"), ">=1.2.3 <2.4.0-0");
        assert_eq!(hyphen("1.2.3", "2"), ">=1.2.3 <3.0.0-0");
        assert_eq!(hyphen("*", "2.3.4"), "<=2.3.4");
        assert_eq!(hyphen("1.2.3", "*"), ">=1.2.3");
    }

    #[test]
    fn test_lower_upper_bound_overflow_carries() {
        let max = u64::MAX;
        assert_eq!(caret(&format!("{}.0.0", max)), format!(">={}.0.0", max));
        assert_eq!(tilde(&format!("1.{}.0", max)), format!(">=1.{}.0 <2.0.0-0", max));
        assert_eq!(compare(Operator::GreaterThan, &format!("{}", max)), "<0.0.0-0");
    }

    #[test]
    fn test_primitive_matches() {
        let clause = PrimitiveClause::new(Operator::LessThan, Version::parse("2.0.0-0").unwrap());
        assert!(clause.matches(&Version::parse("1.9.9").unwrap()));
        assert!(!clause.matches(&Version::parse("2.0.0-alpha").unwrap()));
        assert!(!clause.matches(&Version::parse("2.0.0").unwrap()));
        assert!(!clause.is_lower_bound());
    }
}
