//! Partial versions as written inside constraint clauses

use std::fmt;

use crate::identifier::{parse_build, parse_prerelease, Identifier};
use crate::version::Version;

/// A version with optional trailing components.
///
/// `None` stands for both an omitted component (`1.2`) and an explicit
/// wildcard (`1.2.x`, `1.2.*`). Once a component is `None` every less
/// significant one is `None` too.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialVersion {
    pub major: Option<u64>,
    pub minor: Option<u64>,
    pub patch: Option<u64>,
    pub pre: Vec<Identifier>,
    text: String,
}

/// Which component is the last one given explicitly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    Any,
    Major,
    Minor,
    Patch,
}

impl PartialVersion {
    /// Parse the version part of a clause. Build metadata is accepted and dropped.
    pub(crate) fn parse(text: &str) -> Result<Self, String> {
        let body = text
            .strip_prefix('v')
            .or_else(|| text.strip_prefix('V'))
            .unwrap_or(text);

        let body = match body.split_once('+') {
            Some((rest, build)) => {
                if build.is_empty() {
                    return Err("empty build metadata".to_string());
                }
                parse_build(build).map_err(|e| format!("invalid build metadata: {}", e))?;
                rest
            }
            None => body,
        };

        let (core, pre) = match body.split_once('-') {
            Some((core, pre)) => (core, Some(pre)),
            None => (body, None),
        };

        if core.is_empty() {
            return Err("missing version".to_string());
        }

        let parts: Vec<&str> = core.split('.').collect();
        if parts.len() > 3 {
            return Err(format!("expected at most 3 components, found {}", parts.len()));
        }

        let mut numbers: [Option<u64>; 3] = [None, None, None];
        let mut wildcard_seen = false;
        for (i, part) in parts.iter().enumerate() {
            if is_wildcard(part) {
                wildcard_seen = true;
                continue;
            }
            if wildcard_seen {
                return Err(format!("component \"{}\" follows a wildcard", part));
            }
            numbers[i] = Some(parse_number(part)?);
        }

        let pre = match pre {
            Some(pre) => {
                if pre.is_empty() {
                    return Err("empty prerelease".to_string());
                }
                if numbers.iter().any(Option::is_none) {
                    return Err("a prerelease requires MAJOR.MINOR.PATCH".to_string());
                }
                parse_prerelease(pre).map_err(|e| format!("invalid prerelease: {}", e))?
            }
            None => Vec::new(),
        };

        Ok(PartialVersion {
            major: numbers[0],
            minor: numbers[1],
            patch: numbers[2],
            pre,
            text: text.to_string(),
        })
    }

    /// The clause text this version was parsed from
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn precision(&self) -> Precision {
        match (self.major, self.minor, self.patch) {
            (None, _, _) => Precision::Any,
            (Some(_), None, _) => Precision::Major,
            (Some(_), Some(_), None) => Precision::Minor,
            (Some(_), Some(_), Some(_)) => Precision::Patch,
        }
    }

    /// Lowest version covered, missing components filled with zero
    pub(crate) fn floor(&self) -> Version {
        let base = Version::new(
            self.major.unwrap_or(0),
            self.minor.unwrap_or(0),
            self.patch.unwrap_or(0),
        );
        if self.pre.is_empty() {
            return base;
        }
        Version::from_parts(base.major(), base.minor(), base.patch(), self.pre.clone(), Vec::new())
    }
}

impl fmt::Display for PartialVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

fn is_wildcard(part: &str) -> bool {
    matches!(part, "x" | "X" | "*")
}

fn parse_number(part: &str) -> Result<u64, String> {
    if part.is_empty() {
        return Err("empty component".to_string());
    }
    if !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("component \"{}\" is not a number", part));
    }
    if part.len() > 1 && part.starts_with('0') {
        return Err(format!("component \"{}\" must not have leading zeros", part));
    }
    part.parse::<u64>()
        .map_err(|_| format!("component {} is too large", part))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(s: &str) -> PartialVersion {
        PartialVersion::parse(s).unwrap()
    }

    #[test]
    fn test_parse_full() {
        let v = p("v1.2.3-beta.2+build");
        assert_eq!((v.major, v.minor, v.patch), (Some(1), Some(2), Some(3)));
        assert_eq!(v.pre.len(), 2);
        assert_eq!(v.precision(), Precision::Patch);
        assert_eq!(v.to_string(), "v1.2.3-beta.2+build");
        assert_eq!(v.floor().to_string(), "1.2.3-beta.2");
    }

    #[test]
    fn test_parse_partial() {
        assert_eq!(p("1").precision(), Precision::Major);
        assert_eq!(p("1.2").precision(), Precision::Minor);
        assert_eq!(p("1.2.x").precision(), Precision::Minor);
        assert_eq!(p("1.X").precision(), Precision::Major);
        assert_eq!(p("1.*.*").precision(), Precision::Major);
        assert_eq!(p("*").precision(), Precision::Any);
        assert_eq!(p("x.x.x").precision(), Precision::Any);
        assert_eq!(p("1.2").floor().to_string(), "1.2.0");
        assert_eq!(p("x").floor().to_string(), "0.0.0");
    }

    #[test]
    fn test_parse_fails() {
        for input in [
            "", "v", "1.2.3.4", "1.x.3", "01.2", "1..2", "1.2.", "a.b", "1.2-beta", "1.2.3-", "1.2.3+",
            "1.2.3-01", "99999999999999999999",
        ] {
            assert!(PartialVersion::parse(input).is_err(), "{:?} should be rejected", input);
        }
    }
}
