//! Prerelease and build metadata identifiers

use std::cmp::Ordering;
use std::fmt;
use thiserror::Error;

/// A single dot-separated prerelease identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
    /// Purely numeric identifier, compared numerically
    Numeric(u64),
    /// Identifier containing at least one letter or hyphen, compared in ASCII order
    AlphaNumeric(String),
}

impl Identifier {
    pub fn is_numeric(&self) -> bool {
        matches!(self, Identifier::Numeric(_))
    }
}

impl Ord for Identifier {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Identifier::Numeric(a), Identifier::Numeric(b)) => a.cmp(b),
            (Identifier::Numeric(_), Identifier::AlphaNumeric(_)) => Ordering::Less,
            (Identifier::AlphaNumeric(_), Identifier::Numeric(_)) => Ordering::Greater,
            (Identifier::AlphaNumeric(a), Identifier::AlphaNumeric(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for Identifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(n) => write!(f, "{}", n),
            Identifier::AlphaNumeric(s) => write!(f, "{}", s),
        }
    }
}

/// Reasons an identifier list is rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub(crate) enum IdentifierError {
    #[error("empty identifier")]
    Empty,
    #[error("invalid character '{0}' in identifier")]
    InvalidCharacter(char),
    #[error("numeric identifier \"{0}\" must not have leading zeros")]
    LeadingZero(String),
    #[error("numeric identifier \"{0}\" is too large")]
    Overflow(String),
}

fn check_characters(part: &str) -> Result<(), IdentifierError> {
    if part.is_empty() {
        return Err(IdentifierError::Empty);
    }
    match part.chars().find(|c| !(c.is_ascii_alphanumeric() || *c == '-')) {
        Some(c) => Err(IdentifierError::InvalidCharacter(c)),
        None => Ok(()),
    }
}

/// Parse dot-separated prerelease identifiers. The empty string yields no identifiers.
pub(crate) fn parse_prerelease(text: &str) -> Result<Vec<Identifier>, IdentifierError> {
    if text.is_empty() {
        return Ok(Vec::new());
    }

    text.split('.')
        .map(|part| {
            check_characters(part)?;

            if !part.bytes().all(|b| b.is_ascii_digit()) {
                return Ok(Identifier::AlphaNumeric(part.to_string()));
            }
            if part.len() > 1 && part.starts_with('0') {
                return Err(IdentifierError::LeadingZero(part.to_string()));
            }
            part.parse::<u64>()
                .map(Identifier::Numeric)
                .map_err(|_| IdentifierError::Overflow(part.to_string()))
        })
        .collect()
}

/// Parse dot-separated build metadata identifiers. Leading zeros are allowed here.
pub(crate) fn parse_build(text: &str) -> Result<Vec<String>, IdentifierError> {
    if text.is_empty() {
        return Ok(Vec::new());
    }

    text.split('.')
        .map(|part| check_characters(part).map(|_| part.to_string()))
        .collect()
}

pub(crate) fn join<T: fmt::Display>(parts: &[T]) -> String {
    parts
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_prerelease() {
        assert_eq!(
            parse_prerelease("alpha.1.x-y").unwrap(),
            vec![
                Identifier::AlphaNumeric("alpha".to_string()),
                Identifier::Numeric(1),
                Identifier::AlphaNumeric("x-y".to_string()),
            ]
        );
        assert_eq!(parse_prerelease("0").unwrap(), vec![Identifier::Numeric(0)]);
        assert_eq!(
            parse_prerelease("0a").unwrap(),
            vec![Identifier::AlphaNumeric("0a".to_string())]
        );
        assert!(parse_prerelease("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_prerelease_fails() {
        assert_eq!(parse_prerelease("alpha..1"), Err(IdentifierError::Empty));
        assert_eq!(parse_prerelease("alpha."), Err(IdentifierError::Empty));
        assert_eq!(
            parse_prerelease("01"),
            Err(IdentifierError::LeadingZero("01".to_string()))
        );
        assert_eq!(
            parse_prerelease("beta_1"),
            Err(IdentifierError::InvalidCharacter('_'))
        );
        assert_eq!(
            parse_prerelease("99999999999999999999"),
            Err(IdentifierError::Overflow("99999999999999999999".to_string()))
        );
    }

    #[test]
    fn test_parse_build() {
        assert_eq!(parse_build("001.sha-5114f85").unwrap(), vec!["001", "sha-5114f85"]);
        assert_eq!(parse_build("a+b"), Err(IdentifierError::InvalidCharacter('+')));
        assert_eq!(parse_build("a."), Err(IdentifierError::Empty));
    }

    #[test]
    fn test_ordering() {
        let num = Identifier::Numeric(11);
        let small = Identifier::Numeric(2);
        let alpha = Identifier::AlphaNumeric("1a".to_string());

        assert!(small < num);
        assert!(num < alpha);
        assert!(Identifier::AlphaNumeric("alpha".to_string()) < Identifier::AlphaNumeric("beta".to_string()));
        assert!(Identifier::AlphaNumeric("Beta".to_string()) < Identifier::AlphaNumeric("alpha".to_string()));
    }
}
