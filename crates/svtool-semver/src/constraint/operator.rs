//! Primitive comparison operators

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::version::Version;

/// Comparison operators the evaluator executes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Equal (=)
    Equal,
    /// Not equal (!=)
    NotEqual,
    /// Greater than (>)
    GreaterThan,
    /// Greater than or equal (>=)
    GreaterThanOrEqual,
    /// Less than (<)
    LessThan,
    /// Less than or equal (<=)
    LessThanOrEqual,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid operator \"{0}\"")]
pub struct InvalidOperatorError(pub String);

impl FromStr for Operator {
    type Err = InvalidOperatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "=" | "==" => Ok(Operator::Equal),
            "!=" => Ok(Operator::NotEqual),
            ">" => Ok(Operator::GreaterThan),
            ">=" | "=>" => Ok(Operator::GreaterThanOrEqual),
            "<" => Ok(Operator::LessThan),
            "<=" | "=<" => Ok(Operator::LessThanOrEqual),
            _ => Err(InvalidOperatorError(s.to_string())),
        }
    }
}

impl Operator {
    /// Get the string representation of the operator
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equal => "=",
            Operator::NotEqual => "!=",
            Operator::GreaterThan => ">",
            Operator::GreaterThanOrEqual => ">=",
            Operator::LessThan => "<",
            Operator::LessThanOrEqual => "<=",
        }
    }

    /// Get all accepted spellings
    pub fn supported_operators() -> &'static [&'static str] {
        &["=", "==", "!=", ">", ">=", "=>", "<", "<=", "=<"]
    }

    /// Explain why `version` fails `self target`
    pub(crate) fn failure_message(&self, version: &Version, target: &str) -> String {
        let relation = match self {
            Operator::Equal => "is not equal to",
            Operator::NotEqual => "is equal to",
            Operator::GreaterThan => "is less than or equal to",
            Operator::GreaterThanOrEqual => "is less than",
            Operator::LessThan => "is greater than or equal to",
            Operator::LessThanOrEqual => "is greater than",
        };
        format!("{} {} {}", version, relation, target)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
