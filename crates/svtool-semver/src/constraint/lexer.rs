//! Single-pass tokenizer for constraint expressions

use crate::error::{Result, SemverError};

/// Lexical tokens of a constraint expression. Whitespace only separates tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token<'a> {
    /// Comparison prefix such as `>=`, `~` or `^`
    Op(&'a str),
    /// A version, possibly partial or wildcarded
    Version(&'a str),
    /// A standalone `-` joining the two ends of a hyphen range
    Hyphen,
    /// `||`, `|` or `,`
    Or,
}

const OPERATORS: [&str; 12] = ["==", "!=", ">=", "=>", "<=", "=<", "~>", "=", ">", "<", "~", "^"];

fn is_version_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '+' | '*')
}

/// Split a constraint expression into tokens.
pub(crate) fn tokenize(input: &str) -> Result<Vec<Token<'_>>> {
    let mut tokens = Vec::new();
    let mut rest = input;

    while let Some(c) = rest.chars().next() {
        if c.is_whitespace() {
            rest = &rest[c.len_utf8()..];
            continue;
        }

        if c == '|' {
            let len = if rest.starts_with("||") { 2 } else { 1 };
            tokens.push(Token::Or);
            rest = &rest[len..];
            continue;
        }

        if c == ',' {
            tokens.push(Token::Or);
            rest = &rest[1..];
            continue;
        }

        if c == '-' && rest[1..].chars().next().map_or(true, char::is_whitespace) {
            tokens.push(Token::Hyphen);
            rest = &rest[1..];
            continue;
        }

        if matches!(c, '=' | '!' | '<' | '>' | '~' | '^') {
            let op = OPERATORS
                .iter()
                .find(|op| rest.starts_with(*op))
                .ok_or_else(|| SemverError::constraint(input, format!("invalid operator at \"{}\"", rest)))?;
            tokens.push(Token::Op(&rest[..op.len()]));
            rest = &rest[op.len()..];
            continue;
        }

        if is_version_char(c) {
            let end = rest.find(|c: char| !is_version_char(c)).unwrap_or(rest.len());
            tokens.push(Token::Version(&rest[..end]));
            rest = &rest[end..];
            continue;
        }

        return Err(SemverError::constraint(input, format!("unexpected character '{}'", c)));
    }

    Ok(tokens)
}
