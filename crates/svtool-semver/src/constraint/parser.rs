//! Recursive-descent parser: groups, then clauses, then operator and version

use log::trace;

use super::constraints::{Clause, ConstraintGroup};
use super::lexer::{tokenize, Token};
use super::lower::{lower, ComparatorExpr};
use super::operator::Operator;
use super::partial::PartialVersion;
use crate::error::{Result, SemverError};

struct Parser<'a> {
    input: &'a str,
    tokens: Vec<Token<'a>>,
    pos: usize,
}

/// Parse a full constraint expression into its OR-groups.
pub(crate) fn parse_groups(input: &str) -> Result<Vec<ConstraintGroup>> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(SemverError::constraint(input, "empty constraint"));
    }

    let mut parser = Parser {
        input,
        tokens,
        pos: 0,
    };

    let mut groups = vec![parser.parse_group()?];
    while parser.eat(Token::Or) {
        groups.push(parser.parse_group()?);
    }

    Ok(groups)
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<Token<'a>> {
        self.tokens.get(self.pos).copied()
    }

    fn next(&mut self) -> Option<Token<'a>> {
        let token = self.peek();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn eat(&mut self, token: Token<'a>) -> bool {
        if self.peek() == Some(token) {
            self.pos += 1;
            return true;
        }
        false
    }

    fn error(&self, reason: impl Into<String>) -> SemverError {
        SemverError::constraint(self.input, reason)
    }

    fn parse_group(&mut self) -> Result<ConstraintGroup> {
        let mut clauses = Vec::new();
        while let Some(token) = self.peek() {
            if token == Token::Or {
                break;
            }
            clauses.push(self.parse_clause()?);
        }

        if clauses.is_empty() {
            return Err(self.error("empty constraint group"));
        }
        Ok(ConstraintGroup::new(clauses))
    }

    fn parse_clause(&mut self) -> Result<Clause> {
        match self.next() {
            Some(Token::Op(op)) => {
                let version = match self.next() {
                    Some(Token::Version(text)) => self.partial(text)?,
                    _ => return Err(self.error(format!("operator \"{}\" must be followed by a version", op))),
                };
                if self.peek() == Some(Token::Hyphen) {
                    return Err(self.error(format!("hyphen range cannot start with operator \"{}\"", op)));
                }

                let source = format!("{}{}", op, version);
                let expr = match op {
                    "~" | "~>" => ComparatorExpr::Tilde(version),
                    "^" => ComparatorExpr::Caret(version),
                    _ => {
                        let operator = op.parse::<Operator>().map_err(|e| self.error(e.to_string()))?;
                        ComparatorExpr::Compare(operator, version)
                    }
                };
                self.clause(source, expr)
            }
            Some(Token::Version(text)) => {
                let from = self.partial(text)?;
                if !self.eat(Token::Hyphen) {
                    return self.clause(text.to_string(), ComparatorExpr::Compare(Operator::Equal, from));
                }

                let to = match self.next() {
                    Some(Token::Version(text)) => self.partial(text)?,
                    _ => return Err(self.error(format!("hyphen range \"{} -\" is missing its upper end", from))),
                };
                let source = format!("{} - {}", from, to);
                self.clause(source, ComparatorExpr::Hyphen(from, to))
            }
            Some(Token::Hyphen) => Err(self.error("unexpected \"-\" without a lower version")),
            Some(Token::Or) | None => Err(self.error("expected a version")),
        }
    }

    fn partial(&self, text: &str) -> Result<PartialVersion> {
        PartialVersion::parse(text)
            .map_err(|reason| self.error(format!("invalid version \"{}\": {}", text, reason)))
    }

    fn clause(&self, source: String, expr: ComparatorExpr) -> Result<Clause> {
        let primitives = lower(&expr).map_err(|reason| self.error(reason))?;
        trace!(
            "Lowered {} to [{}]",
            source,
            primitives.iter().map(|p| p.to_string()).collect::<Vec<_>>().join(" ")
        );
        Ok(Clause::new(source, expr, primitives))
    }
}
