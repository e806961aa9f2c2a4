//! Constraint types for version matching

mod constraints;
mod lexer;
mod lower;
mod operator;
mod parser;
mod partial;

pub use constraints::{Clause, ConstraintGroup, Constraints, MatchOptions, ValidationResult};
pub use lower::{lower, ComparatorExpr, PrimitiveClause};
pub use operator::{InvalidOperatorError, Operator};
pub use partial::{PartialVersion, Precision};
