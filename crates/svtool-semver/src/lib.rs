//! Semantic Versioning 2.0.0 engine
//!
//! This crate parses versions and constraint expressions, orders versions by
//! SemVer precedence and evaluates versions against constraints, explaining
//! every failed clause.
//!
//! ```
//! use svtool_semver::{Constraints, Version};
//!
//! let version = Version::parse("1.4.0").unwrap();
//! let constraints: Constraints = "^1.2 || ~2.0".parse().unwrap();
//! assert!(constraints.check(&version));
//! assert!(version < Version::parse("1.4.1-rc.1").unwrap());
//! ```

pub mod constraint;
mod comparator;
mod error;
mod identifier;
mod semver;
mod version;
mod version_parser;

pub use comparator::Comparator;
pub use constraint::{Constraints, MatchOptions, Operator, ValidationResult};
pub use error::{Result, SemverError};
pub use identifier::Identifier;
pub use semver::{GreatestFilter, Semver};
pub use version::{Component, Version};
