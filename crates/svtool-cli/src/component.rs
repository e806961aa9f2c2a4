//! Inc, get and set commands - read and edit single version components.

use anyhow::Result;
use clap::Args;

use svtool_semver::{Component, SemverError};

use crate::output::{finish, parse_version, Outcome, Report, SUCCESS};

#[derive(Args, Debug)]
pub struct IncArgs {
    /// The component to increment. Possible values: [major, minor, patch]
    #[arg(value_name = "COMPONENT")]
    pub component: String,

    /// The version to increment
    #[arg(value_name = "VERSION")]
    pub version: String,
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// The component to read. Possible values: [major, minor, patch, prerelease, metadata]
    #[arg(value_name = "COMPONENT")]
    pub component: String,

    /// The version to read the component from
    #[arg(value_name = "VERSION")]
    pub version: String,
}

#[derive(Args, Debug)]
pub struct SetArgs {
    /// The component to set. Possible values: [prerelease, metadata]
    #[arg(value_name = "COMPONENT")]
    pub component: String,

    /// The version of which to set a component
    #[arg(value_name = "VERSION")]
    pub version: String,

    /// The value to set; empty clears the component
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    pub value: String,
}

pub fn execute_inc(args: IncArgs) -> Result<i32> {
    Ok(finish(run_inc(&args)))
}

pub fn execute_get(args: GetArgs) -> Result<i32> {
    Ok(finish(run_get(&args)))
}

pub fn execute_set(args: SetArgs) -> Result<i32> {
    Ok(finish(run_set(&args)))
}

fn component(name: &str) -> Result<Component, Report> {
    name.parse::<Component>().map_err(Report::error)
}

fn run_inc(args: &IncArgs) -> Outcome {
    let version = parse_version(&args.version, "VERSION")?;
    let next = version
        .increment(component(&args.component)?)
        .map_err(Report::error)?;
    Ok(Report::exit(SUCCESS).line(next))
}

fn run_get(args: &GetArgs) -> Outcome {
    let version = parse_version(&args.version, "VERSION")?;
    let value = version.get(component(&args.component)?);
    Ok(Report::exit(SUCCESS).line(value))
}

fn run_set(args: &SetArgs) -> Outcome {
    let version = parse_version(&args.version, "VERSION")?;
    let component = component(&args.component)?;
    let updated = version.set(component, &args.value).map_err(|e| set_error(component, e))?;
    Ok(Report::exit(SUCCESS).line(updated))
}

fn set_error(component: Component, error: SemverError) -> Report {
    match error {
        SemverError::UnknownComponent(_) => Report::error(error),
        other => Report::error(format!("invalid {}; {}", component, other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::FAILURE;

    fn inc(component: &str, version: &str) -> Outcome {
        run_inc(&IncArgs {
            component: component.to_string(),
            version: version.to_string(),
        })
    }

    fn get(component: &str, version: &str) -> Outcome {
        run_get(&GetArgs {
            component: component.to_string(),
            version: version.to_string(),
        })
    }

    fn set(component: &str, version: &str, value: &str) -> Outcome {
        run_set(&SetArgs {
            component: component.to_string(),
            version: version.to_string(),
            value: value.to_string(),
        })
    }

    #[test]
    fn test_inc() {
        assert_eq!(inc("major", "1.2.3").unwrap().stdout, vec!["2.0.0"]);
        assert_eq!(inc("minor", "v1.2.3-rc.1+b").unwrap().stdout, vec!["1.3.0"]);
        assert_eq!(inc("patch", "1.2.3-beta").unwrap().stdout, vec!["1.2.4"]);
    }

    #[test]
    fn test_inc_unknown_component() {
        let report = inc("build", "1.2.3").unwrap_err();
        assert_eq!(report.code, FAILURE);
        assert_eq!(report.stderr, vec!["unknown component name: 'build'"]);

        let report = inc("prerelease", "1.2.3").unwrap_err();
        assert_eq!(report.stderr, vec!["unknown component name: 'prerelease'"]);
    }

    #[test]
    fn test_version_checked_before_component() {
        let report = inc("build", "1.2").unwrap_err();
        assert!(report.stderr[0].starts_with("Failed to parse <VERSION> version; "));
    }

    #[test]
    fn test_get() {
        assert_eq!(get("major", "1.2.3-rc.1+sha.5").unwrap().stdout, vec!["1"]);
        assert_eq!(get("patch", "1.2.3-rc.1+sha.5").unwrap().stdout, vec!["3"]);
        assert_eq!(get("prerelease", "1.2.3-rc.1+sha.5").unwrap().stdout, vec!["rc.1"]);
        assert_eq!(get("metadata", "1.2.3-rc.1+sha.5").unwrap().stdout, vec!["sha.5"]);
        assert_eq!(get("metadata", "1.2.3").unwrap().stdout, vec![""]);
        assert_eq!(
            get("pre", "1.2.3").unwrap_err().stderr,
            vec!["unknown component name: 'pre'"]
        );
    }

    #[test]
    fn test_set() {
        assert_eq!(set("prerelease", "1.2.3", "beta.2").unwrap().stdout, vec!["1.2.3-beta.2"]);
        assert_eq!(set("metadata", "1.2.3-rc", "001").unwrap().stdout, vec!["1.2.3-rc+001"]);
        assert_eq!(set("prerelease", "1.2.3-rc+b", "").unwrap().stdout, vec!["1.2.3+b"]);
    }

    #[test]
    fn test_set_invalid_values() {
        let report = set("prerelease", "1.2.3", "01").unwrap_err();
        assert_eq!(report.code, FAILURE);
        assert!(report.stderr[0].starts_with("invalid prerelease; "));

        let report = set("metadata", "1.2.3", "a..b").unwrap_err();
        assert!(report.stderr[0].starts_with("invalid metadata; "));

        let report = set("major", "1.2.3", "2").unwrap_err();
        assert_eq!(report.stderr, vec!["unknown component name: 'major'"]);
    }
}
