//! Satisfies command - test a version against constraints.

use anyhow::Result;
use clap::Args;

use svtool_semver::Constraints;

use crate::config::Settings;
use crate::output::{finish, parse_version, Outcome, Report, FALSE, SUCCESS};

#[derive(Args, Debug)]
pub struct SatisfiesArgs {
    /// The version to test
    #[arg(value_name = "VERSION")]
    pub version: String,

    /// The constraints to test against
    #[arg(value_name = "CONSTRAINTS")]
    pub constraints: String,
}

pub fn execute(args: SatisfiesArgs, settings: &Settings) -> Result<i32> {
    Ok(finish(run(&args, settings)))
}

fn run(args: &SatisfiesArgs, settings: &Settings) -> Outcome {
    let version = parse_version(&args.version, "VERSION")?;
    let constraints = Constraints::parse(&args.constraints)
        .map_err(|e| Report::error(format!("Failed to parse constraints; {}", e)))?;

    let result = constraints.validate_with(&version, &settings.options);
    if result.satisfied {
        return Ok(Report::exit(SUCCESS));
    }

    let mut report = Report::exit(FALSE);
    if settings.verbose {
        report.stdout = result.reasons;
    }
    Ok(report)
}
