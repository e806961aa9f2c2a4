//! Greatest command - find the greatest version in a list.

use anyhow::Result;
use clap::Args;

use svtool_semver::{GreatestFilter, Semver};

use crate::output::{finish, parse_version, Outcome, Report, SUCCESS};

#[derive(Args, Debug)]
pub struct GreatestArgs {
    /// Ignore all versions with pre-release information before comparison
    #[arg(short = 'p', long = "filter-pre-release", alias = "filte-pre-release")]
    pub filter_pre_release: bool,

    /// Ignore all versions with build information before comparison
    #[arg(short = 'b', long = "filter-build", alias = "filte-build")]
    pub filter_build: bool,

    /// The versions to compare
    #[arg(value_name = "VERSIONS", required = true)]
    pub versions: Vec<String>,
}

pub fn execute(args: GreatestArgs) -> Result<i32> {
    Ok(finish(run(&args)))
}

fn run(args: &GreatestArgs) -> Outcome {
    // Report the first bad argument by itself before comparing anything
    for input in &args.versions {
        parse_version(input, "VERSION")?;
    }

    let versions: Vec<&str> = args.versions.iter().map(String::as_str).collect();
    let filter = GreatestFilter {
        pre_release: args.filter_pre_release,
        build: args.filter_build,
    };

    match Semver::greatest(&versions, filter).map_err(Report::error)? {
        Some(greatest) => Ok(Report::exit(SUCCESS).line(greatest)),
        None => Err(Report::error("no versions left after filtering")),
    }
}
