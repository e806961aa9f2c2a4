//! Greater, lesser and equal commands - compare two versions.

use anyhow::Result;
use clap::Args;

use svtool_semver::Comparator;

use crate::config::Settings;
use crate::output::{finish, parse_version, Outcome, Report, FALSE, SUCCESS};

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Left side of the comparison
    #[arg(value_name = "A")]
    pub a: String,

    /// Right side of the comparison
    #[arg(value_name = "B")]
    pub b: String,
}

/// Which relation between A and B is checked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Greater,
    Lesser,
    Equal,
}

pub fn execute(comparison: Comparison, args: CompareArgs, settings: &Settings) -> Result<i32> {
    Ok(finish(run(comparison, &args, settings)))
}

fn run(comparison: Comparison, args: &CompareArgs, settings: &Settings) -> Outcome {
    let a = parse_version(&args.a, "A")?;
    let b = parse_version(&args.b, "B")?;

    let holds = match comparison {
        Comparison::Greater => Comparator::greater_than(&a, &b),
        Comparison::Lesser => Comparator::less_than(&a, &b),
        Comparison::Equal => Comparator::equal_to(&a, &b),
    };
    log::debug!("{:?}({}, {}) = {}", comparison, a, b, holds);

    let code = if holds { SUCCESS } else { FALSE };
    let report = Report::exit(code);

    // The winner is echoed exactly as given
    if !settings.verbose || comparison == Comparison::Equal {
        return Ok(report);
    }
    Ok(report.line(if holds { &args.a } else { &args.b }))
}
