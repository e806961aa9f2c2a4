//! Strict Semantic Versioning 2.0.0 grammar

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{Result, SemverError};
use crate::identifier::{parse_build, parse_prerelease};
use crate::version::Version;

lazy_static! {
    // `\d` would also match non-ASCII digits, so digit classes are spelled out.
    static ref VERSION_RE: Regex = Regex::new(
        r"^[vV]?(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)(?:-([0-9A-Za-z.-]+))?(?:\+([0-9A-Za-z.-]+))?$"
    ).unwrap();
}

/// Parse a full version string, accepting a single leading `v` or `V`.
pub(crate) fn parse_version(input: &str) -> Result<Version> {
    let caps = VERSION_RE
        .captures(input)
        .ok_or_else(|| SemverError::format(input, explain_mismatch(input)))?;

    let major = parse_component(input, &caps[1], "major")?;
    let minor = parse_component(input, &caps[2], "minor")?;
    let patch = parse_component(input, &caps[3], "patch")?;

    let pre = match caps.get(4) {
        Some(m) => parse_prerelease(m.as_str())
            .map_err(|e| SemverError::format(input, format!("invalid prerelease: {}", e)))?,
        None => Vec::new(),
    };
    let build = match caps.get(5) {
        Some(m) => parse_build(m.as_str())
            .map_err(|e| SemverError::format(input, format!("invalid build metadata: {}", e)))?,
        None => Vec::new(),
    };

    Ok(Version::from_parts(major, minor, patch, pre, build))
}

/// Parse a numeric core component, rejecting values that do not fit in `u64`.
pub(crate) fn parse_component(input: &str, digits: &str, name: &str) -> Result<u64> {
    digits
        .parse::<u64>()
        .map_err(|_| SemverError::format(input, format!("{} component {} is too large", name, digits)))
}

/// Build a human readable reason for a string the grammar rejected.
fn explain_mismatch(input: &str) -> String {
    if input.is_empty() {
        return "empty version".to_string();
    }

    let body = input
        .strip_prefix('v')
        .or_else(|| input.strip_prefix('V'))
        .unwrap_or(input);

    let (rest, build) = match body.split_once('+') {
        Some((rest, build)) => (rest, Some(build)),
        None => (body, None),
    };
    let (core, pre) = match rest.split_once('-') {
        Some((core, pre)) => (core, Some(pre)),
        None => (rest, None),
    };

    let parts: Vec<&str> = core.split('.').collect();
    if parts.len() != 3 {
        return format!("expected MAJOR.MINOR.PATCH, found {} component(s)", parts.len());
    }

    for (part, name) in parts.iter().zip(["major", "minor", "patch"]) {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return format!("{} component \"{}\" is not a number", name, part);
        }
        if part.len() > 1 && part.starts_with('0') {
            return format!("{} component \"{}\" must not have leading zeros", name, part);
        }
    }

    if let Some(pre) = pre {
        if pre.is_empty() {
            return "empty prerelease".to_string();
        }
        if let Err(e) = parse_prerelease(pre) {
            return format!("invalid prerelease: {}", e);
        }
    }
    if let Some(build) = build {
        if build.is_empty() {
            return "empty build metadata".to_string();
        }
        if let Err(e) = parse_build(build) {
            return format!("invalid build metadata: {}", e);
        }
    }

    "does not match MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]".to_string()
}
