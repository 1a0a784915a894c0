//! Compatibility commands - check two parts, or the current build

use std::io::BufRead;

use pcshop::core::models::Part;
use pcshop::core::services::{check_pair, validate_build};
use pcshop::output::{BuildResult, CompatibilityResult, ComputerInfo, OperationResult, Render};

use crate::cli::shell::Session;

/// Check whether two parts can be used together
pub fn compatibility<R: BufRead>(
    session: &mut Session<'_, R>,
    args: &[&str],
) -> anyhow::Result<()> {
    let Some(first) = session.resolve(args.first().copied(), "Enter a part ID: ", |s, answer| {
        lookup(s, answer, "Part 1")
    })?
    else {
        return Ok(());
    };
    let Some(second) =
        session.resolve(args.get(1).copied(), "Enter a second part ID: ", |s, answer| {
            lookup(s, answer, "Part 2")
        })?
    else {
        return Ok(());
    };

    let verdict = check_pair(first, second);
    CompatibilityResult {
        first: first.id.clone(),
        second: second.id.clone(),
        compatible: verdict.is_compatible(),
        explanation: verdict.to_string(),
    }
    .render(session.mode);
    Ok(())
}

/// Re-check every rule against the most recent build
pub fn compatibility_build<R: BufRead>(session: &Session<'_, R>) {
    let Some(computer) = &session.current else {
        OperationResult::failed("Build a computer first.").render(session.mode);
        return;
    };

    match validate_build(computer) {
        Ok(()) => BuildResult {
            computer: ComputerInfo::from(computer),
            added_to_cart: false,
        }
        .render(session.mode),
        Err(err) => OperationResult::failed(err.to_string()).render(session.mode),
    }
}

fn lookup<'c, R>(session: &Session<'c, R>, answer: &str, label: &str) -> Result<&'c Part, String> {
    session
        .catalog
        .get(&answer.to_uppercase())
        .ok_or_else(|| format!("{label} ID is invalid."))
}
