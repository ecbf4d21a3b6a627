//! Validate a JSON form snapshot against a named policy.
//!
//! Prints the error mapping as JSON on stdout. Exits with 0 when the form
//! is valid, 1 when any field fails, and 2 when the input cannot be read,
//! parsed or configured.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use color_eyre::eyre::{Context, Report, Result};
use form_validation::{FormInput, PolicyKind};
use onboarding::FormSettings;
use tracing::{debug, warn};
use tracing_subscriber::{EnvFilter, fmt};

/// `form-check` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "form-check",
    about = "Validate a registration or sign-in form snapshot",
    version
)]
struct CliArgs {
    /// Policy to validate against: `registration` or `sign-in`.
    #[arg(long, value_name = "policy", default_value = "registration")]
    policy: PolicyKind,
    /// JSON document with `name`, `email` and `password`. Reads stdin when
    /// omitted.
    #[arg(long, value_name = "path")]
    input: Option<PathBuf>,
}

/// Exit status when the form is valid.
const VALID: u8 = 0;
/// Exit status when at least one field fails.
const INVALID: u8 = 1;
/// Exit status when the check itself could not run.
const ERROR: u8 = 2;

fn main() -> ExitCode {
    if let Err(e) = color_eyre::install() {
        warn!(error = %e, "color-eyre install failed");
    }
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let outcome = run(&CliArgs::parse());
    if let Err(report) = &outcome {
        write_report(report);
    }
    ExitCode::from(status(&outcome))
}

fn write_report(report: &Report) {
    if let Err(write_err) = writeln!(io::stderr().lock(), "{report:?}") {
        drop(write_err);
    }
}

/// Validate the requested document; `Ok(true)` when every field passes.
fn run(args: &CliArgs) -> Result<bool> {
    let settings = FormSettings::from_environment("form-check")?;
    let policy = settings.policy(args.policy)?;

    let raw = read_document(args.input.as_deref())?;
    let input = FormInput::from_json(&raw)?;
    let result = policy.validate(&input);
    debug!(policy = %args.policy, failed = result.len(), "form checked");

    let rendered = serde_json::to_string(&result).wrap_err("serialise validation result")?;
    writeln!(io::stdout().lock(), "{rendered}").wrap_err("write validation result")?;

    Ok(result.is_submittable())
}

fn status(outcome: &Result<bool>) -> u8 {
    match outcome {
        Ok(true) => VALID,
        Ok(false) => INVALID,
        Err(_) => ERROR,
    }
}

fn read_document(source: Option<&Path>) -> Result<String> {
    match source {
        Some(path) => {
            fs::read_to_string(path).wrap_err_with(|| format!("read {}", path.display()))
        }
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .wrap_err("read form input from stdin")?;
            Ok(buffer)
        }
    }
}

#[cfg(test)]
mod tests {
    //! Exit status mapping.

    use color_eyre::eyre::eyre;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Ok(true), VALID)]
    #[case(Ok(false), INVALID)]
    #[case(Err(eyre!("read input.json")), ERROR)]
    fn statuses_separate_invalid_forms_from_failures(
        #[case] outcome: Result<bool>,
        #[case] expected: u8,
    ) {
        assert_eq!(status(&outcome), expected);
    }

    #[test]
    fn unreadable_input_is_an_error_not_an_invalid_form() {
        let args = CliArgs {
            policy: PolicyKind::Registration,
            input: Some(PathBuf::from("/nonexistent/form-check/input.json")),
        };
        let outcome = run(&args);
        assert!(outcome.is_err());
        assert_eq!(status(&outcome), ERROR);
    }
}
