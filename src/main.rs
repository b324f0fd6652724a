use anyhow::Context;
use clap::{Arg, Command};
use std::path::PathBuf;
use std::process::ExitCode;

use robot_invoker::invoker::Invocation;
use robot_invoker::workdir;

const MISSING_ID_MESSAGE: &str = "Error: Test case ID is required as a command-line argument.";

fn main() -> anyhow::Result<ExitCode> {
    let matches = Command::new("robot-invoker")
        .version("0.1.0")
        .about("Launches the Robot Framework runner for a single test case")
        .arg(
            Arg::new("test-case-id")
                .help("Test case identifier passed to the runner's inclusion filter")
                .value_name("TEST_CASE_ID")
                .index(1),
        )
        .arg(
            Arg::new("workdir")
                .short('w')
                .long("workdir")
                .value_name("PATH")
                .help("Directory containing the test suites (default: $ROBOT_WORKDIR, else ~/Documents/Test-Robot)"),
        )
        .get_matches();

    // The identifier is checked by hand so a missing one produces the
    // fixed usage message rather than clap's own error.
    let test_case_id = match matches.get_one::<String>("test-case-id") {
        Some(id) if !id.is_empty() => id,
        _ => {
            println!("{}", MISSING_ID_MESSAGE);
            return Ok(ExitCode::FAILURE);
        }
    };

    let flag = matches.get_one::<String>("workdir").map(PathBuf::from);
    let workdir = workdir::resolve_from_env(flag.as_deref())
        .context("Could not resolve the working directory")?;

    let invocation = Invocation::new(workdir, test_case_id);
    println!(
        "Running: {} (in {})",
        invocation.command_line(),
        invocation.workdir.display()
    );

    let status = invocation.run().with_context(|| {
        format!(
            "Runner did not start in {}",
            invocation.workdir.display()
        )
    })?;

    // The runner's verdict becomes our own exit code; a signal death
    // has no code and maps to failure.
    Ok(match status.code() {
        Some(code) => ExitCode::from(code.clamp(0, 255) as u8),
        None => ExitCode::FAILURE,
    })
}
