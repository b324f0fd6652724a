use std::path::PathBuf;
use std::process::{Command, ExitStatus};

use crate::error::{InvokerError, Result};

/// Environment variable naming the runner executable, for hosts where
/// `robot` is not on PATH.
pub const RUNNER_ENV: &str = "ROBOT_BIN";

const DEFAULT_RUNNER: &str = "robot";
const OUTPUT_DIR: &str = "output";
const SUITE_DIR: &str = "testsuites";

/// One run of the external Robot Framework runner for a single test case.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub runner: String,
    pub workdir: PathBuf,
    pub output_dir: String,
    pub suite: String,
    pub test_case_id: String,
}

impl Invocation {
    pub fn new(workdir: PathBuf, test_case_id: &str) -> Self {
        let runner = std::env::var(RUNNER_ENV).unwrap_or_else(|_| DEFAULT_RUNNER.to_string());

        Self {
            runner,
            workdir,
            output_dir: OUTPUT_DIR.to_string(),
            suite: SUITE_DIR.to_string(),
            test_case_id: test_case_id.to_string(),
        }
    }

    /// The argument list passed to the runner: output directory,
    /// inclusion filter, then the suite directory.
    pub fn args(&self) -> Vec<&str> {
        vec![
            "-d",
            &self.output_dir,
            "-i",
            &self.test_case_id,
            &self.suite,
        ]
    }

    /// Build the child process. Arguments are passed structurally, with
    /// the directory change expressed as `current_dir` rather than a
    /// shell `cd`, so the identifier is never interpreted by a shell.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(&self.runner);
        cmd.args(self.args()).current_dir(&self.workdir);
        cmd
    }

    /// Launch the runner and block until it exits. The runner's stdout
    /// and stderr are inherited, so its output goes straight to the
    /// caller's terminal.
    pub fn run(&self) -> Result<ExitStatus> {
        self.command()
            .status()
            .map_err(|source| InvokerError::Launch {
                program: self.runner.clone(),
                source,
            })
    }

    /// Human-readable rendering of the command, printed before launch.
    pub fn command_line(&self) -> String {
        let mut parts = vec![self.runner.clone()];
        parts.extend(self.args().iter().map(|a| a.to_string()));
        parts.join(" ")
    }
}
