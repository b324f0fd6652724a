use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::error::{InvokerError, Result};

/// Environment variable that overrides the default working directory.
pub const WORKDIR_ENV: &str = "ROBOT_WORKDIR";

/// Subdirectories under the home directory holding the test-suite assets.
const HOME_SUBDIRS: [&str; 2] = ["Documents", "Test-Robot"];

/// Resolve the working directory the runner executes in.
///
/// Precedence: explicit `--workdir` flag, then the `ROBOT_WORKDIR`
/// environment variable, then `<home>/Documents/Test-Robot`. The
/// directory is not checked for existence here; a missing directory
/// surfaces when the runner is launched.
pub fn resolve(
    flag: Option<&Path>,
    env_override: Option<&OsStr>,
    home: Option<PathBuf>,
) -> Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(path.to_path_buf());
    }

    if let Some(value) = env_override {
        return Ok(PathBuf::from(value));
    }

    let home = home.ok_or(InvokerError::HomeDirUnavailable)?;
    Ok(HOME_SUBDIRS.iter().fold(home, |path, part| path.join(part)))
}

/// Resolve using the real environment and home directory.
pub fn resolve_from_env(flag: Option<&Path>) -> Result<PathBuf> {
    let env_override = std::env::var_os(WORKDIR_ENV);
    resolve(flag, env_override.as_deref(), dirs::home_dir())
}
