//! Running brew as a child process.
//!
//! [`CommandRunner`] is the seam between the aggregation logic and the
//! outside world; tests substitute a mock or a scripted runner. The real
//! implementation, [`BrewRunner`], bounds every call with a timeout and
//! hands the child an augmented `PATH` instead of touching the parent's
//! environment.

use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use bb_core::Error;

use crate::locate::BrewLocator;

/// Directories put in front of the inherited `PATH` for every child.
pub const DEFAULT_PATH_PREFIX: &[&str] = &[
    "/opt/homebrew/bin",
    "/usr/local/bin",
    "/usr/bin",
    "/bin",
    "/usr/sbin",
    "/sbin",
];

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Captured result of a finished brew invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    /// `None` when the process was killed by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Stdout and stderr together, for diagnostics.
    pub fn combined(&self) -> String {
        match (self.stdout.trim().is_empty(), self.stderr.trim().is_empty()) {
            (true, true) => String::new(),
            (false, true) => self.stdout.clone(),
            (true, false) => self.stderr.clone(),
            (false, false) => format!("{}\n{}", self.stdout.trim_end(), self.stderr),
        }
    }
}

/// Runs brew with the given arguments.
///
/// `Err` means the process could not be run to completion (not found,
/// timed out). A non-zero exit is still `Ok` with `success == false`.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, args: &[String]) -> Result<CommandOutput, Error>;
}

/// Render arguments the way a user would type them.
pub fn command_line<S: AsRef<str>>(args: &[S]) -> String {
    let mut line = String::from("brew");
    for arg in args {
        line.push(' ');
        line.push_str(arg.as_ref());
    }
    line
}

/// Run and turn a non-zero exit into [`Error::CommandFailed`].
pub async fn run_checked(
    runner: &dyn CommandRunner,
    args: &[&str],
) -> Result<CommandOutput, Error> {
    let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
    let output = runner.run(&args).await?;
    if !output.success {
        return Err(Error::CommandFailed {
            command: command_line(&args),
            code: output.code,
            output: output.combined(),
        });
    }
    Ok(output)
}

/// Settings for [`BrewRunner`], fixed at startup.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    pub locator: BrewLocator,
    pub path_prefix: Vec<PathBuf>,
    pub timeout: Duration,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            locator: BrewLocator::default(),
            path_prefix: DEFAULT_PATH_PREFIX.iter().map(PathBuf::from).collect(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Runs the real brew binary.
pub struct BrewRunner {
    config: RunnerConfig,
}

impl BrewRunner {
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    /// `PATH` for the child: configured prefix, then the inherited value.
    fn child_path(&self) -> Option<OsString> {
        if self.config.path_prefix.is_empty() {
            return None;
        }
        let inherited = std::env::var_os("PATH")
            .map(|p| std::env::split_paths(&p).collect::<Vec<_>>())
            .unwrap_or_default();
        let dirs = self.config.path_prefix.iter().cloned().chain(inherited);
        match std::env::join_paths(dirs) {
            Ok(path) => Some(path),
            Err(e) => {
                log::warn!("not extending PATH for brew: {}", e);
                None
            }
        }
    }
}

impl Default for BrewRunner {
    fn default() -> Self {
        Self::new(RunnerConfig::default())
    }
}

#[async_trait]
impl CommandRunner for BrewRunner {
    async fn run(&self, args: &[String]) -> Result<CommandOutput, Error> {
        let program = self.config.locator.resolve();
        let command = command_line(args);
        log::debug!("running {} ({})", command, program.display());

        let mut cmd = tokio::process::Command::new(program);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        if let Some(path) = self.child_path() {
            cmd.env("PATH", path);
        }

        let output = match tokio::time::timeout(self.config.timeout, cmd.output()).await {
            Ok(Ok(output)) => output,
            Ok(Err(e)) if e.kind() == ErrorKind::NotFound => {
                return Err(Error::BrewNotFound {
                    tried: self.config.locator.tried(),
                });
            }
            Ok(Err(e)) => {
                return Err(Error::Spawn {
                    command,
                    message: e.to_string(),
                });
            }
            Err(_) => {
                return Err(Error::CommandTimeout {
                    command,
                    timeout: self.config.timeout,
                });
            }
        };

        Ok(CommandOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
