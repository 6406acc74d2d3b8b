//! Test utilities for brewboard
//!
//! - `ScriptedRunner` - a `CommandRunner` that answers from canned responses
//!   and records every invocation
//! - Output helpers - build successful and failed `CommandOutput`s
//! - `write_fake_brew` - drop an executable shell script that stands in for
//!   brew (unix only)
//!
//! # Example
//!
//! ```ignore
//! use bb_io::Brewboard;
//! use bb_io::test_utils::{ScriptedRunner, success};
//!
//! #[tokio::test]
//! async fn test_refresh() {
//!     let runner = ScriptedRunner::new()
//!         .respond(&["services", "info", "--all", "--json"], success("[]"))
//!         .respond(&["list", "--versions", "--formula"], success("jq 1.7\n"));
//!
//!     let result = Brewboard::new(Box::new(runner)).refresh().await;
//!     assert_eq!(result.formulae[0].name, "jq");
//! }
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use bb_core::Error;

use crate::runner::{CommandOutput, CommandRunner, command_line};

// ============================================================================
// Output helpers
// ============================================================================

/// Exit code 0 with the given stdout.
pub fn success(stdout: &str) -> CommandOutput {
    CommandOutput {
        success: true,
        code: Some(0),
        stdout: stdout.to_string(),
        stderr: String::new(),
    }
}

/// Non-zero exit with the given stderr.
pub fn failure(code: i32, stderr: &str) -> CommandOutput {
    CommandOutput {
        success: false,
        code: Some(code),
        stdout: String::new(),
        stderr: stderr.to_string(),
    }
}

// ============================================================================
// ScriptedRunner
// ============================================================================

/// Answers brew invocations from a table keyed by the exact argument list.
///
/// Unscripted invocations fail with [`Error::Spawn`], the same way a missing
/// subcommand would surface from a real runner.
#[derive(Clone, Default)]
pub struct ScriptedRunner {
    responses: HashMap<Vec<String>, Result<CommandOutput, Error>>,
    calls: Arc<Mutex<Vec<Vec<String>>>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `args` with `output`.
    pub fn respond(mut self, args: &[&str], output: CommandOutput) -> Self {
        self.responses.insert(to_owned_args(args), Ok(output));
        self
    }

    /// Answer `args` with `error`.
    pub fn fail(mut self, args: &[&str], error: Error) -> Self {
        self.responses.insert(to_owned_args(args), Err(error));
        self
    }

    /// Shared handle to the recorded invocations, usable after the runner
    /// has been boxed.
    pub fn call_log(&self) -> Arc<Mutex<Vec<Vec<String>>>> {
        self.calls.clone()
    }

    /// Invocations so far, in order.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl CommandRunner for ScriptedRunner {
    async fn run(&self, args: &[String]) -> Result<CommandOutput, Error> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(args.to_vec());
        }
        match self.responses.get(args) {
            Some(response) => response.clone(),
            None => Err(Error::Spawn {
                command: command_line(args),
                message: "no scripted response".to_string(),
            }),
        }
    }
}

fn to_owned_args(args: &[&str]) -> Vec<String> {
    args.iter().map(|a| a.to_string()).collect()
}

// ============================================================================
// Fake brew executable
// ============================================================================

/// Write an executable `/bin/sh` script named `brew` into `dir`.
#[cfg(unix)]
pub fn write_fake_brew(dir: &Path, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("brew");
    std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).expect("write fake brew");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
        .expect("chmod fake brew");
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        to_owned_args(list)
    }

    #[tokio::test]
    async fn scripted_response_is_returned() {
        let runner = ScriptedRunner::new()
            .respond(&["list", "--versions", "--formula"], success("jq 1.7\n"));

        let out = runner
            .run(&args(&["list", "--versions", "--formula"]))
            .await
            .unwrap();
        assert_eq!(out.stdout, "jq 1.7\n");
        assert_eq!(runner.calls(), vec![args(&["list", "--versions", "--formula"])]);
    }

    #[tokio::test]
    async fn unscripted_call_fails() {
        let runner = ScriptedRunner::new();
        let err = runner.run(&args(&["doctor"])).await.unwrap_err();
        assert!(matches!(err, Error::Spawn { .. }));
    }

    #[tokio::test]
    async fn call_log_survives_boxing() {
        let runner =
            ScriptedRunner::new().respond(&["services", "stop", "redis"], failure(1, "nope"));
        let log = runner.call_log();
        let boxed: Box<dyn CommandRunner> = Box::new(runner);

        let out = boxed.run(&args(&["services", "stop", "redis"])).await.unwrap();
        assert!(!out.success);
        assert_eq!(log.lock().unwrap().len(), 1);
    }
}
