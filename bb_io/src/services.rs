//! Reading service states and starting/stopping services through
//! `brew services`.

use std::fmt;

use bb_core::{ActionOutcome, Error, ParsedServiceStates, ServiceStateMap, parse_service_states};

use crate::runner::{CommandRunner, run_checked};

const SERVICES_INFO_ARGS: [&str; 4] = ["services", "info", "--all", "--json"];

/// Read every service brew manages, failing on any problem.
pub async fn try_read_service_states(
    runner: &dyn CommandRunner,
) -> Result<ParsedServiceStates, Error> {
    let output = run_checked(runner, &SERVICES_INFO_ARGS).await?;
    parse_service_states(&output.stdout)
}

/// Read every service brew manages.
///
/// Any failure yields an empty map, which makes every package look like a
/// plain tool rather than failing the refresh.
pub async fn read_service_states(runner: &dyn CommandRunner) -> ServiceStateMap {
    match try_read_service_states(runner).await {
        Ok(parsed) => {
            if parsed.skipped > 0 {
                log::debug!(
                    "ignored {} service entries without a name or status",
                    parsed.skipped
                );
            }
            parsed.states
        }
        Err(e) => {
            log::warn!("could not read service states, treating all packages as tools: {}", e);
            ServiceStateMap::new()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceAction {
    Start,
    Stop,
}

impl ServiceAction {
    /// Subcommand passed to `brew services`.
    pub fn verb(self) -> &'static str {
        match self {
            ServiceAction::Start => "start",
            ServiceAction::Stop => "stop",
        }
    }

    fn past_tense(self) -> &'static str {
        match self {
            ServiceAction::Start => "started",
            ServiceAction::Stop => "stopped",
        }
    }
}

impl fmt::Display for ServiceAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}

/// Reject names brew would misread, such as empty strings or flags.
pub fn validate_service_name(name: &str) -> Result<&str, Error> {
    let trimmed = name.trim();
    if trimmed.is_empty() || trimmed.starts_with('-') || trimmed.contains(char::is_whitespace) {
        return Err(Error::InvalidServiceName {
            name: name.to_string(),
        });
    }
    Ok(trimmed)
}

pub(crate) fn format_success_message(action: ServiceAction, name: &str) -> String {
    format!("Service {} {}", name, action.past_tense())
}

pub(crate) fn format_failure_message(action: ServiceAction, name: &str, error: &Error) -> String {
    format!("Failed to {} {}: {}", action.verb(), name, error)
}

/// Run `brew services <start|stop> <name>`.
///
/// Never fails: every problem is folded into an unsuccessful outcome whose
/// message carries the error and brew's output.
pub async fn dispatch(
    runner: &dyn CommandRunner,
    action: ServiceAction,
    name: &str,
) -> ActionOutcome {
    let name = match validate_service_name(name) {
        Ok(name) => name,
        Err(e) => return ActionOutcome::failed(e.to_string()),
    };

    match run_checked(runner, &["services", action.verb(), name]).await {
        Ok(_) => {
            log::info!("{} service {}", action.past_tense(), name);
            ActionOutcome::succeeded(format_success_message(action, name))
        }
        Err(e) => {
            log::warn!("could not {} service {}: {}", action, name, e);
            ActionOutcome::failed(format_failure_message(action, name, &e))
        }
    }
}
