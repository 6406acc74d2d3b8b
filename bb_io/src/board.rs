//! Refresh orchestration and the public entry points used by front ends.

use bb_core::{ActionOutcome, AggregateResult, PackageClass, classify_and_rank};

use crate::packages::list_packages;
use crate::runner::{BrewRunner, CommandRunner, RunnerConfig};
use crate::services::{ServiceAction, dispatch, read_service_states};

/// Aggregated view over brew packages and services.
///
/// Holds no state between calls besides the runner; every refresh and every
/// action goes back to brew.
pub struct Brewboard {
    runner: Box<dyn CommandRunner>,
}

impl Brewboard {
    pub fn new(runner: Box<dyn CommandRunner>) -> Self {
        Self { runner }
    }

    pub fn with_config(config: RunnerConfig) -> Self {
        Self::new(Box::new(BrewRunner::new(config)))
    }

    /// Collect formulae and casks, each classified and ranked.
    ///
    /// Service states are read first; both listings then run concurrently
    /// against that same snapshot. Never fails: unavailable pieces come back
    /// empty.
    pub async fn refresh(&self) -> AggregateResult {
        let runner = self.runner.as_ref();
        let services = read_service_states(runner).await;

        let (formulae, casks) = tokio::join!(
            list_packages(runner, PackageClass::Formula),
            list_packages(runner, PackageClass::Cask),
        );

        let result = AggregateResult {
            formulae: classify_and_rank(formulae, &services),
            casks: classify_and_rank(casks, &services),
        };
        log::debug!(
            "refreshed {} formulae and {} casks against {} services",
            result.formulae.len(),
            result.casks.len(),
            services.len()
        );
        result
    }

    pub async fn start_service(&self, name: &str) -> ActionOutcome {
        dispatch(self.runner.as_ref(), ServiceAction::Start, name).await
    }

    pub async fn stop_service(&self, name: &str) -> ActionOutcome {
        dispatch(self.runner.as_ref(), ServiceAction::Stop, name).await
    }
}

impl Default for Brewboard {
    fn default() -> Self {
        Self::with_config(RunnerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::{CommandOutput, MockCommandRunner};
    use bb_core::{Error, StatusCategory};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn ok(stdout: &str) -> CommandOutput {
        CommandOutput {
            success: true,
            code: Some(0),
            stdout: stdout.to_string(),
            stderr: String::new(),
        }
    }

    fn names(records: &[bb_core::PackageRecord]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    fn board_with(
        services: Result<CommandOutput, Error>,
        formulae: &'static str,
        casks: &'static str,
    ) -> Brewboard {
        let mut mock = MockCommandRunner::new();
        mock.expect_run()
            .withf(|args| args.first().map(String::as_str) == Some("services"))
            .times(1)
            .return_once(move |_| services);
        mock.expect_run()
            .withf(|args| args.last().map(String::as_str) == Some("--formula"))
            .times(1)
            .returning(move |_| Ok(ok(formulae)));
        mock.expect_run()
            .withf(|args| args.last().map(String::as_str) == Some("--cask"))
            .times(1)
            .returning(move |_| Ok(ok(casks)));
        Brewboard::new(Box::new(mock))
    }

    #[tokio::test]
    async fn running_services_come_first() {
        let board = board_with(
            Ok(ok(r#"[{"name":"redis","status":"started"},{"name":"mysql","status":"stopped"}]"#)),
            "redis 7.2.0\nmysql 8.0.1\njq 1.7\n",
            "",
        );

        let result = board.refresh().await;
        assert_eq!(names(&result.formulae), vec!["redis", "mysql", "jq"]);
        assert_eq!(result.formulae[0].status, StatusCategory::Started);
        assert_eq!(result.formulae[1].status, StatusCategory::Stopped);
        assert_eq!(result.formulae[2].status, StatusCategory::NotAService);
        assert!(result.casks.is_empty());
    }

    #[tokio::test]
    async fn service_failure_makes_everything_a_tool() {
        let board = board_with(
            Err(Error::BrewNotFound { tried: Vec::new() }),
            "wget 1.24\nbat 0.24\n",
            "firefox 121.0\nalacritty 0.13.0\n",
        );

        let result = board.refresh().await;
        assert_eq!(names(&result.formulae), vec!["bat", "wget"]);
        assert_eq!(names(&result.casks), vec!["alacritty", "firefox"]);
        assert!(
            result
                .formulae
                .iter()
                .chain(&result.casks)
                .all(|r| r.status == StatusCategory::NotAService)
        );
    }

    #[tokio::test]
    async fn both_classes_share_the_snapshot() {
        let board = board_with(
            Ok(ok(r#"[{"name":"docker","status":"started"}]"#)),
            "docker 24.0.7\n",
            "docker 4.26.1\nfirefox 121.0\n",
        );

        let result = board.refresh().await;
        assert_eq!(result.formulae[0].status, StatusCategory::Started);
        assert_eq!(result.casks[0].name, "docker");
        assert_eq!(result.casks[0].status, StatusCategory::Started);
    }

    #[tokio::test]
    async fn one_failed_class_does_not_block_the_other() {
        let mut mock = MockCommandRunner::new();
        mock.expect_run()
            .withf(|args| args.first().map(String::as_str) == Some("services"))
            .returning(|_| Ok(ok("[]")));
        mock.expect_run()
            .withf(|args| args.last().map(String::as_str) == Some("--formula"))
            .returning(|_| Ok(ok("jq 1.7\n")));
        mock.expect_run()
            .withf(|args| args.last().map(String::as_str) == Some("--cask"))
            .returning(|_| {
                Ok(CommandOutput {
                    success: false,
                    code: Some(1),
                    stdout: String::new(),
                    stderr: "Error: cask support unavailable".to_string(),
                })
            });

        let result = Brewboard::new(Box::new(mock)).refresh().await;
        assert_eq!(names(&result.formulae), vec!["jq"]);
        assert!(result.casks.is_empty());
    }

    #[tokio::test]
    async fn every_refresh_queries_brew_again() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();

        let mut mock = MockCommandRunner::new();
        mock.expect_run().returning(move |args| {
            counter.fetch_add(1, Ordering::SeqCst);
            if args[0] == "services" {
                Ok(ok("[]"))
            } else {
                Ok(ok(""))
            }
        });

        let board = Brewboard::new(Box::new(mock));
        board.refresh().await;
        board.refresh().await;
        assert_eq!(calls.load(Ordering::SeqCst), 6);
    }

    #[tokio::test]
    async fn start_and_stop_delegate_to_brew() {
        let mut mock = MockCommandRunner::new();
        mock.expect_run()
            .withf(|args| args.len() == 3 && args[1] == "start")
            .times(1)
            .returning(|_| Ok(ok("")));
        mock.expect_run()
            .withf(|args| args.len() == 3 && args[1] == "stop")
            .times(1)
            .returning(|_| {
                Ok(CommandOutput {
                    success: false,
                    code: Some(1),
                    stdout: "Error: Service `redis` is not started.".to_string(),
                    stderr: String::new(),
                })
            });

        let board = Brewboard::new(Box::new(mock));

        let started = board.start_service("redis").await;
        assert!(started.success);
        assert!(started.message.contains("redis"));

        let stopped = board.stop_service("redis").await;
        assert!(!stopped.success);
        assert!(stopped.message.contains("is not started"));
    }
}
