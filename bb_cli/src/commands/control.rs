//! Service control commands (start/stop).

use console::style;

use bb_core::ActionOutcome;
use bb_io::Brewboard;

/// Format the "Starting <formula>..." message.
pub(crate) fn format_starting_message(formula: &str) -> String {
    format!("Starting {}...", formula)
}

/// Format the "Stopping <formula>..." message.
pub(crate) fn format_stopping_message(formula: &str) -> String {
    format!("Stopping {}...", formula)
}

/// Print an outcome and exit non-zero if it failed.
fn report(outcome: &ActionOutcome, json: bool) {
    if json {
        match serde_json::to_string_pretty(outcome) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!(
                    "{} Failed to serialize JSON: {}",
                    style("error:").red().bold(),
                    e
                );
                std::process::exit(1);
            }
        }
    } else if outcome.success {
        println!(
            "{} {} {}",
            style("==>").cyan().bold(),
            style("✓").green(),
            outcome.message
        );
    } else {
        eprintln!("{} {}", style("error:").red().bold(), outcome.message);
    }

    if !outcome.success {
        std::process::exit(1);
    }
}

/// Start a service.
pub async fn run_start(board: &Brewboard, formula: &str, json: bool) -> Result<(), bb_core::Error> {
    if !json {
        println!(
            "{} {}",
            style("==>").cyan().bold(),
            format_starting_message(&style(formula).bold().to_string())
        );
    }

    let outcome = board.start_service(formula).await;
    report(&outcome, json);
    Ok(())
}

/// Stop a service.
pub async fn run_stop(board: &Brewboard, formula: &str, json: bool) -> Result<(), bb_core::Error> {
    if !json {
        println!(
            "{} {}",
            style("==>").cyan().bold(),
            format_stopping_message(&style(formula).bold().to_string())
        );
    }

    let outcome = board.stop_service(formula).await;
    report(&outcome, json);
    Ok(())
}
