//! The `status` command: refresh and print the ranked package view.

use console::style;

use bb_core::{AggregateResult, PackageClass};
use bb_io::Brewboard;

use crate::display::{create_spinner, print_section};

/// JSON for the selected classes; the full result keeps both field names.
pub(crate) fn to_json(
    result: &AggregateResult,
    classes: &[PackageClass],
) -> Result<String, serde_json::Error> {
    match classes {
        [class] => serde_json::to_string_pretty(result.packages(*class)),
        _ => serde_json::to_string_pretty(result),
    }
}

/// Refresh and print packages for `classes`.
pub async fn run(
    board: &Brewboard,
    json: bool,
    classes: &[PackageClass],
) -> Result<(), bb_core::Error> {
    let result = if json {
        board.refresh().await
    } else {
        let spinner = create_spinner("Querying brew...");
        let result = board.refresh().await;
        spinner.finish_and_clear();
        result
    };

    if json {
        match to_json(&result, classes) {
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
        return Ok(());
    }

    for class in classes {
        print_section(*class, result.packages(*class));
    }

    if result.is_empty() {
        println!("    brew reported no installed packages.");
        println!(
            "    Run with {} for details on the brew queries.",
            style("RUST_LOG=debug").cyan()
        );
    }

    Ok(())
}
