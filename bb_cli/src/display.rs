//! Display utilities for the package table and progress spinner.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use bb_core::{PackageClass, PackageRecord, StatusCategory};

/// Spinner shown on stderr while brew is being queried.
pub fn create_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ "),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Section title for a package class.
pub(crate) fn section_title(class: PackageClass) -> &'static str {
    match class {
        PackageClass::Formula => "Formulae",
        PackageClass::Cask => "Casks",
    }
}

/// Plain status text for a record.
///
/// Stopped services show brew's own state when it says more than "stopped",
/// e.g. `stopped (error)`.
pub(crate) fn status_text(record: &PackageRecord) -> String {
    match (record.status, record.service_state.as_deref()) {
        (StatusCategory::Stopped, Some(raw)) if !raw.is_empty() && raw != "stopped" => {
            format!("stopped ({})", raw)
        }
        (StatusCategory::NotAService, _) => "-".to_string(),
        (status, _) => status.label().to_string(),
    }
}

fn styled_status(record: &PackageRecord) -> String {
    let text = status_text(record);
    match record.status {
        StatusCategory::Started => style(text).green().to_string(),
        StatusCategory::Stopped if record.service_state.as_deref() == Some("error") => {
            style(text).red().to_string()
        }
        StatusCategory::Stopped => style(text).yellow().to_string(),
        StatusCategory::NoneManaged | StatusCategory::NotAService => style(text).dim().to_string(),
    }
}

/// Column width for names, at least as wide as the header.
pub(crate) fn name_column_width(records: &[PackageRecord]) -> usize {
    records
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Name".len())
}

/// Count of running services in a list.
pub(crate) fn running_count(records: &[PackageRecord]) -> usize {
    records
        .iter()
        .filter(|r| r.status == StatusCategory::Started)
        .count()
}

/// Print one class as a table.
pub fn print_section(class: PackageClass, records: &[PackageRecord]) {
    let running = running_count(records);
    if running > 0 {
        println!(
            "{} {} ({}, {} running)",
            style("==>").cyan().bold(),
            style(section_title(class)).bold(),
            records.len(),
            running
        );
    } else {
        println!(
            "{} {} ({})",
            style("==>").cyan().bold(),
            style(section_title(class)).bold(),
            records.len()
        );
    }

    if records.is_empty() {
        println!("    No {} packages found.", class);
        println!();
        return;
    }

    let width = name_column_width(records);
    println!(
        "    {:<width$}  {:<12} {}",
        style("Name").bold(),
        style("Status").bold(),
        style("Version").bold(),
        width = width
    );

    for record in records {
        // Pad the plain text; ANSI codes would throw off the width
        let status_pad = " ".repeat(12usize.saturating_sub(status_text(record).chars().count()));
        println!(
            "    {:<width$}  {}{} {}",
            record.name,
            styled_status(record),
            status_pad,
            style(&record.version).dim(),
            width = width
        );
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, status: StatusCategory, raw: Option<&str>) -> PackageRecord {
        PackageRecord {
            name: name.to_string(),
            version: "1.0".to_string(),
            status,
            service_state: raw.map(String::from),
        }
    }

    #[test]
    fn status_text_for_each_category() {
        assert_eq!(
            status_text(&record("redis", StatusCategory::Started, Some("started"))),
            "started"
        );
        assert_eq!(
            status_text(&record("mysql", StatusCategory::Stopped, Some("stopped"))),
            "stopped"
        );
        assert_eq!(
            status_text(&record("jq", StatusCategory::NotAService, None)),
            "-"
        );
        assert_eq!(
            status_text(&record("x", StatusCategory::NoneManaged, Some("none"))),
            "none"
        );
    }

    #[test]
    fn status_text_shows_raw_state_when_informative() {
        assert_eq!(
            status_text(&record("nginx", StatusCategory::Stopped, Some("error"))),
            "stopped (error)"
        );
        assert_eq!(
            status_text(&record("dnsmasq", StatusCategory::Stopped, Some("none"))),
            "stopped (none)"
        );
        assert_eq!(
            status_text(&record("unbound", StatusCategory::Stopped, Some(""))),
            "stopped"
        );
    }

    #[test]
    fn name_column_is_at_least_header_width() {
        assert_eq!(name_column_width(&[]), 4);
        assert_eq!(
            name_column_width(&[record("jq", StatusCategory::NotAService, None)]),
            4
        );
        assert_eq!(
            name_column_width(&[record("postgresql@16", StatusCategory::Started, Some("started"))]),
            13
        );
    }

    #[test]
    fn counts_running_services() {
        let records = vec![
            record("redis", StatusCategory::Started, Some("started")),
            record("mysql", StatusCategory::Stopped, Some("stopped")),
            record("caddy", StatusCategory::Started, Some("started")),
        ];
        assert_eq!(running_count(&records), 2);
    }

    #[test]
    fn section_titles() {
        assert_eq!(section_title(PackageClass::Formula), "Formulae");
        assert_eq!(section_title(PackageClass::Cask), "Casks");
    }
}
