//! Listing installed packages with `brew list --versions`.

use bb_core::{Error, PackageClass, ParsedListing, parse_listing};

use crate::runner::{CommandRunner, run_checked};

/// List installed packages of one class, failing on any problem.
pub async fn try_list_packages(
    runner: &dyn CommandRunner,
    class: PackageClass,
) -> Result<ParsedListing, Error> {
    let output = run_checked(runner, &["list", "--versions", class.list_flag()]).await?;
    Ok(parse_listing(&output.stdout))
}

/// List installed packages of one class as unordered `(name, version)` pairs.
///
/// A failed listing is empty so the other class can still be reported.
pub async fn list_packages(
    runner: &dyn CommandRunner,
    class: PackageClass,
) -> Vec<(String, String)> {
    match try_list_packages(runner, class).await {
        Ok(parsed) => {
            for line in &parsed.skipped {
                log::debug!("skipped {} listing line {:?}", class, line);
            }
            parsed.packages
        }
        Err(e) => {
            log::warn!("could not list installed {} packages: {}", class, e);
            Vec::new()
        }
    }
}
