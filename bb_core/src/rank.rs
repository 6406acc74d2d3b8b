//! Status classification and ordering of package records.
//!
//! Records sort by status rank first (running services on top, plain tools
//! last) and by name within a rank. Name comparison is plain byte order, so
//! uppercase sorts before lowercase.

use crate::package::{PackageRecord, StatusCategory};
use crate::service_state::ServiceStateMap;

/// Raw brew state that counts as running.
const STARTED: &str = "started";

/// Classify a package name against a service-state snapshot.
pub fn classify(name: &str, services: &ServiceStateMap) -> StatusCategory {
    match services.get(name) {
        Some(state) if state == STARTED => StatusCategory::Started,
        Some(_) => StatusCategory::Stopped,
        None => StatusCategory::NotAService,
    }
}

/// Build records for a parsed listing, classified against `services`.
pub fn build_records(
    packages: Vec<(String, String)>,
    services: &ServiceStateMap,
) -> Vec<PackageRecord> {
    packages
        .into_iter()
        .map(|(name, version)| {
            let status = classify(&name, services);
            let service_state = services.get(&name).cloned();
            PackageRecord {
                name,
                version,
                status,
                service_state,
            }
        })
        .collect()
}

/// Sort records in place by `(status rank, name)`.
pub fn rank(records: &mut [PackageRecord]) {
    records.sort_by(|a, b| {
        a.status
            .rank()
            .cmp(&b.status.rank())
            .then_with(|| a.name.as_bytes().cmp(b.name.as_bytes()))
    });
}

/// Classify and rank a listing in one step.
pub fn classify_and_rank(
    packages: Vec<(String, String)>,
    services: &ServiceStateMap,
) -> Vec<PackageRecord> {
    let mut records = build_records(packages, services);
    rank(&mut records);
    records
}
