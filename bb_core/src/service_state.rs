//! Parser for `brew services info --all --json` output.

use std::collections::HashMap;

use serde_json::Value;

use crate::Error;

/// Raw lifecycle state keyed by service name, e.g. `"redis" -> "started"`.
pub type ServiceStateMap = HashMap<String, String>;

/// Result of parsing the services listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedServiceStates {
    pub states: ServiceStateMap,
    /// Array entries without a usable `name` or `status`
    pub skipped: usize,
}

/// Parse the JSON array brew prints for `services info --all --json`.
///
/// Entries carry many more fields (`user`, `file`, `pid`, ...); only `name`
/// and `status` are read. A named entry with a missing or `null` status is
/// still a known service and maps to the empty state. Entries without a
/// string name, or with a status of some other type, are counted and
/// skipped. Output that is not a JSON array at all is an error so the caller
/// can decide how to degrade.
pub fn parse_service_states(output: &str) -> Result<ParsedServiceStates, Error> {
    let trimmed = output.trim();
    if trimmed.is_empty() {
        return Ok(ParsedServiceStates::default());
    }

    let value: Value = serde_json::from_str(trimmed).map_err(|e| Error::MalformedOutput {
        message: format!("services JSON: {}", e),
    })?;

    let entries = value.as_array().ok_or_else(|| Error::MalformedOutput {
        message: "services JSON is not an array".to_string(),
    })?;

    let mut parsed = ParsedServiceStates::default();
    for entry in entries {
        let name = entry.get("name").and_then(Value::as_str);
        let status = match entry.get("status") {
            None | Some(Value::Null) => Some(""),
            Some(value) => value.as_str(),
        };
        match (name, status) {
            (Some(name), Some(status)) if !name.is_empty() => {
                parsed.states.insert(name.to_string(), status.to_string());
            }
            _ => parsed.skipped += 1,
        }
    }

    Ok(parsed)
}
