//! Package records and the status categories used to rank them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The two kinds of installed packages brew reports separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageClass {
    /// Command-line tools and libraries
    Formula,
    /// Self-contained applications
    Cask,
}

impl PackageClass {
    /// Flag passed to `brew list --versions` to select this class.
    pub fn list_flag(self) -> &'static str {
        match self {
            PackageClass::Formula => "--formula",
            PackageClass::Cask => "--cask",
        }
    }
}

impl fmt::Display for PackageClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackageClass::Formula => write!(f, "formula"),
            PackageClass::Cask => write!(f, "cask"),
        }
    }
}

/// Status of a package as far as brew's service subsystem is concerned.
///
/// Variants are declared in rank order; see [`StatusCategory::rank`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusCategory {
    /// A managed service that is currently running
    #[serde(rename = "started")]
    Started,
    /// A managed service in any state other than running
    #[serde(rename = "stopped")]
    Stopped,
    /// A service brew knows about but reports as not set up (reserved)
    #[serde(rename = "none")]
    NoneManaged,
    /// A regular package with no background service
    #[serde(rename = "none_tool")]
    NotAService,
}

impl StatusCategory {
    /// Sort priority; lower values sort first.
    pub fn rank(self) -> u8 {
        match self {
            StatusCategory::Started => 1,
            StatusCategory::Stopped => 2,
            StatusCategory::NoneManaged => 3,
            StatusCategory::NotAService => 4,
        }
    }

    /// Label used in JSON output and by the UI layer.
    pub fn label(self) -> &'static str {
        match self {
            StatusCategory::Started => "started",
            StatusCategory::Stopped => "stopped",
            StatusCategory::NoneManaged => "none",
            StatusCategory::NotAService => "none_tool",
        }
    }
}

impl fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One installed package with its classified status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRecord {
    pub name: String,
    /// Free-form; several installed versions are space separated
    pub version: String,
    pub status: StatusCategory,
    /// Raw state reported by `brew services`, if the package is a known service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_state: Option<String>,
}

/// Snapshot produced by one refresh.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateResult {
    pub formulae: Vec<PackageRecord>,
    pub casks: Vec<PackageRecord>,
}

impl AggregateResult {
    pub fn packages(&self, class: PackageClass) -> &[PackageRecord] {
        match class {
            PackageClass::Formula => &self.formulae,
            PackageClass::Cask => &self.casks,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.formulae.is_empty() && self.casks.is_empty()
    }
}

/// Result of a start/stop request, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionOutcome {
    pub success: bool,
    pub message: String,
}

impl ActionOutcome {
    pub fn succeeded(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
