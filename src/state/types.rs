//! Core value shapes mirrored between the backend and the web frontend.
//!
//! All shapes derive `Default` and mark `#[serde(default)]` so a payload
//! with missing fields hydrates into zero values instead of failing;
//! unknown payload fields are ignored. Field layout is the implicit wire
//! contract with the backend.

/// Result of a single backend action invocation (e.g., starting or
/// stopping a managed service).
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ActionResponse {
    /// Whether the action completed without error.
    pub success: bool,
    /// Human-readable outcome text, surfaced verbatim by the frontend.
    pub message: String,
}

/// Minimal descriptor for one package known to Homebrew.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BrewPackage {
    /// Canonical package name.
    pub name: String,
    /// Version string as reported by `brew list --versions`.
    pub version: String,
    /// Free-form service label (`started`, `stopped`, `none`, or
    /// `none_tool` for packages that are not services). Not an enum: the
    /// backend passes through whatever Homebrew reports.
    pub status: String,
}

/// Aggregate snapshot of everything installed, partitioned into the two
/// Homebrew package categories.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BrewData {
    /// Installed formulae in display order.
    pub formulae: Vec<BrewPackage>,
    /// Installed casks in display order.
    pub casks: Vec<BrewPackage>,
}

/// One entry of `brew services info --all --json`.
///
/// Homebrew emits many more fields (pid, user, file, ...); only the pair
/// needed to decorate package listings is declared here.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ServiceInfo {
    /// Service name as registered with `brew services`.
    pub name: String,
    /// Reported service status label.
    pub status: String,
}
