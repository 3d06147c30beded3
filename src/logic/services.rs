//! Service status payloads from `brew services info --all --json`.

use std::collections::HashMap;

use crate::hydrate::Hydrate;
use crate::state::ServiceInfo;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Status label assigned to packages that are not managed services.
pub const STATUS_NOT_A_SERVICE: &str = "none_tool";

/// What: Parse the JSON emitted by `brew services info --all --json`.
///
/// Inputs:
/// - `raw`: Captured stdout of the services command.
///
/// Output:
/// - One [`ServiceInfo`] per listed service; blank input yields an empty
///   vector.
///
/// # Errors
/// - Returns `Err` when `raw` is non-blank but not valid JSON.
///
/// Details:
/// - Homebrew emits many fields per service; everything beyond name and
///   status is ignored during hydration.
pub fn parse_services_info(raw: &str) -> Result<Vec<ServiceInfo>> {
    ServiceInfo::vec_from_json(raw)
}

/// What: Index service status labels by service name.
///
/// Inputs:
/// - `services`: Parsed service entries.
///
/// Output:
/// - Map from service name to its status label; later duplicates win.
#[must_use]
pub fn status_by_name(services: &[ServiceInfo]) -> HashMap<String, String> {
    services
        .iter()
        .map(|s| (s.name.clone(), s.status.clone()))
        .collect()
}
