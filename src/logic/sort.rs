//! Ordering for package snapshots by service status.

use crate::state::BrewPackage;

/// What: Rank a service status label for display ordering.
///
/// Inputs:
/// - `status`: Free-form status label from the services payload.
///
/// Output:
/// - Rank where lower sorts earlier: running services first, stopped
///   next, then non-running services, then plain tools. Labels outside
///   the known set rank last.
#[must_use]
pub fn status_rank(status: &str) -> u8 {
    match status {
        "started" => 0,
        "stopped" => 1,
        "none" => 2,
        "none_tool" => 3,
        _ => 4,
    }
}

/// What: Sort packages by status rank, then case-insensitive name.
///
/// Inputs:
/// - `packages`: Partition to sort in place.
///
/// Output:
/// - Stable ordering with running services at the top and name as the
///   tiebreak within each status group.
pub fn sort_by_service_status(packages: &mut [BrewPackage]) {
    packages.sort_by(|a, b| {
        let ra = status_rank(&a.status);
        let rb = status_rank(&b.status);
        if ra != rb {
            return ra.cmp(&rb);
        }
        a.name.to_lowercase().cmp(&b.name.to_lowercase())
    });
}
