//! `brew list --versions` output parsing and snapshot assembly.

use std::collections::HashMap;

use crate::state::{BrewData, BrewPackage, ServiceInfo};

use super::services::{STATUS_NOT_A_SERVICE, status_by_name};
use super::sort::sort_by_service_status;

/// What: Parse `brew list --versions` output into package descriptors.
///
/// Inputs:
/// - `out`: Captured stdout; one package per line, name first, version
///   fields after.
///
/// Output:
/// - One [`BrewPackage`] per well-formed line, status left empty for the
///   merge step.
///
/// Details:
/// - Multi-word versions are joined back with single spaces.
/// - Lines without a version field are skipped, matching how Homebrew
///   output is tolerated rather than validated.
#[must_use]
pub fn parse_list_versions(out: &str) -> Vec<BrewPackage> {
    let mut packages = Vec::new();
    for line in out.lines() {
        let mut fields = line.split_whitespace();
        let Some(name) = fields.next() else { continue };
        let version = fields.collect::<Vec<_>>().join(" ");
        if version.is_empty() {
            tracing::debug!("skipping listing line without a version: {line}");
            continue;
        }
        packages.push(BrewPackage {
            name: name.to_string(),
            version,
            status: String::new(),
        });
    }
    packages
}

/// What: Decorate packages with their service status.
///
/// Inputs:
/// - `packages`: Parsed packages to update in place.
/// - `statuses`: Service-name to status map from
///   [`super::services::status_by_name`].
///
/// Output:
/// - Every package carries either its service's label or
///   [`STATUS_NOT_A_SERVICE`].
pub fn apply_service_status(packages: &mut [BrewPackage], statuses: &HashMap<String, String>) {
    for package in packages {
        package.status = statuses
            .get(&package.name)
            .cloned()
            .unwrap_or_else(|| STATUS_NOT_A_SERVICE.to_string());
    }
}

/// What: Assemble the aggregate snapshot sent to the frontend.
///
/// Inputs:
/// - `formulae_out`: `brew list --versions --formula` stdout.
/// - `casks_out`: `brew list --versions --cask` stdout.
/// - `services`: Parsed service entries for status decoration.
///
/// Output:
/// - A [`BrewData`] whose partitions are parsed, status-decorated, and
///   ordered with running services first.
#[must_use]
pub fn snapshot(formulae_out: &str, casks_out: &str, services: &[ServiceInfo]) -> BrewData {
    let statuses = status_by_name(services);
    let mut formulae = parse_list_versions(formulae_out);
    let mut casks = parse_list_versions(casks_out);
    apply_service_status(&mut formulae, &statuses);
    apply_service_status(&mut casks, &statuses);
    sort_by_service_status(&mut formulae);
    sort_by_service_status(&mut casks);
    BrewData { formulae, casks }
}
