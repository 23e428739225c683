//! Registry-internal checks: naming convention and duplicate keys.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::findings::{DuplicateKeyFinding, Finding, KeyFormatFinding};
use crate::registry::Registry;

static KEY_FORMAT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]+\.[a-z_]+$").unwrap());

/// Collects every key violating `namespace.snake_case_name` into a single
/// finding.
pub fn check_key_format(registry: &Registry) -> Vec<Finding> {
    let offenders: Vec<String> = registry
        .keys()
        .into_iter()
        .filter(|key| !KEY_FORMAT_REGEX.is_match(key))
        .map(str::to_string)
        .collect();

    if offenders.is_empty() {
        Vec::new()
    } else {
        vec![Finding::KeyFormat(KeyFormatFinding { offenders })]
    }
}

/// Duplicate keys are structurally impossible after a successful merge;
/// checked anyway so a future model change cannot silently break the
/// uniqueness contract.
pub fn check_duplicates(registry: &Registry) -> Vec<Finding> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for key in registry.keys() {
        *counts.entry(key).or_insert(0) += 1;
    }

    let mut duplicates: Vec<(&str, usize)> = counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .collect();
    duplicates.sort();

    duplicates
        .into_iter()
        .map(|(key, count)| {
            Finding::DuplicateKey(DuplicateKeyFinding {
                key: key.to_string(),
                count,
            })
        })
        .collect()
}
