use std::collections::BTreeSet;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::{GradeBand, Resource};

/// Flat summary of a resolved item, enough to pick accessibility test sets
/// without holding the full resource tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BriefItem {
    pub item_key: u32,
    pub grade: u8,
    pub subject_code: String,
    pub enabled_resource_codes: BTreeSet<String>,
    pub disabled_resource_codes: BTreeSet<String>,
}

impl BriefItem {
    pub fn from_resolved(
        item_key: u32,
        grade: u8,
        subject_code: impl Into<String>,
        resources: &[Resource],
    ) -> Self {
        let (enabled, disabled): (Vec<&Resource>, Vec<&Resource>) =
            resources.iter().partition(|resource| !resource.disabled);
        Self {
            item_key,
            grade,
            subject_code: subject_code.into(),
            enabled_resource_codes: enabled.iter().map(|r| r.code.clone()).collect(),
            disabled_resource_codes: disabled.iter().map(|r| r.code.clone()).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SamplingConfig {
    /// Items with more disabled resources than this are not worth testing
    /// against; too little of the catalog is exercised.
    pub max_acceptable_disables: usize,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            max_acceptable_disables: 5,
        }
    }
}

/// Test sets for the elementary and high-school bands, concatenated. The
/// caller owns the RNG so runs are reproducible from a seed.
pub fn accessibility_test_items<R: Rng>(
    items: &[BriefItem],
    config: &SamplingConfig,
    rng: &mut R,
) -> Vec<BriefItem> {
    let mut selected = test_set_for_band(items, GradeBand::ELEMENTARY, config, rng);
    selected.extend(test_set_for_band(items, GradeBand::HIGH, config, rng));
    selected
}

/// Picks one random keystone item in the band with an acceptable number of
/// disabled resources, then for each resource disabled on the keystone adds a
/// random band item that has it enabled, so the set covers every resource at
/// least once where the band allows.
pub fn test_set_for_band<R: Rng>(
    items: &[BriefItem],
    band: GradeBand,
    config: &SamplingConfig,
    rng: &mut R,
) -> Vec<BriefItem> {
    let band_items: Vec<&BriefItem> = items
        .iter()
        .filter(|item| band.contains(item.grade))
        .collect();
    let testable: Vec<&BriefItem> = band_items
        .iter()
        .copied()
        .filter(|item| item.disabled_resource_codes.len() <= config.max_acceptable_disables)
        .collect();

    if testable.is_empty() {
        tracing::warn!(
            target: "sampling",
            low = band.low,
            high = band.high,
            "no_testable_items_in_band"
        );
        return Vec::new();
    }

    let keystone = testable[rng.gen_range(0..testable.len())].clone();
    let mut selected = vec![keystone.clone()];

    for code in &keystone.disabled_resource_codes {
        if selected
            .iter()
            .any(|item| item.enabled_resource_codes.contains(code))
        {
            continue;
        }
        let pool: Vec<&BriefItem> = band_items
            .iter()
            .copied()
            .filter(|item| item.enabled_resource_codes.contains(code))
            .collect();
        if pool.is_empty() {
            tracing::warn!(
                target: "sampling",
                resource = %code,
                low = band.low,
                high = band.high,
                "no_item_with_resource_enabled"
            );
            continue;
        }
        selected.push(pool[rng.gen_range(0..pool.len())].clone());
    }

    selected
}
