use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::{
    catalog::grade::GradeBand,
    resolution::error::{ResolutionError, selection_reference},
};

/// One selectable value within a resource. A disable produces a new value,
/// never a mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub code: String,
    pub label: String,
    pub order: Option<i32>,
    pub disabled: bool,
    pub hidden: bool,
}

impl Selection {
    pub fn with_disabled(&self, disabled: bool) -> Self {
        Self {
            disabled,
            ..self.clone()
        }
    }
}

/// A single accessibility accommodation and its selectable values.
/// Selection codes are unique within a resource and catalog order is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub code: String,
    pub label: String,
    pub description: String,
    pub order: Option<i32>,
    pub resource_type: String,
    pub disabled: bool,
    pub default_selection_code: Option<String>,
    pub current_selection_code: Option<String>,
    pub selections: Vec<Selection>,
}

impl Resource {
    pub fn selection(&self, code: &str) -> Option<&Selection> {
        self.selections.iter().find(|sel| sel.code == code)
    }

    pub fn selection_enabled(&self, code: &str) -> bool {
        self.selection(code).is_some_and(|sel| !sel.disabled)
    }

    /// Invariant check: current/default codes, when set, must name one of the
    /// resource's selections. A violation is an upstream defect, not a
    /// recoverable runtime state.
    pub fn validate_selection_refs(&self) -> Result<(), ResolutionError> {
        for code in [&self.current_selection_code, &self.default_selection_code]
            .into_iter()
            .flatten()
        {
            if self.selection(code).is_none() {
                return Err(selection_reference(format!(
                    "resource {} references unknown selection {}",
                    self.code, code
                )));
            }
        }
        Ok(())
    }
}

/// Family-scoped restriction of one global resource. Codes absent from
/// `present_selection_codes` are restricted out for the family, not deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyOverride {
    pub resource_code: String,
    pub disabled: bool,
    pub default_selection_code: Option<String>,
    pub present_selection_codes: BTreeSet<String>,
}

/// A subject+grade grouping with its resource overrides, keyed by resource
/// code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Family {
    pub subjects: BTreeSet<String>,
    pub grades: GradeBand,
    pub overrides: BTreeMap<String, FamilyOverride>,
}

/// Read-only item record fields that drive the flag rules.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ItemMetadata {
    pub item_type: String,
    pub asl_supported: bool,
    pub allow_calculator: bool,
    pub allowed_dictionary_item_types: BTreeSet<String>,
    pub allowed_thesaurus_item_types: BTreeSet<String>,
    pub global_notes_enabled: bool,
}

/// Braille formats discovered for the item by the file collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BrailleContext {
    pub available_codes: BTreeSet<String>,
}

/// Request-scoped, previously-chosen selection codes. Never persisted here.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserPreference {
    pub import_selection_codes: Vec<String>,
    pub cookie_selection_codes: BTreeMap<String, String>,
}

/// Final output of a resolution call, in catalog order. Built fresh per
/// request and never cached.
pub type ResolvedResourceSet = Vec<Resource>;
