use std::collections::{BTreeMap, BTreeSet};

use crate::catalog::{BrailleContext, ItemMetadata, Resource};

/// Item-metadata-driven enablement rules, one per resource code. Each rule
/// re-derives the resource's disabled flag from metadata; rules never touch
/// sibling resources or selection flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagRule {
    AmericanSignLanguage,
    Calculator,
    EnglishDictionary,
    Thesaurus,
    GlobalNotes,
    BrailleType,
}

/// Lookup table from resource code to rule, built once at startup. Codes
/// without an entry pass through the flag stage unchanged.
#[derive(Debug, Clone)]
pub struct FlagRuleRegistry {
    rules_by_code: BTreeMap<String, FlagRule>,
}

impl Default for FlagRuleRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl FlagRuleRegistry {
    pub fn new(rules: impl IntoIterator<Item = (String, FlagRule)>) -> Self {
        Self {
            rules_by_code: rules.into_iter().collect(),
        }
    }

    pub fn standard() -> Self {
        Self::new([
            ("AmericanSignLanguage".to_string(), FlagRule::AmericanSignLanguage),
            ("Calculator".to_string(), FlagRule::Calculator),
            ("EnglishDictionary".to_string(), FlagRule::EnglishDictionary),
            ("Thesaurus".to_string(), FlagRule::Thesaurus),
            ("GlobalNotes".to_string(), FlagRule::GlobalNotes),
            ("BrailleType".to_string(), FlagRule::BrailleType),
        ])
    }

    pub fn resolve(&self, resource_code: &str) -> Option<FlagRule> {
        self.rules_by_code.get(resource_code).copied()
    }
}

/// Per-item inputs consumed by the flag rules.
#[derive(Debug, Clone, Copy)]
pub struct FlagContext<'a> {
    pub item: &'a ItemMetadata,
    pub item_type: &'a str,
    pub global_notes_enabled: bool,
    pub allowed_dictionary_item_types: &'a BTreeSet<String>,
    pub allowed_thesaurus_item_types: &'a BTreeSet<String>,
    pub braille: Option<&'a BrailleContext>,
    pub asl_override: bool,
}

/// Runs after the family merge and wins over it for the resource its rule
/// names. ASL, Dictionary, Thesaurus, and GlobalNotes re-evaluate eligibility
/// from metadata alone; Calculator only narrows and cannot undo a family
/// disable.
pub fn apply_flags(
    registry: &FlagRuleRegistry,
    resource: &Resource,
    ctx: &FlagContext<'_>,
) -> Resource {
    let Some(rule) = registry.resolve(&resource.code) else {
        return resource.clone();
    };

    let disabled = match rule {
        FlagRule::AmericanSignLanguage => !(ctx.item.asl_supported || ctx.asl_override),
        FlagRule::Calculator => resource.disabled || !ctx.item.allow_calculator,
        FlagRule::EnglishDictionary => !ctx.allowed_dictionary_item_types.contains(ctx.item_type),
        FlagRule::Thesaurus => !ctx.allowed_thesaurus_item_types.contains(ctx.item_type),
        FlagRule::GlobalNotes => !ctx.global_notes_enabled,
        FlagRule::BrailleType => match ctx.braille {
            Some(braille) => braille.available_codes.is_empty(),
            // No braille discovery ran for this request; keep the merged
            // state rather than guessing at file availability.
            None => resource.disabled,
        },
    };

    let mut adjusted = resource.clone();
    adjusted.disabled = disabled;
    adjusted
}
