use crate::{
    catalog::{BrailleContext, Family, ItemMetadata, Resource, ResolvedResourceSet, UserPreference},
    resolution::{
        error::{ResolutionError, invalid_argument},
        family::merge_for_family,
        flags::{FlagContext, FlagRuleRegistry, apply_flags},
        preferences::apply_preferences,
    },
};

/// Inputs for one resolution call. Catalog, family, and item metadata arrive
/// as `Option` because the caller obtains them from lookups that can miss;
/// an absent one aborts the whole call.
#[derive(Debug, Clone, Copy)]
pub struct ResolveRequest<'a> {
    pub global_resources: Option<&'a [Resource]>,
    pub family: Option<&'a Family>,
    pub item: Option<&'a ItemMetadata>,
    pub braille: Option<&'a BrailleContext>,
    pub asl_override: bool,
    pub preference: &'a UserPreference,
}

/// Composes family merge, flag application, and preference application in
/// that fixed order. Stateless apart from the rule registry resolved at
/// construction.
#[derive(Debug, Clone)]
pub struct Resolver {
    registry: FlagRuleRegistry,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(FlagRuleRegistry::standard())
    }
}

impl Resolver {
    pub fn new(registry: FlagRuleRegistry) -> Self {
        Self { registry }
    }

    pub fn resolve(
        &self,
        request: ResolveRequest<'_>,
    ) -> Result<ResolvedResourceSet, ResolutionError> {
        let globals = request
            .global_resources
            .ok_or_else(|| invalid_argument("global resource catalog is required"))?;
        let family = request
            .family
            .ok_or_else(|| invalid_argument("accessibility family is required"))?;
        let item = request
            .item
            .ok_or_else(|| invalid_argument("item metadata is required"))?;

        let merged = merge_for_family(family, globals);

        let ctx = FlagContext {
            item,
            item_type: &item.item_type,
            global_notes_enabled: item.global_notes_enabled,
            allowed_dictionary_item_types: &item.allowed_dictionary_item_types,
            allowed_thesaurus_item_types: &item.allowed_thesaurus_item_types,
            braille: request.braille,
            asl_override: request.asl_override,
        };
        let flagged = merged
            .iter()
            .map(|resource| apply_flags(&self.registry, resource, &ctx))
            .collect();

        let resolved = apply_preferences(flagged, request.preference);

        debug_assert!(
            resolved
                .iter()
                .all(|resource| resource.validate_selection_refs().is_ok()),
            "resolved set references unknown selection codes"
        );
        tracing::debug!(
            target: "resolution",
            item_type = %item.item_type,
            resources = resolved.len(),
            "resolution_complete"
        );

        Ok(resolved)
    }
}
