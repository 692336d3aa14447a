use crate::catalog::{Family, FamilyOverride, Resource, ResolvedResourceSet, Selection};

/// Merges one family override into one global resource, producing the
/// family-scoped resource. No override means the global value passes through
/// untouched.
pub fn merge_global_resource(family_resource: Option<&FamilyOverride>, global: &Resource) -> Resource {
    let Some(family_resource) = family_resource else {
        return global.clone();
    };

    if family_resource.disabled {
        // Resource-level disable cascades to every selection so a consumer
        // can never observe an enabled selection under a disabled resource.
        // Current/default codes keep their values.
        let mut merged = global.clone();
        merged.disabled = true;
        merged.selections = merged
            .selections
            .iter()
            .map(|sel| sel.with_disabled(true))
            .collect();
        return merged;
    }

    let mut merged = global.clone();
    merged.disabled = false;
    merged.selections = global
        .selections
        .iter()
        .map(|sel| {
            sel.with_disabled(!family_resource.present_selection_codes.contains(&sel.code))
        })
        .collect();

    let fallback = first_enabled_code(&merged.selections);
    merged.current_selection_code =
        repaired_code(merged.current_selection_code.take(), &merged.selections, fallback.as_deref());
    merged.default_selection_code =
        repaired_code(merged.default_selection_code.take(), &merged.selections, fallback.as_deref());

    merged
}

/// Applies [`merge_global_resource`] across a whole catalog for one family.
/// Output order equals catalog order; overrides never reorder.
pub fn merge_for_family(family: &Family, globals: &[Resource]) -> ResolvedResourceSet {
    globals
        .iter()
        .map(|global| merge_global_resource(family.overrides.get(&global.code), global))
        .collect()
}

fn first_enabled_code(selections: &[Selection]) -> Option<String> {
    selections
        .iter()
        .find(|sel| !sel.disabled)
        .map(|sel| sel.code.clone())
}

// A code pointing at a now-disabled selection is reassigned to the first
// still-enabled selection in catalog order. When every selection is
// restricted out there is no valid alternative and the code is left dangling
// at a disabled selection rather than cleared.
fn repaired_code(
    code: Option<String>,
    selections: &[Selection],
    fallback: Option<&str>,
) -> Option<String> {
    match code {
        Some(code)
            if selections
                .iter()
                .any(|sel| sel.code == code && !sel.disabled) =>
        {
            Some(code)
        }
        Some(code) => fallback.map(str::to_string).or(Some(code)),
        None => None,
    }
}
