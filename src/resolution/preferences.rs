use crate::catalog::{Resource, ResolvedResourceSet, UserPreference};

/// Picks the active selection per resource from the user's prior choices.
/// Import codes carry same-request intent and beat the stored cookie value;
/// neither may land on a disabled selection and nothing else on the resource
/// changes.
pub fn apply_preferences(
    resources: ResolvedResourceSet,
    preference: &UserPreference,
) -> ResolvedResourceSet {
    resources
        .into_iter()
        .map(|resource| apply_preference(resource, preference))
        .collect()
}

fn apply_preference(mut resource: Resource, preference: &UserPreference) -> Resource {
    // First import code that names one of this resource's selections. A match
    // on a disabled selection consumes the import slot but falls through to
    // the cookie value.
    let import_code = preference
        .import_selection_codes
        .iter()
        .find(|code| resource.selection(code.as_str()).is_some());
    if let Some(code) = import_code
        && resource.selection_enabled(code)
    {
        resource.current_selection_code = Some(code.clone());
        return resource;
    }

    if let Some(code) = preference.cookie_selection_codes.get(&resource.code)
        && resource.selection_enabled(code)
    {
        resource.current_selection_code = Some(code.clone());
    }

    resource
}
