use std::collections::BTreeMap;

use itemaccess::{catalog::UserPreference, resolution::apply_preferences};

use crate::common::{acc1, acc2};

fn import(codes: &[&str]) -> UserPreference {
    UserPreference {
        import_selection_codes: codes.iter().map(|code| code.to_string()).collect(),
        cookie_selection_codes: BTreeMap::new(),
    }
}

fn cookie(entries: &[(&str, &str)]) -> UserPreference {
    UserPreference {
        import_selection_codes: Vec::new(),
        cookie_selection_codes: entries
            .iter()
            .map(|(resource, code)| (resource.to_string(), code.to_string()))
            .collect(),
    }
}

#[test]
fn import_code_sets_current_selection() {
    let resolved = apply_preferences(vec![acc2()], &import(&["ACC2_SEL1"]));

    assert_eq!(
        resolved[0].current_selection_code,
        Some("ACC2_SEL1".to_string())
    );
}

#[test]
fn import_codes_of_other_resources_are_ignored() {
    let resolved = apply_preferences(vec![acc1(), acc2()], &import(&["ACC2_SEL1"]));

    assert_eq!(
        resolved[0].current_selection_code,
        Some("ACC1_SEL1".to_string())
    );
    assert_eq!(
        resolved[1].current_selection_code,
        Some("ACC2_SEL1".to_string())
    );
}

#[test]
fn cookie_sets_current_selection_when_no_import_matches() {
    let resolved = apply_preferences(vec![acc2()], &cookie(&[("ACC2", "ACC2_SEL1")]));

    assert_eq!(
        resolved[0].current_selection_code,
        Some("ACC2_SEL1".to_string())
    );
}

#[test]
fn import_code_beats_cookie_for_same_resource() {
    let mut preference = cookie(&[("ACC2", "ACC2_SEL2")]);
    preference.import_selection_codes = vec!["ACC2_SEL1".to_string()];

    let resolved = apply_preferences(vec![acc2()], &preference);

    assert_eq!(
        resolved[0].current_selection_code,
        Some("ACC2_SEL1".to_string())
    );
}

#[test]
fn disabled_selection_is_never_chosen() {
    let mut resource = acc2();
    resource.selections[0] = resource.selections[0].with_disabled(true);

    let resolved = apply_preferences(vec![resource.clone()], &import(&["ACC2_SEL1"]));
    assert_eq!(
        resolved[0].current_selection_code,
        Some("ACC2_SEL2".to_string())
    );

    let resolved = apply_preferences(vec![resource], &cookie(&[("ACC2", "ACC2_SEL1")]));
    assert_eq!(
        resolved[0].current_selection_code,
        Some("ACC2_SEL2".to_string())
    );
}

#[test]
fn disabled_import_match_falls_through_to_cookie() {
    let mut resource = acc2();
    resource.selections[0] = resource.selections[0].with_disabled(true);

    let mut preference = cookie(&[("ACC2", "ACC2_SEL2")]);
    preference.import_selection_codes = vec!["ACC2_SEL1".to_string()];
    resource.current_selection_code = None;

    let resolved = apply_preferences(vec![resource], &preference);

    assert_eq!(
        resolved[0].current_selection_code,
        Some("ACC2_SEL2".to_string())
    );
}

#[test]
fn no_preference_match_leaves_resource_untouched() {
    let resource = acc2();

    let resolved = apply_preferences(
        vec![resource.clone()],
        &cookie(&[("TDS_CC", "TDS_CCInvert")]),
    );

    assert_eq!(resolved[0], resource);
}

#[test]
fn preferences_never_change_enablement_flags() {
    let mut resource = acc2();
    resource.selections[1] = resource.selections[1].with_disabled(true);
    let expected_selections = resource.selections.clone();

    let resolved = apply_preferences(vec![resource], &import(&["ACC2_SEL1"]));

    assert_eq!(resolved[0].selections, expected_selections);
    assert!(!resolved[0].disabled);
}
