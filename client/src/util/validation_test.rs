use super::*;

fn draft() -> VoyageDraft {
    VoyageDraft {
        scheduled_departure: "2024-01-01T08:00".to_owned(),
        scheduled_arrival: "2024-01-01T10:00".to_owned(),
        port_of_loading: "Rotterdam".to_owned(),
        port_of_discharge: "Hamburg".to_owned(),
        vessel: "MV Test".to_owned(),
        unit_types: None,
    }
}

fn five_unit_types() -> Option<Vec<String>> {
    Some((1..=5).map(|i| format!("u{i}")).collect())
}

fn clear(draft: &mut VoyageDraft, field: VoyageField) {
    match field {
        VoyageField::ScheduledDeparture => draft.scheduled_departure.clear(),
        VoyageField::ScheduledArrival => draft.scheduled_arrival.clear(),
        VoyageField::PortOfLoading => draft.port_of_loading.clear(),
        VoyageField::PortOfDischarge => draft.port_of_discharge.clear(),
        VoyageField::Vessel => draft.vessel.clear(),
        VoyageField::UnitTypes => draft.unit_types = None,
    }
}

// =============================================================
// Required fields
// =============================================================

#[test]
fn each_missing_scalar_fails_with_missing_input() {
    for field in VoyageField::SCALARS {
        for variant in [FormVariant::Basic, FormVariant::WithUnitTypes] {
            let mut input = draft();
            input.unit_types = five_unit_types();
            clear(&mut input, field);
            let errors = validate(&input, variant).unwrap_err();
            assert_eq!(errors.first_message(field), Some(MISSING_INPUT), "{field:?} {variant:?}");
        }
    }
}

#[test]
fn whitespace_counts_as_present() {
    let mut input = draft();
    input.vessel = " ".to_owned();
    assert!(validate(&input, FormVariant::Basic).is_ok());
}

#[test]
fn empty_departure_also_fails_ordering_but_reports_missing_first() {
    let mut input = draft();
    input.scheduled_departure.clear();
    let errors = validate(&input, FormVariant::Basic).unwrap_err();
    assert_eq!(
        errors.messages_for(VoyageField::ScheduledDeparture),
        vec![MISSING_INPUT, DEPARTURE_BEFORE_ARRIVAL]
    );
    assert_eq!(errors.to_error_tree().flatten_messages(), vec![MISSING_INPUT]);
}

#[test]
fn all_empty_reports_one_message_per_field() {
    let errors = validate(&VoyageDraft::default(), FormVariant::WithUnitTypes).unwrap_err();
    assert_eq!(errors.fields().len(), 6);
    let tree = errors.to_error_tree();
    assert_eq!(tree.len(), 7);
    assert_eq!(tree.flatten_messages(), vec![MISSING_INPUT, MIN_UNIT_TYPES_MESSAGE]);
}

// =============================================================
// Date ordering
// =============================================================

#[test]
fn arrival_before_departure_fails_on_departure_field() {
    let mut input = draft();
    input.scheduled_departure = "2024-01-01T10:00".to_owned();
    input.scheduled_arrival = "2024-01-01T08:00".to_owned();
    let errors = validate(&input, FormVariant::Basic).unwrap_err();
    assert_eq!(errors.fields(), vec![VoyageField::ScheduledDeparture]);
    assert_eq!(errors.first_message(VoyageField::ScheduledDeparture), Some(DEPARTURE_BEFORE_ARRIVAL));
}

#[test]
fn equal_timestamps_fail_ordering() {
    let mut input = draft();
    input.scheduled_arrival = input.scheduled_departure.clone();
    let errors = validate(&input, FormVariant::Basic).unwrap_err();
    assert_eq!(errors.first_message(VoyageField::ScheduledDeparture), Some(DEPARTURE_BEFORE_ARRIVAL));
    assert_eq!(errors.first_message(VoyageField::ScheduledArrival), None);
}

#[test]
fn unparseable_dates_are_reported_as_ordering_failure() {
    let mut input = draft();
    input.scheduled_departure = "soon".to_owned();
    input.scheduled_arrival = "later".to_owned();
    let errors = validate(&input, FormVariant::Basic).unwrap_err();
    assert_eq!(errors.issues().len(), 1);
    assert_eq!(errors.first_message(VoyageField::ScheduledDeparture), Some(DEPARTURE_BEFORE_ARRIVAL));
}

#[test]
fn rotterdam_hamburg_example_yields_single_ordering_message() {
    let input = VoyageDraft {
        scheduled_departure: "2024-01-01T10:00".to_owned(),
        scheduled_arrival: "2024-01-01T08:00".to_owned(),
        port_of_loading: "Rotterdam".to_owned(),
        port_of_discharge: "Hamburg".to_owned(),
        vessel: "MV Test".to_owned(),
        unit_types: None,
    };
    let errors = validate(&input, FormVariant::Basic).unwrap_err();
    assert_eq!(errors.to_error_tree().flatten_messages(), vec![DEPARTURE_BEFORE_ARRIVAL]);
}

// =============================================================
// Unit-type selection
// =============================================================

#[test]
fn with_unit_types_requires_minimum_selection() {
    let mut input = draft();
    input.unit_types = Some(vec!["u1".to_owned(), "u2".to_owned(), "u3".to_owned(), "u4".to_owned()]);
    let errors = validate(&input, FormVariant::WithUnitTypes).unwrap_err();
    assert_eq!(errors.fields(), vec![VoyageField::UnitTypes]);
    assert_eq!(errors.first_message(VoyageField::UnitTypes), Some(MIN_UNIT_TYPES_MESSAGE));
}

#[test]
fn with_unit_types_treats_absent_selection_as_empty() {
    let errors = validate(&draft(), FormVariant::WithUnitTypes).unwrap_err();
    assert_eq!(errors.first_message(VoyageField::UnitTypes), Some(MIN_UNIT_TYPES_MESSAGE));
}

#[test]
fn basic_variant_ignores_unit_type_count() {
    let mut input = draft();
    input.unit_types = Some(vec!["u1".to_owned()]);
    assert!(validate(&input, FormVariant::Basic).is_ok());
}

// =============================================================
// Success
// =============================================================

#[test]
fn valid_basic_draft_is_returned_unchanged() {
    let input = draft();
    assert_eq!(validate(&input, FormVariant::Basic), Ok(input));
}

#[test]
fn valid_rich_draft_is_returned_unchanged() {
    let mut input = draft();
    input.unit_types = five_unit_types();
    assert_eq!(validate(&input, FormVariant::WithUnitTypes), Ok(input));
}

#[test]
fn field_paths_match_wire_names() {
    assert_eq!(VoyageField::ScheduledDeparture.path(), "scheduledDeparture");
    assert_eq!(VoyageField::PortOfDischarge.path(), "portOfDischarge");
    assert_eq!(VoyageField::UnitTypes.path(), "unitTypes");
    assert_eq!(FormVariant::default(), FormVariant::WithUnitTypes);
}

#[test]
fn set_scalar_writes_the_named_field() {
    let mut input = VoyageDraft::default();
    VoyageField::PortOfLoading.set_scalar(&mut input, "Antwerp".to_owned());
    VoyageField::UnitTypes.set_scalar(&mut input, "ignored".to_owned());
    assert_eq!(input.port_of_loading, "Antwerp");
    assert_eq!(VoyageField::PortOfLoading.scalar_value(&input), Some("Antwerp"));
    assert_eq!(input.unit_types, None);
}

#[test]
fn empty_draft_matches_variant() {
    assert_eq!(empty_draft(FormVariant::Basic).unit_types, None);
    assert_eq!(empty_draft(FormVariant::WithUnitTypes).unit_types, Some(Vec::new()));
}
