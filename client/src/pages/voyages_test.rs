use super::*;

#[test]
fn columns_match_table_layout() {
    assert_eq!(COLUMNS.len(), 7);
    assert_eq!(COLUMNS[0], "Departure");
    assert_eq!(COLUMNS[4], "Vessel");
    assert_eq!(COLUMNS[5], "Unit Types");
}

#[test]
fn page_uses_unit_type_form() {
    assert!(PAGE_FORM_VARIANT.has_unit_types());
}
