use super::*;

fn cage(id: i64, name: &str, area: Option<&str>, description: &str, max_quantity: i64) -> Cage {
    Cage {
        id,
        name: name.to_owned(),
        description: description.to_owned(),
        max_quantity,
        area_id: area.map(|_| 1),
        area_name: area.map(str::to_owned),
    }
}

// =============================================================
// MatchMode
// =============================================================

#[test]
fn match_mode_is_case_insensitive() {
    assert!(MatchMode::Contains.matches("Big Cat Enclosure", "cat"));
    assert!(MatchMode::StartsWith.matches("Big Cat Enclosure", "BIG"));
    assert!(MatchMode::Equals.matches("Aviary", "aviary"));
}

#[test]
fn match_mode_distinguishes_position() {
    assert!(!MatchMode::StartsWith.matches("Big Cat", "cat"));
    assert!(!MatchMode::Equals.matches("Aviary 2", "aviary"));
}

// =============================================================
// FilterState
// =============================================================

#[test]
fn default_filter_has_inactive_name_constraint() {
    let filter = FilterState::default();
    assert_eq!(filter.global, None);
    assert_eq!(filter.columns.len(), 1);
    assert_eq!(filter.columns[0].column, CageColumn::Name);
    assert_eq!(filter.columns[0].mode, MatchMode::StartsWith);
    assert!(!filter.is_active());
}

#[test]
fn global_filter_searches_every_display_field() {
    let mut filter = FilterState::default();
    let by_area = cage(1, "Pen", Some("Savanna"), "", 3);
    let by_description = cage(2, "Pen", None, "near the savanna gate", 3);
    let by_quantity = cage(3, "Pen", None, "", 125);
    let miss = cage(4, "Pen", Some("Arctic"), "cold", 4);

    filter.set_global("SAVANNA");
    assert!(filter.matches(&by_area));
    assert!(filter.matches(&by_description));
    assert!(!filter.matches(&miss));

    filter.set_global("12");
    assert!(filter.matches(&by_quantity));
    assert!(!filter.matches(&miss));
}

#[test]
fn blank_global_filter_clears_predicate() {
    let mut filter = FilterState::default();
    filter.set_global("pen");
    assert!(filter.is_active());
    filter.set_global("   ");
    assert_eq!(filter.global, None);
    assert!(filter.matches(&cage(1, "anything", None, "", 1)));
}

#[test]
fn column_constraint_uses_its_match_mode() {
    let mut filter = FilterState::default();
    filter.set_column(CageColumn::Name, "big");
    assert!(filter.matches(&cage(1, "Big Cat", None, "", 1)));
    assert!(!filter.matches(&cage(2, "The Big Cat", None, "", 1)));
}

#[test]
fn new_column_constraint_defaults_to_contains_and_ands_with_global() {
    let mut filter = FilterState::default();
    filter.set_column(CageColumn::Area, "zone");
    filter.set_global("cat");
    assert_eq!(filter.columns.len(), 2);
    assert!(filter.matches(&cage(1, "Cat", Some("Zone 1"), "", 1)));
    assert!(!filter.matches(&cage(2, "Cat", Some("North"), "", 1)));
    assert!(!filter.matches(&cage(3, "Dog", Some("Zone 1"), "", 1)));
}

#[test]
fn column_headers_match_table_labels() {
    let headers: Vec<_> = CageColumn::ALL.iter().map(|c| c.header()).collect();
    assert_eq!(headers, ["Cage Name", "Area", "Description", "Max Quantity"]);
}
