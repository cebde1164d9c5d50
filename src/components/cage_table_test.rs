use super::*;

#[test]
fn row_cells_follow_column_order() {
    let cage = Cage {
        id: 1,
        name: "Cage A".to_owned(),
        description: "Dry".to_owned(),
        max_quantity: 5,
        area_id: Some(10),
        area_name: Some("Zone 1".to_owned()),
    };
    assert_eq!(row_cells(&cage), ["Cage A", "Zone 1", "Dry", "5"]);
}

#[test]
fn row_cells_blank_area_when_unassigned() {
    let cage = Cage {
        id: 2,
        name: "Pen".to_owned(),
        description: String::new(),
        max_quantity: 1,
        area_id: None,
        area_name: None,
    };
    assert_eq!(row_cells(&cage)[1], "");
}

#[test]
fn status_message_only_for_non_ready_states() {
    assert_eq!(status_message(&ListStatus::Ready), None);
    assert_eq!(
        status_message(&ListStatus::Error("network error: offline".to_owned())).as_deref(),
        Some("Could not load cages: network error: offline")
    );
    assert!(status_message(&ListStatus::Empty).is_some());
    assert!(status_message(&ListStatus::NoMatches).is_some());
    assert!(status_message(&ListStatus::Loading).is_some());
}

#[test]
fn only_name_column_gets_a_filter_box() {
    assert_eq!(filter_placeholder(CageColumn::Name).as_deref(), Some("Filter by cage name"));
    assert_eq!(filter_placeholder(CageColumn::Area), None);
    assert_eq!(filter_placeholder(CageColumn::MaxQuantity), None);
}
