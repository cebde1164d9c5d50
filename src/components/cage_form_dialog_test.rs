use super::*;
use crate::net::types::Cage;

#[test]
fn dialog_title_tracks_form_mode() {
    let cage = Cage {
        id: 1,
        name: "A".to_owned(),
        description: String::new(),
        max_quantity: 1,
        area_id: None,
        area_name: None,
    };
    let mut form = FormState::default();
    form.open_new(1);
    assert_eq!(dialog_title(&form), "Add Cage");
    form.open_existing(&cage, 2);
    assert_eq!(dialog_title(&form), "Update Cage");
}

#[test]
fn area_option_value_round_trips_through_parse() {
    assert_eq!(area_option_value(Some(10)), "10");
    assert_eq!(parse_area_option("10"), Some(10));
    assert_eq!(area_option_value(None), "");
    assert_eq!(parse_area_option(""), None);
}
