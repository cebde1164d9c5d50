use super::*;

#[test]
fn default_pager_shows_five_rows_from_first_page() {
    let pager = Pager::default();
    assert_eq!(pager.page, 0);
    assert_eq!(pager.rows, 5);
    assert_eq!(pager.range(12), 0..5);
    assert_eq!(pager.report(12), "1 to 5 of 12");
}

#[test]
fn next_and_last_stop_at_final_page() {
    let mut pager = Pager::default();
    pager.next(12);
    assert_eq!(pager.report(12), "6 to 10 of 12");
    pager.next(12);
    assert_eq!(pager.report(12), "11 to 12 of 12");
    assert!(!pager.has_next(12));
    pager.next(12);
    assert_eq!(pager.page, 2);
    pager.first();
    pager.last(12);
    assert_eq!(pager.page, 2);
}

#[test]
fn prev_saturates_at_zero() {
    let mut pager = Pager::default();
    pager.prev();
    assert_eq!(pager.page, 0);
    assert!(!pager.has_prev());
}

#[test]
fn empty_table_has_single_empty_page() {
    let pager = Pager::default();
    assert_eq!(pager.page_count(0), 1);
    assert_eq!(pager.range(0), 0..0);
    assert_eq!(pager.report(0), "0 to 0 of 0");
}

#[test]
fn set_rows_accepts_only_offered_sizes_and_resets_page() {
    let mut pager = Pager { page: 3, rows: 5 };
    pager.set_rows(25);
    assert_eq!(pager, Pager { page: 0, rows: 25 });
    pager.page = 1;
    pager.set_rows(7);
    assert_eq!(pager, Pager { page: 1, rows: 25 });
}

#[test]
fn clamp_pulls_cursor_back_after_rows_removed() {
    let mut pager = Pager { page: 2, rows: 5 };
    pager.clamp(11);
    assert_eq!(pager.page, 2);
    pager.clamp(10);
    assert_eq!(pager.page, 1);
    pager.clamp(0);
    assert_eq!(pager.page, 0);
}
