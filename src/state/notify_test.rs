use super::*;

#[test]
fn push_assigns_increasing_ids_and_default_life() {
    let mut notices = Notifications::default();
    let a = notices.success("saved");
    let b = notices.failure("nope");
    assert!(b > a);
    assert_eq!(notices.items().len(), 2);
    assert_eq!(notices.items()[0].life_ms, 3000);
    assert_eq!(notices.items()[0].summary, "Notification");
}

#[test]
fn severity_drives_style() {
    let mut notices = Notifications::with_life_ms(500);
    notices.failure("area not found");
    let latest = notices.latest().unwrap();
    assert_eq!(latest.severity, Severity::Failure);
    assert_eq!(latest.severity.color(), "red");
    assert_eq!(latest.life_ms, 500);
    assert_eq!(Severity::Success.color(), "green");
    assert!(Severity::Success.css_class().contains("toast--success"));
}

#[test]
fn dismiss_removes_only_that_notification() {
    let mut notices = Notifications::default();
    let a = notices.success("one");
    let b = notices.success("two");
    assert!(notices.dismiss(a));
    assert!(!notices.dismiss(a));
    assert_eq!(notices.items().len(), 1);
    assert_eq!(notices.items()[0].id, b);
}
