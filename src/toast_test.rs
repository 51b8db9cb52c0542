use super::*;
use std::time::Duration;

#[test]
fn fresh_toast_is_fully_opaque() {
    let toast = Toast::new("New game started!", StatusKind::Success);
    assert_eq!(toast.alpha(), Some(1.0));
    assert!(!toast.is_expired());
    assert_eq!(toast.message(), "New game started!");
    assert_eq!(toast.kind(), StatusKind::Success);
}

#[test]
fn toast_holds_full_opacity_until_the_fade_starts() {
    assert_eq!(Toast::alpha_at(0.0), Some(1.0));
    assert_eq!(Toast::alpha_at(TOAST_VISIBLE_SECS - TOAST_FADE_SECS), Some(1.0));
}

#[test]
fn toast_fades_inside_the_visibility_window() {
    let mid_fade = TOAST_VISIBLE_SECS - TOAST_FADE_SECS / 2.0;
    let alpha = Toast::alpha_at(mid_fade).unwrap();
    assert!(alpha > 0.0 && alpha < 1.0);
}

#[test]
fn toast_is_gone_at_exactly_the_visibility_limit() {
    assert_eq!(Toast::alpha_at(TOAST_VISIBLE_SECS), None);
    assert_eq!(Toast::alpha_at(TOAST_VISIBLE_SECS + 1.0), None);
}

#[test]
fn replacement_restarts_the_clock() {
    let mut toast = Toast::new("first", StatusKind::Info);
    toast.shown_at -= Duration::from_secs(60);
    assert!(toast.is_expired());

    toast = Toast::new("second", StatusKind::Error);
    assert!(!toast.is_expired());
    assert_eq!(toast.message(), "second");
}
