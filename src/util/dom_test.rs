#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn set_text_reports_missing_element_outside_browser() {
    assert!(!set_text("login-msg", "hello"));
}

#[test]
fn navigate_is_noop_outside_browser() {
    assert!(!navigate("/ui/plans"));
}

#[test]
fn body_data_is_none_outside_browser() {
    assert_eq!(body_data("api-base"), None);
}
