use super::*;
use crate::testing::{ScriptedTransport, client};
use futures::executor::block_on;
use serde_json::json;

#[test]
fn signed_in_user_gets_email_and_logout() {
    let api = client(ScriptedTransport::new().respond_json(200, json!({"id": "u_1", "email": "a@b.c"})));
    let view = block_on(load_session_view(&api)).unwrap();
    assert_eq!(view, SessionView::SignedIn { email: "a@b.c".to_owned() });
}

#[test]
fn public_user_gets_login_link_only() {
    let api = client(
        ScriptedTransport::new().respond_json(200, json!({"id": "public", "email": "public@example.com"})),
    );
    let view = block_on(load_session_view(&api)).unwrap();
    assert_eq!(view, SessionView::SignedOut);
}

#[test]
fn unauthorized_response_gets_login_link() {
    let api = client(ScriptedTransport::new().respond_json(401, json!({"detail": "not authenticated"})));
    assert_eq!(block_on(load_session_view(&api)), Some(SessionView::SignedOut));
}

#[test]
fn html_response_gets_login_link() {
    let api = client(ScriptedTransport::new().respond(200, Some("text/html"), "<p>hi</p>"));
    assert_eq!(block_on(load_session_view(&api)), Some(SessionView::SignedOut));
}

#[test]
fn transport_failure_leaves_navbar_unchanged() {
    let api = client(ScriptedTransport::new().fail("offline"));
    assert_eq!(block_on(load_session_view(&api)), None);
}

#[test]
fn session_lookup_hits_me_endpoint_once() {
    let api = client(ScriptedTransport::new().respond_json(200, json!({})));
    block_on(load_session_view(&api));
    let sent = api.transport().sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].url, "/auth/me");
}
