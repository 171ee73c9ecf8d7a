use super::*;
use crate::net::request::Method;
use crate::state::form::FormPhase;
use crate::testing::{ScriptedTransport, client};
use futures::executor::block_on;
use serde_json::json;

// =============================================================
// Helpers
// =============================================================

fn creds() -> Credentials {
    Credentials { email: "a@b.c".to_owned(), password: "pw".to_owned() }
}

fn targets() -> NavTargets {
    NavTargets::default()
}

// =============================================================
// Login
// =============================================================

#[test]
fn login_success_caches_token_and_goes_to_plans() {
    let api = client(ScriptedTransport::new().respond_json(200, json!({"ok": true, "access_token": "T"})));
    let outcome = block_on(submit(&api, FormKind::Login, &creds(), &targets()));
    assert_eq!(outcome.phase, FormPhase::Succeeded);
    assert_eq!(outcome.message, "Logged in!");
    assert_eq!(outcome.redirect.as_deref(), Some("/ui/plans"));
    assert_eq!(api.tokens().item("access_token").as_deref(), Some("T"));
}

#[test]
fn login_success_without_token_leaves_store_empty() {
    let api = client(ScriptedTransport::new().respond_json(200, json!({"ok": true})));
    let outcome = block_on(submit(&api, FormKind::Login, &creds(), &targets()));
    assert_eq!(outcome.phase, FormPhase::Succeeded);
    assert_eq!(api.tokens().item("access_token"), None);
}

#[test]
fn login_success_with_non_json_body_still_redirects() {
    let api = client(ScriptedTransport::new().respond(200, Some("text/plain"), "ok"));
    let outcome = block_on(submit(&api, FormKind::Login, &creds(), &targets()));
    assert_eq!(outcome.redirect.as_deref(), Some("/ui/plans"));
    assert_eq!(api.tokens().item("access_token"), None);
}

#[test]
fn login_failure_shows_server_detail() {
    let api = client(ScriptedTransport::new().respond_json(401, json!({"detail": "bad creds"})));
    let outcome = block_on(submit(&api, FormKind::Login, &creds(), &targets()));
    assert_eq!(outcome.phase, FormPhase::Failed);
    assert_eq!(outcome.message, "bad creds");
    assert_eq!(outcome.redirect, None);
}

#[test]
fn login_failure_does_not_touch_cached_token() {
    let api = client(ScriptedTransport::new().respond_json(400, json!({"detail": "invalid credentials"})));
    api.tokens().save("old");
    block_on(submit(&api, FormKind::Login, &creds(), &targets()));
    assert_eq!(api.tokens().item("access_token").as_deref(), Some("old"));
}

#[test]
fn login_failure_without_detail_shows_status() {
    let api = client(ScriptedTransport::new().respond(502, Some("text/html"), "<h1>Bad Gateway</h1>"));
    let outcome = block_on(submit(&api, FormKind::Login, &creds(), &targets()));
    assert_eq!(outcome.message, "Login failed (502)");
}

#[test]
fn login_network_error_is_reported_not_raised() {
    let api = client(ScriptedTransport::new().fail("offline"));
    let outcome = block_on(submit(&api, FormKind::Login, &creds(), &targets()));
    assert_eq!(outcome.phase, FormPhase::Failed);
    assert_eq!(outcome.message, "Login failed (network error)");
}

#[test]
fn login_posts_form_credentials() {
    let api = client(ScriptedTransport::new().respond_json(200, json!({})));
    block_on(submit(&api, FormKind::Login, &creds(), &targets()));
    let sent = api.transport().sent();
    assert_eq!(sent[0].method, Method::Post);
    assert_eq!(sent[0].url, "/auth/login");
}

// =============================================================
// Register
// =============================================================

#[test]
fn register_success_confirms_and_goes_to_login() {
    let api = client(ScriptedTransport::new().respond_json(200, json!({"status": "ok"})));
    let outcome = block_on(submit(&api, FormKind::Register, &creds(), &targets()));
    assert_eq!(outcome.phase, FormPhase::Succeeded);
    assert_eq!(outcome.message, "Account created. Redirecting…");
    assert_eq!(outcome.redirect.as_deref(), Some("/ui/login"));
    assert_eq!(api.transport().sent()[0].url, "/auth/register");
}

#[test]
fn register_success_never_caches_token() {
    let api = client(ScriptedTransport::new().respond_json(200, json!({"access_token": "T"})));
    block_on(submit(&api, FormKind::Register, &creds(), &targets()));
    assert_eq!(api.tokens().item("access_token"), None);
}

#[test]
fn register_failure_shows_detail_or_status() {
    let api = client(
        ScriptedTransport::new()
            .respond_json(400, json!({"detail": "email and password required"}))
            .respond_json(500, json!({})),
    );
    let first = block_on(submit(&api, FormKind::Register, &creds(), &targets()));
    let second = block_on(submit(&api, FormKind::Register, &creds(), &targets()));
    assert_eq!(first.message, "email and password required");
    assert_eq!(second.message, "Register failed (500)");
}

// =============================================================
// Applying outcomes
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn apply_outcome_tolerates_missing_page() {
    apply_outcome("login-msg", &FormOutcome::succeeded("Logged in!", "/ui/plans"));
    apply_outcome("login-msg", &FormOutcome::failed("bad creds"));
}
