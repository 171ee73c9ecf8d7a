use super::*;
use serde_json::json;

#[test]
fn identity_accepts_string_id() {
    let id: Identity = serde_json::from_value(json!({"id": "u_abc123", "email": "a@b.c"})).unwrap();
    assert_eq!(id.id, "u_abc123");
    assert!(id.is_authenticated());
}

#[test]
fn identity_accepts_numeric_id() {
    let id: Identity = serde_json::from_value(json!({"id": 42, "email": "a@b.c"})).unwrap();
    assert_eq!(id.id, "42");
}

#[test]
fn zero_numeric_id_is_not_authenticated() {
    let id: Identity = serde_json::from_value(json!({"id": 0, "email": "a@b.c"})).unwrap();
    assert_eq!(id.id, "");
    assert!(!id.is_authenticated());
}

#[test]
fn identity_rejects_object_id() {
    assert!(serde_json::from_value::<Identity>(json!({"id": {"x": 1}, "email": "a@b.c"})).is_err());
}

#[test]
fn public_identity_is_not_authenticated() {
    let id: Identity =
        serde_json::from_value(json!({"id": "public", "email": "public@example.com"})).unwrap();
    assert!(!id.is_authenticated());
}

#[test]
fn identity_missing_fields_is_not_authenticated() {
    let no_email: Identity = serde_json::from_value(json!({"id": "u_1"})).unwrap();
    let null_id: Identity = serde_json::from_value(json!({"id": null, "email": "a@b.c"})).unwrap();
    assert!(!no_email.is_authenticated());
    assert!(!null_id.is_authenticated());
}

#[test]
fn login_response_token_is_optional() {
    let with: LoginResponse =
        serde_json::from_value(json!({"ok": true, "access_token": "T", "token_type": "bearer"})).unwrap();
    let without: LoginResponse = serde_json::from_value(json!({"ok": true})).unwrap();
    assert_eq!(with.access_token.as_deref(), Some("T"));
    assert_eq!(without.access_token, None);
}

#[test]
fn credentials_serialize_as_email_and_password() {
    let creds = Credentials { email: "a@b.c".to_owned(), password: "pw".to_owned() };
    assert_eq!(serde_json::to_value(&creds).unwrap(), json!({"email": "a@b.c", "password": "pw"}));
}
