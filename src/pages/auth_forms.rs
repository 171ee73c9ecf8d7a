//! Login and register form handlers.
//!
//! Both forms are server-rendered. On page load each present form gets a
//! submit listener that posts `{email, password}` through the client wrapper
//! and writes the outcome into the form's message element.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "auth_forms_test.rs"]
mod auth_forms_test;

use crate::config::NavTargets;
use crate::net::client::ApiClient;
use crate::net::transport::Transport;
use crate::net::types::{Credentials, LoginResponse};
use crate::state::form::{FormKind, FormOutcome};
use crate::util::dom;
use crate::util::token_store::TokenStore;

/// Submit `credentials` for `kind` and decide what the page shows next.
///
/// Login success caches a returned `access_token` and goes to the plans page;
/// register success goes to the login page. An HTTP error shows the server's
/// detail or a status line. A transport failure is logged and shown as a
/// network error.
pub async fn submit<T: Transport, S: TokenStore>(
    client: &ApiClient<T, S>,
    kind: FormKind,
    credentials: &Credentials,
    targets: &NavTargets,
) -> FormOutcome {
    let result = match kind {
        FormKind::Login => client.login(credentials).await,
        FormKind::Register => client.register(credentials).await,
    };
    let envelope = match result {
        Ok(envelope) => envelope,
        Err(e) => {
            log::error!("{} request failed: {e}", kind.label());
            return FormOutcome::failed(kind.network_failure_message());
        }
    };
    if !envelope.ok {
        log::info!("{} rejected with status {}", kind.label(), envelope.status);
        return FormOutcome::failed(kind.failure_message(&envelope));
    }

    match kind {
        FormKind::Login => {
            let token = envelope
                .decode::<LoginResponse>()
                .and_then(|body| body.access_token)
                .filter(|token| !token.is_empty());
            if let Some(token) = token {
                client.tokens().save(&token);
            }
            FormOutcome::succeeded(kind.success_message(), targets.plans_page.clone())
        }
        FormKind::Register => FormOutcome::succeeded(kind.success_message(), targets.login_page.clone()),
    }
}

/// Write the outcome message and follow its redirect.
///
/// A missing message element does not block navigation.
pub fn apply_outcome(message_id: &str, outcome: &FormOutcome) {
    if !dom::set_text(message_id, &outcome.message) {
        log::warn!("#{message_id} not on page; outcome: {}", outcome.message);
    }
    if let Some(href) = &outcome.redirect {
        dom::navigate(href);
    }
}

/// Attach the submit handler for `kind` if its form is on the page.
#[cfg(feature = "hydrate")]
pub fn attach(client: std::rc::Rc<crate::net::BrowserClient>, kind: FormKind, config: &crate::config::UiConfig) {
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    use crate::state::form::SubmitGuard;

    let (form_id, message_id) = match kind {
        FormKind::Login => (&config.elements.login_form, &config.elements.login_message),
        FormKind::Register => (&config.elements.register_form, &config.elements.register_message),
    };
    let Some(form) = dom::element_by_id(form_id).and_then(|el| el.dyn_into::<web_sys::HtmlFormElement>().ok())
    else {
        log::debug!("#{form_id} not on page; {} handler not attached", kind.label());
        return;
    };

    let guard = SubmitGuard::new();
    let targets = config.targets.clone();
    let message_id = message_id.clone();
    let form_for_cb = form.clone();
    let on_submit = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
        ev.prevent_default();
        if !guard.try_begin() {
            log::debug!("{} already submitting; ignored", kind.label());
            return;
        }
        let credentials = dom::form_credentials(&form_for_cb);
        let client = Rc::clone(&client);
        let guard = guard.clone();
        let targets = targets.clone();
        let message_id = message_id.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = submit(&client, kind, &credentials, &targets).await;
            guard.finish(&outcome);
            apply_outcome(&message_id, &outcome);
        });
    });

    if form
        .add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())
        .is_err()
    {
        log::error!("could not attach {} handler to #{form_id}", kind.label());
        return;
    }
    on_submit.forget();
}
