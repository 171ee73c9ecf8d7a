//! Session display: fill the navbar with the current user or a login link.
//!
//! ERROR HANDLING
//! ==============
//! A failed `/auth/me` exchange is logged and otherwise ignored; the navbar
//! keeps whatever the server rendered and the page stays usable.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use crate::net::client::ApiClient;
use crate::net::transport::Transport;
use crate::state::session::SessionView;
use crate::util::token_store::TokenStore;

/// Ask `/auth/me` who is signed in.
///
/// Returns `None` on transport failure, meaning "leave the navbar alone".
pub async fn load_session_view<T: Transport, S: TokenStore>(client: &ApiClient<T, S>) -> Option<SessionView> {
    match client.current_user().await {
        Ok(envelope) => {
            let view = SessionView::from_envelope(&envelope);
            log::debug!("session status {} -> {view:?}", envelope.status);
            Some(view)
        }
        Err(e) => {
            log::warn!("session lookup failed; navbar left unchanged: {e}");
            None
        }
    }
}

/// Look up the session and update the navbar. No-op without a navbar.
///
/// Signed in: the navbar's text becomes the email and the logout form is
/// mounted into a host inserted right after the navbar. Signed out: the
/// navbar's content is replaced by a login link.
#[cfg(feature = "hydrate")]
pub fn refresh(client: std::rc::Rc<crate::net::BrowserClient>, config: &crate::config::UiConfig) {
    use leptos::prelude::*;
    use wasm_bindgen::JsCast;

    use crate::components::session_badge::{LoginLink, LogoutForm};

    let Some(navbar) = crate::util::dom::element_by_id(&config.elements.navbar)
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        return;
    };
    let login_href = config.targets.login_page.clone();
    let logout_action = config.targets.logout_action.clone();
    let storage_key = config.storage_key.clone();

    wasm_bindgen_futures::spawn_local(async move {
        let Some(session) = load_session_view(&client).await else {
            return;
        };
        if let Some(email) = session.navbar_text() {
            navbar.set_text_content(Some(email));
            let Some(host) = logout_host_after(&navbar) else {
                log::warn!("could not place logout control beside the navbar");
                return;
            };
            leptos::mount::mount_to(host, move || {
                view! { <LogoutForm action=logout_action storage_key=storage_key/> }
            })
            .forget();
        } else {
            navbar.set_text_content(None);
            leptos::mount::mount_to(navbar, move || view! { <LoginLink href=login_href/> }).forget();
        }
    });
}

/// Insert an inline `<span>` immediately after `navbar` to hold the logout form.
#[cfg(feature = "hydrate")]
fn logout_host_after(navbar: &web_sys::HtmlElement) -> Option<web_sys::HtmlElement> {
    use wasm_bindgen::JsCast;

    let host = crate::util::dom::document()?
        .create_element("span")
        .ok()?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()?;
    navbar.after_with_node_1(&host).ok()?;
    Some(host)
}
