//! Navbar fragments: a login link, or a logout form placed beside the email.

use leptos::prelude::*;

use crate::util::token_store::{LocalStorageTokenStore, TokenStore};

/// Login link rendered inside the navbar when nobody is signed in.
#[component]
pub fn LoginLink(href: String) -> impl IntoView {
    view! { <a href=href>"Login"</a> }
}

/// Inline logout form mounted next to the navbar, not inside it.
///
/// The form is a plain POST so the server clears the session cookie; its
/// submit handler drops the cached access token on the way out.
#[component]
pub fn LogoutForm(action: String, storage_key: String) -> impl IntoView {
    view! {
        <form
            method="post"
            action=action
            style="display:inline"
            on:submit=move |_| LocalStorageTokenStore::new(storage_key.clone()).clear()
        >
            <button type="submit" style="margin-left:0.5rem">"Logout"</button>
        </form>
    }
}
