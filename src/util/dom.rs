//! Browser DOM glue: element lookup, text updates, navigation.
//!
//! Every helper degrades to a no-op (`None`/`false`) when the window,
//! document, or element is missing, and always does outside `hydrate`.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

#[cfg(feature = "hydrate")]
use crate::net::types::Credentials;

#[cfg(feature = "hydrate")]
pub fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

#[cfg(feature = "hydrate")]
pub fn element_by_id(id: &str) -> Option<web_sys::Element> {
    document()?.get_element_by_id(id)
}

/// Replace the text of element `id`. Returns `false` if it is not on the page.
pub fn set_text(id: &str, text: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(el) = element_by_id(id) else {
            return false;
        };
        el.set_text_content(Some(text));
        true
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, text);
        false
    }
}

/// Full-page navigation to `href`.
pub fn navigate(href: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        if let Err(e) = window.location().assign(href) {
            log::warn!("navigation to {href} failed: {e:?}");
            return false;
        }
        true
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = href;
        false
    }
}

/// Read `data-<key>` from `<body>`.
pub fn body_data(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        document()?.body()?.get_attribute(&format!("data-{key}"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// `email` and `password` fields of a submitted form. Missing fields read as empty.
#[cfg(feature = "hydrate")]
pub fn form_credentials(form: &web_sys::HtmlFormElement) -> Credentials {
    let field = |data: &web_sys::FormData, name: &str| data.get(name).as_string().unwrap_or_default();
    match web_sys::FormData::new_with_form(form) {
        Ok(data) => Credentials { email: field(&data, "email"), password: field(&data, "password") },
        Err(e) => {
            log::warn!("form data unavailable: {e:?}");
            Credentials { email: String::new(), password: String::new() }
        }
    }
}

/// Run `f` once the document has parsed; immediately if it already has.
#[cfg(feature = "hydrate")]
pub fn on_dom_ready<F>(f: F)
where
    F: FnOnce() + 'static,
{
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(document) = document() else {
        return;
    };
    if document.ready_state() != "loading" {
        f();
        return;
    }
    let callback = Closure::once_into_js(f);
    if document
        .add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
        .is_err()
    {
        log::error!("could not listen for DOMContentLoaded");
    }
}
