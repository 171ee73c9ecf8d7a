//! Page behaviors attached on load: the navbar session display and the auth forms.

pub mod auth_forms;
pub mod navbar;

/// Wire every behavior whose elements are present on this page.
#[cfg(feature = "hydrate")]
pub fn mount(config: &crate::config::UiConfig) {
    use std::rc::Rc;

    use crate::net::client::ApiClient;
    use crate::net::transport::BrowserTransport;
    use crate::state::form::FormKind;
    use crate::util::token_store::LocalStorageTokenStore;

    let client = Rc::new(ApiClient::new(
        BrowserTransport,
        LocalStorageTokenStore::new(config.storage_key.clone()),
        config.endpoints.clone(),
    ));
    navbar::refresh(Rc::clone(&client), config);
    auth_forms::attach(Rc::clone(&client), FormKind::Login, config);
    auth_forms::attach(client, FormKind::Register, config);
}
