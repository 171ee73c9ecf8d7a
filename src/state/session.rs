//! What the navbar shows for the current browser session.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::envelope::Envelope;
use crate::net::types::Identity;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionView {
    /// Email in the navbar, logout form right after it.
    SignedIn { email: String },
    /// Login link inside the navbar.
    SignedOut,
}

impl SessionView {
    /// Classify a `/auth/me` response.
    ///
    /// Anything other than a successful response carrying a real identity
    /// (see [`Identity::is_authenticated`]) is treated as signed out.
    #[must_use]
    pub fn from_envelope(envelope: &Envelope) -> Self {
        if !envelope.ok {
            return Self::SignedOut;
        }
        match envelope.decode::<Identity>() {
            Some(identity) if identity.is_authenticated() => Self::SignedIn { email: identity.email },
            _ => Self::SignedOut,
        }
    }

    /// Plain text for the navbar element itself. Only a signed-in session
    /// writes text there; the logout control goes beside it.
    #[must_use]
    pub fn navbar_text(&self) -> Option<&str> {
        match self {
            Self::SignedIn { email } => Some(email),
            Self::SignedOut => None,
        }
    }
}
