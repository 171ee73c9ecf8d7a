//! Per-form submission state and the outcome a submission produces.
//!
//! DESIGN
//! ======
//! Each submission moves `Idle -> Submitting -> Succeeded | Failed`. There is
//! no retry and no cancellation; a finished form accepts the next submit.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::cell::Cell;
use std::rc::Rc;

use crate::net::envelope::Envelope;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    Login,
    Register,
}

impl FormKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Register => "Register",
        }
    }

    #[must_use]
    pub fn success_message(self) -> &'static str {
        match self {
            Self::Login => "Logged in!",
            Self::Register => "Account created. Redirecting…",
        }
    }

    /// Message for an `ok = false` response: the server's detail if any,
    /// otherwise a generic line with the status code.
    #[must_use]
    pub fn failure_message(self, envelope: &Envelope) -> String {
        envelope
            .detail()
            .unwrap_or_else(|| format!("{} failed ({})", self.label(), envelope.status))
    }

    #[must_use]
    pub fn network_failure_message(self) -> String {
        format!("{} failed (network error)", self.label())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// What the page should do after a submission finishes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormOutcome {
    pub phase: FormPhase,
    /// Text for the form's message element.
    pub message: String,
    /// Page to navigate to, if any.
    pub redirect: Option<String>,
}

impl FormOutcome {
    pub fn succeeded(message: impl Into<String>, redirect: impl Into<String>) -> Self {
        Self { phase: FormPhase::Succeeded, message: message.into(), redirect: Some(redirect.into()) }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self { phase: FormPhase::Failed, message: message.into(), redirect: None }
    }
}

/// Shared phase cell for one form; rejects a submit while one is in flight.
#[derive(Clone, Debug, Default)]
pub struct SubmitGuard {
    phase: Rc<Cell<FormPhase>>,
}

impl SubmitGuard {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> FormPhase {
        self.phase.get()
    }

    /// Enter `Submitting`. Returns `false` if a submission is already in flight.
    pub fn try_begin(&self) -> bool {
        if self.phase.get() == FormPhase::Submitting {
            return false;
        }
        self.phase.set(FormPhase::Submitting);
        true
    }

    pub fn finish(&self, outcome: &FormOutcome) {
        self.phase.set(outcome.phase);
    }
}
