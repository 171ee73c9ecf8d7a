//! Pure UI state derived from API responses.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages translate envelopes into these values, then apply them to the DOM.
//! Keeping the translation here lets it run in native tests.

pub mod form;
pub mod session;
