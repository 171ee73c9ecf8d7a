//! Browser and environment helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! These modules isolate `web-sys` calls from page logic so the logic can run
//! in native tests against in-memory stand-ins.

pub mod dom;
pub mod token_store;
