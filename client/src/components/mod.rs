//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read and write the session through the `AuthState` context
//! provided by the root `App`.

pub mod login_panel;
