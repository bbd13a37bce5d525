//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` wraps the session store provided through context; `realms` holds
//! route-scoped fetch state owned by the pages.

pub mod auth;
pub mod realms;
