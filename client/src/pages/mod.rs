//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped fetch orchestration and delegates session
//! controls to `components`.

pub mod main_page;
pub mod realm;
