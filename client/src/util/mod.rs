//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, scrolling) from page
//! and component logic.

pub mod scroll;
pub mod storage;
