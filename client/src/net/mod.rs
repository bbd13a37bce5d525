//! Networking for the browser build.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` adapts `gloo-net` to the `timeline::Transport` trait; request
//! building and response decoding live in the `timeline` crate.

pub mod api;
