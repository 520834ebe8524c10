//! Core library components.
//!
//! The credential model, the backing file format, the store and request
//! dispatch. Nothing in here talks to the terminal.

pub mod config;
pub mod constants;
pub mod domain;
pub mod record;
pub mod session;
pub mod store;
pub mod types;
pub mod validation;
