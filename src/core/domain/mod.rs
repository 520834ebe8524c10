//! Domain types.

mod credential;
mod kind;

pub use credential::Credential;
pub use kind::Kind;
