//! Request dispatch.
//!
//! Every front-end (one-shot subcommands and the interactive menu) turns user
//! input into a [`Request`] and renders the [`Outcome`]. Nothing here reads
//! from or writes to the terminal.

use tracing::debug;

use crate::core::domain::Credential;
use crate::core::store::Store;
use crate::error::Result;

/// A parsed user operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Add(Credential),
    Search { identity: String, target: String },
    Update { identity: String, target: String, secret: String },
    Delete { identity: String, target: String },
    List,
}

impl Request {
    /// Short operation name for logs. Never includes field values.
    pub fn name(&self) -> &'static str {
        match self {
            Request::Add(_) => "add",
            Request::Search { .. } => "search",
            Request::Update { .. } => "update",
            Request::Delete { .. } => "delete",
            Request::List => "list",
        }
    }
}

/// What a request did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Added,
    /// Every match, in insertion order. Never empty.
    Found(Vec<Credential>),
    Updated,
    Deleted(Credential),
    Listed(Vec<Credential>),
    /// Search, update or delete found nothing. Not an error.
    NoMatch,
}

/// Run one request against the store.
///
/// # Errors
///
/// Returns `ValidationError` for input the file format cannot hold and
/// `StoreError` when the backing file cannot be written.
pub fn dispatch(store: &mut Store, request: Request) -> Result<Outcome> {
    debug!(op = request.name(), "dispatching");

    let outcome = match request {
        Request::Add(credential) => {
            store.add(credential)?;
            Outcome::Added
        }
        Request::Search { identity, target } => {
            let found: Vec<Credential> = store
                .search(&identity, &target)
                .into_iter()
                .cloned()
                .collect();
            if found.is_empty() {
                Outcome::NoMatch
            } else {
                Outcome::Found(found)
            }
        }
        Request::Update {
            identity,
            target,
            secret,
        } => {
            if store.update(&identity, &target, &secret)? {
                Outcome::Updated
            } else {
                Outcome::NoMatch
            }
        }
        Request::Delete { identity, target } => match store.remove(&identity, &target)? {
            Some(removed) => Outcome::Deleted(removed),
            None => Outcome::NoMatch,
        },
        Request::List => Outcome::Listed(store.credentials().to_vec()),
    };

    Ok(outcome)
}
