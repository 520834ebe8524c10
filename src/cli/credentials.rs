//! Credential commands.
//!
//! One-shot add, search, update, rm and list. Each builds a [`Request`],
//! dispatches it and reports the outcome.

use std::path::Path;

use tracing::info;

use crate::cli::{output, prompt};
use crate::core::domain::{Credential, Kind};
use crate::core::session::{self, Outcome, Request};
use crate::core::store::Store;
use crate::error::{Error, Result};

/// Print an outcome for a human reader.
///
/// `NoMatch` is printed as a warning; callers decide whether it should also
/// fail the command.
pub fn report(outcome: &Outcome) {
    match outcome {
        Outcome::Added => output::success("password saved"),
        Outcome::Updated => output::success("password updated"),
        Outcome::Deleted(c) => output::success(&format!(
            "deleted {} login for {}",
            output::target(c.target()),
            c.identity()
        )),
        Outcome::Found(found) => {
            for c in found {
                output::credential(c);
            }
        }
        Outcome::Listed(all) if all.is_empty() => output::dimmed("no passwords stored"),
        Outcome::Listed(all) => {
            println!();
            output::header(&format!("{} passwords", all.len()));
            output::rule();
            for c in all {
                output::list_item(&format!(
                    "{:<7} {}  {}",
                    c.kind(),
                    output::target(c.target()),
                    c.identity()
                ));
            }
        }
        Outcome::NoMatch => output::warn("no matching password found"),
    }
}

fn no_match(identity: &str, target: &str) -> Error {
    Error::NoMatch {
        identity: identity.to_string(),
        target: target.to_string(),
    }
}

/// Add a credential. Without `secret`, it is read from stdin or a hidden prompt.
pub fn add(
    path: &Path,
    identity: &str,
    kind: Kind,
    target: &str,
    secret: Option<String>,
) -> Result<()> {
    info!("Adding {} credential for {}", kind, target);
    let mut store = Store::open(path)?;

    let secret = match secret {
        Some(s) => s,
        None => prompt::read_secret(&format!("Password for {}", target))?,
    };

    let outcome = session::dispatch(
        &mut store,
        Request::Add(Credential::new(kind, identity, secret, target)),
    )?;
    report(&outcome);
    Ok(())
}

/// Show every credential matching `identity` and `target`.
pub fn search(path: &Path, identity: &str, target: &str, json: bool) -> Result<()> {
    let mut store = Store::open(path)?;
    let outcome = session::dispatch(
        &mut store,
        Request::Search {
            identity: identity.to_string(),
            target: target.to_string(),
        },
    )?;

    let Outcome::Found(found) = outcome else {
        return Err(no_match(identity, target));
    };

    if json {
        let entries: Vec<_> = found
            .iter()
            .map(|c| {
                serde_json::json!({
                    "kind": c.kind().tag(),
                    "identity": c.identity(),
                    "target": c.target(),
                    "secret": c.secret(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        report(&Outcome::Found(found));
    }

    Ok(())
}

/// Replace the password of the first match.
pub fn update(path: &Path, identity: &str, target: &str, secret: Option<String>) -> Result<()> {
    info!("Updating credential for {}", target);
    let mut store = Store::open(path)?;

    if store.find(identity, target).is_none() {
        return Err(no_match(identity, target));
    }

    let secret = match secret {
        Some(s) => s,
        None => prompt::read_secret(&format!("New password for {}", target))?,
    };

    let outcome = session::dispatch(
        &mut store,
        Request::Update {
            identity: identity.to_string(),
            target: target.to_string(),
            secret,
        },
    )?;
    report(&outcome);
    Ok(())
}

/// Delete the first match.
pub fn rm(path: &Path, identity: &str, target: &str) -> Result<()> {
    info!("Removing credential for {}", target);
    let mut store = Store::open(path)?;

    let outcome = session::dispatch(
        &mut store,
        Request::Delete {
            identity: identity.to_string(),
            target: target.to_string(),
        },
    )?;

    if outcome == Outcome::NoMatch {
        return Err(no_match(identity, target));
    }
    report(&outcome);
    Ok(())
}

/// List stored credentials without their secrets.
pub fn list(path: &Path, json: bool) -> Result<()> {
    let mut store = Store::open(path)?;
    let outcome = session::dispatch(&mut store, Request::List)?;

    if json {
        let Outcome::Listed(all) = &outcome else {
            return Ok(());
        };
        let entries: Vec<_> = all
            .iter()
            .map(|c| {
                serde_json::json!({
                    "kind": c.kind().tag(),
                    "identity": c.identity(),
                    "target": c.target(),
                })
            })
            .collect();
        let result = serde_json::json!({
            "credentials": entries,
            "count": all.len(),
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        report(&outcome);
    }

    Ok(())
}
