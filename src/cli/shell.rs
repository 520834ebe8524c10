//! Interactive menu.
//!
//! The numbered menu loop: 1 add, 2 search, 3 update, 4 delete, anything
//! else quits. Rejected input, misses and failed saves are reported and the
//! loop keeps going with the in-memory state.

use std::path::Path;

use tracing::debug;

use crate::cli::credentials::report;
use crate::cli::{output, prompt, prompt::Prompt};
use crate::core::domain::{Credential, Kind};
use crate::core::session::{self, Outcome, Request};
use crate::core::store::Store;
use crate::error::{Error, Result};

const MENU: &[&str] = &[
    "1. Add password",
    "2. Search password",
    "3. Update password",
    "4. Delete password",
    "Any other key to exit",
];

/// What one pass through the menu asked for.
enum Step {
    Run(Request),
    /// Nothing to dispatch; show the menu again.
    Retry,
    Quit,
}

/// Open the store at `path` and run the menu on stdin.
pub fn execute(path: &Path) -> Result<()> {
    let mut store = Store::open(path)?;
    if store.is_fresh() {
        output::dimmed("no password file found, starting fresh");
    } else {
        output::dimmed(&format!(
            "{} passwords loaded from {}",
            store.len(),
            path.display()
        ));
    }

    let mut input = prompt::stdin();
    run(&mut store, input.as_mut())
}

/// Run the menu until the user quits or input runs out.
pub fn run(store: &mut Store, input: &mut dyn Prompt) -> Result<()> {
    loop {
        println!();
        output::header("Enter choice");
        for line in MENU {
            println!("  {}", line);
        }

        let step = match read_step(store, input) {
            Ok(step) => step,
            Err(Error::Validation(e)) => {
                output::error(&e.to_string());
                Step::Retry
            }
            Err(e) => return Err(e),
        };

        match step {
            Step::Run(request) => match session::dispatch(store, request) {
                Ok(outcome) => report(&outcome),
                Err(e) => output::error(&e.to_string()),
            },
            Step::Retry => {}
            Step::Quit => break,
        }
    }

    debug!("menu closed");
    output::dimmed("goodbye");
    Ok(())
}

fn read_step(store: &Store, input: &mut dyn Prompt) -> Result<Step> {
    match input.text("Choice")? {
        Some(choice) => next_step(store, choice.trim(), input),
        None => Ok(Step::Quit),
    }
}

fn next_step(store: &Store, choice: &str, input: &mut dyn Prompt) -> Result<Step> {
    let step = match choice {
        "1" => add_step(input)?,
        "2" => lookup(input)?.map_or(Step::Quit, |(identity, target)| {
            Step::Run(Request::Search { identity, target })
        }),
        "3" => match lookup(input)? {
            // only ask for the new password once there is something to update
            Some((identity, target)) if store.find(&identity, &target).is_none() => {
                report(&Outcome::NoMatch);
                Step::Retry
            }
            Some((identity, target)) => match input.secret("New password (no commas)")? {
                Some(secret) => Step::Run(Request::Update {
                    identity,
                    target,
                    secret,
                }),
                None => Step::Quit,
            },
            None => Step::Quit,
        },
        "4" => lookup(input)?.map_or(Step::Quit, |(identity, target)| {
            Step::Run(Request::Delete { identity, target })
        }),
        _ => Step::Quit,
    };
    Ok(step)
}

fn add_step(input: &mut dyn Prompt) -> Result<Step> {
    let Some(identity) = input.text("Email or username")? else {
        return Ok(Step::Quit);
    };
    let Some(kind) = input.text("Type (Website/App)")? else {
        return Ok(Step::Quit);
    };
    let Some(target) = input.text("URL or app name")? else {
        return Ok(Step::Quit);
    };
    let Some(secret) = input.secret("Password (no commas)")? else {
        return Ok(Step::Quit);
    };

    match kind.parse::<Kind>() {
        Ok(kind) => Ok(Step::Run(Request::Add(Credential::new(
            kind, identity, secret, target,
        )))),
        Err(e) => {
            output::error(&e.to_string());
            Ok(Step::Retry)
        }
    }
}

/// Ask for the identity and target that locate a credential.
fn lookup(input: &mut dyn Prompt) -> Result<Option<(String, String)>> {
    let Some(identity) = input.text("Email or username")? else {
        return Ok(None);
    };
    let Some(target) = input.text("URL or app name")? else {
        return Ok(None);
    };
    Ok(Some((identity, target)))
}
