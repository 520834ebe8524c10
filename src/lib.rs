//! passkeep - a personal credential vault.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── credentials   # add, search, update, rm, list
//! │   ├── shell         # Interactive numbered menu
//! │   ├── prompt        # Terminal and piped input
//! │   └── output        # Styled terminal output
//! └── core/             # Core library components
//!     ├── config        # config.toml and file resolution
//!     ├── domain/       # Credential and Kind
//!     ├── record        # CSV line format
//!     ├── session       # Request dispatch
//!     ├── store/        # In-memory store and backing file
//!     └── validation    # Field checks
//! ```
//!
//! # Example
//!
//! ```no_run
//! use passkeep::{Credential, Store};
//!
//! let mut store = Store::open("passwords.csv")?;
//! store.add(Credential::website("a@x.com", "secret1", "site.com"))?;
//! assert!(store.get("a@x.com", "site.com").is_some());
//! # Ok::<(), passkeep::error::Error>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::domain::{Credential, Kind};
pub use crate::core::session::{dispatch, Outcome, Request};
pub use crate::core::store::Store;
