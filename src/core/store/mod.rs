//! Credential store.
//!
//! Owns every credential in insertion order and mirrors them to the backing
//! file. Each mutation rewrites the whole file.

mod fs;

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::core::domain::Credential;
use crate::core::{record, validation};
use crate::error::Result;

/// In-memory credential collection bound to one backing file.
#[derive(Debug)]
pub struct Store {
    path: PathBuf,
    credentials: Vec<Credential>,
    fresh: bool,
}

impl Store {
    /// Load the store from `path`.
    ///
    /// A missing file is the normal first-run state and yields an empty
    /// store. Unparseable or undecodable lines are skipped.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Read` if the file exists but cannot be read.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        debug!(path = %path.display(), "loading credentials");

        let Some(contents) = fs::read_if_exists(&path)? else {
            info!(path = %path.display(), "no password file found, starting fresh");
            return Ok(Self {
                path,
                credentials: Vec::new(),
                fresh: true,
            });
        };

        if let Some(mode) = validation::loose_permissions(&path) {
            let mode = format!("{:o}", mode);
            warn!(path = %path.display(), %mode, "password file is readable by other users");
        }

        let credentials = record::decode(&contents);
        debug!(count = credentials.len(), "credentials loaded");

        Ok(Self {
            path,
            credentials,
            fresh: false,
        })
    }

    /// Backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True when the backing file did not exist at load time.
    pub fn is_fresh(&self) -> bool {
        self.fresh
    }

    pub fn len(&self) -> usize {
        self.credentials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.credentials.is_empty()
    }

    /// All credentials, in insertion order.
    pub fn credentials(&self) -> &[Credential] {
        &self.credentials
    }

    /// Rewrite the backing file from memory.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Write` if the file cannot be written. The
    /// in-memory collection is untouched, so a later save can retry.
    pub fn save(&self) -> Result<()> {
        debug!(
            path = %self.path.display(),
            count = self.credentials.len(),
            "saving credentials"
        );
        fs::write_atomic(&self.path, &record::encode(&self.credentials))?;
        Ok(())
    }

    /// Append a credential and save. Duplicates are not checked.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if a field would break the file format, in
    /// which case nothing is added. Returns `StoreError::Write` if the save
    /// fails; the credential stays in memory.
    pub fn add(&mut self, credential: Credential) -> Result<()> {
        validation::validate_credential(&credential)?;

        debug!(kind = %credential.kind(), target = credential.target(), "adding credential");
        self.credentials.push(credential);
        self.save()
    }

    /// Index of the first credential matching `identity` and `target`.
    pub fn find(&self, identity: &str, target: &str) -> Option<usize> {
        self.credentials
            .iter()
            .position(|c| c.matches(identity, target))
    }

    /// First matching credential.
    pub fn get(&self, identity: &str, target: &str) -> Option<&Credential> {
        self.find(identity, target).map(|idx| &self.credentials[idx])
    }

    /// Every matching credential, in insertion order.
    pub fn search(&self, identity: &str, target: &str) -> Vec<&Credential> {
        self.credentials
            .iter()
            .filter(|c| c.matches(identity, target))
            .collect()
    }

    /// Replace the secret of the first match and save.
    ///
    /// Returns `false` when nothing matched; the file is not touched then.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the new secret would break the file
    /// format, or `StoreError::Write` if the save fails.
    pub fn update(&mut self, identity: &str, target: &str, new_secret: &str) -> Result<bool> {
        validation::validate_field("secret", new_secret)?;

        let Some(idx) = self.find(identity, target) else {
            return Ok(false);
        };

        self.credentials[idx].set_secret(new_secret);
        self.save()?;
        Ok(true)
    }

    /// Remove the first match and save.
    ///
    /// Only that one entry is removed, even if duplicates follow it.
    /// Returns `None` when nothing matched.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Write` if the save fails.
    pub fn remove(&mut self, identity: &str, target: &str) -> Result<Option<Credential>> {
        let Some(idx) = self.find(identity, target) else {
            return Ok(None);
        };

        let removed = self.credentials.remove(idx);
        self.save()?;
        Ok(Some(removed))
    }
}
