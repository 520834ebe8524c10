//! Credential type.
//!
//! A stored login: who it belongs to, the password, and the website URL or
//! app name that tells it apart from other logins of the same identity.

use std::fmt;

use zeroize::Zeroizing;

use super::Kind;
use crate::core::constants::DELIMITER;
use crate::core::types::{Identity, SecretValue, Target};

/// A stored login for a website or an app.
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    Website {
        identity: Identity,
        secret: SecretValue,
        url: Target,
    },
    App {
        identity: Identity,
        secret: SecretValue,
        app_name: Target,
    },
}

impl Credential {
    /// Build a credential of the given kind.
    pub fn new(
        kind: Kind,
        identity: impl Into<Identity>,
        secret: impl Into<String>,
        target: impl Into<Target>,
    ) -> Self {
        match kind {
            Kind::Website => Self::website(identity, secret, target),
            Kind::App => Self::app(identity, secret, target),
        }
    }

    /// Website login.
    pub fn website(
        identity: impl Into<Identity>,
        secret: impl Into<String>,
        url: impl Into<Target>,
    ) -> Self {
        Credential::Website {
            identity: identity.into(),
            secret: Zeroizing::new(secret.into()),
            url: url.into(),
        }
    }

    /// App login.
    pub fn app(
        identity: impl Into<Identity>,
        secret: impl Into<String>,
        app_name: impl Into<Target>,
    ) -> Self {
        Credential::App {
            identity: identity.into(),
            secret: Zeroizing::new(secret.into()),
            app_name: app_name.into(),
        }
    }

    pub fn kind(&self) -> Kind {
        match self {
            Credential::Website { .. } => Kind::Website,
            Credential::App { .. } => Kind::App,
        }
    }

    pub fn identity(&self) -> &str {
        match self {
            Credential::Website { identity, .. } | Credential::App { identity, .. } => identity,
        }
    }

    pub fn secret(&self) -> &str {
        match self {
            Credential::Website { secret, .. } | Credential::App { secret, .. } => secret,
        }
    }

    /// The URL for a website, the app name for an app.
    pub fn target(&self) -> &str {
        match self {
            Credential::Website { url, .. } => url,
            Credential::App { app_name, .. } => app_name,
        }
    }

    /// Exact, case-sensitive match on identity and target.
    pub fn matches(&self, identity: &str, target: &str) -> bool {
        self.identity() == identity && self.target() == target
    }

    /// Replace the stored password. No validation happens here.
    pub fn set_secret(&mut self, new_secret: impl Into<String>) {
        match self {
            Credential::Website { secret, .. } | Credential::App { secret, .. } => {
                *secret = Zeroizing::new(new_secret.into());
            }
        }
    }

    /// Serialize to one backing-file line, newline included.
    ///
    /// Field order is `Kind,identity,secret,target`.
    pub fn to_record(&self) -> String {
        format!(
            "{tag}{d}{identity}{d}{secret}{d}{target}\n",
            tag = self.kind().tag(),
            identity = self.identity(),
            secret = self.secret(),
            target = self.target(),
            d = DELIMITER,
        )
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("kind", &self.kind())
            .field("identity", &self.identity())
            .field("target", &self.target())
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Multi-line rendering used by search.
impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credential::Website { .. } => {
                writeln!(f, "Website:  {}", self.target())?;
                writeln!(f, "Identity: {}", self.identity())?;
                write!(f, "Secret:   {}", self.secret())
            }
            Credential::App { .. } => {
                writeln!(f, "App:      {}", self.target())?;
                writeln!(f, "Identity: {}", self.identity())?;
                write!(f, "Secret:   {}", self.secret())
            }
        }
    }
}
