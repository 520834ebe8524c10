//! Credential kind.

use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Which sort of login a credential is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Website,
    App,
}

impl Kind {
    /// Tag written as the first field of a record line.
    pub fn tag(self) -> &'static str {
        match self {
            Kind::Website => "Website",
            Kind::App => "App",
        }
    }

    /// Parse a record tag. Exact match only, the file format is case-sensitive.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "Website" => Some(Kind::Website),
            "App" => Some(Kind::App),
            _ => None,
        }
    }

    /// Human label for the discriminating field.
    pub fn target_label(self) -> &'static str {
        match self {
            Kind::Website => "URL",
            Kind::App => "App name",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.tag())
    }
}

/// Case-insensitive parse for user input (`website`, `APP`, ...).
impl FromStr for Kind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("website") {
            Ok(Kind::Website)
        } else if trimmed.eq_ignore_ascii_case("app") {
            Ok(Kind::App)
        } else {
            Err(ValidationError::UnknownKind(trimmed.to_string()))
        }
    }
}
