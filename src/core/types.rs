//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

use zeroize::Zeroizing;

/// Who the credential belongs to, usually an email or username.
///
/// Used as a lookup key together with the [`Target`]. Not unique.
pub type Identity = String;

/// The variant-specific lookup field: a URL for websites, a name for apps.
pub type Target = String;

/// A stored password, wiped from memory when dropped.
pub type SecretValue = Zeroizing<String>;
