//! Constants used throughout passkeep.
//!
//! Centralizes file names, environment variables and the record delimiter.

/// Default backing file, relative to the working directory.
pub const DEFAULT_VAULT_FILE: &str = "passwords.csv";

/// Field separator in the backing file. Never escaped.
pub const DELIMITER: char = ',';

/// Number of fields in a persisted record line.
pub const RECORD_FIELDS: usize = 4;

/// Environment variable overriding the backing file path.
pub const FILE_ENV: &str = "PASSKEEP_FILE";

/// Environment variable overriding the config file path.
pub const CONFIG_ENV: &str = "PASSKEEP_CONFIG";

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV: &str = "PASSKEEP_LOG";

/// Config directory name under the platform config dir.
pub const CONFIG_DIR: &str = "passkeep";

/// Config file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.toml";
