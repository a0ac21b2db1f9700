// Error types for the config and catalog layers.
// Navigation itself is total and has no error type.

use std::fmt;
use thiserror::Error;

/// Which of the two catalog lists an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CatalogKind {
    Platforms,
    Games,
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogKind::Platforms => write!(f, "platforms"),
            CatalogKind::Games => write!(f, "games"),
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog {kind} list is empty")]
    Empty { kind: CatalogKind },

    #[error("catalog {kind} list has duplicate name {name:?}")]
    DuplicateName { kind: CatalogKind, name: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Could not determine config directory")]
    NoConfigDir,
}
