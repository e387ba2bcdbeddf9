use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum RollError {
    #[error("unable to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed configuration: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("alias {name} has invalid dice notation {notation:?}")]
    InvalidAlias { name: String, notation: String },
    #[error("{0:?} is neither an alias nor valid dice notation")]
    InvalidNotation(String),
    #[error("the seeded generator needs a seed")]
    MissingSeed,
    #[error("unable to write roll results: {0}")]
    Output(std::io::Error),
}
