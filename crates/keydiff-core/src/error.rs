use thiserror::Error;

/// Errors that can occur while loading external data into a [`Node`](crate::Node).
#[derive(Debug, Error)]
pub enum LoadError {
    /// The input contained nothing but whitespace.
    #[error("document is empty")]
    Empty,
    /// The provided JSON input was invalid.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The provided YAML input was invalid.
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// YAML maps may only contain string keys, since every key becomes a
    /// path segment.
    #[error("unsupported YAML key type: {found}")]
    NonStringYamlKey {
        /// A description of the key that triggered the error.
        found: String,
    },
    /// YAML allows `.inf` and `.nan`, which have no JSON counterpart.
    #[error("number {value} is not finite")]
    NonFiniteNumber {
        /// The textual representation of the offending number.
        value: String,
    },
    /// YAML tags carry no meaning for key comparison and are rejected.
    #[error("unsupported YAML tag: {tag}")]
    UnsupportedYamlTag {
        /// The tag identifier encountered in the document.
        tag: String,
    },
}
