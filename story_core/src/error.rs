//! Error types for the story engine.

use std::path::PathBuf;

use thiserror::Error;

use crate::events::OptionSlot;

/// Result type for story operations.
pub type StoryResult<T> = Result<T, StoryError>;

/// Errors raised while loading a script or advancing a session.
#[derive(Debug, Error)]
pub enum StoryError {
    /// The script has no nodes.
    #[error("dialogue script has no nodes")]
    EmptyScript,

    /// A node declares more choices than the three a page can hold.
    #[error("node {node} has {count} options, at most 3 are allowed")]
    TooManyOptions { node: usize, count: usize },

    /// An option points at a page that does not exist.
    #[error("node {node} option {slot} targets page {page}, script has {len} pages")]
    InvalidTarget {
        node: usize,
        slot: OptionSlot,
        page: usize,
        len: usize,
    },

    /// The player picked a choice the current node does not offer.
    #[error("node {node} has no option {slot}")]
    MissingOption { node: usize, slot: OptionSlot },

    /// Advance was requested on the last node.
    #[error("dialogue sequence exhausted after {len} nodes")]
    SequenceExhausted { len: usize },

    /// Reading a script or config file failed.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
