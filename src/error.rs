//! Error type for the layers around the engine.
//!
//! The engine itself never fails: missing parameters, unknown entities and
//! empty criteria combinations all come back as reply text. Errors only arise
//! at the edges, when dispatching an intent name, decoding a webhook envelope
//! or loading a knowledge base from disk.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no handler registered for intent '{0}'")]
    UnknownIntent(String),

    #[error("webhook request does not name an intent")]
    MissingIntent,

    #[error("malformed webhook request: {0}")]
    Request(#[source] serde_json::Error),

    #[error("failed to read knowledge base '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid knowledge base: {0}")]
    Knowledge(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
