use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the model store (component B).
///
/// A miss at detection time is never an error (see spec §7c); this type only
/// covers the store's own I/O and decode boundary.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model file '{}' could not be found", .0.display())]
    NotFound(PathBuf),

    #[error("could not read model file '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not brotli-decompress model file '{}'", .0.display())]
    Decompress(PathBuf),

    #[error("could not parse model file '{}' as JSON", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed fraction key '{0}' in model file (expected 'num/den')")]
    MalformedFraction(String),

    /// Matches `lingua-rs`'s exact wording (see `test_isocode.py`), since
    /// callers may match on this message.
    #[error("Matching enum member not found")]
    UnknownIsoCode,
}
