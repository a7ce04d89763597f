//! Error taxonomy for the visualization pipeline.
//!
//! Every fatal class propagates to the CLI via `?`; only browser launch
//! failure is recovered locally (logged, run still succeeds).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VizError {
    /// Input file is missing or unreadable.
    #[error("cannot read input '{}': {source}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Input exists but is not syntactically valid symbol data.
    #[error("input is not valid symbol data: {source}")]
    DataFormat {
        #[source]
        source: serde_json::Error,
    },

    /// A configured base color is not of the form "#rrggbb".
    #[error("malformed base color '{value}' (expected \"#rrggbb\")")]
    ColorFormat { value: String },

    /// The assembled visualization could not be serialized for embedding.
    #[error("could not serialize visualization: {source}")]
    Render {
        #[source]
        source: serde_json::Error,
    },

    /// The output artifact could not be written.
    #[error("cannot write artifact '{}': {source}", path.display())]
    ArtifactWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The default browser could not be launched. Never fatal.
    #[error("couldn't open browser: {source}")]
    BrowserLaunch {
        #[source]
        source: io::Error,
    },
}
