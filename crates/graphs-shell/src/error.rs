//! Shell errors

use graphs_core::GraphError;

#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("failed to encode reply: {0}")]
    Encode(#[from] serde_json::Error),
}
