//! Editor error types.

use thiserror::Error;

/// Result type for editor operations.
pub type EditorResult<T> = Result<T, EditorError>;

/// Errors that can occur at the editor's boundaries.
///
/// Expected interaction conditions (duplicate edges, self-loops, pointer-ups
/// over empty canvas, unknown operation ids) are deliberately *not* errors:
/// the graph model treats them as silent no-ops and the validator reports
/// structural problems as diagnostics instead.
#[derive(Debug, Error)]
pub enum EditorError {
    /// A raw definition could not be parsed. The previous graph, if any,
    /// is retained when this is returned.
    #[error("malformed pipeline definition: {0}")]
    MalformedDefinition(#[from] serde_json::Error),
}
