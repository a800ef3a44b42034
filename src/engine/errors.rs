//! Error types for graph loading and lookup.

use thiserror::Error;

/// Errors that can occur while building a graph or resolving a vertex name.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in the future without breaking changes.
///
/// Structural outcomes of the algorithms themselves (a cyclic graph handed to
/// the topological sorter, a disconnected graph handed to the spanning tree
/// builder, an unreachable vertex in a path table) are *not* errors; they are
/// expected results and are encoded in the algorithms' return types.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum GraphError {
    /// Malformed textual graph description.
    #[error("parse error: {0}")]
    Parse(String),

    /// A vertex name is empty or contains whitespace. The textual
    /// description format is whitespace-tokenized, so such a name could
    /// never be rendered and reloaded intact.
    #[error("invalid vertex name: {name:?}")]
    InvalidVertexName {
        /// The rejected name.
        name: String,
    },

    /// The vertex table contains the same name twice.
    #[error("duplicate vertex name: {name}")]
    DuplicateVertex {
        /// The name that appeared more than once.
        name: String,
    },

    /// A name (an edge endpoint, or a shortest-path source) does not resolve
    /// to any vertex in the table.
    #[error("unknown vertex name: {name}")]
    UnknownVertex {
        /// The name that failed to resolve.
        name: String,
    },
}
