//! Error types for treedex-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while building a tree from bracketed notation.
///
/// A malformed tree is fatal for the unit it came from, never for the
/// whole batch.
#[derive(Error, Debug)]
pub enum TreeError {
    /// A closing bracket appeared with no open node.
    #[error("unbalanced bracket: unexpected ')' at byte {position}")]
    UnexpectedClose {
        /// Byte offset of the stray bracket.
        position: usize,
    },

    /// The input ended while nodes were still open.
    #[error("unbalanced bracket: {open} node(s) left open at end of input")]
    UnclosedNode {
        /// How many nodes were never closed.
        open: usize,
    },

    /// A node closed with neither children nor a terminal token.
    #[error("empty node '{label}' at byte {position}")]
    EmptyNode {
        /// Label of the empty node.
        label: String,
        /// Byte offset where the node closed.
        position: usize,
    },

    /// A terminal token appeared outside any node.
    #[error("stray token {token:?} outside any tree at byte {position}")]
    StrayToken {
        /// The offending token text.
        token: String,
        /// Byte offset of the token.
        position: usize,
    },

    /// A node mixed terminal tokens with child nodes.
    #[error("node '{label}' mixes tokens and children at byte {position}")]
    MixedContent {
        /// Label of the offending node.
        label: String,
        /// Byte offset of the second content item.
        position: usize,
    },

    /// The input contained no trees at all.
    #[error("no trees in input")]
    Empty,
}

/// Result type alias using [`TreeError`].
pub type TreeResult<T> = Result<T, TreeError>;

/// Errors surfaced at the parser-service boundary.
///
/// The engine never recovers these internally; a unit without a tree
/// simply produces no record.
#[derive(Error, Debug)]
pub enum ParserError {
    /// The external parser could not be launched or did not finish cleanly.
    #[error("parser unavailable: {0}")]
    Unavailable(String),

    /// The parser ran but its output was not readable bracketed notation.
    #[error(transparent)]
    Malformed(#[from] TreeError),
}

/// Result type alias using [`ParserError`].
pub type ParserResult<T> = Result<T, ParserError>;
