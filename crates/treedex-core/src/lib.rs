//! Core library for treedex.
//!
//! Measures the syntactic complexity of constituency-parsed English text:
//! nine structure frequencies per analysis unit, fourteen derived ratios,
//! and a Simple/Complex label for sentence-level units. Input is bracketed
//! parse-tree notation produced by an external constituency parser; this
//! crate never tokenizes or parses raw language itself.
//!
//! # Modules
//!
//! - [`tree`] - Constituency tree model and bracketed-notation parsing
//! - [`pattern`] - Structural queries and their recursive evaluator
//! - [`queries`] - The fixed battery of named queries
//! - [`counts`] - Structure counting and the correction step
//! - [`indices`] - The fourteen complexity ratios
//! - [`classify`] - Simple/Complex sentence labeling
//! - [`batch`] - Per-unit aggregation over documents and folders
//! - [`table`] - 24-field tabular output
//! - [`parser`] - The external-parser collaborator seam
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use treedex_core::batch::analyze_document;
//!
//! let record = analyze_document(
//!     "sample.txt",
//!     "(ROOT (S (NP (PRP I)) (VP (VBP run))))",
//! )
//! .expect("well-formed tree");
//!
//! assert_eq!(record.counts.words, 2);
//! assert_eq!(record.indices.mls, 2.0);
//! ```
#![deny(unsafe_code)]

pub mod batch;
pub mod classify;
pub mod config;
pub mod counts;
pub mod error;
mod head;
pub mod indices;
pub mod parser;
pub mod pattern;
pub mod queries;
pub mod table;
pub mod tree;

pub use batch::{
    AnalysisRecord, BatchOutcome, DocumentAnalysis, LabeledRecord, analyze_batch, analyze_document,
};
pub use classify::UnitLabel;
pub use config::{Config, ConfigLoader, DEFAULT_MAX_INPUT_BYTES, LogLevel};
pub use counts::{StructureCount, count_structures};
pub use error::{ConfigError, ConfigResult, ParserError, TreeError};
pub use indices::ComplexityIndices;
pub use parser::ParserService;
pub use tree::{Tree, parse_forest};
