//! # Schemaowl Core
//!
//! Core types for converting JSON Schema documents into OWL ontologies.
//!
//! This crate provides the building blocks shared by the conversion engine:
//! a borrow view over JSON Schema values, RDF term and graph primitives, the
//! RDF/RDFS/OWL/XSD vocabulary, and error handling.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Error types for conversion operations
pub mod error;

/// Borrow view over JSON Schema values and keyword accessors
pub mod schema;

/// RDF term types: IRI, blank node, and literal
pub mod term;

/// The ontology graph: append-only triples, prefixes, collections
pub mod graph;

/// RDF, RDFS, OWL, and XSD vocabulary IRIs
pub mod vocab;

pub use error::{Result, SchemaOwlError};
pub use graph::{Graph, Triple};
pub use schema::Subschema;
pub use term::{BlankId, Literal, Term};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Result, SchemaOwlError};
    pub use crate::graph::{Graph, Triple};
    pub use crate::schema::{keywords, Subschema};
    pub use crate::term::{BlankId, Literal, Term};
    pub use crate::vocab;
}
