//! # Schemaowl
//!
//! Convert JSON Schema documents into equivalent OWL ontologies.
//!
//! The entry point is [`convert`]: it checks the input against the
//! meta-schema, then runs the recursive subschema conversion engine and
//! returns the populated ontology graph. [`serializer`] renders the graph
//! as Turtle or N-Triples.
//!
//! ```
//! use serde_json::json;
//!
//! let schema = json!({"type": "boolean"});
//! let graph = schemaowl::convert(&schema, "flag").expect("supported schema");
//! assert!(!graph.is_empty());
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// The recursive subschema conversion engine
pub mod converter;

/// Graph serialization to concrete RDF syntaxes
pub mod serializer;

/// Meta-schema precondition check
pub mod validator;

pub use converter::{convert, Identification};
pub use schemaowl_core::{Graph, Literal, Result, SchemaOwlError, Subschema, Term, Triple};
pub use serializer::RdfFormat;
