//! RDF term types: IRI, blank node, and literal
//!
//! Terms are the building blocks of statements. A term can be:
//! - An IRI (always expanded, never prefixed)
//! - A blank node (with an identifier stable within one graph)
//! - A literal (lexical form + datatype IRI)

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::vocab;

/// Blank node identifier
///
/// Blank node IDs are stable within a graph but have no global meaning.
/// The label does not include the `_:` prefix.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlankId(Arc<str>);

impl BlankId {
    /// Create a blank node ID from a label (without the `_:` prefix)
    pub fn new(label: impl AsRef<str>) -> Self {
        Self(Arc::from(label.as_ref()))
    }

    /// Get the label (without the `_:` prefix)
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlankId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_:{}", self.0)
    }
}

/// An RDF literal: lexical form plus datatype IRI
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal {
    /// The lexical representation of the value
    pub lexical: String,
    /// The datatype IRI
    pub datatype: String,
}

impl Literal {
    /// Create a string literal (`xsd:string`)
    pub fn string(value: impl Into<String>) -> Self {
        Self {
            lexical: value.into(),
            datatype: vocab::xsd::STRING.to_string(),
        }
    }

    /// Create a boolean literal
    #[must_use]
    pub fn boolean(value: bool) -> Self {
        Self {
            lexical: value.to_string(),
            datatype: vocab::xsd::BOOLEAN.to_string(),
        }
    }

    /// Create an integer literal (`xsd:integer`)
    #[must_use]
    pub fn integer(value: i64) -> Self {
        Self {
            lexical: value.to_string(),
            datatype: vocab::xsd::INTEGER.to_string(),
        }
    }

    /// Create a double literal
    #[must_use]
    pub fn double(value: f64) -> Self {
        let lexical = if value.is_nan() {
            "NaN".to_string()
        } else if value.is_infinite() {
            if value.is_sign_positive() {
                "INF".to_string()
            } else {
                "-INF".to_string()
            }
        } else {
            value.to_string()
        };
        Self {
            lexical,
            datatype: vocab::xsd::DOUBLE.to_string(),
        }
    }

    /// Create a literal with an explicit datatype IRI
    pub fn typed(lexical: impl Into<String>, datatype: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: datatype.into(),
        }
    }

    /// Encode a JSON value as a literal
    ///
    /// Scalars map to their XSD counterparts; arrays, objects, and `null` are
    /// carried as canonical JSON text with the `rdf:JSON` datatype.
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Bool(b) => Self::boolean(*b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::integer(i)
                } else {
                    Self::double(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Value::String(s) => Self::string(s),
            Value::Null | Value::Array(_) | Value::Object(_) => Self {
                lexical: value.to_string(),
                datatype: vocab::rdf::JSON.to_string(),
            },
        }
    }

    /// Whether this literal carries the plain `xsd:string` datatype
    #[must_use]
    pub fn is_plain_string(&self) -> bool {
        self.datatype == vocab::xsd::STRING
    }
}

/// An RDF term: the subject, predicate, or object of a statement
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Term {
    /// An expanded IRI
    Iri(String),
    /// A blank node
    Blank(BlankId),
    /// A literal value
    Literal(Literal),
}

impl Term {
    /// Create an IRI term
    pub fn iri(iri: impl Into<String>) -> Self {
        Term::Iri(iri.into())
    }

    /// Create a blank node term from a label
    pub fn blank(label: impl AsRef<str>) -> Self {
        Term::Blank(BlankId::new(label))
    }

    /// Create a string literal term
    pub fn string(value: impl Into<String>) -> Self {
        Term::Literal(Literal::string(value))
    }

    /// Get the IRI if this term is one
    #[must_use]
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Term::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// Whether this term is a blank node
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, Term::Blank(_))
    }

    /// Get the literal if this term is one
    #[must_use]
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(lit) => Some(lit),
            _ => None,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Iri(iri) => write!(f, "<{iri}>"),
            Term::Blank(id) => write!(f, "{id}"),
            Term::Literal(lit) => write!(f, "\"{}\"^^<{}>", lit.lexical, lit.datatype),
        }
    }
}
