//! Borrow view over JSON Schema values
//!
//! A subschema is either a boolean literal (`true` accepts anything, `false`
//! accepts nothing) or a keyword map. The view is read-only; the converter
//! never mutates its input.

use serde_json::{Map, Value};

/// JSON Schema keyword names recognized by the converter
pub mod keywords {
    /// Canonical URI of the root schema
    pub const ID: &str = "$id";
    /// Local reference
    pub const REF: &str = "$ref";
    /// Type assertion (string or array of strings)
    pub const TYPE: &str = "type";
    /// String format
    pub const FORMAT: &str = "format";
    /// Enumerated value set
    pub const ENUM: &str = "enum";
    /// Constant value
    pub const CONST: &str = "const";
    /// Conjunction of subschemas
    pub const ALL_OF: &str = "allOf";
    /// Disjunction of subschemas
    pub const ANY_OF: &str = "anyOf";
    /// Exclusive disjunction of subschemas
    pub const ONE_OF: &str = "oneOf";
    /// Negation of a subschema
    pub const NOT: &str = "not";
    /// Named definitions available document-wide
    pub const DEFINITIONS: &str = "definitions";
    /// Object property subschemas
    pub const PROPERTIES: &str = "properties";
    /// Required property names
    pub const REQUIRED: &str = "required";
    /// Title annotation
    pub const TITLE: &str = "title";
}

/// The set of primitive type names a `type` keyword may carry
pub const PRIMITIVE_TYPES: &[&str] = &[
    "null", "boolean", "object", "array", "number", "string", "integer",
];

/// A read-only view of one node of the input schema tree
#[derive(Clone, Copy, Debug)]
pub enum Subschema<'a> {
    /// A boolean literal schema
    Boolean(bool),
    /// A keyword map schema
    Keywords(&'a Map<String, Value>),
}

impl<'a> Subschema<'a> {
    /// View a JSON value as a subschema
    ///
    /// Returns `None` for values that are neither booleans nor objects; the
    /// meta-schema check rejects those before conversion starts.
    #[must_use]
    pub fn from_value(value: &'a Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(Subschema::Boolean(*b)),
            Value::Object(map) => Some(Subschema::Keywords(map)),
            _ => None,
        }
    }

    /// The keyword map, if this node is one
    #[must_use]
    pub fn as_keywords(&self) -> Option<&'a Map<String, Value>> {
        match self {
            Subschema::Keywords(map) => Some(map),
            Subschema::Boolean(_) => None,
        }
    }

    /// Look up a keyword value
    #[must_use]
    pub fn get(&self, keyword: &str) -> Option<&'a Value> {
        self.as_keywords().and_then(|map| map.get(keyword))
    }

    /// Whether the keyword is present
    #[must_use]
    pub fn has(&self, keyword: &str) -> bool {
        self.get(keyword).is_some()
    }

    /// The declared type names, normalized to a list
    ///
    /// A bare string becomes a singleton list. `None` when the `type`
    /// keyword is absent or malformed.
    #[must_use]
    pub fn type_list(&self) -> Option<Vec<&'a str>> {
        match self.get(keywords::TYPE)? {
            Value::String(s) => Some(vec![s.as_str()]),
            Value::Array(items) => items.iter().map(Value::as_str).collect(),
            _ => None,
        }
    }

    /// The declared type names with `"null"` filtered out
    #[must_use]
    pub fn non_null_types(&self) -> Option<Vec<&'a str>> {
        Some(
            self.type_list()?
                .into_iter()
                .filter(|ty| *ty != "null")
                .collect(),
        )
    }

    /// Whether the type list explicitly includes `"null"`
    ///
    /// Only an explicit list form counts; a bare `"null"` string type is not
    /// treated as nullable by the cardinality rules.
    #[must_use]
    pub fn is_nullable(&self) -> bool {
        matches!(
            self.get(keywords::TYPE),
            Some(Value::Array(items)) if items.iter().any(|v| v.as_str() == Some("null"))
        )
    }

    /// The `format` keyword value
    #[must_use]
    pub fn format(&self) -> Option<&'a str> {
        self.get(keywords::FORMAT).and_then(Value::as_str)
    }

    /// The `$ref` keyword value
    #[must_use]
    pub fn reference(&self) -> Option<&'a str> {
        self.get(keywords::REF).and_then(Value::as_str)
    }

    /// The `enum` keyword values
    #[must_use]
    pub fn enum_values(&self) -> Option<&'a Vec<Value>> {
        self.get(keywords::ENUM).and_then(Value::as_array)
    }

    /// The `properties` keyword map
    #[must_use]
    pub fn properties(&self) -> Option<&'a Map<String, Value>> {
        self.get(keywords::PROPERTIES).and_then(Value::as_object)
    }

    /// The `required` property names
    #[must_use]
    pub fn required(&self) -> Vec<&'a str> {
        self.get(keywords::REQUIRED)
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    /// The `definitions` keyword map
    #[must_use]
    pub fn definitions(&self) -> Option<&'a Map<String, Value>> {
        self.get(keywords::DEFINITIONS).and_then(Value::as_object)
    }
}
