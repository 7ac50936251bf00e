//! The subschema dispatch engine
//!
//! Conversion walks the schema tree once. For every node the engine decides
//! which converters apply, delegates to them, and combines their results:
//! a single applicable converter keeps the caller's identification mode,
//! while several applicable converters are each converted anonymously and
//! joined under one intersection node that carries the caller-visible name.
//!
//! The identifier policy lives here too: a named identifier is the pure
//! function `namespace + path.join("_")`, an anonymous identifier is a fresh
//! blank node from the graph.

mod composite;
mod object;
mod scalar;

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use serde_json::Value;
use tracing::{debug, warn};

use schemaowl_core::prelude::*;
use schemaowl_core::schema::keywords;

use crate::validator;

/// How the result of one conversion call shall be identifiable
///
/// `NewName` always mints a fresh named identifier from the path. `SomeName`
/// reuses an existing named identifier where the node resolves to one and
/// mints a fresh name otherwise. `Anonymous` avoids naming entirely; a blank
/// node is used only where a subject is structurally required.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Identification {
    /// Mint a fresh named identifier
    NewName,
    /// Reuse some named identifier, minting if necessary
    SomeName,
    /// Prefer no identifier at all
    Anonymous,
}

/// Converters a keyword map may dispatch to, in tie-breaking order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ConverterKind {
    Reference,
    BooleanLogic,
    Type,
    Enumeration,
    Constant,
}

const DISPATCH_ORDER: [ConverterKind; 5] = [
    ConverterKind::Reference,
    ConverterKind::BooleanLogic,
    ConverterKind::Type,
    ConverterKind::Enumeration,
    ConverterKind::Constant,
];

impl ConverterKind {
    fn applies(self, node: &Subschema<'_>) -> bool {
        match self {
            ConverterKind::Reference => node.has(keywords::REF),
            ConverterKind::BooleanLogic => {
                node.has(keywords::ALL_OF)
                    || node.has(keywords::ANY_OF)
                    || node.has(keywords::ONE_OF)
                    || node.has(keywords::NOT)
            }
            ConverterKind::Type => match node.type_list() {
                Some(types) => types
                    .iter()
                    .any(|ty| type_member_applies(ty, node.format())),
                None => false,
            },
            ConverterKind::Enumeration => node.has(keywords::ENUM),
            ConverterKind::Constant => node.has(keywords::CONST),
        }
    }
}

/// Whether one member of a `type` list has a converter
///
/// `"null"` participates in dispatch (it is stripped later and relaxes
/// cardinalities); a string type with an unrecognized format has none.
fn type_member_applies(ty: &str, format: Option<&str>) -> bool {
    match ty {
        "string" => scalar::string_spec(format).is_some(),
        "null" | "boolean" | "integer" | "number" | "object" | "array" => true,
        _ => false,
    }
}

/// Convert a JSON Schema document into an ontology graph
///
/// `name` seeds the naming path for the schema's own top-level identifier
/// and all identifiers derived from it. The input is checked against the
/// meta-schema first; conversion never runs on a non-conforming document.
///
/// # Errors
///
/// Returns [`SchemaOwlError::MetaValidation`] when the document fails the
/// meta-schema check and [`SchemaOwlError::UnsupportedConstruct`] when the
/// document uses a construct outside the supported set (a non-local
/// reference target, an unrecognizable `definitions` entry, an unrecognized
/// string format in a type union).
pub fn convert(schema: &Value, name: &str) -> Result<Graph> {
    validator::check_schema(schema)?;
    let mut conversion = Conversion::new(name);
    if let Some(map) = schema.as_object() {
        let node = Subschema::Keywords(map);
        conversion.namespace = node
            .get(keywords::ID)
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string();
        conversion
            .graph
            .bind_prefix("", conversion.namespace.clone(), false);
        conversion
            .graph
            .bind_prefix("owl", vocab::owl::NAMESPACE, false);
        conversion
            .graph
            .bind_prefix("rdf", vocab::rdf::NAMESPACE, false);
        conversion
            .graph
            .bind_prefix("rdfs", vocab::rdfs::NAMESPACE, false);
        conversion
            .graph
            .bind_prefix("xsd", vocab::xsd::NAMESPACE, false);
        let path = vec![name.to_string()];
        conversion.convert_subschema(&path, node, Identification::NewName)?;
    }
    Ok(conversion.graph)
}

/// The build context threaded through the recursion
///
/// Holds the graph under construction, the namespace established at root
/// conversion, the root name used by reference resolution, and the ledger of
/// minted names used for collision reporting.
pub(crate) struct Conversion<'a> {
    pub(crate) graph: Graph,
    pub(crate) namespace: String,
    pub(crate) root_name: &'a str,
    minted: HashMap<String, Vec<String>>,
}

impl<'a> Conversion<'a> {
    pub(crate) fn new(root_name: &'a str) -> Self {
        Self {
            graph: Graph::new(),
            namespace: String::new(),
            root_name,
            minted: HashMap::new(),
        }
    }

    /// Allocate an identifier for a schema location
    ///
    /// Named identifiers are a pure function of the path, so converting the
    /// same path twice yields the same name. Joining path segments with `_`
    /// can collide with keys that themselves contain underscores; such
    /// collisions are reported but not fatal.
    pub(crate) fn identifier(&mut self, path: &[String], identification: Identification) -> Term {
        match identification {
            Identification::Anonymous => self.graph.fresh_blank(),
            Identification::NewName | Identification::SomeName => {
                let name = format!("{}{}", self.namespace, path.join("_"));
                match self.minted.entry(name.clone()) {
                    Entry::Occupied(entry) if entry.get() != path => {
                        warn!(
                            name = %name,
                            first_path = %entry.get().join("/"),
                            path = %path.join("/"),
                            "name collision between different schema locations"
                        );
                    }
                    Entry::Occupied(_) => {}
                    Entry::Vacant(entry) => {
                        entry.insert(path.to_vec());
                    }
                }
                Term::iri(name)
            }
        }
    }

    /// Dispatch one node of the schema tree
    pub(crate) fn convert_subschema(
        &mut self,
        path: &[String],
        node: Subschema<'_>,
        identification: Identification,
    ) -> Result<Term> {
        debug!(path = %path.join("/"), "converting subschema");
        match node {
            Subschema::Boolean(accepts) => Ok(self.convert_boolean(path, accepts, identification)),
            Subschema::Keywords(_) => self.convert_keywords(path, node, identification),
        }
    }

    /// Boolean subschemas: `true` accepts anything, `false` accepts nothing
    fn convert_boolean(
        &mut self,
        path: &[String],
        accepts: bool,
        identification: Identification,
    ) -> Term {
        if !accepts && identification != Identification::NewName {
            return Term::iri(vocab::owl::NOTHING);
        }
        let identifier = self.identifier(path, identification);
        if !accepts {
            self.graph.add_triple(
                identifier.clone(),
                Term::iri(vocab::rdfs::SUB_CLASS_OF),
                Term::iri(vocab::owl::NOTHING),
            );
        }
        identifier
    }

    /// Keyword-map subschemas: definitions first, then converter dispatch
    fn convert_keywords(
        &mut self,
        path: &[String],
        node: Subschema<'_>,
        identification: Identification,
    ) -> Result<Term> {
        if let Some(definitions) = node.definitions() {
            self.convert_definitions(path, definitions)?;
        }
        let applicable: Vec<ConverterKind> = DISPATCH_ORDER
            .into_iter()
            .filter(|kind| kind.applies(&node))
            .collect();
        match applicable.as_slice() {
            // Nothing constrains this node; structurally the same as `true`.
            [] => Ok(self.identifier(path, identification)),
            [kind] => self.convert_with(*kind, path, node, identification),
            kinds => {
                let mut delegates = Vec::with_capacity(kinds.len());
                for kind in kinds {
                    delegates.push(self.convert_with(
                        *kind,
                        path,
                        node,
                        Identification::Anonymous,
                    )?);
                }
                let identifier = self.identifier(path, identification);
                self.graph.add_triple(
                    identifier.clone(),
                    Term::iri(vocab::rdf::TYPE),
                    Term::iri(vocab::rdfs::CLASS),
                );
                let arguments = self.graph.collection(delegates);
                self.graph.add_triple(
                    identifier.clone(),
                    Term::iri(vocab::owl::INTERSECTION_OF),
                    arguments,
                );
                Ok(identifier)
            }
        }
    }

    fn convert_with(
        &mut self,
        kind: ConverterKind,
        path: &[String],
        node: Subschema<'_>,
        identification: Identification,
    ) -> Result<Term> {
        match kind {
            ConverterKind::Reference => self.convert_reference(path, node, identification),
            ConverterKind::BooleanLogic => self.convert_boolean_logic(path, node, identification),
            ConverterKind::Type => self.convert_type(path, node, identification),
            ConverterKind::Enumeration => self.convert_enumeration(path, node, identification),
            ConverterKind::Constant => self.convert_constant(path, node, identification),
        }
    }

    /// Convert every named definition, available namespace-wide
    ///
    /// A mapping value that carries a type-indicating keyword is a schema;
    /// a mapping value without one is a nested namespace of further
    /// definitions. A bare `title` entry is skipped. Anything else is not
    /// supported.
    fn convert_definitions(
        &mut self,
        path: &[String],
        definitions: &serde_json::Map<String, Value>,
    ) -> Result<()> {
        debug!(path = %path.join("/"), "converting definitions");
        for (name, value) in definitions {
            let entry_path = extend(path, name);
            match value {
                Value::Object(map) => {
                    if map.contains_key(keywords::TYPE)
                        || map.contains_key(keywords::REF)
                        || map.contains_key(keywords::ONE_OF)
                    {
                        self.convert_subschema(
                            &entry_path,
                            Subschema::Keywords(map),
                            Identification::NewName,
                        )?;
                    } else {
                        self.convert_definitions(&entry_path, map)?;
                    }
                }
                _ if name == keywords::TITLE => {}
                _ => {
                    return Err(SchemaOwlError::unsupported(
                        "definitions entry is neither a subschema nor a namespace",
                        &entry_path,
                    ));
                }
            }
        }
        Ok(())
    }

    /// Type keyword dispatch: one non-null type delegates directly, any
    /// other count becomes a union over anonymously converted members
    fn convert_type(
        &mut self,
        path: &[String],
        node: Subschema<'_>,
        identification: Identification,
    ) -> Result<Term> {
        let types = node.non_null_types().unwrap_or_default();
        if let [ty] = types.as_slice() {
            return self.convert_one_type(path, ty, node, identification);
        }
        let identifier = self.identifier(path, identification);
        self.graph.add_triple(
            identifier.clone(),
            Term::iri(vocab::rdf::TYPE),
            Term::iri(vocab::owl::CLASS),
        );
        let mut members = Vec::with_capacity(types.len());
        for ty in &types {
            members.push(self.convert_one_type(path, ty, node, Identification::Anonymous)?);
        }
        let arguments = self.graph.collection(members);
        self.graph.add_triple(
            identifier.clone(),
            Term::iri(vocab::owl::UNION_OF),
            arguments,
        );
        Ok(identifier)
    }

    fn convert_one_type(
        &mut self,
        path: &[String],
        ty: &str,
        node: Subschema<'_>,
        identification: Identification,
    ) -> Result<Term> {
        match ty {
            "boolean" | "integer" | "number" | "string" => {
                let spec = scalar::scalar_spec(ty, node.format()).ok_or_else(|| {
                    SchemaOwlError::unsupported(
                        format!("string format '{}'", node.format().unwrap_or_default()),
                        path,
                    )
                })?;
                Ok(self.convert_scalar(path, node, &spec, identification))
            }
            "object" => self.convert_object(path, node, identification),
            "array" => Ok(self.convert_array(path, identification)),
            other => Err(SchemaOwlError::unsupported(
                format!("type '{other}'"),
                path,
            )),
        }
    }
}

/// Extend a naming path by one segment
pub(crate) fn extend(path: &[String], segment: &str) -> Vec<String> {
    let mut extended = Vec::with_capacity(path.len() + 1);
    extended.extend_from_slice(path);
    extended.push(segment.to_string());
    extended
}
