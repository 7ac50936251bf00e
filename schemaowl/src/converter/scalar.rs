//! Scalar type conversion: booleans, numbers, integers, and strings
//!
//! Each scalar type maps to a base XSD datatype. Validation keywords become
//! facet restrictions on a minted datatype subtype. When a caller does not
//! insist on a fresh name and no validation keyword is present, the base
//! datatype IRI is returned directly and nothing is added to the graph.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use schemaowl_core::prelude::*;
use schemaowl_core::vocab::{owl, rdf, rdfs, xsd};

use super::{Conversion, Identification};

/// How a validation keyword's value becomes a facet literal
#[derive(Clone, Copy, Debug)]
pub(super) enum RuleKind {
    /// Render the value as an `xsd:double` literal
    Double,
    /// Render the value as an `xsd:string` literal
    String,
}

/// One validation keyword and the facet it restricts
#[derive(Clone, Copy, Debug)]
pub(super) struct KeywordRule {
    pub(super) keyword: &'static str,
    pub(super) facet: &'static str,
    pub(super) kind: RuleKind,
}

const NUMERIC_RULES: &[KeywordRule] = &[
    KeywordRule {
        keyword: "maximum",
        facet: xsd::MAX_INCLUSIVE,
        kind: RuleKind::Double,
    },
    KeywordRule {
        keyword: "exclusiveMaximum",
        facet: xsd::MAX_EXCLUSIVE,
        kind: RuleKind::Double,
    },
    KeywordRule {
        keyword: "minimum",
        facet: xsd::MIN_INCLUSIVE,
        kind: RuleKind::Double,
    },
    KeywordRule {
        keyword: "exclusiveMinimum",
        facet: xsd::MIN_EXCLUSIVE,
        kind: RuleKind::Double,
    },
];

const STRING_RULES: &[KeywordRule] = &[
    KeywordRule {
        keyword: "maxLength",
        facet: xsd::MAX_LENGTH,
        kind: RuleKind::Double,
    },
    KeywordRule {
        keyword: "minLength",
        facet: xsd::MIN_LENGTH,
        kind: RuleKind::Double,
    },
    KeywordRule {
        keyword: "pattern",
        facet: xsd::PATTERN,
        kind: RuleKind::String,
    },
];

const EMAIL_PATTERN: &str =
    r"[\w!#$%&'*+/=?`{|}~^-]+(?:\.[\w!#$%&'*+/=?`{|}~^-]+)*@(?:[A-Z0-9-]+\.)+[A-Z]{2,6}";
const HOSTNAME_PATTERN: &str = r"([a-z0-9]+(-[a-z0-9]+)*\.)+[a-z]{2,}";
const IDN_HOSTNAME_PATTERN: &str = r"\b((xn--)?[a-z0-9]+(-[a-z0-9]+)*\.)+[a-z]{2,}\b";
const IPV4_PATTERN: &str =
    r"(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)";
const IPV6_PATTERN: &str = r"(?:[A-F0-9]{1,4}:){7}[A-F0-9]{1,4}";
const UUID_PATTERN: &str = r"[a-f0-9]{8}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{12}";

/// How to convert one scalar type, possibly specialized by a string format
#[derive(Clone, Copy, Debug)]
pub(super) struct ScalarSpec {
    /// The base XSD datatype IRI
    pub(super) base: &'static str,
    /// An inherent lexical pattern contributed by a string format
    pub(super) format_pattern: Option<&'static str>,
    /// The validation keywords this scalar type honors
    pub(super) rules: &'static [KeywordRule],
}

impl ScalarSpec {
    const fn plain(base: &'static str, rules: &'static [KeywordRule]) -> Self {
        Self {
            base,
            format_pattern: None,
            rules,
        }
    }

    const fn patterned(pattern: &'static str) -> Self {
        Self {
            base: xsd::STRING,
            format_pattern: Some(pattern),
            rules: STRING_RULES,
        }
    }
}

/// Recognized string formats
///
/// Unlisted formats are unsupported, which makes the string converter
/// inapplicable to subschemas that declare them.
static STRING_FORMATS: Lazy<HashMap<&'static str, ScalarSpec>> = Lazy::new(|| {
    HashMap::from([
        ("date-time", ScalarSpec::plain(xsd::DATE_TIME, STRING_RULES)),
        ("date", ScalarSpec::plain(xsd::DATE, STRING_RULES)),
        ("time", ScalarSpec::plain(xsd::TIME, STRING_RULES)),
        ("duration", ScalarSpec::plain(xsd::DURATION, STRING_RULES)),
        ("email", ScalarSpec::patterned(EMAIL_PATTERN)),
        ("idn-email", ScalarSpec::patterned(EMAIL_PATTERN)),
        ("hostname", ScalarSpec::patterned(HOSTNAME_PATTERN)),
        ("idn-hostname", ScalarSpec::patterned(IDN_HOSTNAME_PATTERN)),
        ("ipv4", ScalarSpec::patterned(IPV4_PATTERN)),
        ("ipv6", ScalarSpec::patterned(IPV6_PATTERN)),
        ("uuid", ScalarSpec::patterned(UUID_PATTERN)),
        ("uri", ScalarSpec::plain(xsd::ANY_URI, STRING_RULES)),
        ("uri-reference", ScalarSpec::plain(xsd::ANY_URI, STRING_RULES)),
        ("iri", ScalarSpec::plain(xsd::ANY_URI, STRING_RULES)),
        ("iri-reference", ScalarSpec::plain(xsd::ANY_URI, STRING_RULES)),
        ("uri-template", ScalarSpec::plain(xsd::STRING, STRING_RULES)),
        ("json-pointer", ScalarSpec::plain(xsd::STRING, STRING_RULES)),
        (
            "relative-json-pointer",
            ScalarSpec::plain(xsd::STRING, STRING_RULES),
        ),
        ("regex", ScalarSpec::plain(xsd::STRING, STRING_RULES)),
    ])
});

/// The conversion spec for a string subschema, honoring its format
pub(super) fn string_spec(format: Option<&str>) -> Option<ScalarSpec> {
    match format {
        None => Some(ScalarSpec::plain(xsd::STRING, STRING_RULES)),
        Some(format) => STRING_FORMATS.get(format).copied(),
    }
}

/// The conversion spec for any scalar type name
pub(super) fn scalar_spec(ty: &str, format: Option<&str>) -> Option<ScalarSpec> {
    match ty {
        "boolean" => Some(ScalarSpec::plain(xsd::BOOLEAN, &[])),
        "number" => Some(ScalarSpec::plain(xsd::DOUBLE, NUMERIC_RULES)),
        "integer" => Some(ScalarSpec::plain(xsd::INT, NUMERIC_RULES)),
        "string" => string_spec(format),
        _ => None,
    }
}

impl Conversion<'_> {
    /// Convert a scalar subschema
    ///
    /// Mints a datatype subtype when the caller demands a fresh name or a
    /// validation keyword restricts the base type; otherwise the base
    /// datatype IRI stands in for the subschema without any new statements.
    pub(super) fn convert_scalar(
        &mut self,
        path: &[String],
        node: Subschema<'_>,
        spec: &ScalarSpec,
        identification: Identification,
    ) -> Term {
        let restricted = spec.rules.iter().any(|rule| node.has(rule.keyword));
        if identification != Identification::NewName && !restricted {
            return Term::iri(spec.base);
        }
        let identifier = self.identifier(path, identification);
        self.graph.add_triple(
            identifier.clone(),
            Term::iri(rdf::TYPE),
            Term::iri(rdfs::DATATYPE),
        );
        self.graph.add_triple(
            identifier.clone(),
            Term::iri(owl::ON_DATATYPE),
            Term::iri(spec.base),
        );
        let mut facets = Vec::new();
        if let Some(pattern) = spec.format_pattern {
            facets.push(self.facet(xsd::PATTERN, Literal::string(pattern)));
        }
        for rule in spec.rules {
            let Some(value) = node.get(rule.keyword) else {
                continue;
            };
            let literal = match rule.kind {
                RuleKind::Double => value.as_f64().map(Literal::double),
                RuleKind::String => value.as_str().map(Literal::string),
            };
            if let Some(literal) = literal {
                facets.push(self.facet(rule.facet, literal));
            }
        }
        if !facets.is_empty() {
            let list = self.graph.collection(facets);
            self.graph.add_triple(
                identifier.clone(),
                Term::iri(owl::WITH_RESTRICTIONS),
                list,
            );
        }
        identifier
    }

    /// One facet restriction as an anonymous node
    fn facet(&mut self, facet: &str, literal: Literal) -> Term {
        let node = self.graph.fresh_blank();
        self.graph
            .add_triple(node.clone(), Term::iri(facet), Term::Literal(literal));
        node
    }
}

#[cfg(test)]
mod tests {
    use super::super::convert;
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn only_object_of<'g>(graph: &'g Graph, subject: &Term, predicate: &str) -> &'g Term {
        let predicate = Term::iri(predicate);
        graph
            .iter()
            .find(|t| &t.subject == subject && t.predicate == predicate)
            .map(|t| &t.object)
            .expect("statement present")
    }

    #[test]
    fn test_unrestricted_scalar_mints_subtype_under_new_name() {
        let graph = convert(&json!({"type": "boolean"}), "x").expect("schema");
        let subject = Term::iri("x");
        assert!(graph.contains(
            &subject,
            &Term::iri(rdf::TYPE),
            &Term::iri(rdfs::DATATYPE),
        ));
        assert!(graph.contains(
            &subject,
            &Term::iri(owl::ON_DATATYPE),
            &Term::iri(xsd::BOOLEAN),
        ));
        assert_eq!(graph.len(), 2);
    }

    #[test]
    fn test_number_facets_in_keyword_order() {
        let schema = json!({
            "type": "number",
            "exclusiveMaximum": 42,
            "exclusiveMinimum": -42
        });
        let graph = convert(&schema, "x").expect("schema");
        let subject = Term::iri("x");
        assert!(graph.contains(
            &subject,
            &Term::iri(owl::ON_DATATYPE),
            &Term::iri(xsd::DOUBLE),
        ));
        let head = only_object_of(&graph, &subject, owl::WITH_RESTRICTIONS).clone();
        let facets = graph.collection_items(&head).expect("facet collection");
        assert_eq!(facets.len(), 2);
        assert_eq!(
            only_object_of(&graph, &facets[0], xsd::MAX_EXCLUSIVE),
            &Term::Literal(Literal::double(42.0))
        );
        assert_eq!(
            only_object_of(&graph, &facets[1], xsd::MIN_EXCLUSIVE),
            &Term::Literal(Literal::double(-42.0))
        );
    }

    #[test]
    fn test_string_facets_as_double_and_string_literals() {
        let schema = json!({
            "type": "string",
            "maxLength": 265,
            "minLength": 32,
            "pattern": "a+"
        });
        let graph = convert(&schema, "x").expect("schema");
        let subject = Term::iri("x");
        let head = only_object_of(&graph, &subject, owl::WITH_RESTRICTIONS).clone();
        let facets = graph.collection_items(&head).expect("facet collection");
        assert_eq!(facets.len(), 3);
        assert_eq!(
            only_object_of(&graph, &facets[0], xsd::MAX_LENGTH),
            &Term::Literal(Literal::double(265.0))
        );
        assert_eq!(
            only_object_of(&graph, &facets[1], xsd::MIN_LENGTH),
            &Term::Literal(Literal::double(32.0))
        );
        assert_eq!(
            only_object_of(&graph, &facets[2], xsd::PATTERN),
            &Term::Literal(Literal::string("a+"))
        );
    }

    #[test]
    fn test_email_format_contributes_its_pattern_first() {
        let schema = json!({"type": "string", "format": "email", "maxLength": 64});
        let graph = convert(&schema, "x").expect("schema");
        let subject = Term::iri("x");
        assert!(graph.contains(
            &subject,
            &Term::iri(owl::ON_DATATYPE),
            &Term::iri(xsd::STRING),
        ));
        let head = only_object_of(&graph, &subject, owl::WITH_RESTRICTIONS).clone();
        let facets = graph.collection_items(&head).expect("facet collection");
        assert_eq!(facets.len(), 2);
        assert_eq!(
            only_object_of(&graph, &facets[0], xsd::PATTERN),
            &Term::Literal(Literal::string(EMAIL_PATTERN))
        );
        assert_eq!(
            only_object_of(&graph, &facets[1], xsd::MAX_LENGTH),
            &Term::Literal(Literal::double(64.0))
        );
    }

    #[test]
    fn test_temporal_formats_change_the_base_datatype() {
        for (format, base) in [
            ("date-time", xsd::DATE_TIME),
            ("date", xsd::DATE),
            ("time", xsd::TIME),
            ("duration", xsd::DURATION),
            ("uri", xsd::ANY_URI),
        ] {
            let schema = json!({"type": "string", "format": format});
            let graph = convert(&schema, "x").expect("schema");
            assert!(
                graph.contains(&Term::iri("x"), &Term::iri(owl::ON_DATATYPE), &Term::iri(base)),
                "format {format}"
            );
        }
    }

    #[test]
    fn test_unknown_format_disables_the_string_converter() {
        // No converter applies, so the subschema is unconstrained.
        let schema = json!({"type": "string", "format": "secret"});
        let graph = convert(&schema, "x").expect("schema");
        assert!(graph.is_empty());
    }

    #[test]
    fn test_unknown_format_in_a_type_union_is_unsupported() {
        let schema = json!({"type": ["string", "number"], "format": "secret"});
        let err = convert(&schema, "x").expect_err("unsupported format");
        assert!(matches!(err, SchemaOwlError::UnsupportedConstruct { .. }));
    }

    #[test]
    fn test_opaque_formats_fall_back_to_plain_strings() {
        for format in ["uri-template", "json-pointer", "relative-json-pointer", "regex"] {
            let schema = json!({"type": "string", "format": format});
            let graph = convert(&schema, "x").expect("schema");
            assert!(
                graph.contains(
                    &Term::iri("x"),
                    &Term::iri(owl::ON_DATATYPE),
                    &Term::iri(xsd::STRING),
                ),
                "format {format}"
            );
        }
    }
}
