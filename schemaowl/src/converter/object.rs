//! Object and array type conversion
//!
//! An object subschema becomes a class. Each property becomes an object
//! property with the class as its domain and a separately converted range,
//! plus an anonymous cardinality restriction on the class. Arrays are
//! acknowledged with an identifier but carry no further statements.

use serde_json::Value;

use schemaowl_core::prelude::*;
use schemaowl_core::vocab::{owl, rdf, rdfs};

use super::{extend, Conversion, Identification};

impl Conversion<'_> {
    /// Convert an object subschema into a class with property statements
    pub(super) fn convert_object(
        &mut self,
        path: &[String],
        node: Subschema<'_>,
        identification: Identification,
    ) -> Result<Term> {
        let identifier = self.identifier(path, identification);
        self.graph.add_triple(
            identifier.clone(),
            Term::iri(rdf::TYPE),
            Term::iri(owl::CLASS),
        );
        if let Some(properties) = node.properties() {
            let mut property_identifiers = Vec::with_capacity(properties.len());
            for (name, value) in properties {
                let property = self.convert_property(path, name, value, &identifier)?;
                property_identifiers.push((name.as_str(), property));
            }
            self.restrict_property_cardinalities(&identifier, node, &property_identifiers);
        }
        Ok(identifier)
    }

    /// One property: a named object property with domain and range
    fn convert_property(
        &mut self,
        path: &[String],
        name: &str,
        value: &Value,
        domain: &Term,
    ) -> Result<Term> {
        let property_path = extend(path, name);
        let identifier = self.identifier(&property_path, Identification::NewName);
        self.graph.add_triple(
            identifier.clone(),
            Term::iri(rdf::TYPE),
            Term::iri(owl::OBJECT_PROPERTY),
        );
        self.graph.add_triple(
            identifier.clone(),
            Term::iri(rdfs::DOMAIN),
            domain.clone(),
        );
        let range_node = Subschema::from_value(value).ok_or_else(|| {
            SchemaOwlError::unsupported("property subschema is neither a boolean nor a mapping", &property_path)
        })?;
        let range_path = extend(&property_path, "range");
        let range = self.convert_subschema(&range_path, range_node, Identification::SomeName)?;
        self.graph
            .add_triple(identifier.clone(), Term::iri(rdfs::RANGE), range);
        Ok(identifier)
    }

    /// Cardinality restrictions for every property, in declaration order
    ///
    /// A required property gets an exact cardinality of one, any other
    /// property a maximum cardinality of one. A nullable property is
    /// optional even when listed as required.
    fn restrict_property_cardinalities(
        &mut self,
        class: &Term,
        node: Subschema<'_>,
        property_identifiers: &[(&str, Term)],
    ) {
        let required = node.required();
        for (name, property) in property_identifiers {
            let mut min_cardinality = u8::from(required.contains(name));
            if let Some(value) = node.properties().and_then(|map| map.get(*name)) {
                if Subschema::from_value(value).is_some_and(|p| p.is_nullable()) {
                    min_cardinality = 0;
                }
            }
            let restriction = self.graph.fresh_blank();
            self.graph.add_triple(
                restriction.clone(),
                Term::iri(rdf::TYPE),
                Term::iri(owl::RESTRICTION),
            );
            self.graph.add_triple(
                restriction.clone(),
                Term::iri(owl::ON_PROPERTY),
                property.clone(),
            );
            self.graph.add_triple(
                class.clone(),
                Term::iri(rdfs::SUB_CLASS_OF),
                restriction.clone(),
            );
            let cardinality = if min_cardinality == 0 {
                owl::MAX_CARDINALITY
            } else {
                owl::CARDINALITY
            };
            self.graph.add_triple(
                restriction,
                Term::iri(cardinality),
                Term::Literal(Literal::integer(1)),
            );
        }
    }

    /// Arrays are recognized but not modeled beyond their identifier
    pub(super) fn convert_array(&mut self, path: &[String], identification: Identification) -> Term {
        self.identifier(path, identification)
    }
}

#[cfg(test)]
mod tests {
    use super::super::convert;
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_plain_object_is_a_class() {
        let graph = convert(&json!({"type": "object"}), "x").expect("schema");
        assert!(graph.contains(
            &Term::iri("x"),
            &Term::iri(rdf::TYPE),
            &Term::iri(owl::CLASS),
        ));
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn test_property_domain_and_range() {
        let schema = json!({
            "type": "object",
            "properties": {
                "x": {"type": "number"}
            }
        });
        let graph = convert(&schema, "point").expect("schema");
        let property = Term::iri("point_x");
        assert!(graph.contains(
            &property,
            &Term::iri(rdf::TYPE),
            &Term::iri(owl::OBJECT_PROPERTY),
        ));
        assert!(graph.contains(&property, &Term::iri(rdfs::DOMAIN), &Term::iri("point")));
        // An unrestricted scalar range collapses to the base datatype.
        assert!(graph.contains(
            &property,
            &Term::iri(rdfs::RANGE),
            &Term::iri(schemaowl_core::vocab::xsd::DOUBLE),
        ));
    }

    #[test]
    fn test_restricted_range_is_named_after_the_property() {
        let schema = json!({
            "type": "object",
            "properties": {
                "x": {"type": "number", "maximum": 7}
            }
        });
        let graph = convert(&schema, "point").expect("schema");
        assert!(graph.contains(
            &Term::iri("point_x"),
            &Term::iri(rdfs::RANGE),
            &Term::iri("point_x_range"),
        ));
    }

    #[test]
    fn test_optional_property_has_max_cardinality_one() {
        let schema = json!({
            "type": "object",
            "properties": {
                "x": {"type": "number"}
            }
        });
        let graph = convert(&schema, "point").expect("schema");
        let restriction = graph
            .subjects_of(&Term::iri(owl::ON_PROPERTY), &Term::iri("point_x"))
            .next()
            .expect("cardinality restriction")
            .clone();
        assert!(restriction.is_blank());
        assert!(graph.contains(
            &restriction,
            &Term::iri(rdf::TYPE),
            &Term::iri(owl::RESTRICTION),
        ));
        assert!(graph.contains(
            &Term::iri("point"),
            &Term::iri(rdfs::SUB_CLASS_OF),
            &restriction,
        ));
        assert!(graph.contains(
            &restriction,
            &Term::iri(owl::MAX_CARDINALITY),
            &Term::Literal(Literal::integer(1)),
        ));
    }

    #[test]
    fn test_required_property_has_exact_cardinality_one() {
        let schema = json!({
            "type": "object",
            "properties": {
                "x": {"type": "number"}
            },
            "required": ["x"]
        });
        let graph = convert(&schema, "point").expect("schema");
        let restriction = graph
            .subjects_of(&Term::iri(owl::ON_PROPERTY), &Term::iri("point_x"))
            .next()
            .expect("cardinality restriction")
            .clone();
        assert!(graph.contains(
            &restriction,
            &Term::iri(owl::CARDINALITY),
            &Term::Literal(Literal::integer(1)),
        ));
    }

    #[test]
    fn test_nullable_property_is_optional_despite_required() {
        let schema = json!({
            "type": "object",
            "properties": {
                "x": {"type": ["number", "null"]}
            },
            "required": ["x"]
        });
        let graph = convert(&schema, "point").expect("schema");
        let restriction = graph
            .subjects_of(&Term::iri(owl::ON_PROPERTY), &Term::iri("point_x"))
            .next()
            .expect("cardinality restriction")
            .clone();
        assert!(graph.contains(
            &restriction,
            &Term::iri(owl::MAX_CARDINALITY),
            &Term::Literal(Literal::integer(1)),
        ));
        assert!(!graph.contains(
            &restriction,
            &Term::iri(owl::CARDINALITY),
            &Term::Literal(Literal::integer(1)),
        ));
    }

    #[test]
    fn test_array_contributes_no_statements() {
        let graph = convert(&json!({"type": "array"}), "x").expect("schema");
        assert!(graph.is_empty());
    }
}
