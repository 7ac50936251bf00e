//! Reference, enumeration, constant, and boolean-logic conversion

use serde_json::Value;

use schemaowl_core::prelude::*;
use schemaowl_core::schema::keywords;
use schemaowl_core::vocab::{owl, rdf};

use super::{extend, Conversion, Identification};

const DEFINITIONS_POINTER: &str = "#/definitions/";

impl Conversion<'_> {
    /// Resolve a local reference to the identifier its target carries
    ///
    /// A caller that does not insist on a fresh name receives the target
    /// identifier directly; a caller that does gets a named subclass of it.
    pub(super) fn convert_reference(
        &mut self,
        path: &[String],
        node: Subschema<'_>,
        identification: Identification,
    ) -> Result<Term> {
        let reference = node.reference().ok_or_else(|| {
            SchemaOwlError::unsupported("non-string reference", path)
        })?;
        let Some(pointer) = reference.strip_prefix(DEFINITIONS_POINTER) else {
            return Err(SchemaOwlError::unsupported(
                format!("reference '{reference}' outside the local definitions"),
                path,
            ));
        };
        let mut target_path = vec![self.root_name.to_string()];
        target_path.extend(pointer.split('/').map(ToString::to_string));
        let target = self.identifier(&target_path, Identification::NewName);
        if identification != Identification::NewName {
            return Ok(target);
        }
        let identifier = self.identifier(path, identification);
        self.graph.add_triple(
            identifier.clone(),
            Term::iri(rdf::TYPE),
            Term::iri(owl::CLASS),
        );
        self.graph.add_triple(
            identifier.clone(),
            Term::iri(schemaowl_core::vocab::rdfs::SUB_CLASS_OF),
            target,
        );
        Ok(identifier)
    }

    /// An enumeration becomes a class equal to the listed literals, in order
    pub(super) fn convert_enumeration(
        &mut self,
        path: &[String],
        node: Subschema<'_>,
        identification: Identification,
    ) -> Result<Term> {
        let values = node.enum_values().ok_or_else(|| {
            SchemaOwlError::unsupported("non-array enumeration", path)
        })?;
        let literals = values.iter().map(Literal::from_json).collect();
        Ok(self.one_of_class(path, literals, identification))
    }

    /// A constant is an enumeration of exactly one literal
    pub(super) fn convert_constant(
        &mut self,
        path: &[String],
        node: Subschema<'_>,
        identification: Identification,
    ) -> Result<Term> {
        let value = node.get(keywords::CONST).ok_or_else(|| {
            SchemaOwlError::unsupported("missing constant value", path)
        })?;
        Ok(self.one_of_class(path, vec![Literal::from_json(value)], identification))
    }

    fn one_of_class(
        &mut self,
        path: &[String],
        literals: Vec<Literal>,
        identification: Identification,
    ) -> Term {
        let identifier = self.identifier(path, identification);
        self.graph.add_triple(
            identifier.clone(),
            Term::iri(rdf::TYPE),
            Term::iri(owl::CLASS),
        );
        let members = literals.into_iter().map(Term::Literal).collect();
        let collection = self.graph.collection(members);
        self.graph
            .add_triple(identifier.clone(), Term::iri(owl::ONE_OF), collection);
        identifier
    }

    /// Dispatch `allOf`, `anyOf`, `oneOf`, and `not`, in that keyword order
    pub(super) fn convert_boolean_logic(
        &mut self,
        path: &[String],
        node: Subschema<'_>,
        identification: Identification,
    ) -> Result<Term> {
        if let Some(branches) = node.get(keywords::ALL_OF) {
            return self.convert_connective(path, branches, owl::INTERSECTION_OF, identification);
        }
        if let Some(branches) = node.get(keywords::ANY_OF) {
            return self.convert_connective(path, branches, owl::UNION_OF, identification);
        }
        if let Some(branches) = node.get(keywords::ONE_OF) {
            return self.convert_connective(path, branches, owl::DISJOINT_UNION_OF, identification);
        }
        if let Some(negated) = node.get(keywords::NOT) {
            return self.convert_negation(path, negated, identification);
        }
        Err(SchemaOwlError::unsupported("boolean logic keyword", path))
    }

    /// One n-ary connective over anonymously converted branches
    ///
    /// Branch paths are indexed so nested named subschemas stay unique.
    fn convert_connective(
        &mut self,
        path: &[String],
        branches: &Value,
        predicate: &str,
        identification: Identification,
    ) -> Result<Term> {
        let branches = branches.as_array().ok_or_else(|| {
            SchemaOwlError::unsupported("non-array connective argument", path)
        })?;
        let identifier = self.identifier(path, identification);
        let mut members = Vec::with_capacity(branches.len());
        for (index, branch) in branches.iter().enumerate() {
            members.push(self.convert_branch(path, index, branch)?);
        }
        self.graph.add_triple(
            identifier.clone(),
            Term::iri(rdf::TYPE),
            Term::iri(owl::CLASS),
        );
        let collection = self.graph.collection(members);
        self.graph
            .add_triple(identifier.clone(), Term::iri(predicate), collection);
        Ok(identifier)
    }

    fn convert_negation(
        &mut self,
        path: &[String],
        negated: &Value,
        identification: Identification,
    ) -> Result<Term> {
        let identifier = self.identifier(path, identification);
        self.graph.add_triple(
            identifier.clone(),
            Term::iri(rdf::TYPE),
            Term::iri(owl::CLASS),
        );
        let complement = self.convert_branch(path, 0, negated)?;
        self.graph.add_triple(
            identifier.clone(),
            Term::iri(owl::COMPLEMENT_OF),
            complement,
        );
        Ok(identifier)
    }

    fn convert_branch(&mut self, path: &[String], index: usize, branch: &Value) -> Result<Term> {
        let branch_path = extend(path, &index.to_string());
        let node = Subschema::from_value(branch).ok_or_else(|| {
            SchemaOwlError::unsupported(
                "branch subschema is neither a boolean nor a mapping",
                &branch_path,
            )
        })?;
        self.convert_subschema(&branch_path, node, Identification::Anonymous)
    }
}
