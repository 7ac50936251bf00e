//! The ontology graph: an append-only set of statements plus prefix bindings
//!
//! Statements are never removed or mutated once added. Ordered argument
//! sequences (for union/intersection/enumeration constructs) are encoded as
//! `rdf:first`/`rdf:rest` chains and exposed through their head term.

use std::collections::BTreeMap;

use crate::term::{BlankId, Term};
use crate::vocab;

/// A single subject-predicate-object statement
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Triple {
    /// The subject term
    pub subject: Term,
    /// The predicate term
    pub predicate: Term,
    /// The object term
    pub object: Term,
}

impl Triple {
    /// Create a triple from its components
    #[must_use]
    pub fn new(subject: Term, predicate: Term, object: Term) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }
}

/// An append-only collection of statements with a prefix-binding table
///
/// The graph also owns the blank-node allocator: every call to
/// [`Graph::fresh_blank`] yields a handle never handed out before.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    triples: Vec<Triple>,
    prefixes: BTreeMap<String, String>,
    next_blank: u64,
}

impl Graph {
    /// Create an empty graph
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a statement
    pub fn add(&mut self, triple: Triple) {
        self.triples.push(triple);
    }

    /// Add a statement by components
    pub fn add_triple(&mut self, subject: Term, predicate: Term, object: Term) {
        self.add(Triple::new(subject, predicate, object));
    }

    /// Bind a prefix to a namespace IRI
    ///
    /// With `replace` set to `false` an existing binding for the prefix is
    /// kept and the call is a no-op.
    pub fn bind_prefix(&mut self, prefix: impl Into<String>, iri: impl Into<String>, replace: bool) {
        let prefix = prefix.into();
        if replace || !self.prefixes.contains_key(&prefix) {
            self.prefixes.insert(prefix, iri.into());
        }
    }

    /// The bound prefixes, in deterministic order
    #[must_use]
    pub fn prefixes(&self) -> &BTreeMap<String, String> {
        &self.prefixes
    }

    /// Mint a fresh anonymous node
    pub fn fresh_blank(&mut self) -> Term {
        let id = BlankId::new(format!("b{}", self.next_blank));
        self.next_blank += 1;
        Term::Blank(id)
    }

    /// Build the linked-list encoding of an ordered sequence of terms and
    /// return its head
    ///
    /// The empty sequence is `rdf:nil`.
    pub fn collection(&mut self, items: Vec<Term>) -> Term {
        let nil = Term::iri(vocab::rdf::NIL);
        if items.is_empty() {
            return nil;
        }
        let nodes: Vec<Term> = items.iter().map(|_| self.fresh_blank()).collect();
        for (i, item) in items.into_iter().enumerate() {
            let node = nodes[i].clone();
            self.add_triple(node.clone(), Term::iri(vocab::rdf::FIRST), item);
            let rest = nodes.get(i + 1).cloned().unwrap_or_else(|| nil.clone());
            self.add_triple(node, Term::iri(vocab::rdf::REST), rest);
        }
        nodes[0].clone()
    }

    /// The number of statements
    #[must_use]
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Whether the graph holds no statements
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Iterate over the statements in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Whether the exact statement is present
    #[must_use]
    pub fn contains(&self, subject: &Term, predicate: &Term, object: &Term) -> bool {
        self.triples.iter().any(|t| {
            &t.subject == subject && &t.predicate == predicate && &t.object == object
        })
    }

    /// All objects of statements with the given subject and predicate
    pub fn objects_of<'a>(
        &'a self,
        subject: &'a Term,
        predicate: &'a Term,
    ) -> impl Iterator<Item = &'a Term> {
        self.triples
            .iter()
            .filter(move |t| &t.subject == subject && &t.predicate == predicate)
            .map(|t| &t.object)
    }

    /// All subjects of statements with the given predicate and object
    pub fn subjects_of<'a>(
        &'a self,
        predicate: &'a Term,
        object: &'a Term,
    ) -> impl Iterator<Item = &'a Term> {
        self.triples
            .iter()
            .filter(move |t| &t.predicate == predicate && &t.object == object)
            .map(|t| &t.subject)
    }

    /// Read back the members of a linked-list encoding, given its head
    ///
    /// Returns `None` if the chain is malformed.
    #[must_use]
    pub fn collection_items(&self, head: &Term) -> Option<Vec<Term>> {
        let first = Term::iri(vocab::rdf::FIRST);
        let rest = Term::iri(vocab::rdf::REST);
        let nil = Term::iri(vocab::rdf::NIL);
        let mut items = Vec::new();
        let mut node = head.clone();
        while node != nil {
            items.push(self.objects_of(&node, &first).next()?.clone());
            let next = self.objects_of(&node, &rest).next()?.clone();
            node = next;
        }
        Some(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_append_only_statements() {
        let mut graph = Graph::new();
        graph.add_triple(
            Term::iri("https://example.org#a"),
            Term::iri(vocab::rdf::TYPE),
            Term::iri(vocab::owl::CLASS),
        );
        assert_eq!(graph.len(), 1);
        assert!(graph.contains(
            &Term::iri("https://example.org#a"),
            &Term::iri(vocab::rdf::TYPE),
            &Term::iri(vocab::owl::CLASS),
        ));
    }

    #[test]
    fn test_bind_prefix_keeps_existing_without_replace() {
        let mut graph = Graph::new();
        graph.bind_prefix("ex", "https://example.org#", false);
        graph.bind_prefix("ex", "https://other.org#", false);
        assert_eq!(graph.prefixes()["ex"], "https://example.org#");
        graph.bind_prefix("ex", "https://other.org#", true);
        assert_eq!(graph.prefixes()["ex"], "https://other.org#");
    }

    #[test]
    fn test_fresh_blank_never_reuses() {
        let mut graph = Graph::new();
        let a = graph.fresh_blank();
        let b = graph.fresh_blank();
        assert_ne!(a, b);
    }

    #[test]
    fn test_empty_collection_is_nil() {
        let mut graph = Graph::new();
        let head = graph.collection(vec![]);
        assert_eq!(head, Term::iri(vocab::rdf::NIL));
        assert!(graph.is_empty());
    }

    #[test]
    fn test_collection_round_trip_preserves_order() {
        let mut graph = Graph::new();
        let items = vec![Term::string("a"), Term::string("b"), Term::string("c")];
        let head = graph.collection(items.clone());
        assert_eq!(graph.collection_items(&head), Some(items));
        // two triples per member
        assert_eq!(graph.len(), 6);
    }
}
