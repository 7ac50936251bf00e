//! Graph serialization to Turtle and N-Triples

use std::fmt::Write as _;
use std::str::FromStr;

use indexmap::IndexMap;

use schemaowl_core::prelude::*;
use schemaowl_core::vocab::{rdf, xsd};

/// Supported output syntaxes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RdfFormat {
    /// Terse triple language with prefix compression
    #[default]
    Turtle,
    /// One statement per line, no prefixes
    NTriples,
}

impl FromStr for RdfFormat {
    type Err = SchemaOwlError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "turtle" | "ttl" => Ok(RdfFormat::Turtle),
            "ntriples" | "nt" => Ok(RdfFormat::NTriples),
            other => Err(SchemaOwlError::serialization(format!(
                "unknown RDF format '{other}', expected 'turtle' or 'ntriples'"
            ))),
        }
    }
}

impl std::fmt::Display for RdfFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RdfFormat::Turtle => f.write_str("turtle"),
            RdfFormat::NTriples => f.write_str("ntriples"),
        }
    }
}

/// Render a graph in the chosen syntax
///
/// # Errors
///
/// Returns [`SchemaOwlError::Serialization`] when formatting fails.
pub fn serialize(graph: &Graph, format: RdfFormat) -> Result<String> {
    match format {
        RdfFormat::Turtle => turtle(graph),
        RdfFormat::NTriples => ntriples(graph),
    }
}

fn ntriples(graph: &Graph) -> Result<String> {
    let mut out = String::new();
    for triple in graph.iter() {
        writeln!(
            out,
            "{} {} {} .",
            full_term(&triple.subject),
            full_term(&triple.predicate),
            full_term(&triple.object)
        )?;
    }
    Ok(out)
}

fn full_term(term: &Term) -> String {
    match term {
        Term::Iri(iri) => format!("<{iri}>"),
        Term::Blank(id) => id.to_string(),
        Term::Literal(literal) => {
            let quoted = format!("\"{}\"", escape(&literal.lexical));
            if literal.is_plain_string() {
                quoted
            } else {
                format!("{quoted}^^<{}>", literal.datatype)
            }
        }
    }
}

fn turtle(graph: &Graph) -> Result<String> {
    let mut out = String::new();
    for (prefix, namespace) in graph.prefixes() {
        writeln!(out, "@prefix {prefix}: <{namespace}> .")?;
    }
    if !graph.prefixes().is_empty() && !graph.is_empty() {
        writeln!(out)?;
    }
    let mut by_subject: IndexMap<&Term, Vec<(&Term, &Term)>> = IndexMap::new();
    for triple in graph.iter() {
        by_subject
            .entry(&triple.subject)
            .or_default()
            .push((&triple.predicate, &triple.object));
    }
    for (subject, statements) in &by_subject {
        write!(out, "{}", turtle_term(subject, graph))?;
        for (index, (predicate, object)) in statements.iter().enumerate() {
            let lead = if index == 0 { " " } else { " ;\n    " };
            let predicate = if predicate.as_iri() == Some(rdf::TYPE) {
                "a".to_string()
            } else {
                turtle_term(predicate, graph)
            };
            write!(out, "{lead}{predicate} {}", turtle_term(object, graph))?;
        }
        writeln!(out, " .")?;
    }
    Ok(out)
}

fn turtle_term(term: &Term, graph: &Graph) -> String {
    match term {
        Term::Iri(iri) => compress(iri, graph),
        Term::Blank(id) => id.to_string(),
        Term::Literal(literal) => {
            let quoted = format!("\"{}\"", escape(&literal.lexical));
            if literal.is_plain_string() {
                quoted
            } else {
                format!("{quoted}^^{}", compress(&literal.datatype, graph))
            }
        }
    }
}

/// Shorten an IRI to a prefixed name where a binding allows it
fn compress(iri: &str, graph: &Graph) -> String {
    let mut best: Option<(&str, &str)> = None;
    for (prefix, namespace) in graph.prefixes() {
        if namespace.is_empty() {
            continue;
        }
        if let Some(local) = iri.strip_prefix(namespace.as_str()) {
            if is_local_name(local)
                && best.map_or(true, |(_, seen)| namespace.len() > seen.len())
            {
                best = Some((prefix, namespace));
            }
        }
    }
    match best {
        Some((prefix, namespace)) => format!("{prefix}:{}", &iri[namespace.len()..]),
        None => format!("<{iri}>"),
    }
}

fn is_local_name(local: &str) -> bool {
    local
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.')
}

fn escape(lexical: &str) -> String {
    let mut escaped = String::with_capacity(lexical.len());
    for c in lexical.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            other => escaped.push(other),
        }
    }
    escaped
}
