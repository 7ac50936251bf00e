//! RDF, RDFS, OWL, and XSD vocabulary IRIs used by the converter

/// RDF vocabulary
pub mod rdf {
    /// Namespace IRI
    pub const NAMESPACE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    /// `rdf:type`
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    /// `rdf:first`
    pub const FIRST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#first";
    /// `rdf:rest`
    pub const REST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#rest";
    /// `rdf:nil`
    pub const NIL: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#nil";
    /// `rdf:JSON`
    pub const JSON: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#JSON";
}

/// RDFS vocabulary
pub mod rdfs {
    /// Namespace IRI
    pub const NAMESPACE: &str = "http://www.w3.org/2000/01/rdf-schema#";
    /// `rdfs:Class`
    pub const CLASS: &str = "http://www.w3.org/2000/01/rdf-schema#Class";
    /// `rdfs:Datatype`
    pub const DATATYPE: &str = "http://www.w3.org/2000/01/rdf-schema#Datatype";
    /// `rdfs:subClassOf`
    pub const SUB_CLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";
    /// `rdfs:domain`
    pub const DOMAIN: &str = "http://www.w3.org/2000/01/rdf-schema#domain";
    /// `rdfs:range`
    pub const RANGE: &str = "http://www.w3.org/2000/01/rdf-schema#range";
}

/// OWL vocabulary
pub mod owl {
    /// Namespace IRI
    pub const NAMESPACE: &str = "http://www.w3.org/2002/07/owl#";
    /// `owl:Class`
    pub const CLASS: &str = "http://www.w3.org/2002/07/owl#Class";
    /// `owl:Nothing`
    pub const NOTHING: &str = "http://www.w3.org/2002/07/owl#Nothing";
    /// `owl:ObjectProperty`
    pub const OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#ObjectProperty";
    /// `owl:Restriction`
    pub const RESTRICTION: &str = "http://www.w3.org/2002/07/owl#Restriction";
    /// `owl:onProperty`
    pub const ON_PROPERTY: &str = "http://www.w3.org/2002/07/owl#onProperty";
    /// `owl:cardinality`
    pub const CARDINALITY: &str = "http://www.w3.org/2002/07/owl#cardinality";
    /// `owl:maxCardinality`
    pub const MAX_CARDINALITY: &str = "http://www.w3.org/2002/07/owl#maxCardinality";
    /// `owl:onDatatype`
    pub const ON_DATATYPE: &str = "http://www.w3.org/2002/07/owl#onDatatype";
    /// `owl:withRestrictions`
    pub const WITH_RESTRICTIONS: &str = "http://www.w3.org/2002/07/owl#withRestrictions";
    /// `owl:oneOf`
    pub const ONE_OF: &str = "http://www.w3.org/2002/07/owl#oneOf";
    /// `owl:unionOf`
    pub const UNION_OF: &str = "http://www.w3.org/2002/07/owl#unionOf";
    /// `owl:intersectionOf`
    pub const INTERSECTION_OF: &str = "http://www.w3.org/2002/07/owl#intersectionOf";
    /// `owl:disjointUnionOf`
    pub const DISJOINT_UNION_OF: &str = "http://www.w3.org/2002/07/owl#disjointUnionOf";
    /// `owl:complementOf`
    pub const COMPLEMENT_OF: &str = "http://www.w3.org/2002/07/owl#complementOf";
}

/// XSD vocabulary: datatypes and constraining facets
pub mod xsd {
    /// Namespace IRI
    pub const NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema#";
    /// `xsd:string`
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    /// `xsd:boolean`
    pub const BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
    /// `xsd:int`
    pub const INT: &str = "http://www.w3.org/2001/XMLSchema#int";
    /// `xsd:integer`
    pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
    /// `xsd:double`
    pub const DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";
    /// `xsd:date`
    pub const DATE: &str = "http://www.w3.org/2001/XMLSchema#date";
    /// `xsd:time`
    pub const TIME: &str = "http://www.w3.org/2001/XMLSchema#time";
    /// `xsd:dateTime`
    pub const DATE_TIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";
    /// `xsd:duration`
    pub const DURATION: &str = "http://www.w3.org/2001/XMLSchema#duration";
    /// `xsd:anyURI`
    pub const ANY_URI: &str = "http://www.w3.org/2001/XMLSchema#anyURI";
    /// `xsd:pattern` facet
    pub const PATTERN: &str = "http://www.w3.org/2001/XMLSchema#pattern";
    /// `xsd:maxInclusive` facet
    pub const MAX_INCLUSIVE: &str = "http://www.w3.org/2001/XMLSchema#maxInclusive";
    /// `xsd:maxExclusive` facet
    pub const MAX_EXCLUSIVE: &str = "http://www.w3.org/2001/XMLSchema#maxExclusive";
    /// `xsd:minInclusive` facet
    pub const MIN_INCLUSIVE: &str = "http://www.w3.org/2001/XMLSchema#minInclusive";
    /// `xsd:minExclusive` facet
    pub const MIN_EXCLUSIVE: &str = "http://www.w3.org/2001/XMLSchema#minExclusive";
    /// `xsd:maxLength` facet
    pub const MAX_LENGTH: &str = "http://www.w3.org/2001/XMLSchema#maxLength";
    /// `xsd:minLength` facet
    pub const MIN_LENGTH: &str = "http://www.w3.org/2001/XMLSchema#minLength";
}
