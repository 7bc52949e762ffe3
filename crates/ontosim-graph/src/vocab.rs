//! Well-known IRIs used when building and reading component graphs.

pub const RDF_NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
pub const RDFS_NS: &str = "http://www.w3.org/2000/01/rdf-schema#";
pub const OWL_NS: &str = "http://www.w3.org/2002/07/owl#";
pub const XSD_NS: &str = "http://www.w3.org/2001/XMLSchema#";

pub const RDF_TYPE_IRI: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
pub const RDFS_LABEL_IRI: &str = "http://www.w3.org/2000/01/rdf-schema#label";
pub const RDFS_COMMENT_IRI: &str = "http://www.w3.org/2000/01/rdf-schema#comment";
pub const OWL_CLASS_IRI: &str = "http://www.w3.org/2002/07/owl#Class";
pub const XSD_FLOAT_IRI: &str = "http://www.w3.org/2001/XMLSchema#float";
pub const XSD_STRING_IRI: &str = "http://www.w3.org/2001/XMLSchema#string";

/// Namespace every component individual lives in unless the caller picks another.
pub const DEFAULT_NAMESPACE: &str = "urn:crawlercrane-ontology#";

/// Local name of the class all individuals are typed with.
pub const COMPONENT_CLASS: &str = "Component";

/// Suffix pairing a unit property with its numeric base property
/// (`maxFlowRate` / `maxFlowRateUnit`).
pub const UNIT_SUFFIX: &str = "Unit";
