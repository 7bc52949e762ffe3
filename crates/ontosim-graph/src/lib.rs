//! Component records → OWL-shaped knowledge graph.
//!
//! - Each term becomes an individual of `<ns>Component` with an optional
//!   `rdfs:label` / `rdfs:comment`.
//! - `additionalInformation` (`"maxFlowRate: 266 L/min, ..."`) is split into
//!   data properties: a numeric `xsd:float` value plus an optional
//!   `<key>Unit` string.
//! - Relations become object properties between individuals.
//!
//! The graph is handed to later stages as Turtle text
//! ([`KnowledgeGraph::to_turtle`]), never as in-memory objects.

pub mod builder;
pub mod graph;
pub mod record;
pub mod value;
pub mod vocab;

pub use builder::{build, individual_local_name};
pub use graph::{decode_iri, encode_iri, Datatype, KnowledgeGraph, Literal, Object, Triple};
pub use record::{Record, RecordData, Relation, Term};
pub use value::{parse_value, scan_numeric_prefix, split_annotations, NumericLiteral, ParsedValue};

#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("term #{index} has no `id`")]
    MissingTermId { index: usize },

    #[error("relation #{index} has no `{field}`")]
    MissingRelationField { index: usize, field: &'static str },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid record JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GraphError>;
