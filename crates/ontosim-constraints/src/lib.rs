//! Operating constraints recovered from a serialized component graph.
//!
//! The extractor works on graph *text* (Turtle or N-Triples), not on the
//! builder's in-memory graph: the serialized file is the interchange artifact
//! between the two stages.
//!
//! ```text
//! graph.ttl ──extract──► ConstraintMap ──derive──► Vec<SensorDefinition>
//! ```

pub mod extract;
pub mod rdf;
pub mod sensors;

pub use extract::{extract, extract_file, extract_with_namespace};
pub use rdf::RdfFormat;
pub use sensors::{derive, derive_all, SensorDefinition};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A numeric bound and its unit. Either half may be missing: the two come
/// from separate triples (`maxFlowRate` / `maxFlowRateUnit`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Constraint {
    pub value: Option<f64>,
    pub unit: Option<String>,
}

/// Property name → constraint, for one component.
pub type ComponentConstraints = BTreeMap<String, Constraint>;

/// Component IRI → its constraints.
pub type ConstraintMap = BTreeMap<String, ComponentConstraints>;

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("failed to parse {0}")]
    Parse(String),

    #[error("unsupported RDF format: .{0}")]
    UnsupportedFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ExtractError>;
