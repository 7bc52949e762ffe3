//! Input records: `{ "data": { "terms": [...], "relations": [...] } }`.
//!
//! Only the shape is modelled here. Missing ids or relation endpoints are
//! *not* rejected at deserialization time; the builder reports them when it
//! reaches the offending entry. Text fields may be absent or `null`.

use crate::GraphError;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub data: RecordData,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordData {
    #[serde(default)]
    pub terms: Vec<Term>,
    #[serde(default)]
    pub relations: Vec<Relation>,
}

/// One component of the described machine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Term {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Free text such as `"maxFlowRate: 266 L/min, maintenanceIntervalCheck: 1000 working hours"`.
    #[serde(default)]
    pub additional_information: Option<String>,
}

/// A named, directed link between two terms (by term id).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Relation {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Record {
    pub fn from_json_str(text: &str) -> Result<Self, GraphError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, GraphError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

impl Term {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_additional_information(mut self, info: impl Into<String>) -> Self {
        self.additional_information = Some(info.into());
        self
    }
}

impl Relation {
    pub fn new(
        name: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            source: Some(source.into()),
            target: Some(target.into()),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
