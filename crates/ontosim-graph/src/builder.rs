//! Record → knowledge graph.

use crate::graph::{KnowledgeGraph, Literal, Object};
use crate::record::Record;
use crate::value::{parse_value, split_annotations, ParsedValue};
use crate::vocab::{
    COMPONENT_CLASS, OWL_CLASS_IRI, RDFS_COMMENT_IRI, RDFS_LABEL_IRI, RDF_TYPE_IRI, UNIT_SUFFIX,
};
use crate::{GraphError, Result};
use std::collections::HashMap;

/// Local name of the individual for a term id (`"Hydraulic Pump"` → `"Hydraulic_Pump"`).
pub fn individual_local_name(id: &str) -> String {
    id.replace(' ', "_")
}

/// Build the component graph for `record` under `namespace`.
///
/// Every term becomes an individual of `<namespace>Component`; its
/// `additionalInformation` annotations become data properties, and relations
/// become object properties between individuals.
pub fn build(record: &Record, namespace: &str) -> Result<KnowledgeGraph> {
    let mut graph = KnowledgeGraph::new(namespace);

    let component_class = graph.iri(COMPONENT_CLASS);
    graph.insert(
        &component_class,
        RDF_TYPE_IRI,
        Object::Iri(OWL_CLASS_IRI.to_string()),
    );

    // Later terms with the same id replace earlier entries here; their
    // triples stay in the graph.
    let mut individuals: HashMap<&str, String> = HashMap::new();

    for (index, term) in record.data.terms.iter().enumerate() {
        let id = term
            .id
            .as_deref()
            .ok_or(GraphError::MissingTermId { index })?;
        let subject = graph.iri(&individual_local_name(id));
        individuals.insert(id, subject.clone());

        graph.insert(&subject, RDF_TYPE_IRI, Object::Iri(component_class.clone()));
        if let Some(name) = present(&term.name) {
            graph.insert(&subject, RDFS_LABEL_IRI, Object::Literal(Literal::string(name)));
        }
        if let Some(description) = present(&term.description) {
            graph.insert(
                &subject,
                RDFS_COMMENT_IRI,
                Object::Literal(Literal::string(description)),
            );
        }

        let info = present(&term.additional_information).unwrap_or_default();
        for (key, value) in split_annotations(info) {
            add_annotation(&mut graph, &subject, &key, &value);
        }
    }

    for (index, rel) in record.data.relations.iter().enumerate() {
        let name = required(rel.name.as_deref(), index, "name")?;
        let source_id = required(rel.source.as_deref(), index, "source")?;
        let target_id = required(rel.target.as_deref(), index, "target")?;

        let source = resolve(&graph, &individuals, source_id);
        let target = resolve(&graph, &individuals, target_id);
        let predicate = graph.iri(name);

        graph.insert(&source, &predicate, Object::Iri(target));
        if let Some(description) = present(&rel.description) {
            graph.insert(
                &predicate,
                RDFS_COMMENT_IRI,
                Object::Literal(Literal::string(description)),
            );
        }
    }

    tracing::info!(
        terms = record.data.terms.len(),
        relations = record.data.relations.len(),
        triples = graph.len(),
        "built component graph"
    );
    Ok(graph)
}

/// A text field counts only when it is set and non-empty.
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

fn add_annotation(graph: &mut KnowledgeGraph, subject: &str, key: &str, value: &str) {
    let predicate = graph.iri(key);
    match parse_value(value) {
        ParsedValue::Numeric { number, unit } => {
            graph.insert(
                subject,
                &predicate,
                Object::Literal(Literal::float(number.to_string())),
            );
            if let Some(unit) = unit {
                let unit_predicate = graph.iri(&format!("{key}{UNIT_SUFFIX}"));
                graph.insert(subject, &unit_predicate, Object::Literal(Literal::string(unit)));
            }
        }
        ParsedValue::Unparsed { raw_number, unit } => {
            tracing::warn!(
                subject,
                key,
                raw_number = raw_number.as_str(),
                "numeric prefix did not parse; keeping raw text"
            );
            graph.insert(subject, &predicate, Object::Literal(Literal::float(raw_number)));
            let unit_predicate = graph.iri(&format!("{key}{UNIT_SUFFIX}"));
            graph.insert(subject, &unit_predicate, Object::Literal(Literal::string(unit)));
        }
        ParsedValue::Text(raw) => {
            graph.insert(subject, &predicate, Object::Literal(Literal::string(raw)));
        }
    }
}

fn required<'a>(field: Option<&'a str>, index: usize, name: &'static str) -> Result<&'a str> {
    field.ok_or(GraphError::MissingRelationField { index, field: name })
}

fn resolve(graph: &KnowledgeGraph, individuals: &HashMap<&str, String>, id: &str) -> String {
    individuals
        .get(id)
        .cloned()
        .unwrap_or_else(|| graph.iri(&individual_local_name(id)))
}
