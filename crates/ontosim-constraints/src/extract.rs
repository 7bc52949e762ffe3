//! Serialized component graph → [`ConstraintMap`].

use crate::rdf::{parse_statements, RdfFormat};
use crate::{ConstraintMap, Result};
use ontosim_graph::vocab::{DEFAULT_NAMESPACE, UNIT_SUFFIX};
use ontosim_graph::{decode_iri, encode_iri};
use std::path::Path;

/// Extract constraints from Turtle text under [`DEFAULT_NAMESPACE`].
pub fn extract(turtle: &str) -> Result<ConstraintMap> {
    extract_with_namespace(turtle, RdfFormat::Turtle, DEFAULT_NAMESPACE)
}

/// Read `path` and extract constraints, picking the syntax from the file extension.
pub fn extract_file(path: &Path, namespace: &str) -> Result<ConstraintMap> {
    let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("");
    let format = RdfFormat::from_extension(ext)?;
    let text = std::fs::read_to_string(path)?;
    extract_with_namespace(&text, format, namespace)
}

/// Extract constraints for every subject IRI starting with `namespace`.
///
/// The namespace test is a plain string-prefix match. Predicates are reduced
/// to the text after their last `#`; a `…Unit` predicate sets the unit of its
/// base property, anything else sets the value when the object parses as a
/// float and is dropped otherwise.
pub fn extract_with_namespace(
    text: &str,
    format: RdfFormat,
    namespace: &str,
) -> Result<ConstraintMap> {
    let statements = parse_statements(text, format)?;
    let prefix = encode_iri(namespace);

    let mut constraints = ConstraintMap::new();
    let mut dropped = 0usize;

    for stmt in &statements {
        let subject = &stmt.subject_iri;
        if !subject.starts_with(&prefix) {
            continue;
        }

        let pred_name = predicate_name(&stmt.predicate_iri);
        let object = stmt.object_text.as_str();

        if let Some(base) = pred_name.strip_suffix(UNIT_SUFFIX) {
            constraints
                .entry(subject.clone())
                .or_default()
                .entry(base.to_string())
                .or_default()
                .unit = Some(object.to_string());
            continue;
        }

        match object.trim().parse::<f64>() {
            Ok(value) => {
                constraints
                    .entry(subject.clone())
                    .or_default()
                    .entry(pred_name)
                    .or_default()
                    .value = Some(value);
            }
            Err(_) => {
                dropped += 1;
                tracing::debug!(
                    subject = subject.as_str(),
                    pred_name = pred_name.as_str(),
                    "non-numeric object dropped"
                );
            }
        }
    }

    tracing::info!(
        statements = statements.len(),
        components = constraints.len(),
        dropped,
        "extracted constraints"
    );
    Ok(constraints)
}

fn predicate_name(iri: &str) -> String {
    let local = iri.rsplit('#').next().unwrap_or(iri);
    decode_iri(local)
}
