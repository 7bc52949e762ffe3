//! Sophia-backed statement reader.
//!
//! Only what the extractor consumes is kept: the subject IRI, the predicate
//! IRI and the object as text. Statements with a blank-node subject are
//! skipped.

use crate::{ExtractError, Result};
use sophia::api::prelude::*;
use sophia::api::term::TermKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RdfFormat {
    NTriples,
    Turtle,
}

impl RdfFormat {
    pub fn from_extension(ext: &str) -> Result<Self> {
        match ext.to_lowercase().as_str() {
            "nt" | "ntriples" => Ok(RdfFormat::NTriples),
            "ttl" | "turtle" => Ok(RdfFormat::Turtle),
            other => Err(ExtractError::UnsupportedFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RdfStatement {
    pub subject_iri: String,
    pub predicate_iri: String,
    /// IRI text, blank node label, or literal lexical form.
    pub object_text: String,
}

fn object_text<T: Term>(term: T) -> Option<String> {
    match term.kind() {
        TermKind::Iri => term.iri().map(|iri| iri.as_str().to_string()),
        TermKind::BlankNode => term.bnode_id().map(|id| id.as_str().to_string()),
        TermKind::Literal => term.lexical_form().map(|lex| lex.to_string()),
        _ => None,
    }
}

fn statement<T: Triple>(t: &T) -> Option<RdfStatement> {
    let subject_iri = t.s().iri()?.as_str().to_string();
    let predicate_iri = t.p().iri()?.as_str().to_string();
    let object_text = object_text(t.o())?;
    Some(RdfStatement {
        subject_iri,
        predicate_iri,
        object_text,
    })
}

/// Parse every statement of `text`, in document order.
pub fn parse_statements(text: &str, format: RdfFormat) -> Result<Vec<RdfStatement>> {
    let reader = std::io::BufReader::new(std::io::Cursor::new(text.as_bytes()));
    let mut out: Vec<RdfStatement> = Vec::new();
    let mut skipped = 0usize;
    let mut collect = |stmt: Option<RdfStatement>| match stmt {
        Some(stmt) => out.push(stmt),
        None => skipped += 1,
    };

    match format {
        RdfFormat::NTriples => {
            sophia::turtle::parser::nt::parse_bufread(reader)
                .for_each_triple(|t| collect(statement(&t)))
                .map_err(|e| ExtractError::Parse(format!("N-Triples: {e}")))?;
        }
        RdfFormat::Turtle => {
            sophia::turtle::parser::turtle::parse_bufread(reader)
                .for_each_triple(|t| collect(statement(&t)))
                .map_err(|e| ExtractError::Parse(format!("Turtle: {e}")))?;
        }
    }

    if skipped > 0 {
        tracing::debug!(skipped, "statements without an IRI subject skipped");
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_turtle_literals_and_iris() {
        let ttl = r#"
@prefix ex: <urn:test#> .
@prefix xsd: <http://www.w3.org/2001/XMLSchema#> .
ex:Pump1 ex:maxFlowRate "266"^^xsd:float .
ex:Pump1 ex:label "say \"hi\""@en .
ex:Pump1 ex:feeds ex:Valve .
"#;
        let stmts = parse_statements(ttl, RdfFormat::Turtle).expect("statements");
        assert_eq!(
            stmts,
            vec![
                RdfStatement {
                    subject_iri: "urn:test#Pump1".to_string(),
                    predicate_iri: "urn:test#maxFlowRate".to_string(),
                    object_text: "266".to_string(),
                },
                RdfStatement {
                    subject_iri: "urn:test#Pump1".to_string(),
                    predicate_iri: "urn:test#label".to_string(),
                    object_text: "say \"hi\"".to_string(),
                },
                RdfStatement {
                    subject_iri: "urn:test#Pump1".to_string(),
                    predicate_iri: "urn:test#feeds".to_string(),
                    object_text: "urn:test#Valve".to_string(),
                },
            ]
        );
    }

    #[test]
    fn parses_ntriples() {
        let nt = "<urn:test#A> <urn:test#minClearance> \"0.5\" .\n";
        let stmts = parse_statements(nt, RdfFormat::NTriples).expect("statements");
        assert_eq!(stmts.len(), 1);
        assert_eq!(stmts[0].object_text, "0.5");
    }

    #[test]
    fn blank_node_subjects_are_skipped() {
        let nt = "_:b0 <urn:test#maxLoad> \"3\" .\n<urn:test#A> <urn:test#part> _:b0 .\n";
        let stmts = parse_statements(nt, RdfFormat::NTriples).expect("statements");
        assert_eq!(stmts.len(), 1);
        assert_eq!(stmts[0].subject_iri, "urn:test#A");
    }

    #[test]
    fn malformed_turtle_is_a_parse_error() {
        let err = parse_statements("<urn:a> <urn:b> .", RdfFormat::Turtle).unwrap_err();
        assert!(matches!(err, ExtractError::Parse(_)));
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(RdfFormat::from_extension("TTL").unwrap(), RdfFormat::Turtle);
        assert_eq!(RdfFormat::from_extension("nt").unwrap(), RdfFormat::NTriples);
        assert!(RdfFormat::from_extension("owl").is_err());
    }
}
