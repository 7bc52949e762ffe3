//! In-memory triple set and its Turtle serialization.

use crate::vocab::{OWL_NS, RDFS_NS, RDF_NS, XSD_FLOAT_IRI, XSD_NS, XSD_STRING_IRI};
use std::collections::BTreeSet;
use std::fmt::Write as _;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Datatype {
    Float,
    String,
}

impl Datatype {
    pub fn iri(&self) -> &'static str {
        match self {
            Datatype::Float => XSD_FLOAT_IRI,
            Datatype::String => XSD_STRING_IRI,
        }
    }

    fn turtle_name(&self) -> &'static str {
        match self {
            Datatype::Float => "xsd:float",
            Datatype::String => "xsd:string",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal {
    pub lexical: String,
    pub datatype: Datatype,
}

impl Literal {
    pub fn float(lexical: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: Datatype::Float,
        }
    }

    pub fn string(lexical: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: Datatype::String,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Object {
    Iri(String),
    Literal(Literal),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Triple {
    pub subject: String,
    pub predicate: String,
    pub object: Object,
}

/// A set of triples. Inserting the same triple twice keeps one copy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnowledgeGraph {
    namespace: String,
    triples: BTreeSet<Triple>,
}

impl KnowledgeGraph {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            triples: BTreeSet::new(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// `namespace + local`.
    pub fn iri(&self, local: &str) -> String {
        format!("{}{}", self.namespace, local)
    }

    pub fn insert(&mut self, subject: &str, predicate: &str, object: Object) -> bool {
        self.triples.insert(Triple {
            subject: subject.to_string(),
            predicate: predicate.to_string(),
            object,
        })
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    pub fn contains(&self, subject: &str, predicate: &str, object: &Object) -> bool {
        self.triples.iter().any(|t| {
            t.subject == subject && t.predicate == predicate && &t.object == object
        })
    }

    /// All objects of `(subject, predicate, _)`.
    pub fn objects<'a>(
        &'a self,
        subject: &'a str,
        predicate: &'a str,
    ) -> impl Iterator<Item = &'a Object> + 'a {
        self.triples
            .iter()
            .filter(move |t| t.subject == subject && t.predicate == predicate)
            .map(|t| &t.object)
    }

    /// Serialize as Turtle. Statements are written one per line with full
    /// IRIs, sorted, so the output is stable across runs.
    pub fn to_turtle(&self) -> String {
        let mut out = String::new();
        for (prefix, iri) in [
            ("ex", self.namespace.as_str()),
            ("owl", OWL_NS),
            ("rdf", RDF_NS),
            ("rdfs", RDFS_NS),
            ("xsd", XSD_NS),
        ] {
            let _ = writeln!(out, "@prefix {prefix}: <{}> .", encode_iri(iri));
        }
        out.push('\n');

        for t in &self.triples {
            let _ = write!(
                out,
                "<{}> <{}> ",
                encode_iri(&t.subject),
                encode_iri(&t.predicate)
            );
            match &t.object {
                Object::Iri(iri) => {
                    let _ = write!(out, "<{}>", encode_iri(iri));
                }
                Object::Literal(lit) => {
                    let _ = write!(
                        out,
                        "\"{}\"^^{}",
                        escape_literal(&lit.lexical),
                        lit.datatype.turtle_name()
                    );
                }
            }
            out.push_str(" .\n");
        }
        out
    }

    pub fn write_turtle(&self, path: &Path) -> std::io::Result<()> {
        std::fs::write(path, self.to_turtle())
    }
}

/// Percent-encode the characters an IRI reference may not contain.
///
/// `%` itself is encoded too so that decoding is an exact inverse.
pub fn encode_iri(iri: &str) -> String {
    let mut out = String::with_capacity(iri.len());
    for c in iri.chars() {
        let illegal = c <= ' '
            || matches!(c, '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\' | '%');
        if illegal {
            let mut buf = [0u8; 4];
            for b in c.encode_utf8(&mut buf).bytes() {
                let _ = write!(out, "%{b:02X}");
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Inverse of [`encode_iri`]. Malformed escapes are kept as-is.
pub fn decode_iri(iri: &str) -> String {
    let bytes = iri.as_bytes();
    let mut out: Vec<u8> = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            let decoded = std::str::from_utf8(&bytes[i + 1..i + 3])
                .ok()
                .filter(|hex| hex.bytes().all(|b| b.is_ascii_hexdigit()))
                .and_then(|hex| u8::from_str_radix(hex, 16).ok());
            if let Some(b) = decoded {
                out.push(b);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8(out).unwrap_or_else(|_| iri.to_string())
}

fn escape_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out
}
