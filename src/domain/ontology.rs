//! Ontology loading and the fixed subclass-of query
//!
//! The file is read fully into an in-memory oxigraph store, queried once and
//! dropped. Parsing and SPARQL evaluation are entirely oxigraph's job; this
//! module only picks the serialization, runs the query and turns solutions
//! into [`SubclassRelation`] rows.

use std::path::{Path, PathBuf};

use oxigraph::io::{RdfFormat, RdfParseError, RdfParser};
use oxigraph::model::vocab::xsd;
use oxigraph::model::{GraphNameRef, QuadRef, Term};
use oxigraph::sparql::{EvaluationError, QueryResults};
use oxigraph::store::{StorageError, Store};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::report::{QueryReport, SubclassRelation};

/// Selects every `(subject, object)` pair linked by `rdfs:subClassOf`
pub const SUBCLASS_QUERY: &str = "PREFIX rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#> \
PREFIX owl: <http://www.w3.org/2002/07/owl#> \
PREFIX rdfs: <http://www.w3.org/2000/01/rdf-schema#> \
SELECT ?subject ?object \
WHERE { ?subject rdfs:subClassOf ?object }";

const SUBJECT_VAR: &str = "subject";
const OBJECT_VAR: &str = "object";

#[derive(Debug, Error)]
pub enum OntologyError {
    #[error("Ontology file not found at: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to create in-memory store: {0}")]
    Storage(#[from] StorageError),
    #[error("Failed to parse ontology: {0}")]
    Load(#[from] RdfParseError),
    #[error("Query evaluation failed: {0}")]
    Query(#[from] EvaluationError),
    #[error("Query did not return variable bindings")]
    UnexpectedResults,
}

/// One execution of [`SUBCLASS_QUERY`] against an ontology file
#[derive(Debug, Clone)]
pub struct OntologyQuery {
    path: PathBuf,
}

impl OntologyQuery {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the file and collects all subclass relations.
    ///
    /// Returns [`OntologyError::NotFound`] without touching the store when
    /// the file is missing.
    pub fn run(&self) -> Result<QueryReport, OntologyError> {
        if !self.path.exists() {
            warn!("Ontology file missing: {}", self.path.display());
            return Err(OntologyError::NotFound(self.path.clone()));
        }

        let store = self.load()?;
        let report = execute_subclass_query(&store)?;
        info!(
            "Subclass query over {} returned {} rows",
            self.path.display(),
            report.len()
        );
        Ok(report)
    }

    fn load(&self) -> Result<Store, OntologyError> {
        let bytes = std::fs::read(&self.path).map_err(|source| OntologyError::Io {
            path: self.path.clone(),
            source,
        })?;

        let format = detect_format(&self.path);
        let base_iri = file_base_iri(&self.path);
        debug!(
            "Loading {} bytes as {} with base <{}>",
            bytes.len(),
            format.name(),
            base_iri
        );

        let parser = match RdfParser::from_format(format).with_base_iri(&base_iri) {
            Ok(parser) => parser,
            Err(err) => {
                warn!("Ignoring unusable base IRI <{}>: {}", base_iri, err);
                RdfParser::from_format(format)
            }
        };

        // Quads from named graphs are folded into the default graph, which
        // is the only graph the subclass query reads.
        let store = Store::new()?;
        for quad in parser.for_reader(bytes.as_slice()) {
            let quad = quad?;
            store.insert(QuadRef::new(
                quad.subject.as_ref(),
                quad.predicate.as_ref(),
                quad.object.as_ref(),
                GraphNameRef::DefaultGraph,
            ))?;
        }
        Ok(store)
    }
}

/// Runs [`SUBCLASS_QUERY`] against an already loaded store
fn execute_subclass_query(store: &Store) -> Result<QueryReport, OntologyError> {
    let QueryResults::Solutions(solutions) = store.query(SUBCLASS_QUERY)? else {
        return Err(OntologyError::UnexpectedResults);
    };

    let mut relations = Vec::new();
    for solution in solutions {
        let solution = solution?;
        let (Some(subject), Some(object)) = (solution.get(SUBJECT_VAR), solution.get(OBJECT_VAR))
        else {
            continue;
        };
        relations.push(SubclassRelation::new(render_term(subject), render_term(object)));
    }

    Ok(QueryReport::new(relations))
}

/// Picks a serialization from the file extension; OWL files default to RDF/XML
fn detect_format(path: &Path) -> RdfFormat {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("ttl") => RdfFormat::Turtle,
        Some("nt") => RdfFormat::NTriples,
        Some("nq") => RdfFormat::NQuads,
        Some("trig") => RdfFormat::TriG,
        Some("n3") => RdfFormat::N3,
        _ => RdfFormat::RdfXml,
    }
}

/// Builds a `file:///` IRI for the document so relative IRIs resolve
/// against its location
fn file_base_iri(path: &Path) -> String {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    let normalized = absolute.to_string_lossy().replace('\\', "/");
    let trimmed = normalized.trim_start_matches('/');

    let mut iri = String::from("file:///");
    for byte in trimmed.bytes() {
        if byte.is_ascii_alphanumeric() || b"-._~/:".contains(&byte) {
            iri.push(byte as char);
        } else {
            iri.push_str(&format!("%{:02X}", byte));
        }
    }
    iri
}

fn render_term(term: &Term) -> String {
    match term {
        Term::NamedNode(node) => node.as_str().to_string(),
        Term::BlankNode(node) => format!("_:{}", node.as_str()),
        Term::Literal(literal) => match literal.language() {
            Some(language) => format!("{}@{}", literal.value(), language),
            None if literal.datatype() == xsd::STRING => literal.value().to_string(),
            None => format!("{}^^<{}>", literal.value(), literal.datatype().as_str()),
        },
        #[allow(unreachable_patterns)]
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::io::Write;
    use tempfile::TempDir;

    const SHAPES_OWL: &str = r#"<?xml version="1.0"?>
<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
         xmlns:rdfs="http://www.w3.org/2000/01/rdf-schema#"
         xmlns:owl="http://www.w3.org/2002/07/owl#">
  <owl:Class rdf:about="http://example.org/shapes#Shape"/>
  <owl:Class rdf:about="http://example.org/shapes#Triangle">
    <rdfs:subClassOf rdf:resource="http://example.org/shapes#Shape"/>
  </owl:Class>
  <owl:Class rdf:about="http://example.org/shapes#Square">
    <rdfs:subClassOf rdf:resource="http://example.org/shapes#Shape"/>
    <rdfs:subClassOf rdf:resource="http://example.org/shapes#Shape"/>
  </owl:Class>
</rdf:RDF>
"#;

    const NO_SUBCLASS_OWL: &str = r#"<?xml version="1.0"?>
<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
         xmlns:rdfs="http://www.w3.org/2000/01/rdf-schema#"
         xmlns:owl="http://www.w3.org/2002/07/owl#">
  <owl:Class rdf:about="http://example.org/shapes#Shape">
    <rdfs:label>Shape</rdfs:label>
  </owl:Class>
</rdf:RDF>
"#;

    fn write_fixture(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn missing_file_is_reported_without_querying() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.owl");

        let err = OntologyQuery::new(&path).run().unwrap_err();
        assert!(matches!(err, OntologyError::NotFound(ref p) if p == &path));
        assert!(err.to_string().starts_with("Ontology file not found at: "));
    }

    #[test]
    fn every_subclass_relation_appears_once() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir, "shapes.owl", SHAPES_OWL);

        let report = OntologyQuery::new(&path).run().unwrap();
        assert_eq!(report.len(), 2);

        let found: HashSet<SubclassRelation> = report.relations().iter().cloned().collect();
        assert!(found.contains(&SubclassRelation::new(
            "http://example.org/shapes#Triangle",
            "http://example.org/shapes#Shape"
        )));
        assert!(found.contains(&SubclassRelation::new(
            "http://example.org/shapes#Square",
            "http://example.org/shapes#Shape"
        )));

        let rendered = report.render();
        assert_eq!(
            rendered
                .matches("Subject: http://example.org/shapes#Square, Object: http://example.org/shapes#Shape")
                .count(),
            1
        );
    }

    #[test]
    fn ontology_without_subclasses_yields_empty_report() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir, "flat.owl", NO_SUBCLASS_OWL);

        let report = OntologyQuery::new(&path).run().unwrap();
        assert!(report.is_empty());
        assert!(report.render().contains("No results found."));
    }

    #[test]
    fn turtle_files_are_detected_by_extension() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(
            &dir,
            "shapes.ttl",
            "@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .\n\
             <http://example.org/Circle> rdfs:subClassOf <http://example.org/Shape> .\n\
             _:b0 rdfs:subClassOf <http://example.org/Shape> .\n",
        );

        let report = OntologyQuery::new(&path).run().unwrap();
        assert_eq!(report.len(), 2);
        assert!(report
            .relations()
            .iter()
            .any(|r| r.subject == "http://example.org/Circle"));
        assert!(report.relations().iter().any(|r| r.subject.starts_with("_:")));
    }

    #[test]
    fn malformed_file_is_a_load_error() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir, "broken.ttl", "<http://example.org/a> <http://example.org/b>");

        let err = OntologyQuery::new(&path).run().unwrap_err();
        assert!(matches!(err, OntologyError::Load(_)));
    }

    #[test]
    fn relative_iris_resolve_against_the_file() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(
            &dir,
            "relative.ttl",
            "@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .\n\
             <#Kite> rdfs:subClassOf <#Shape> .\n",
        );

        let report = OntologyQuery::new(&path).run().unwrap();
        assert_eq!(report.len(), 1);
        let relation = &report.relations()[0];
        assert!(relation.subject.starts_with("file:///"));
        assert!(relation.subject.ends_with("relative.ttl#Kite"));
    }

    #[test]
    fn named_graph_relations_are_reported() {
        let dir = TempDir::new().unwrap();
        let trig = write_fixture(
            &dir,
            "graphs.trig",
            "@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .\n\
             <http://example.org/g> { <http://example.org/Kite> rdfs:subClassOf <http://example.org/Shape> . }\n\
             <http://example.org/Kite> rdfs:subClassOf <http://example.org/Shape> .\n",
        );
        let report = OntologyQuery::new(&trig).run().unwrap();
        assert_eq!(
            report.relations(),
            &[SubclassRelation::new("http://example.org/Kite", "http://example.org/Shape")]
        );

        let nquads = write_fixture(
            &dir,
            "graphs.nq",
            "<http://example.org/Kite> <http://www.w3.org/2000/01/rdf-schema#subClassOf> \
             <http://example.org/Shape> <http://example.org/g> .\n",
        );
        assert_eq!(OntologyQuery::new(&nquads).run().unwrap().len(), 1);
    }

    #[test]
    fn typed_literals_keep_their_datatype() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(
            &dir,
            "literals.ttl",
            "@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .\n\
             @prefix xsd: <http://www.w3.org/2001/XMLSchema#> .\n\
             <http://example.org/A> rdfs:subClassOf \"5\"^^xsd:int .\n\
             <http://example.org/B> rdfs:subClassOf \"plain\" .\n\
             <http://example.org/C> rdfs:subClassOf \"carré\"@fr .\n",
        );

        let report = OntologyQuery::new(&path).run().unwrap();
        let object_of = |subject: &str| {
            report
                .relations()
                .iter()
                .find(|r| r.subject == subject)
                .map(|r| r.object.clone())
                .unwrap()
        };
        assert_eq!(
            object_of("http://example.org/A"),
            "5^^<http://www.w3.org/2001/XMLSchema#int>"
        );
        assert_eq!(object_of("http://example.org/B"), "plain");
        assert_eq!(object_of("http://example.org/C"), "carré@fr");
    }

    #[test]
    fn format_detection() {
        assert_eq!(detect_format(Path::new("owl.owl")), RdfFormat::RdfXml);
        assert_eq!(detect_format(Path::new("a.RDF")), RdfFormat::RdfXml);
        assert_eq!(detect_format(Path::new("a.ttl")), RdfFormat::Turtle);
        assert_eq!(detect_format(Path::new("a.nt")), RdfFormat::NTriples);
        assert_eq!(detect_format(Path::new("noext")), RdfFormat::RdfXml);
    }

    #[cfg(unix)]
    #[test]
    fn base_iri_escapes_spaces() {
        let iri = file_base_iri(Path::new("/tmp/my ontologies/owl.owl"));
        assert_eq!(iri, "file:///tmp/my%20ontologies/owl.owl");
    }
}
