//! Text rendering for ontology query results

use std::fmt;

pub const REPORT_HEADER: &str = "Ontology Query Results:";
pub const NO_RESULTS: &str = "No results found.";

/// A single `?subject rdfs:subClassOf ?object` match
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubclassRelation {
    pub subject: String,
    pub object: String,
}

impl SubclassRelation {
    pub fn new(subject: impl Into<String>, object: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            object: object.into(),
        }
    }
}

impl fmt::Display for SubclassRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Subject: {}, Object: {}", self.subject, self.object)
    }
}

/// All rows returned by one execution of the subclass query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryReport {
    relations: Vec<SubclassRelation>,
}

impl QueryReport {
    pub fn new(relations: Vec<SubclassRelation>) -> Self {
        Self { relations }
    }

    pub fn relations(&self) -> &[SubclassRelation] {
        &self.relations
    }

    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.relations.len()
    }

    /// Popup body: header line, then one line per relation or the
    /// no-results notice
    pub fn render(&self) -> String {
        let mut out = String::from(REPORT_HEADER);
        out.push('\n');

        if self.relations.is_empty() {
            out.push_str(NO_RESULTS);
            return out;
        }

        for relation in &self.relations {
            out.push_str(&relation.to_string());
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_says_no_results() {
        let report = QueryReport::default();
        assert!(report.is_empty());
        assert_eq!(report.render(), "Ontology Query Results:\nNo results found.");
    }

    #[test]
    fn each_relation_gets_a_line() {
        let report = QueryReport::new(vec![
            SubclassRelation::new("http://ex.org/Square", "http://ex.org/Shape"),
            SubclassRelation::new("http://ex.org/Triangle", "http://ex.org/Shape"),
        ]);

        let rendered = report.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], REPORT_HEADER);
        assert_eq!(
            lines[1],
            "Subject: http://ex.org/Square, Object: http://ex.org/Shape"
        );
        assert!(!rendered.contains(NO_RESULTS));
    }
}
