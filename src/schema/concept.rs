use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Definition used when a persisted record carries none.
pub const MISSING_DEFINITION: &str = "Definition not available.";

fn missing_definition() -> String {
    MISSING_DEFINITION.to_string()
}

/// One named entry in the concept table.
///
/// The name is the table key and is not repeated inside the record.
/// Entries in `related` are expected to name other concepts, but nothing
/// checks that they do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptRecord {
    #[serde(default = "missing_definition")]
    pub definition: String,
    #[serde(default)]
    pub related: Vec<String>,
}

impl ConceptRecord {
    pub fn new(definition: impl Into<String>, related: &[&str]) -> Self {
        Self {
            definition: definition.into(),
            related: related.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Flat, immutable-after-load mapping from concept name to record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConceptTable {
    entries: FxHashMap<String, ConceptRecord>,
}

impl ConceptTable {
    /// Build a table from `(name, record)` pairs. Later duplicates win.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, ConceptRecord)>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Exact, case-sensitive lookup. `None` means the concept is absent.
    pub fn lookup(&self, name: &str) -> Option<(&str, &[String])> {
        self.entries
            .get(name)
            .map(|record| (record.definition.as_str(), record.related.as_slice()))
    }

    pub fn get(&self, name: &str) -> Option<&ConceptRecord> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// All concept names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_table() -> ConceptTable {
        ConceptTable::from_entries([
            (
                "Trees".to_string(),
                ConceptRecord::new(
                    "A hierarchical data structure with nodes.",
                    &["Binary Tree", "Graphs"],
                ),
            ),
            (
                "Graphs".to_string(),
                ConceptRecord::new("A collection of nodes connected by edges.", &[]),
            ),
        ])
    }

    #[test]
    fn lookup_present() {
        let table = make_table();
        let (definition, related) = table.lookup("Trees").unwrap();
        assert_eq!(definition, "A hierarchical data structure with nodes.");
        assert_eq!(related, ["Binary Tree".to_string(), "Graphs".to_string()]);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let table = make_table();
        assert!(table.lookup("trees").is_none());
        assert!(table.lookup("Trees ").is_none());
        assert!(table.lookup("Tree").is_none());
    }

    #[test]
    fn dangling_related_name_is_allowed() {
        let table = make_table();
        let (_, related) = table.lookup("Trees").unwrap();
        assert!(table.lookup(&related[0]).is_none());
    }

    #[test]
    fn names_are_sorted() {
        let table = make_table();
        assert_eq!(table.names(), vec!["Graphs", "Trees"]);
        assert_eq!(table.len(), 2);
        assert!(!table.is_empty());
    }

    #[test]
    fn missing_fields_default_on_read() {
        let table: ConceptTable = serde_json::from_str(r#"{"Heaps": {}}"#).unwrap();
        let record = table.get("Heaps").unwrap();
        assert_eq!(record.definition, MISSING_DEFINITION);
        assert!(record.related.is_empty());
    }
}
