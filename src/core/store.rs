//! Concept store: the built-in table, persistence, and reload.

use serde::Serialize;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use crate::schema::concept::{ConceptRecord, ConceptTable};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed concept table: {0}")]
    Format(#[from] serde_json::Error),
    #[error("malformed RON concept table: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("RON serialization error: {0}")]
    RonSerialize(#[from] ron::Error),
}

/// On-disk encoding, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreFormat {
    Json,
    Ron,
}

impl StoreFormat {
    /// `.ron` files are RON; everything else is JSON.
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|s| s.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("ron") => Self::Ron,
            _ => Self::Json,
        }
    }
}

/// The four concepts shipped with the tools.
pub fn load_literal_table() -> ConceptTable {
    ConceptTable::from_entries([
        (
            "Data Structures".to_string(),
            ConceptRecord::new(
                "Ways to store and organize data efficiently.",
                &["Arrays", "Linked List", "Trees"],
            ),
        ),
        (
            "Algorithms".to_string(),
            ConceptRecord::new(
                "Step-by-step procedures to solve problems.",
                &["Sorting", "Searching"],
            ),
        ),
        (
            "Trees".to_string(),
            ConceptRecord::new(
                "A hierarchical data structure with nodes.",
                &["Binary Tree", "Graphs"],
            ),
        ),
        (
            "Graphs".to_string(),
            ConceptRecord::new(
                "A collection of nodes connected by edges.",
                &["Trees", "Graph Traversal"],
            ),
        ),
    ])
}

/// Encode a table as human-readable text in the given format.
pub fn to_string(table: &ConceptTable, format: StoreFormat) -> Result<String, StoreError> {
    match format {
        StoreFormat::Json => Ok(to_pretty_json(table)?),
        StoreFormat::Ron => Ok(ron::ser::to_string_pretty(
            table,
            ron::ser::PrettyConfig::default(),
        )?),
    }
}

/// Decode a table from text in the given format.
pub fn from_str(input: &str, format: StoreFormat) -> Result<ConceptTable, StoreError> {
    match format {
        StoreFormat::Json => Ok(serde_json::from_str(input)?),
        StoreFormat::Ron => Ok(ron::from_str(input)?),
    }
}

/// Write the table to `destination`, replacing any existing file.
pub fn persist(table: &ConceptTable, destination: &Path) -> Result<(), StoreError> {
    let contents = to_string(table, StoreFormat::for_path(destination))?;
    std::fs::write(destination, contents)?;
    debug!(path = %destination.display(), concepts = table.len(), "persisted concept table");
    Ok(())
}

/// Read a table previously written by [`persist`].
pub fn reload(source: &Path) -> Result<ConceptTable, StoreError> {
    let contents = std::fs::read_to_string(source)?;
    let table = from_str(&contents, StoreFormat::for_path(source))?;
    debug!(path = %source.display(), concepts = table.len(), "reloaded concept table");
    Ok(table)
}

/// Pretty JSON with four-space indentation.
pub(crate) fn to_pretty_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    // serde_json only emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_table_contents() {
        let table = load_literal_table();
        assert_eq!(
            table.names(),
            vec!["Algorithms", "Data Structures", "Graphs", "Trees"]
        );
        let (definition, related) = table.lookup("Graphs").unwrap();
        assert_eq!(definition, "A collection of nodes connected by edges.");
        assert_eq!(related, ["Trees".to_string(), "Graph Traversal".to_string()]);
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(StoreFormat::for_path(Path::new("kg.ron")), StoreFormat::Ron);
        assert_eq!(StoreFormat::for_path(Path::new("kg.RON")), StoreFormat::Ron);
        assert_eq!(StoreFormat::for_path(Path::new("kg.json")), StoreFormat::Json);
        assert_eq!(StoreFormat::for_path(Path::new("kg")), StoreFormat::Json);
    }

    #[test]
    fn json_text_is_indented() {
        let text = to_string(&load_literal_table(), StoreFormat::Json).unwrap();
        assert!(text.contains("\n    \"Trees\": {"));
        assert!(text.contains("\"definition\": \"A hierarchical data structure with nodes.\""));
    }

    #[test]
    fn ron_text_decodes_to_same_table() {
        let table = load_literal_table();
        let text = to_string(&table, StoreFormat::Ron).unwrap();
        assert_eq!(from_str(&text, StoreFormat::Ron).unwrap(), table);
    }

    #[test]
    fn invalid_json_is_format_error() {
        let err = from_str("{ not json", StoreFormat::Json).unwrap_err();
        assert!(matches!(err, StoreError::Format(_)));
    }

    #[test]
    fn wrong_shape_is_format_error() {
        let err = from_str(r#"["Trees", "Graphs"]"#, StoreFormat::Json).unwrap_err();
        assert!(matches!(err, StoreError::Format(_)));
    }
}
