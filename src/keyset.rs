//! Set of valid foreign keys read from a reference table.

use std::collections::HashSet;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::error::{ConvertError, Result};
use crate::output::read_source;
use crate::table::Table;

/// Identifiers taken from the first column of a reference table.
///
/// Only membership is ever consulted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeySet {
    keys: HashSet<String>,
}

impl KeySet {
    /// Read keys from a CSV table with a header row.
    ///
    /// `table` names the source in error messages. A blank row after the
    /// header has no first column and aborts the read.
    pub fn from_reader<R: io::Read>(table: &'static str, rdr: R) -> Result<Self> {
        let source = Table::read(rdr)?;
        let mut reader = source.reader();
        if reader.headers()?.is_empty() {
            return Err(ConvertError::MissingHeader { table });
        }
        if let Some(line) = source.first_blank_line() {
            return Err(ConvertError::FieldCount {
                table,
                line,
                expected: 1,
                found: 0,
            });
        }

        let mut keys = HashSet::new();
        for record in reader.records() {
            let record = record?;
            if let Some(key) = record.get(0) {
                keys.insert(key.to_string());
            }
        }
        debug!(table, keys = keys.len(), "loaded key set");
        Ok(Self { keys })
    }

    /// Read keys from the map table at `path`.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = read_source(path)?;
        Self::from_reader("maps", text.as_bytes())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl FromIterator<String> for KeySet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_column_becomes_key() {
        let data = "MapId,Name,Width\n1002,Market,400\n1010,Arena,200\n";
        let keys = KeySet::from_reader("maps", data.as_bytes()).unwrap();
        assert_eq!(keys.len(), 2);
        assert!(keys.contains("1002"));
        assert!(keys.contains("1010"));
        assert!(!keys.contains("Market"));
    }

    #[test]
    fn test_header_not_a_key() {
        let keys = KeySet::from_reader("maps", "MapId\n1\n".as_bytes()).unwrap();
        assert!(!keys.contains("MapId"));
        assert!(keys.contains("1"));
    }

    #[test]
    fn test_duplicates_collapse() {
        let data = "MapId\n7\n7\n8\n7\n";
        let keys = KeySet::from_reader("maps", data.as_bytes()).unwrap();
        assert_eq!(keys.len(), 2);
    }

    #[test]
    fn test_leading_space_skipped() {
        let data = "MapId, Name\n 1002, Market\n";
        let keys = KeySet::from_reader("maps", data.as_bytes()).unwrap();
        assert!(keys.contains("1002"));
    }

    #[test]
    fn test_blank_row_rejected() {
        let data = "MapId,Name\n1002,Market\n\n1010,Arena\n";
        let err = KeySet::from_reader("maps", data.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::FieldCount {
                table: "maps",
                line: 3,
                found: 0,
                ..
            }
        ));
    }

    #[test]
    fn test_header_only_is_empty() {
        let keys = KeySet::from_reader("maps", "MapId,Name\n".as_bytes()).unwrap();
        assert!(keys.is_empty());
    }

    #[test]
    fn test_empty_table_is_missing_header() {
        let err = KeySet::from_reader("maps", "".as_bytes()).unwrap_err();
        assert!(matches!(err, ConvertError::MissingHeader { table: "maps" }));
    }

    #[test]
    fn test_from_iterator() {
        let keys: KeySet = ["a", "b"].iter().map(|s| s.to_string()).collect();
        assert!(keys.contains("a"));
        assert!(!keys.contains("c"));
    }
}
