//! Output record types.
//!
//! Every dataset line is a single-entry JSON object mapping a record key to an
//! ordered list of label pairs:
//!
//! ```text
//! {"label_pair": [{"key": "title", "val": "..."}, {"key": "author", "val": "..."}]}
//! ```

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// A named attribute of a book.
///
/// `val` is `None` only when a SQLite column holds NULL; it serializes as
/// JSON `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LabelPair<'a> {
    /// Attribute name
    pub key: &'a str,
    /// Attribute value
    pub val: Option<&'a str>,
}

impl<'a> LabelPair<'a> {
    /// Creates a pair with a present value.
    pub fn new(key: &'a str, val: &'a str) -> Self {
        Self {
            key,
            val: Some(val),
        }
    }
}

/// One dataset line: the record key and its label pairs, in output order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelRecord<'a> {
    record_key: &'a str,
    pairs: Vec<LabelPair<'a>>,
}

impl<'a> LabelRecord<'a> {
    /// Creates a record serialized under `record_key`.
    pub fn new(record_key: &'a str, pairs: Vec<LabelPair<'a>>) -> Self {
        Self { record_key, pairs }
    }

    /// Zips `keys` positionally with `values`.
    ///
    /// Extra values beyond the key list are ignored, so every record of a
    /// dataset carries the same key set.
    pub fn zipped<I>(record_key: &'a str, keys: &[&'a str], values: I) -> Self
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        let pairs = keys
            .iter()
            .zip(values)
            .map(|(&key, val)| LabelPair { key, val })
            .collect();
        Self::new(record_key, pairs)
    }

    /// Label pairs in output order.
    pub fn pairs(&self) -> &[LabelPair<'a>] {
        &self.pairs
    }
}

impl Serialize for LabelRecord<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.record_key, &self.pairs)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serializes_under_its_key() {
        let record = LabelRecord::new(
            "label_pair",
            vec![LabelPair::new("title", "Dune"), LabelPair::new("author", "Herbert")],
        );
        let json = serde_json::to_string(&record).expect("serialize");
        assert_eq!(
            json,
            r#"{"label_pair":[{"key":"title","val":"Dune"},{"key":"author","val":"Herbert"}]}"#
        );
    }

    #[test]
    fn test_null_value_serializes_as_null() {
        let record = LabelRecord::zipped("label_pair", &["year"], [None]);
        let json = serde_json::to_string(&record).expect("serialize");
        assert_eq!(json, r#"{"label_pair":[{"key":"year","val":null}]}"#);
    }

    #[test]
    fn test_zipped_keeps_key_order_and_drops_extra_values() {
        let record = LabelRecord::zipped(
            "label_pairs",
            &["a", "b"],
            [Some("1"), Some("2"), Some("3")],
        );
        let keys: Vec<&str> = record.pairs().iter().map(|p| p.key).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }
}
