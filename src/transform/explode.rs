//! Per-author explosion of fiction rows.

use crate::config::{AUTHOR_SEPARATOR, FICTION_COLUMNS, LABEL_PAIRS_KEY};
use crate::models::LabelRecord;

use super::authors::{split_authors, split_name};
use super::normalize::normalize_field;

/// One row of the fiction query.
///
/// The query selects the author column twice: family names are extracted from
/// the first copy and given names from the second.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FictionRow {
    /// Author column, read for family names
    pub family_source: String,
    /// Author column, read for given names
    pub given_source: String,
    /// Language, year, extension, title, publisher, edition
    pub details: [String; 6],
}

impl FictionRow {
    /// Builds a row from the 8 selected columns. NULL or missing columns
    /// become empty strings.
    pub fn from_columns(columns: Vec<Option<String>>) -> Self {
        let mut it = columns.into_iter().map(Option::unwrap_or_default);
        let family_source = it.next().unwrap_or_default();
        let given_source = it.next().unwrap_or_default();
        let details = std::array::from_fn(|_| it.next().unwrap_or_default());
        Self {
            family_source,
            given_source,
            details,
        }
    }
}

/// One output record per author, every field normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplodedRecord {
    values: [String; 8],
}

impl ExplodedRecord {
    fn new(family: &str, given: &str, details: &[String; 6]) -> Self {
        let mut values: [String; 8] = Default::default();
        values[0] = normalize_field(family);
        values[1] = normalize_field(given);
        for (slot, detail) in values[2..].iter_mut().zip(details) {
            *slot = normalize_field(detail);
        }
        Self { values }
    }

    /// Normalized family name.
    pub fn family_name(&self) -> &str {
        &self.values[0]
    }

    /// Normalized given name (empty when the author had no comma).
    pub fn given_name(&self) -> &str {
        &self.values[1]
    }

    /// `(field name, normalized value)` pairs in output order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        FICTION_COLUMNS
            .iter()
            .copied()
            .zip(self.values.iter().map(String::as_str))
    }

    /// JSON form of the record, keyed `label_pairs`.
    pub fn label_record(&self) -> LabelRecord<'_> {
        LabelRecord::zipped(
            LABEL_PAIRS_KEY,
            FICTION_COLUMNS,
            self.values.iter().map(|v| Some(v.as_str())),
        )
    }
}

/// Explodes a row into one record per `;`-separated author token.
///
/// The record count always equals the number of tokens in the first author
/// column; an empty author column yields one record with empty names.
pub fn explode(row: &FictionRow) -> Vec<ExplodedRecord> {
    let mut given_tokens = row.given_source.split(AUTHOR_SEPARATOR);
    split_authors(&row.family_source)
        .map(|token| {
            let (family, _) = split_name(token);
            let given = given_tokens
                .next()
                .map(|t| split_name(t).1)
                .unwrap_or_default();
            ExplodedRecord::new(family, given, &row.details)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(author: &str) -> FictionRow {
        FictionRow::from_columns(vec![
            Some(author.to_string()),
            Some(author.to_string()),
            Some("eng".to_string()),
            Some("2001".to_string()),
            Some("epub".to_string()),
            Some("Title X".to_string()),
            Some("Pub Y".to_string()),
            Some("1st".to_string()),
        ])
    }

    #[test]
    fn test_two_authors_two_records() {
        let records = explode(&row("Doe, Jane;Roe, Richard"));
        assert_eq!(records.len(), 2);

        let first: Vec<(&str, &str)> = records[0].fields().collect();
        assert_eq!(
            first,
            vec![
                ("author_family_name", "Doe"),
                ("author_first_name", "Jane"),
                ("language", "eng"),
                ("year", "2001"),
                ("extension", "epub"),
                ("title", "Title X"),
                ("publisher", "Pub Y"),
                ("edition", "1st"),
            ]
        );
        assert_eq!(records[1].family_name(), "Roe");
        assert_eq!(records[1].given_name(), "Richard");
        assert_eq!(records[1].fields().nth(5), Some(("title", "Title X")));
    }

    #[test]
    fn test_author_without_comma() {
        let records = explode(&row("Cher"));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].family_name(), "Cher");
        assert_eq!(records[0].given_name(), "");
    }

    #[test]
    fn test_empty_author_yields_one_record() {
        let records = explode(&row(""));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].family_name(), "");
        assert_eq!(records[0].given_name(), "");
    }

    #[test]
    fn test_record_count_matches_token_count() {
        for author in ["A", "A;B", "A, a;B, b;C", ";;", "Doe, J;Doe, J"] {
            let expected = author.split(';').count();
            assert_eq!(explode(&row(author)).len(), expected, "author {author:?}");
        }
    }

    #[test]
    fn test_null_columns_become_empty() {
        let row = FictionRow::from_columns(vec![None, None, Some("fre".to_string())]);
        let records = explode(&row);
        assert_eq!(records.len(), 1);
        let values: Vec<&str> = records[0].fields().map(|(_, v)| v).collect();
        assert_eq!(values, vec!["", "", "fre", "", "", "", "", ""]);
    }

    #[test]
    fn test_every_field_is_normalized() {
        let row = FictionRow::from_columns(vec![
            Some("O\"Brien ,  Pat\n".to_string()),
            Some("O\"Brien ,  Pat\n".to_string()),
            Some(" eng ".to_string()),
            None,
            None,
            Some("Back\\slash".to_string()),
            None,
            None,
        ]);
        let record = &explode(&row)[0];
        assert_eq!(record.family_name(), "O\\\"Brien");
        assert_eq!(record.given_name(), "Pat");
        assert_eq!(record.fields().nth(2), Some(("language", "eng")));
        assert_eq!(record.fields().nth(5), Some(("title", "Back\\\\slash")));
    }

    #[test]
    fn test_label_record_uses_plural_key() {
        let records = explode(&row("Doe, Jane"));
        let json = serde_json::to_value(records[0].label_record()).expect("serialize");
        let pairs = json["label_pairs"].as_array().expect("label_pairs array");
        assert_eq!(pairs.len(), 8);
        assert_eq!(pairs[1]["key"], "author_first_name");
        assert_eq!(pairs[1]["val"], "Jane");
    }
}
