//! Author field splitting.
//!
//! LibGen fiction rows store every author in one column, formatted as
//! `Surname, Given;Surname, Given;...`.

use crate::config::{AUTHOR_SEPARATOR, NAME_SEPARATOR};

/// Splits an author field into one token per author.
///
/// Order is preserved and duplicates are kept. An empty field yields a single
/// empty token.
pub fn split_authors(field: &str) -> impl Iterator<Item = &str> {
    field.split(AUTHOR_SEPARATOR)
}

/// Splits one author token on its first comma into `(family, given)`.
///
/// Without a comma the whole token is the family name and the given name is
/// empty. Surrounding whitespace is left for normalization.
pub fn split_name(token: &str) -> (&str, &str) {
    token.split_once(NAME_SEPARATOR).unwrap_or((token, ""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_two_authors() {
        let tokens: Vec<&str> = split_authors("Doe, Jane;Roe, Richard").collect();
        assert_eq!(tokens, vec!["Doe, Jane", "Roe, Richard"]);
    }

    #[test]
    fn test_empty_field_yields_one_empty_token() {
        let tokens: Vec<&str> = split_authors("").collect();
        assert_eq!(tokens, vec![""]);
    }

    #[test]
    fn test_duplicates_and_empty_tokens_are_kept() {
        let tokens: Vec<&str> = split_authors("Doe, J;Doe, J;").collect();
        assert_eq!(tokens, vec!["Doe, J", "Doe, J", ""]);
    }

    #[test]
    fn test_split_name_on_first_comma() {
        assert_eq!(split_name("Doe, Jane"), ("Doe", " Jane"));
        assert_eq!(split_name("Doe, Jane, Jr."), ("Doe", " Jane, Jr."));
    }

    #[test]
    fn test_split_name_without_comma() {
        assert_eq!(split_name("Cher"), ("Cher", ""));
        assert_eq!(split_name(""), ("", ""));
    }
}
