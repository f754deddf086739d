//! JSON layout of dataset lines.
//!
//! Existing label-pair datasets were produced with `", "` and `": "`
//! separators and every non-ASCII character escaped. [`SpacedAsciiFormatter`]
//! reproduces that layout byte for byte so regenerated files diff cleanly.

use std::io::{self, Write};

use serde_json::ser::Formatter;

/// Compact JSON with spaced separators and `\uXXXX` escapes for non-ASCII.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpacedAsciiFormatter;

impl Formatter for SpacedAsciiFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }

    // serde_json already escapes quotes, backslashes and C0 controls before
    // handing over fragments; DEL and everything above ASCII is left to us.
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        let bytes = fragment.as_bytes();
        let mut start = 0;
        for (i, c) in fragment.char_indices() {
            if c.is_ascii() && c != '\x7f' {
                continue;
            }
            writer.write_all(&bytes[start..i])?;
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = i + c.len_utf8();
        }
        writer.write_all(&bytes[start..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render(value: &serde_json::Value) -> String {
        let mut out = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut out, SpacedAsciiFormatter);
        serde::Serialize::serialize(value, &mut ser).expect("serialize");
        String::from_utf8(out).expect("ascii output")
    }

    #[test]
    fn test_spaced_separators() {
        let value = json!({"label_pair": [{"key": "title", "val": "Dune"}]});
        assert_eq!(
            render(&value),
            r#"{"label_pair": [{"key": "title", "val": "Dune"}]}"#
        );
    }

    #[test]
    fn test_empty_containers() {
        assert_eq!(render(&json!([])), "[]");
        assert_eq!(render(&json!({})), "{}");
    }

    #[test]
    fn test_non_ascii_escaped_lowercase() {
        assert_eq!(render(&json!("\u{c9}mile Zola")), r#""\u00c9mile Zola""#);
        assert_eq!(render(&json!("Stra\u{df}e")), r#""Stra\u00dfe""#);
    }

    #[test]
    fn test_astral_plane_uses_surrogate_pair() {
        assert_eq!(render(&json!("a\u{1f600}b")), r#""a\ud83d\ude00b""#);
    }

    #[test]
    fn test_control_and_delete_escapes() {
        assert_eq!(render(&json!("a\"b\\c\nd\te")), r#""a\"b\\c\nd\te""#);
        assert_eq!(render(&json!("\u{1}\u{7f}")), r#""\u0001\u007f""#);
    }

    #[test]
    fn test_null_value() {
        assert_eq!(render(&json!({"val": null})), r#"{"val": null}"#);
    }
}
