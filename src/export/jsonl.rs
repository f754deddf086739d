//! JSONL (JSON Lines) output.
//!
//! Each line is one complete label record rendered with
//! [`SpacedAsciiFormatter`](super::SpacedAsciiFormatter).

use std::io::Write;

use serde::Serialize;

use super::format::SpacedAsciiFormatter;
use crate::error_handling::ConvertError;

/// Writes `value` as one JSON line.
pub fn write_json_line<W, T>(writer: &mut W, value: &T) -> Result<(), ConvertError>
where
    W: Write,
    T: Serialize + ?Sized,
{
    let mut ser = serde_json::Serializer::with_formatter(&mut *writer, SpacedAsciiFormatter);
    value.serialize(&mut ser)?;
    writer.write_all(b"\n")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LabelPair, LabelRecord};

    #[test]
    fn test_one_record_per_line() {
        let mut out = Vec::new();
        let first = LabelRecord::new("label_pair", vec![LabelPair::new("title", "A")]);
        let second = LabelRecord::new("label_pair", vec![LabelPair::new("title", "B")]);
        write_json_line(&mut out, &first).expect("write");
        write_json_line(&mut out, &second).expect("write");

        let text = String::from_utf8(out).expect("utf8");
        assert_eq!(
            text,
            "{\"label_pair\": [{\"key\": \"title\", \"val\": \"A\"}]}\n\
             {\"label_pair\": [{\"key\": \"title\", \"val\": \"B\"}]}\n"
        );
    }

    #[test]
    fn test_lines_decode_back() {
        let mut out = Vec::new();
        let record = LabelRecord::zipped(
            "label_pair",
            &["author", "year"],
            [Some("Zo\u{eb} \"Q\""), None],
        );
        write_json_line(&mut out, &record).expect("write");

        let value: serde_json::Value = serde_json::from_slice(&out).expect("decode");
        assert_eq!(value["label_pair"][0]["val"], "Zo\u{eb} \"Q\"");
        assert!(value["label_pair"][1]["val"].is_null());
    }
}
