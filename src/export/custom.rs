//! Custom `key="value"` line output.
//!
//! One record per line: `{name1="v1",name2="v2"}`. Values are written
//! verbatim between double quotes; callers escape them beforehand (see
//! [`normalize_field`](crate::transform::normalize_field)).

use std::io::Write;

use crate::error_handling::ConvertError;

/// Writes one brace-delimited custom line.
pub fn write_custom_line<'a, 'b, W, I>(writer: &mut W, fields: I) -> Result<(), ConvertError>
where
    W: Write,
    I: IntoIterator<Item = (&'a str, &'b str)>,
{
    writer.write_all(b"{")?;
    for (i, (name, value)) in fields.into_iter().enumerate() {
        if i > 0 {
            writer.write_all(b",")?;
        }
        write!(writer, "{name}=\"{value}\"")?;
    }
    writer.write_all(b"}\n")?;
    Ok(())
}
