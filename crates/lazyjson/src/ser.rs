//! Compact JSON rendering.

use crate::{
    builder::Materialize,
    error::ParserError,
    options::WriterOptions,
    value::{Json, Lazy},
};

/// Appends the JSON text of `value` to `out`.
///
/// Pending containers are built into temporary trees for the duration of the
/// call; `value` itself is left untouched.
///
/// # Errors
///
/// Returns the syntax error of the first pending container that cannot be
/// built. `out` may hold partial output in that case.
pub fn write_json(value: &Json, out: &mut String, options: WriterOptions) -> Result<(), ParserError> {
    match value {
        Json::Null => out.push_str("null"),
        Json::Boolean(b) => out.push_str(if *b { "true" } else { "false" }),
        Json::Number(n) => out.push_str(&format_number(*n)),
        Json::String(s) => write_escaped_string(s, out),
        Json::Array(lazy) => with_children(lazy, |items| {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_json(item, out, options)?;
            }
            out.push(']');
            Ok(())
        })?,
        Json::Object(lazy) => with_children(lazy, |members| {
            let separator = if options.spaced_members { ", " } else { "," };
            out.push('{');
            for (i, (key, member)) in members.iter().enumerate() {
                if i > 0 {
                    out.push_str(separator);
                }
                write_escaped_string(key, out);
                out.push(':');
                write_json(member, out, options)?;
            }
            out.push('}');
            Ok(())
        })?,
    }
    Ok(())
}

fn with_children<T, F>(lazy: &Lazy<T>, f: F) -> Result<(), ParserError>
where
    T: Materialize,
    F: FnOnce(&T) -> Result<(), ParserError>,
{
    match lazy {
        Lazy::Materialized(children) => f(children),
        Lazy::Pending(span) => f(&T::materialize(span)?),
    }
}

/// Fixed notation with six fractional digits, so `1883.0` renders as
/// `1883.000000`.
#[must_use]
pub fn format_number(n: f64) -> String {
    format!("{n:.6}")
}

/// Writes `src` as a quoted string.
///
/// Only `"`, `\` and line feeds are escaped; every other character, control
/// characters included, is written as is.
pub fn write_escaped_string(src: &str, out: &mut String) {
    out.reserve(src.len() + 2);
    out.push('"');
    for c in src.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out.push('"');
}
