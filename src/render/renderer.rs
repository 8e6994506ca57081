//! The template renderer at the heart of every styled string.
//!
//! A render walks `START (fragment value?)* RESET`. Nested styled values are
//! rendered on their own and their trailing reset is swapped for the outer
//! start sequence, so once the inner style ends the outer one resumes
//! instead of dropping back to unstyled text.

use std::fmt;

use super::value::Value;
use crate::style::{Style, RESET};

/// Writes `fragments` interleaved with `values` in `style`.
///
/// With `enabled` unset nothing but the fragments and the plain form of the
/// values is written. Writing is the only fallible step; into a `String` it
/// never fails.
pub(crate) fn render_into<W, S>(
    out: &mut W,
    style: &Style,
    fragments: &[S],
    values: &[Value],
    enabled: bool,
) -> fmt::Result
where
    W: fmt::Write + ?Sized,
    S: AsRef<str>,
{
    if !enabled {
        for (i, fragment) in fragments.iter().enumerate() {
            out.write_str(fragment.as_ref())?;
            if let Some(value) = values.get(i) {
                value.write_plain(out)?;
            }
        }
        return Ok(());
    }

    let start = style.start_sequence();
    out.write_str(start)?;
    for (i, fragment) in fragments.iter().enumerate() {
        out.write_str(fragment.as_ref())?;
        if let Some(value) = values.get(i) {
            match value.nested_output() {
                Some(nested) => splice_nested(out, &nested, start)?,
                None => value.write_plain(out)?,
            }
        }
    }
    out.write_str(RESET)
}

/// Writes a nested render, handing control back to `outer_start` at its end.
fn splice_nested<W: fmt::Write + ?Sized>(
    out: &mut W,
    nested: &str,
    outer_start: &str,
) -> fmt::Result {
    match nested.strip_suffix(RESET) {
        Some(body) => {
            out.write_str(body)?;
            out.write_str(outer_start)
        }
        None => out.write_str(nested),
    }
}
