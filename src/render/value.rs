//! Values interpolated into templates.

use std::borrow::Cow;
use std::fmt;

use super::painted::Painted;
use super::renderer::render_into;
use crate::style::Style;

/// A value placed between two template fragments.
///
/// Primitives are stringified verbatim. [`Value::Styled`] and
/// [`Value::Style`] carry the style they came from, which lets an enclosing
/// render restore its own style after the nested one ends.
///
/// Anything else that implements `Display` can be captured with
/// [`Value::display`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    /// Rendered as `null`
    Null,
    /// Rendered as `undefined`
    Undefined,
    /// A value already paired with a style
    Styled(Painted),
    /// A bare style, rendered as an empty template of that style
    Style(Style),
}

impl Value {
    /// Captures any displayable value as text.
    pub fn display<T: fmt::Display + ?Sized>(value: &T) -> Value {
        Value::Text(value.to_string())
    }

    /// Captures a value through its `Debug` representation.
    pub fn debug<T: fmt::Debug + ?Sized>(value: &T) -> Value {
        Value::Text(format!("{:?}", value))
    }

    /// The style this value carries, if any.
    pub fn style(&self) -> Option<&Style> {
        match self {
            Value::Styled(painted) => Some(painted.style()),
            Value::Style(style) => Some(style),
            _ => None,
        }
    }

    /// The escape-wrapped form of a styled value, ending in a reset.
    pub(crate) fn nested_output(&self) -> Option<String> {
        match self {
            Value::Styled(painted) => Some(painted.render_with(true)),
            Value::Style(style) => Some(style.render_with(&[""], &[], true)),
            _ => None,
        }
    }

    /// Writes the value with no escape sequences at all.
    pub(crate) fn write_plain<W: fmt::Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        match self {
            Value::Text(text) => out.write_str(text),
            Value::Int(n) => write!(out, "{}", n),
            Value::UInt(n) => write!(out, "{}", n),
            Value::Float(n) => write!(out, "{}", n),
            Value::Bool(b) => write!(out, "{}", b),
            Value::Null => out.write_str("null"),
            Value::Undefined => out.write_str("undefined"),
            Value::Styled(painted) => render_into(
                out,
                painted.style(),
                painted.template().fragments(),
                painted.template().values(),
                false,
            ),
            Value::Style(_) => Ok(()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Styled(painted) => fmt::Display::fmt(painted, f),
            Value::Style(style) => f.write_str(&style.render(&[""], &[])),
            other => other.write_plain(f),
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<&String> for Value {
    fn from(text: &String) -> Self {
        Value::Text(text.clone())
    }
}

impl From<Cow<'_, str>> for Value {
    fn from(text: Cow<'_, str>) -> Self {
        Value::Text(text.into_owned())
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Text(c.to_string())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! impl_from_int {
    ($variant:ident as $target:ty: $($source:ty),+) => {
        $(
            impl From<$source> for Value {
                fn from(n: $source) -> Self {
                    Value::$variant(n as $target)
                }
            }
        )+
    };
}

impl_from_int!(Int as i64: i8, i16, i32, i64, isize);
impl_from_int!(UInt as u64: u8, u16, u32, u64, usize);

impl From<f32> for Value {
    /// Goes through the `f32`'s shortest text so `0.1f32` stays `0.1`.
    fn from(n: f32) -> Self {
        Value::Float(n.to_string().parse().unwrap_or(f64::from(n)))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<Painted> for Value {
    fn from(painted: Painted) -> Self {
        Value::Styled(painted)
    }
}

impl From<&Painted> for Value {
    fn from(painted: &Painted) -> Self {
        Value::Styled(painted.clone())
    }
}

impl From<Style> for Value {
    fn from(style: Style) -> Self {
        Value::Style(style)
    }
}

impl From<&Style> for Value {
    fn from(style: &Style) -> Self {
        Value::Style(style.clone())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{blue, red};

    fn plain(value: &Value) -> String {
        let mut out = String::new();
        value.write_plain(&mut out).unwrap();
        out
    }

    #[test]
    fn test_primitives_stringify() {
        assert_eq!(plain(&Value::from("text")), "text");
        assert_eq!(plain(&Value::from(-42)), "-42");
        assert_eq!(plain(&Value::from(7usize)), "7");
        assert_eq!(plain(&Value::from(1.5)), "1.5");
        assert_eq!(plain(&Value::from(true)), "true");
        assert_eq!(plain(&Value::from('x')), "x");
    }

    #[test]
    fn test_f32_keeps_its_literal_text() {
        assert_eq!(plain(&Value::from(0.1f32)), "0.1");
        assert_eq!(plain(&Value::from(2.75f32)), "2.75");
        assert_eq!(plain(&Value::from(f32::INFINITY)), "inf");
        assert_eq!(
            red().render_with(&["x=", ""], &[Value::from(0.1f32)], false),
            "x=0.1"
        );
    }

    #[test]
    fn test_null_and_undefined() {
        assert_eq!(plain(&Value::Null), "null");
        assert_eq!(plain(&Value::Undefined), "undefined");
        assert_eq!(plain(&Value::from(None::<i32>)), "null");
        assert_eq!(plain(&Value::from(Some(3))), "3");
    }

    #[test]
    fn test_display_and_debug_capture() {
        let path = std::path::Path::new("/tmp/x");
        assert_eq!(plain(&Value::display(&path.display())), "/tmp/x");
        assert_eq!(plain(&Value::debug(&vec![1, 2])), "[1, 2]");
    }

    #[test]
    fn test_styled_values_carry_style() {
        let painted = red().paint("x");
        assert_eq!(Value::from(&painted).style(), Some(&red()));
        assert_eq!(Value::from(blue()).style(), Some(&blue()));
        assert_eq!(Value::from("x").style(), None);
    }

    #[test]
    fn test_plain_styled_value_has_no_escapes() {
        let value = Value::from(red().paint("inner"));
        assert_eq!(plain(&value), "inner");
        assert_eq!(plain(&Value::from(blue())), "");
    }

    #[test]
    fn test_nested_output_ends_with_reset() {
        let value = Value::from(blue());
        assert_eq!(
            value.nested_output().as_deref(),
            Some("\x1b[34m\x1b[0m")
        );
        assert_eq!(Value::from(1).nested_output(), None);
    }
}
