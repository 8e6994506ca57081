//! MiniJinja filter registration.
//!
//! Filters hand back [`Painted`] objects rather than strings, so the output
//! of one filter can be fed to another and still nest correctly:
//! `{{ name | paint("blue") | paint("bold") }}`.

use std::fmt;
use std::sync::Arc;

use minijinja::value::{Object, ObjectRepr, Rest, Value as JinjaValue};
use minijinja::Environment;

use super::painted::{Painted, Template};
use super::value::Value;
use crate::style::Style;
use crate::theme::Theme;

/// Default prefix shown when a style name or spec cannot be resolved.
pub const DEFAULT_MISSING_STYLE_INDICATOR: &str = "(!?)";

impl Object for Painted {
    fn repr(self: &Arc<Self>) -> ObjectRepr {
        ObjectRepr::Plain
    }

    fn render(self: &Arc<Self>, f: &mut fmt::Formatter<'_>) -> fmt::Result
    where
        Self: Sized + 'static,
    {
        fmt::Display::fmt(self.as_ref(), f)
    }
}

/// Converts a template value into a renderer value.
///
/// Only values produced by this crate's filters count as nested styles; any
/// other object, however it is shaped, is stringified.
pub(crate) fn to_value(value: &JinjaValue) -> Value {
    if let Some(painted) = value.downcast_object_ref::<Painted>() {
        return Value::Styled(painted.clone());
    }
    if value.is_undefined() {
        return Value::Undefined;
    }
    if value.is_none() {
        return Value::Null;
    }
    Value::Text(value.to_string())
}

fn missing(text: &str) -> JinjaValue {
    JinjaValue::from(format!("{} {}", DEFAULT_MISSING_STYLE_INDICATOR, text))
}

fn painted(style: &Style, template: Template) -> JinjaValue {
    JinjaValue::from_object(style.wrap(template))
}

/// Registers the built-in filters and functions on a minijinja environment.
///
/// - `style(name)`: applies a theme entry
/// - `paint(spec)`: applies a dotted style spec such as `"red.bold"`
/// - `styled(spec, *parts)`: renders `parts` back to back in one style
pub(crate) fn register_filters(env: &mut Environment<'static>, theme: Theme) {
    env.add_filter("style", move |value: JinjaValue, name: String| -> JinjaValue {
        let value = to_value(&value);
        match theme.get(&name) {
            Some(style) => painted(style, Template::new().value(value)),
            None => missing(&value.to_string()),
        }
    });

    env.add_filter("paint", |value: JinjaValue, spec: String| -> JinjaValue {
        let value = to_value(&value);
        match Style::parse(&spec) {
            Ok(style) => painted(&style, Template::new().value(value)),
            Err(_) => missing(&value.to_string()),
        }
    });

    env.add_function("styled", |spec: String, parts: Rest<JinjaValue>| -> JinjaValue {
        let template = parts
            .iter()
            .fold(Template::new(), |template, part| template.value(to_value(part)));
        match Style::parse(&spec) {
            Ok(style) => painted(&style, template),
            Err(_) => {
                let text: String = template.values().iter().map(Value::to_string).collect();
                missing(&text)
            }
        }
    });
}
