//! Templates and deferred styled output.

use std::fmt;

use unicode_width::UnicodeWidthStr;

use super::renderer::render_into;
use super::value::Value;
use crate::enablement::is_enabled;
use crate::style::Style;

/// Literal fragments interleaved with interpolated values.
///
/// A well-formed template has exactly one more fragment than values. The
/// builder methods keep that shape; [`Template::from_parts`] accepts any
/// shape and rendering copes with it (surplus values are dropped, missing
/// values leave the remaining fragments unadorned).
///
/// # Example
///
/// ```rust
/// use tinge::Template;
///
/// let template = Template::new().text("Hello, ").value("World").text("!");
/// assert_eq!(template.fragments(), &["Hello, ", "!"]);
/// assert_eq!(template.values().len(), 1);
///
/// let out = tinge::green().render_with(template.fragments(), template.values(), false);
/// assert_eq!(out, "Hello, World!");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    fragments: Vec<String>,
    values: Vec<Value>,
}

impl Template {
    /// Creates a template holding a single empty fragment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a template from raw parts without checking their shape.
    pub fn from_parts(fragments: Vec<String>, values: Vec<Value>) -> Self {
        Self { fragments, values }
    }

    /// Appends literal text after everything added so far.
    pub fn text<S: AsRef<str>>(mut self, text: S) -> Self {
        self.pad_fragments();
        if let Some(last) = self.fragments.last_mut() {
            last.push_str(text.as_ref());
        }
        self
    }

    /// Appends a value, opening a new fragment after it.
    pub fn value<V: Into<Value>>(mut self, value: V) -> Self {
        self.pad_fragments();
        self.values.push(value.into());
        self.fragments.push(String::new());
        self
    }

    /// Restores one fragment after every value on a short `from_parts` template.
    fn pad_fragments(&mut self) {
        while self.fragments.len() <= self.values.len() {
            self.fragments.push(String::new());
        }
    }

    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }
}

impl Default for Template {
    fn default() -> Self {
        Self {
            fragments: vec![String::new()],
            values: Vec::new(),
        }
    }
}

/// A template paired with the style it should be rendered in.
///
/// Rendering is deferred until the value is displayed, so the global
/// enablement flag is read at that point. Interpolating a `Painted` into
/// another style's template nests it: the inner reset is replaced by the
/// outer style's start sequence.
///
/// # Example
///
/// ```rust
/// use tinge::{Template, Value};
///
/// let inner = tinge::blue().paint("Blue");
/// let template = Template::new().text("Red ").value(inner).text(" Red");
///
/// let out = tinge::red().render_with(template.fragments(), template.values(), true);
/// assert_eq!(out, "\x1b[31mRed \x1b[34mBlue\x1b[31m Red\x1b[0m");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Painted {
    style: Style,
    template: Template,
}

impl Painted {
    pub fn new(style: Style, template: Template) -> Self {
        Self { style, template }
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    /// Renders with an explicit enablement decision.
    pub fn render_with(&self, enabled: bool) -> String {
        self.style
            .render_with(self.template.fragments(), self.template.values(), enabled)
    }

    /// The text without any escape sequences.
    pub fn plain(&self) -> String {
        self.render_with(false)
    }

    /// Display width of the plain text in terminal columns.
    pub fn width(&self) -> usize {
        self.plain().width()
    }
}

impl fmt::Display for Painted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_into(
            f,
            &self.style,
            self.template.fragments(),
            self.template.values(),
            is_enabled(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{blue, bold, red, set_enabled};
    use serial_test::serial;

    #[test]
    fn test_builder_keeps_shape() {
        let template = Template::new().value(1).value(2).text("end");
        assert_eq!(template.fragments(), &["", "", "end"]);
        assert_eq!(template.values(), &[Value::from(1), Value::from(2)]);
    }

    #[test]
    fn test_text_merges_into_last_fragment() {
        let template = Template::new().text("a").text("b");
        assert_eq!(template.fragments(), &["ab"]);
        assert!(template.values().is_empty());
    }

    #[test]
    fn test_builder_repairs_short_fragments() {
        let template = Template::from_parts(Vec::new(), Vec::new()).value("x");
        assert_eq!(template.fragments(), &["", ""]);

        let template = Template::from_parts(Vec::new(), Vec::new()).text("only");
        assert_eq!(template.fragments(), &["only"]);
    }

    #[test]
    fn test_text_lands_after_values_on_short_template() {
        let template = Template::from_parts(Vec::new(), vec![Value::from(1)]).text("after");
        assert_eq!(template.fragments(), &["", "after"]);

        let out = red().render_with(template.fragments(), template.values(), false);
        assert_eq!(out, "1after");
    }

    #[test]
    fn test_paint_renders_value() {
        let painted = red().paint("hi");
        assert_eq!(painted.render_with(true), "\x1b[31mhi\x1b[0m");
        assert_eq!(painted.plain(), "hi");
    }

    #[test]
    fn test_wrap_renders_template() {
        let painted = bold().wrap(Template::new().text("n = ").value(3));
        assert_eq!(painted.render_with(true), "\x1b[1mn = 3\x1b[0m");
    }

    #[test]
    fn test_width_ignores_escapes() {
        let painted = red().wrap(Template::new().text("ab").value(blue().paint("日本")));
        assert_eq!(painted.width(), 6);
    }

    #[test]
    #[serial]
    fn test_display_reads_flag_at_display_time() {
        set_enabled(false);
        let painted = red().paint("late");
        assert_eq!(painted.to_string(), "late");

        set_enabled(true);
        assert_eq!(painted.to_string(), "\x1b[31mlate\x1b[0m");
    }
}
