//! Named and inline templates with the styling helpers installed.

use minijinja::{Environment, Error};
use serde::Serialize;

use super::filters::register_filters;
use crate::theme::Theme;

/// A MiniJinja environment wired to a [`Theme`].
///
/// Three helpers are available inside templates:
///
/// - `value | style("name")` looks `name` up in the theme
/// - `value | paint("red.bold")` takes a dotted style spec
/// - `styled("spec", part, ...)` paints the concatenated parts
///
/// Each returns a painted value, so painting the output of another helper
/// nests: the inner style ends by switching the outer one back on. Escapes
/// are only written if color is enabled when the template renders.
///
/// # Example
///
/// ```rust
/// use tinge::{Renderer, Theme};
///
/// let mut renderer = Renderer::new(Theme::new().add("key", tinge::bold()));
/// renderer
///     .add_template("pair", r#"{{ k | style("key") }}={{ v | paint("yellow") }}"#)
///     .unwrap();
///
/// tinge::set_enabled(true);
/// let out = renderer
///     .render("pair", &serde_json::json!({ "k": "depth", "v": 3 }))
///     .unwrap();
/// assert_eq!(out, "\x1b[1mdepth\x1b[0m=\x1b[33m3\x1b[0m");
/// ```
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    /// Creates a renderer whose `style` filter resolves names in `theme`.
    pub fn new(theme: Theme) -> Self {
        let mut env = Environment::new();
        register_filters(&mut env, theme);
        Self { env }
    }

    /// Compiles `source` and stores it under `name`, replacing any earlier
    /// template of that name.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), Error> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())
    }

    /// Renders the template stored under `name` against `context`.
    ///
    /// # Errors
    ///
    /// Fails if no template has that name, or if evaluation fails (a bad
    /// `paint` spec is not an error, it shows the missing-style marker).
    pub fn render<T: Serialize>(&self, name: &str, context: &T) -> Result<String, Error> {
        self.env.get_template(name)?.render(context)
    }

    /// Renders template source directly, with the same helpers available.
    pub fn render_str<T: Serialize>(&self, source: &str, context: &T) -> Result<String, Error> {
        self.env.render_str(source, context)
    }
}
