//! Named styles for templates and configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::StyleError;
use crate::style::Style;

/// A named collection of styles used by the `style` template filter.
///
/// Themes (de)serialize as a map from names to style specs, so they can be
/// kept in configuration files:
///
/// ```rust
/// use tinge::{Style, Theme};
///
/// let theme: Theme = serde_json::from_str(r#"{
///     "error": "red.bold",
///     "muted": "grey"
/// }"#).unwrap();
///
/// assert!(Style::same_instance(theme.get("error").unwrap(), &tinge::red().bold()));
/// assert!(theme.has("muted"));
/// ```
///
/// Or built in code with the fluent API:
///
/// ```rust
/// use tinge::{StyleName, Theme};
///
/// let theme = Theme::new()
///     .add("accent", tinge::cyan().bold())
///     .add("warning", StyleName::Yellow)
///     .add_spec("timestamp", "dim.italic")
///     .unwrap();
/// assert_eq!(theme.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Theme {
    styles: BTreeMap<String, Style>,
}

impl Theme {
    /// Creates an empty theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named style, returning an updated theme for chaining.
    ///
    /// If a style with the same name exists, it is replaced.
    pub fn add<S: Into<Style>>(mut self, name: &str, style: S) -> Self {
        self.styles.insert(name.to_string(), style.into());
        self
    }

    /// Adds a named style given as a dotted spec such as `"red.bold"`.
    ///
    /// # Errors
    ///
    /// Returns the [`StyleError`] from parsing the spec.
    pub fn add_spec(self, name: &str, spec: &str) -> Result<Self, StyleError> {
        let style = Style::parse(spec)?;
        Ok(self.add(name, style))
    }

    pub fn get(&self, name: &str) -> Option<&Style> {
        self.styles.get(name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Style names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.styles.keys().map(String::as_str)
    }
}
