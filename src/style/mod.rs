//! Composable styles.
//!
//! This module provides the styling primitives:
//!
//! - [`CodeSet`]: A canonical (sorted, deduplicated) set of SGR codes
//! - [`StyleRegistry`]: The cache that hands out one [`Style`] per code set
//! - [`Style`]: An immutable, shared style that can be chained and rendered
//!
//! Styles are never constructed directly. Every path (the crate-level entry
//! points, chaining, [`Style::parse`], [`Style::from_codes`]) goes through the
//! global registry, so equal code sets always yield the same instance.

mod codes;
mod registry;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::Arc;

use once_cell::sync::{Lazy, OnceCell};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::enablement::is_enabled;
use crate::error::StyleError;
use crate::render::{render_into, Painted, Template, Value};
use crate::table::{StyleName, CHAINABLE_COUNT};

pub use codes::{CodeSet, StyleCode};
pub use registry::StyleRegistry;

/// Escape sequence that clears every attribute.
pub const RESET: &str = "\x1b[0m";

/// One interned style per table entry, indexed by `StyleName as usize`.
static NAMED: Lazy<Vec<Style>> = Lazy::new(|| {
    StyleName::ALL
        .iter()
        .map(|name| StyleRegistry::global().intern(name.codes().to_vec(), false))
        .collect()
});

struct StyleInner {
    codes: CodeSet,
    start: String,
    derived: [OnceCell<Style>; CHAINABLE_COUNT],
}

/// An immutable combination of style codes.
///
/// `Style` is a cheap handle (an `Arc`) to an instance owned by the
/// [`StyleRegistry`]. Chaining methods such as [`Style::bold`] combine codes
/// and return the registry's instance for the result, so the order in which
/// styles are chained never matters:
///
/// ```rust
/// use tinge::Style;
///
/// let a = tinge::blue().bold();
/// let b = tinge::bold().blue();
/// assert!(Style::same_instance(&a, &b));
/// assert_eq!(a.start_sequence(), "\x1b[1;34m");
/// ```
///
/// Rendering reads the global enablement flag at call time:
///
/// ```rust
/// use tinge::Value;
///
/// let red = tinge::red();
/// let out = red.render_with(&["Hello, ", "!"], &[Value::from("World")], true);
/// assert_eq!(out, "\x1b[31mHello, World!\x1b[0m");
///
/// let plain = red.render_with(&["Hello, ", "!"], &[Value::from("World")], false);
/// assert_eq!(plain, "Hello, World!");
/// ```
#[derive(Clone)]
pub struct Style(Arc<StyleInner>);

impl Style {
    /// Builds an unregistered style. Only the registry calls this.
    pub(crate) fn from_set(codes: CodeSet) -> Self {
        let start = format!("\x1b[{}m", codes);
        Style(Arc::new(StyleInner {
            codes,
            start,
            derived: std::array::from_fn(|_| OnceCell::new()),
        }))
    }

    /// The style for a single table entry.
    pub fn named(name: StyleName) -> Style {
        match NAMED.get(name as usize) {
            Some(style) => style.clone(),
            None => StyleRegistry::global().intern(name.codes().to_vec(), false),
        }
    }

    /// The style for an arbitrary collection of codes.
    pub fn from_codes<I: IntoIterator<Item = StyleCode>>(codes: I) -> Style {
        StyleRegistry::global().intern_set(CodeSet::new(codes))
    }

    /// Parses a dotted style spec such as `"red.bold"` or `"bgBlue.underline"`.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::EmptySpec`] for an empty spec,
    /// [`StyleError::UnknownStyle`] for a name outside the table and
    /// [`StyleError::NotChainable`] for `reset`.
    pub fn parse(spec: &str) -> Result<Style, StyleError> {
        if spec.trim().is_empty() {
            return Err(StyleError::EmptySpec);
        }

        let mut style: Option<Style> = None;
        for part in spec.split('.') {
            let name: StyleName = part.parse()?;
            if !name.is_chainable() {
                return Err(StyleError::NotChainable {
                    name: name.name().to_string(),
                });
            }
            style = Some(match style {
                None => Style::named(name),
                Some(style) => style.derive(name),
            });
        }
        style.ok_or(StyleError::EmptySpec)
    }

    /// Returns this style combined with a table entry.
    ///
    /// The result is memoized on this instance. Deriving `reset`, or an entry
    /// whose codes are already present, returns the style itself.
    pub fn derive(&self, name: StyleName) -> Style {
        let Some(slot) = name.chain_slot() else {
            return self.clone();
        };
        if name.codes().iter().all(|code| self.0.codes.contains(*code)) {
            return self.clone();
        }

        self.0.derived[slot]
            .get_or_init(|| {
                StyleRegistry::global().intern_set(self.0.codes.union(name.codes()))
            })
            .clone()
    }

    pub fn codes(&self) -> &CodeSet {
        &self.0.codes
    }

    /// The escape sequence that switches this style on, e.g. `"\x1b[1;31m"`.
    pub fn start_sequence(&self) -> &str {
        &self.0.start
    }

    /// Whether both handles point at the same registry instance.
    pub fn same_instance(a: &Style, b: &Style) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }

    /// Describes the style as a dotted spec that [`Style::parse`] accepts.
    ///
    /// Each code is named after the first table entry carrying it, so `90`
    /// comes back as `grey`. Returns `None` if a code has no table entry or
    /// the style carries no codes.
    pub fn spec(&self) -> Option<String> {
        let mut names = Vec::with_capacity(self.0.codes.len());
        for code in self.0.codes.as_slice() {
            let name = StyleName::CHAINABLE
                .iter()
                .find(|name| name.codes() == [*code])?;
            names.push(name.name());
        }
        if names.is_empty() {
            None
        } else {
            Some(names.join("."))
        }
    }

    /// Renders a template given as fragments and the values between them,
    /// honoring the current global enablement flag.
    pub fn render<S: AsRef<str>>(&self, fragments: &[S], values: &[Value]) -> String {
        self.render_with(fragments, values, is_enabled())
    }

    /// Renders with an explicit enablement decision instead of the global flag.
    pub fn render_with<S: AsRef<str>>(
        &self,
        fragments: &[S],
        values: &[Value],
        enabled: bool,
    ) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = render_into(&mut out, self, fragments, values, enabled);
        out
    }

    /// Renders a [`Template`] with the current global enablement flag.
    pub fn apply(&self, template: &Template) -> String {
        self.render(template.fragments(), template.values())
    }

    /// Pairs a single value with this style for deferred rendering.
    ///
    /// The result remembers its style, so interpolating it into another
    /// style's template hands control back to that outer style afterwards.
    pub fn paint<V: Into<Value>>(&self, value: V) -> Painted {
        Painted::new(self.clone(), Template::new().value(value))
    }

    /// Pairs a whole template with this style for deferred rendering.
    pub fn wrap(&self, template: Template) -> Painted {
        Painted::new(self.clone(), template)
    }
}

impl fmt::Debug for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Style").field(&self.0.codes.as_slice()).finish()
    }
}

impl PartialEq for Style {
    fn eq(&self, other: &Self) -> bool {
        Style::same_instance(self, other) || self.0.codes == other.0.codes
    }
}

impl Eq for Style {}

impl Hash for Style {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.codes.hash(state);
    }
}

impl FromStr for Style {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Style::parse(s)
    }
}

impl From<StyleName> for Style {
    fn from(name: StyleName) -> Self {
        Style::named(name)
    }
}

impl Serialize for Style {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.spec() {
            Some(spec) => serializer.serialize_str(&spec),
            None => Err(serde::ser::Error::custom(format!(
                "style with codes [{}] has no named spec",
                self.0.codes
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for Style {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let spec = String::deserialize(deserializer)?;
        Style::parse(&spec).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{bg_yellow, blue, bold, gray, grey, italic, red, underline};

    #[test]
    fn test_named_styles_are_interned() {
        assert!(Style::same_instance(&red(), &red()));
        assert!(Style::same_instance(&grey(), &gray()));
        assert!(Style::same_instance(
            &Style::named(StyleName::BlackBright),
            &grey()
        ));
    }

    #[test]
    fn test_chain_order_is_irrelevant() {
        let a = blue().bold();
        let b = bold().blue();
        assert!(Style::same_instance(&a, &b));
        assert_eq!(a.codes().as_slice(), &[1, 34]);
    }

    #[test]
    fn test_three_deep_chain() {
        let style = red().bold().underline();
        assert_eq!(style.start_sequence(), "\x1b[1;4;31m");
        assert!(Style::same_instance(&style, &underline().red().bold()));
    }

    #[test]
    fn test_chain_with_background() {
        let style = red().bg_yellow().underline();
        assert_eq!(style.start_sequence(), "\x1b[4;31;43m");
        assert!(Style::same_instance(&style, &bg_yellow().underline().red()));
    }

    #[test]
    fn test_chaining_does_not_modify_base() {
        let base = blue();
        let _underlined = base.underline();
        assert_eq!(base.start_sequence(), "\x1b[34m");
        assert_eq!(blue().codes().as_slice(), &[34]);
    }

    #[test]
    fn test_derive_is_memoized() {
        let style = italic();
        let first = style.derive(StyleName::Cyan);
        let second = style.cyan();
        assert!(Style::same_instance(&first, &second));
    }

    #[test]
    fn test_derive_existing_code_returns_self() {
        let style = red().bold();
        assert!(Style::same_instance(&style.bold(), &style));
        assert!(Style::same_instance(&grey().gray(), &grey()));
    }

    #[test]
    fn test_derive_reset_returns_self() {
        let style = red();
        assert!(Style::same_instance(&style.derive(StyleName::Reset), &style));
    }

    #[test]
    fn test_from_codes_matches_chain() {
        let style = Style::from_codes([31, 1, 1]);
        assert!(Style::same_instance(&style, &red().bold()));
    }

    #[test]
    fn test_parse_spec() {
        let style = Style::parse("red.bold.underline").unwrap();
        assert!(Style::same_instance(&style, &red().bold().underline()));

        let camel: Style = "bgYellowBright.italic".parse().unwrap();
        assert_eq!(camel.codes().as_slice(), &[3, 103]);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Style::parse(""), Err(StyleError::EmptySpec));
        assert_eq!(Style::parse("  "), Err(StyleError::EmptySpec));
        assert_eq!(
            Style::parse("red.mauve"),
            Err(StyleError::UnknownStyle {
                name: "mauve".to_string()
            })
        );
        assert_eq!(
            Style::parse("red.reset"),
            Err(StyleError::NotChainable {
                name: "reset".to_string()
            })
        );
    }

    #[test]
    fn test_spec_names_codes() {
        assert_eq!(red().bold().spec().as_deref(), Some("bold.red"));
        assert_eq!(Style::named(StyleName::GrayBright).spec().as_deref(), Some("grey"));
        assert_eq!(Style::from_codes([38]).spec(), None);
        assert_eq!(Style::from_codes([]).spec(), None);
    }

    #[test]
    fn test_serde_round_trip_through_spec() {
        let style = red().bg_blue();
        let json = serde_json::to_string(&style).unwrap();
        assert_eq!(json, "\"red.bg_blue\"");

        let back: Style = serde_json::from_str(&json).unwrap();
        assert!(Style::same_instance(&back, &style));
    }

    #[test]
    fn test_serialize_unnamed_codes_fails() {
        assert!(serde_json::to_string(&Style::from_codes([5])).is_err());
    }

    #[test]
    fn test_debug_shows_codes() {
        assert_eq!(format!("{:?}", red().bold()), "Style([1, 31])");
    }

    #[test]
    fn test_empty_code_set_start_sequence() {
        assert_eq!(Style::from_codes([]).start_sequence(), "\x1b[m");
    }
}
