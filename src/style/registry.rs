//! The style cache.
//!
//! All [`Style`] values are handed out by a [`StyleRegistry`]. The registry
//! canonicalizes code sets and keeps at most one live `Style` per set, so two
//! chains that land on the same combination share one instance (and its
//! memoized derivations).

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use once_cell::sync::Lazy;

use super::codes::{CodeSet, StyleCode};
use super::Style;

static GLOBAL: Lazy<StyleRegistry> = Lazy::new(StyleRegistry::new);

/// A map from canonical code-set keys to shared [`Style`] instances.
///
/// Lookups take a read lock; a miss re-checks under the write lock before
/// inserting, so concurrent interns of one key always agree on a winner.
///
/// # Example
///
/// ```rust
/// use tinge::{Style, StyleRegistry};
///
/// let registry = StyleRegistry::global();
/// let a = registry.intern(vec![31, 1], false);
/// let b = registry.intern(vec![1, 31], true);
/// assert!(Style::same_instance(&a, &b));
/// assert!(Style::same_instance(&a, &tinge::red().bold()));
/// ```
#[derive(Debug)]
pub struct StyleRegistry {
    styles: RwLock<HashMap<String, Style>>,
}

impl StyleRegistry {
    pub(crate) fn new() -> Self {
        Self {
            styles: RwLock::new(HashMap::new()),
        }
    }

    /// The process-wide registry every style chain goes through.
    pub fn global() -> &'static StyleRegistry {
        &GLOBAL
    }

    /// Returns the shared style for `codes`, creating it on first use.
    ///
    /// With `already_sorted` set a sorted, unique input skips the sort;
    /// anything else is canonicalized first either way.
    pub fn intern(&self, codes: Vec<StyleCode>, already_sorted: bool) -> Style {
        let codes = if already_sorted {
            CodeSet::from_sorted(codes)
        } else {
            CodeSet::new(codes)
        };
        self.intern_set(codes)
    }

    /// Returns the shared style for an already canonical [`CodeSet`].
    pub fn intern_set(&self, codes: CodeSet) -> Style {
        let key = codes.key();
        if let Some(style) = self.read_slot(&key) {
            return style;
        }

        let mut styles = self.styles.write().unwrap_or_else(PoisonError::into_inner);
        styles
            .entry(key)
            .or_insert_with(|| {
                #[cfg(feature = "tracing")]
                tracing::trace!(codes = %codes, "interned new style");
                Style::from_set(codes)
            })
            .clone()
    }

    /// Looks up a style without creating it.
    pub fn get(&self, codes: &CodeSet) -> Option<Style> {
        self.read_slot(&codes.key())
    }

    /// Number of distinct styles created so far.
    pub fn len(&self) -> usize {
        self.styles
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read_slot(&self, key: &str) -> Option<Style> {
        self.styles
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }
}
