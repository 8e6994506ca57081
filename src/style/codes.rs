//! Canonical code sets.

use std::fmt;

/// A single SGR attribute code, e.g. `31` for a red foreground.
pub type StyleCode = u8;

/// A sorted, deduplicated set of [`StyleCode`]s.
///
/// Two code sets are equal exactly when they describe the same combination of
/// attributes, no matter in which order or how often the codes were supplied.
/// This is the identity the style registry caches on.
///
/// # Example
///
/// ```rust
/// use tinge::CodeSet;
///
/// let a = CodeSet::new([31, 1, 31]);
/// let b = CodeSet::new([1, 31]);
/// assert_eq!(a, b);
/// assert_eq!(a.as_slice(), &[1, 31]);
/// assert_eq!(a.key(), "1;31");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct CodeSet(Box<[StyleCode]>);

impl CodeSet {
    /// Builds a code set from codes in any order, with duplicates.
    pub fn new<I: IntoIterator<Item = StyleCode>>(codes: I) -> Self {
        let mut codes: Vec<StyleCode> = codes.into_iter().collect();
        codes.sort_unstable();
        codes.dedup();
        Self(codes.into_boxed_slice())
    }

    /// Wraps codes the caller claims are sorted and unique.
    ///
    /// The claim is checked; codes that are out of order or repeated are
    /// canonicalized like [`CodeSet::new`] does.
    pub(crate) fn from_sorted(codes: Vec<StyleCode>) -> Self {
        if codes.windows(2).all(|pair| pair[0] < pair[1]) {
            Self(codes.into_boxed_slice())
        } else {
            Self::new(codes)
        }
    }

    /// Returns this set combined with `extra`.
    pub fn union(&self, extra: &[StyleCode]) -> Self {
        Self::new(self.0.iter().chain(extra).copied())
    }

    pub fn as_slice(&self) -> &[StyleCode] {
        &self.0
    }

    pub fn contains(&self, code: StyleCode) -> bool {
        self.0.binary_search(&code).is_ok()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The cache key: codes joined with `;`, as they appear in the escape sequence.
    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CodeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, code) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(";")?;
            }
            write!(f, "{}", code)?;
        }
        Ok(())
    }
}

impl FromIterator<StyleCode> for CodeSet {
    fn from_iter<I: IntoIterator<Item = StyleCode>>(iter: I) -> Self {
        Self::new(iter)
    }
}
