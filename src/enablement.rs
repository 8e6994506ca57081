//! Process-wide control over whether escape sequences are emitted.
//!
//! The flag is seeded on first use from [`probe`], which inspects the
//! environment (`NO_COLOR`, `FORCE_COLOR`) and whether stdout is a terminal.
//! It can be overridden at any time with [`set_enabled`] or
//! [`set_color_choice`]; renders read the flag when they run, so a style
//! created while output was disabled still colors later output once enabled.

use std::env;
use std::sync::atomic::{AtomicBool, Ordering};

use console::Term;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

static ENABLED: Lazy<AtomicBool> = Lazy::new(|| AtomicBool::new(probe()));

/// A snapshot of the environment signals that decide color support.
///
/// # Example
///
/// ```rust
/// use tinge::Signals;
///
/// let piped = Signals {
///     force_color: Some("1".into()),
///     ..Signals::default()
/// };
/// assert!(piped.color_enabled());
///
/// let opted_out = Signals {
///     no_color: Some("1".into()),
///     force_color: Some("1".into()),
///     is_terminal: true,
/// };
/// assert!(!opted_out.color_enabled());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Signals {
    /// Value of `NO_COLOR`, if set
    pub no_color: Option<String>,
    /// Value of `FORCE_COLOR`, if set
    pub force_color: Option<String>,
    /// Whether stdout is attached to a terminal
    pub is_terminal: bool,
}

impl Signals {
    /// Reads the signals from the current process.
    ///
    /// Variables that are missing count as absent; values that are not valid
    /// UTF-8 are converted lossily.
    pub fn capture() -> Self {
        Self {
            no_color: read_var("NO_COLOR"),
            force_color: read_var("FORCE_COLOR"),
            is_terminal: Term::stdout().is_term(),
        }
    }

    /// Resolves the signals to a yes/no decision.
    ///
    /// 1. A non-empty `NO_COLOR` disables color.
    /// 2. `FORCE_COLOR` set to `0` or `false` disables it; any other value,
    ///    including an empty one, enables it.
    /// 3. Otherwise color follows the terminal check.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", ret))]
    pub fn color_enabled(&self) -> bool {
        if self.no_color.as_deref().is_some_and(|value| !value.is_empty()) {
            return false;
        }
        match self.force_color.as_deref() {
            Some("0" | "false") => false,
            Some(_) => true,
            None => self.is_terminal,
        }
    }
}

fn read_var(key: &str) -> Option<String> {
    env::var_os(key).map(|value| value.to_string_lossy().into_owned())
}

/// Resolves color support from the current environment.
pub fn probe() -> bool {
    Signals::capture().color_enabled()
}

/// The tri-state color policy, suitable for configuration files and flags.
///
/// # Example
///
/// ```rust
/// use tinge::ColorChoice;
///
/// assert!(ColorChoice::Always.resolve());
/// assert!(!ColorChoice::Never.resolve());
/// assert_eq!(ColorChoice::from(None), ColorChoice::Auto);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Decide from the environment via [`probe`]
    #[default]
    Auto,
    /// Always emit escape sequences
    Always,
    /// Never emit escape sequences
    Never,
}

impl ColorChoice {
    pub fn resolve(self) -> bool {
        match self {
            ColorChoice::Auto => probe(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

impl From<Option<bool>> for ColorChoice {
    fn from(enabled: Option<bool>) -> Self {
        match enabled {
            None => ColorChoice::Auto,
            Some(true) => ColorChoice::Always,
            Some(false) => ColorChoice::Never,
        }
    }
}

impl From<bool> for ColorChoice {
    fn from(enabled: bool) -> Self {
        ColorChoice::from(Some(enabled))
    }
}

/// Forces color on or off, or re-probes the environment when given `None`.
///
/// ```rust
/// tinge::set_enabled(false);
/// assert!(!tinge::is_enabled());
/// assert_eq!(tinge::red().render(&["plain"], &[]), "plain");
///
/// tinge::set_enabled(true);
/// assert_eq!(tinge::red().render(&["red"], &[]), "\x1b[31mred\x1b[0m");
///
/// // Back to whatever the environment says.
/// tinge::set_enabled(None);
/// ```
pub fn set_enabled<E: Into<Option<bool>>>(enabled: E) {
    set_color_choice(ColorChoice::from(enabled.into()));
}

/// Applies a [`ColorChoice`] to the global flag.
#[cfg_attr(feature = "tracing", tracing::instrument(level = "debug"))]
pub fn set_color_choice(choice: ColorChoice) {
    let enabled = choice.resolve();
    #[cfg(feature = "tracing")]
    tracing::debug!(enabled, "updated color output");
    ENABLED.store(enabled, Ordering::Relaxed);
}

/// Returns the current global flag without re-probing.
pub fn is_enabled() -> bool {
    ENABLED.load(Ordering::Relaxed)
}
