//! # Tinge - Composable Terminal Styling
//!
//! Tinge turns a style selection and a template into a string with terminal
//! escape sequences, or into plain text when color is disabled. It provides:
//!
//! - **Chainable styles**: `tinge::red().bold().underline()`
//! - **A style cache**: equal code combinations share one [`Style`] instance,
//!   regardless of chaining order
//! - **Nesting that resumes the outer style** after an inner one ends
//! - **Automatic color detection** (`NO_COLOR`, `FORCE_COLOR`, TTY) with a
//!   global override
//! - **MiniJinja integration** through [`Renderer`] and [`Theme`]
//!
//! ## Core Concepts
//!
//! - [`StyleName`]: The static table of named styles and their codes
//! - [`Style`]: An interned, immutable set of codes; one entry point per name
//! - [`Template`] and [`Value`]: Fragments interleaved with interpolated values
//! - [`Painted`]: A template paired with a style, rendered when displayed
//! - [`set_enabled`] / [`is_enabled`]: The process-wide color switch
//!
//! ## Quick Start
//!
//! ```rust
//! use tinge::{Style, Template};
//!
//! tinge::set_enabled(true);
//!
//! let warning = tinge::yellow().bold();
//! assert_eq!(warning.render(&["careful"], &[]), "\x1b[1;33mcareful\x1b[0m");
//!
//! // Order of chaining is irrelevant, the same instance comes back.
//! assert!(Style::same_instance(&warning, &tinge::bold().yellow()));
//!
//! // Nested styles hand control back to the enclosing style.
//! let line = Template::new()
//!     .text("status: ")
//!     .value(tinge::green().paint("ok"))
//!     .text(" (cached)");
//! assert_eq!(
//!     tinge::dim().apply(&line),
//!     "\x1b[2mstatus: \x1b[32mok\x1b[2m (cached)\x1b[0m",
//! );
//!
//! // Disabled output is plain text.
//! tinge::set_enabled(false);
//! assert_eq!(tinge::dim().apply(&line), "status: ok (cached)");
//! ```
//!
//! ## Templates
//!
//! ```rust
//! use tinge::{Renderer, Theme};
//!
//! let theme = Theme::new().add("label", tinge::bold());
//! let mut renderer = Renderer::new(theme);
//! renderer
//!     .add_template("row", r#"{{ label | style("label") }}: {{ value | paint("green") }}"#)
//!     .unwrap();
//!
//! tinge::set_enabled(false);
//! let rendered = renderer
//!     .render("row", &serde_json::json!({ "label": "Count", "value": 42 }))
//!     .unwrap();
//! assert_eq!(rendered, "Count: 42");
//! ```

mod enablement;
mod error;
mod render;
mod style;
mod table;
mod theme;

pub use enablement::{is_enabled, probe, set_color_choice, set_enabled, ColorChoice, Signals};
pub use error::StyleError;
pub use render::{Painted, Renderer, Template, Value, DEFAULT_MISSING_STYLE_INDICATOR};
pub use style::{CodeSet, Style, StyleCode, StyleRegistry, RESET};
pub use table::*;
pub use theme::Theme;
