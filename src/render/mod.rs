//! Rendering templates into styled strings.
//!
//! - [`Value`]: What can be interpolated between template fragments
//! - [`Template`]: Fragments interleaved with values
//! - [`Painted`]: A template paired with a style, rendered on display
//! - [`Renderer`]: MiniJinja templates with `style`/`paint` filters

mod engine;
mod filters;
mod painted;
mod renderer;
mod value;

pub use engine::Renderer;
pub use filters::DEFAULT_MISSING_STYLE_INDICATOR;
pub use painted::{Painted, Template};
pub(crate) use renderer::render_into;
pub use value::Value;
