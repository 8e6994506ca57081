//! Style lookup errors.

/// Error returned when a style name or style spec cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    /// The name is not part of the style table
    UnknownStyle { name: String },
    /// The name exists but cannot be chained (only `reset`)
    NotChainable { name: String },
    /// The spec contained no style names at all
    EmptySpec,
}

impl std::fmt::Display for StyleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StyleError::UnknownStyle { name } => write!(f, "unknown style '{}'", name),
            StyleError::NotChainable { name } => {
                write!(f, "style '{}' cannot be combined with other styles", name)
            }
            StyleError::EmptySpec => write!(f, "style spec is empty"),
        }
    }
}

impl std::error::Error for StyleError {}
