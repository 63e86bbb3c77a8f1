//! Crate-wide error type.
//!
//! Every failure in this crate is a programmer error surfaced at construction
//! or measure time; there are no transient or retryable conditions. A failed
//! call always leaves the tree in its prior, consistent state.

/// Errors raised while building or measuring a dialog tree.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A margin or padding shorthand with the wrong number of values
    /// (accepted: 1, 2, or 4).
    #[error("invalid spacing shorthand: expected 1, 2, or 4 values, got {0}")]
    InvalidSpacing(usize),

    /// A horizontal or vertical container was measured with zero children.
    #[error("container has no elements")]
    EmptyContainer,

    /// A row was appended to an element that is not a grid.
    #[error("element is not a grid")]
    NotAGrid,

    /// A child was appended to an element that is not a linear container.
    #[error("element is not a linear container")]
    NotALinear,

    /// An unrecognized widget option name, surfaced to catch caller typos.
    #[error("unknown widget option `{0}`")]
    UnknownOption(String),

    /// A widget option received a value of the wrong shape.
    #[error("invalid value for widget option `{name}`: expected {expected}")]
    InvalidOptionValue {
        name: String,
        expected: &'static str,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            Error::InvalidSpacing(3).to_string(),
            "invalid spacing shorthand: expected 1, 2, or 4 values, got 3"
        );
        assert_eq!(Error::EmptyContainer.to_string(), "container has no elements");
        assert_eq!(
            Error::UnknownOption("colour".into()).to_string(),
            "unknown widget option `colour`"
        );
        assert_eq!(
            Error::InvalidOptionValue { name: "margin".into(), expected: "an integer list" }
                .to_string(),
            "invalid value for widget option `margin`: expected an integer list"
        );
    }
}
