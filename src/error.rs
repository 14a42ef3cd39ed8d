//! Error type for the fallible parts of the crate.
//!
//! Glass resolution itself never fails (see [`crate::resolve`]); errors only
//! come from parsing names and colors, loading configuration, and touching
//! the DOM.

/// Error type for parsing and DOM operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A token name did not match any entry of its table
    #[error("unknown {kind} token: {name:?}")]
    UnknownToken { kind: &'static str, name: String },
    /// A color string could not be parsed as `hsl()`/`hsla()`
    #[error("invalid color: {0:?}")]
    InvalidColor(String),
    /// A container config could not be parsed
    #[cfg(feature = "toml")]
    #[error("invalid container config: {0}")]
    Config(#[from] toml::de::Error),
    /// A DOM call failed
    #[cfg(feature = "web")]
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

impl Error {
    pub(crate) fn unknown_token(kind: &'static str, name: &str) -> Self {
        Error::UnknownToken {
            kind,
            name: name.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_token_message() {
        let err = Error::unknown_token("blur", "huge");
        assert_eq!(err.to_string(), "unknown blur token: \"huge\"");
    }

    #[test]
    fn invalid_color_message() {
        let err = Error::InvalidColor("rgb(1,2,3)".into());
        assert_eq!(err.to_string(), "invalid color: \"rgb(1,2,3)\"");
    }
}
