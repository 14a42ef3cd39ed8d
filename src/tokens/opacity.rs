//! Opacity tokens for glass backgrounds.
//!
//! The full `0..=1` range is covered so the same tokens describe both glass
//! and solid surfaces.

/// Named background opacity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum OpacityToken {
    Transparent,
    /// Backgrounds
    Subtle,
    /// Cards
    Light,
    /// Default glass
    #[default]
    Normal,
    /// Navigation
    Medium,
    /// Modals
    Strong,
    Opaque,
    /// No glass at all
    Solid,
}

token_names!(OpacityToken, "opacity", {
    Transparent => "transparent",
    Subtle => "subtle",
    Light => "light",
    Normal => "normal",
    Medium => "medium",
    Strong => "strong",
    Opaque => "opaque",
    Solid => "solid",
});

impl OpacityToken {
    /// Opacity in `[0, 1]`.
    pub fn value(self) -> f64 {
        match self {
            OpacityToken::Transparent => 0.0,
            OpacityToken::Subtle => 0.05,
            OpacityToken::Light => 0.1,
            OpacityToken::Normal => 0.25,
            OpacityToken::Medium => 0.5,
            OpacityToken::Strong => 0.7,
            OpacityToken::Opaque => 0.9,
            OpacityToken::Solid => 1.0,
        }
    }
}

/// An opacity given either as a token or as a number.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum OpacityValue {
    Token(OpacityToken),
    Value(f64),
}

impl From<OpacityToken> for OpacityValue {
    fn from(token: OpacityToken) -> Self {
        OpacityValue::Token(token)
    }
}

impl From<f64> for OpacityValue {
    fn from(value: f64) -> Self {
        OpacityValue::Value(value)
    }
}

impl OpacityValue {
    /// Resolve to a number in `[0, 1]`.
    #[inline]
    pub fn resolve(self) -> f64 {
        get_opacity(self)
    }
}

/// Get an opacity from a token or number, clamping numbers to `[0, 1]`.
///
/// NaN resolves to `0`.
///
/// ## Example
///
/// ```rust
/// use glasskit_core::tokens::{get_opacity, OpacityToken};
///
/// assert_eq!(get_opacity(OpacityToken::Normal.into()), 0.25);
/// assert_eq!(get_opacity(1.7.into()), 1.0);
/// assert_eq!(get_opacity((-0.2).into()), 0.0);
/// ```
pub fn get_opacity(value: OpacityValue) -> f64 {
    match value {
        OpacityValue::Token(token) => token.value(),
        OpacityValue::Value(v) if v.is_nan() => 0.0,
        OpacityValue::Value(v) => v.clamp(0.0, 1.0),
    }
}
