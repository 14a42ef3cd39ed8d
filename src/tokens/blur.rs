//! Blur tokens for backdrop filters.
//!
//! Blur radii above [`MAX_BLUR`] cost disproportionately more to render, so
//! every numeric blur that reaches the style layer is clamped first.

use super::format_px;
use crate::diagnostic::Diagnostic;

/// Hard blur limit in pixels for the standard scale.
pub const MAX_BLUR: f64 = 20.0;

/// Hard blur limit in pixels for the mobile scale.
pub const MAX_BLUR_MOBILE: f64 = 12.0;

/// Named blur level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum BlurToken {
    None,
    /// Barely visible
    Subtle,
    Xs,
    Sm,
    /// Default blur
    #[default]
    Md,
    Lg,
    /// Performance limit
    Max,
}

token_names!(BlurToken, "blur", {
    None => "none",
    Subtle => "subtle",
    Xs => "xs",
    Sm => "sm",
    Md => "md",
    Lg => "lg",
    Max => "max",
});

/// Which blur table to read token values from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum BlurScale {
    /// Desktop-class scale, 0-20px
    #[default]
    Standard,
    /// Conservative scale for mobile and low-end devices, 0-12px
    Mobile,
}

impl BlurScale {
    /// Maximum blur in pixels for this scale.
    #[inline]
    pub fn max(self) -> f64 {
        match self {
            BlurScale::Standard => MAX_BLUR,
            BlurScale::Mobile => MAX_BLUR_MOBILE,
        }
    }

    /// Clamp a pixel value to `[0, max]`. NaN becomes `0`.
    #[inline]
    pub fn clamp(self, px: f64) -> f64 {
        if px.is_nan() {
            return 0.0;
        }
        px.max(0.0).min(self.max())
    }

    /// Returns `true` when `px` is above the scale's hard limit.
    #[inline]
    pub fn exceeds_max(self, px: f64) -> bool {
        px > self.max()
    }
}

impl BlurToken {
    /// Pixel value on the standard scale.
    #[inline]
    pub fn px(self) -> f64 {
        self.px_on(BlurScale::Standard)
    }

    /// Pixel value on the given scale.
    pub fn px_on(self, scale: BlurScale) -> f64 {
        match scale {
            BlurScale::Standard => match self {
                BlurToken::None => 0.0,
                BlurToken::Subtle => 2.0,
                BlurToken::Xs => 4.0,
                BlurToken::Sm => 6.0,
                BlurToken::Md => 10.0,
                BlurToken::Lg => 16.0,
                BlurToken::Max => 20.0,
            },
            BlurScale::Mobile => match self {
                BlurToken::None => 0.0,
                BlurToken::Subtle => 1.0,
                BlurToken::Xs => 2.0,
                BlurToken::Sm => 4.0,
                BlurToken::Md => 6.0,
                BlurToken::Lg => 10.0,
                BlurToken::Max => 12.0,
            },
        }
    }

    /// CSS length on the standard scale, e.g. `"16px"`.
    pub fn css(self) -> String {
        format_px(self.px())
    }
}

/// A blur given either as a token or as raw pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum BlurValue {
    Token(BlurToken),
    Px(f64),
}

impl From<BlurToken> for BlurValue {
    fn from(token: BlurToken) -> Self {
        BlurValue::Token(token)
    }
}

impl From<f64> for BlurValue {
    fn from(px: f64) -> Self {
        BlurValue::Px(px)
    }
}

impl BlurValue {
    /// Resolve to pixels on `scale`.
    ///
    /// Raw pixel values are clamped to the scale's range; a value above the
    /// limit also yields a [`Diagnostic::BlurClamped`].
    pub fn resolve_px(self, scale: BlurScale) -> (f64, Option<Diagnostic>) {
        match self {
            BlurValue::Token(token) => (token.px_on(scale), None),
            BlurValue::Px(px) => {
                let diagnostic = scale.exceeds_max(px).then(|| Diagnostic::BlurClamped {
                    requested: px,
                    max: scale.max(),
                });
                (scale.clamp(px), diagnostic)
            }
        }
    }
}

/// Validate a blur in pixels against [`MAX_BLUR`].
///
/// Values above the limit are clamped and an advisory warning is logged in
/// debug builds. Negative values become `0`.
///
/// ## Example
///
/// ```rust
/// use glasskit_core::tokens::{validate_blur, MAX_BLUR};
///
/// assert_eq!(validate_blur(12.0), 12.0);
/// assert_eq!(validate_blur(50.0), MAX_BLUR);
/// assert_eq!(validate_blur(-3.0), 0.0);
/// ```
pub fn validate_blur(px: f64) -> f64 {
    let (clamped, diagnostic) = BlurValue::Px(px).resolve_px(BlurScale::Standard);
    if let Some(diagnostic) = diagnostic {
        diagnostic.emit();
    }
    clamped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_scale_values() {
        let px: Vec<f64> = BlurToken::ALL.iter().map(|t| t.px()).collect();
        assert_eq!(px, vec![0.0, 2.0, 4.0, 6.0, 10.0, 16.0, 20.0]);
    }

    #[test]
    fn scales_increase_monotonically() {
        for scale in [BlurScale::Standard, BlurScale::Mobile] {
            let px: Vec<f64> = BlurToken::ALL.iter().map(|t| t.px_on(scale)).collect();
            assert!(px.windows(2).all(|w| w[0] < w[1]), "{scale:?}: {px:?}");
            assert_eq!(*px.last().unwrap(), scale.max());
        }
    }

    #[test]
    fn token_css() {
        assert_eq!(BlurToken::Md.css(), "10px");
        assert_eq!(BlurToken::Lg.css(), "16px");
        assert_eq!(BlurToken::None.css(), "0px");
    }

    #[test]
    fn numeric_blur_clamps() {
        for v in [-10.0, 0.0, 3.5, 20.0, 20.5, 1000.0, f64::INFINITY] {
            let (px, _) = BlurValue::Px(v).resolve_px(BlurScale::Standard);
            assert_eq!(px, v.max(0.0).min(MAX_BLUR));
        }
    }

    #[test]
    fn nan_blur_is_zero() {
        let (px, diagnostic) = BlurValue::Px(f64::NAN).resolve_px(BlurScale::Standard);
        assert_eq!(px, 0.0);
        assert!(diagnostic.is_none());
    }

    #[test]
    fn diagnostic_only_above_max() {
        assert!(BlurValue::Px(20.0).resolve_px(BlurScale::Standard).1.is_none());
        assert!(BlurValue::Px(-5.0).resolve_px(BlurScale::Standard).1.is_none());
        assert_eq!(
            BlurValue::Px(50.0).resolve_px(BlurScale::Standard).1,
            Some(Diagnostic::BlurClamped { requested: 50.0, max: 20.0 })
        );
        assert_eq!(
            BlurValue::Px(15.0).resolve_px(BlurScale::Mobile),
            (12.0, Some(Diagnostic::BlurClamped { requested: 15.0, max: 12.0 }))
        );
    }
}
