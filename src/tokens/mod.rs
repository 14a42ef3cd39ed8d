//! Design tokens for glass surfaces.
//!
//! Every table here is static. Tokens are plain `Copy` enums; their
//! concrete CSS values come from lookups on the enum, so no table can be
//! mutated at runtime.

/// Implements `ALL`, `name()`, `Display` and `FromStr` for a token enum.
///
/// Names are matched case-insensitively after trimming whitespace.
macro_rules! token_names {
    ($ty:ident, $kind:literal, { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            /// All tokens in declaration order.
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            /// Canonical token name.
            pub fn name(self) -> &'static str {
                match self {
                    $($ty::$variant => $name),+
                }
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl std::str::FromStr for $ty {
            type Err = crate::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let lowered = s.trim().to_ascii_lowercase();
                match lowered.as_str() {
                    $($name => Ok($ty::$variant),)+
                    _ => Err(crate::Error::unknown_token($kind, s)),
                }
            }
        }
    };
}

pub(crate) use token_names;

mod blur;
mod color;
mod motion;
mod opacity;
mod radius;
mod shadow;

pub use blur::{validate_blur, BlurScale, BlurToken, BlurValue, MAX_BLUR, MAX_BLUR_MOBILE};
pub use color::{parse_hsl, ColorName, ColorToken, Hsla};
pub use motion::{DurationToken, EasingToken, MotionKind, Platform};
pub use opacity::{get_opacity, OpacityToken, OpacityValue};
pub use radius::RadiusToken;
pub use shadow::ShadowToken;

/// Format a pixel length for CSS, e.g. `16px` or `2.5px`.
pub(crate) fn format_px(px: f64) -> String {
    // `+ 0.0` folds negative zero so it never prints as `-0px`.
    format!("{}px", px + 0.0)
}

/// Format an alpha channel or opacity for CSS, rounded to 3 decimals.
pub(crate) fn format_alpha(alpha: f64) -> String {
    let rounded = (alpha * 1000.0).round() / 1000.0;
    format!("{}", rounded + 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn px_formatting() {
        assert_eq!(format_px(16.0), "16px");
        assert_eq!(format_px(2.5), "2.5px");
        assert_eq!(format_px(0.0), "0px");
        assert_eq!(format_px(-0.0), "0px");
    }

    #[test]
    fn alpha_formatting() {
        assert_eq!(format_alpha(0.25), "0.25");
        assert_eq!(format_alpha(0.25 + 0.2), "0.45");
        assert_eq!(format_alpha(1.0), "1");
        assert_eq!(format_alpha(0.1 + 0.2), "0.3");
    }

    #[test]
    fn token_names_parse_case_insensitively() {
        assert_eq!(" LG ".parse::<BlurToken>().unwrap(), BlurToken::Lg);
        assert_eq!("2XL".parse::<RadiusToken>().unwrap(), RadiusToken::Xxl);
        assert!("huge".parse::<ShadowToken>().is_err());
    }
}
