//! Color tokens expressed in HSL.
//!
//! Each semantic color carries a solid base, a translucent glass fill, a
//! glow used by border-glow shadows, a contrasting text color and a
//! two-stop border gradient.

use crate::Error;

/// An HSL color with alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsla {
    /// Hue in degrees
    pub h: f64,
    /// Saturation in percent
    pub s: f64,
    /// Lightness in percent
    pub l: f64,
    /// Alpha in `[0, 1]`
    pub a: f64,
}

impl Hsla {
    /// Opaque color.
    pub const fn hsl(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l, a: 1.0 }
    }

    /// Color with alpha.
    pub const fn hsla(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self { h, s, l, a }
    }

    /// Same hue, saturation and lightness at a different alpha.
    ///
    /// The alpha is clamped to `[0, 1]`.
    pub fn with_alpha(self, a: f64) -> Self {
        Self {
            a: if a.is_nan() { 0.0 } else { a.clamp(0.0, 1.0) },
            ..self
        }
    }

    /// CSS color string. Opaque colors use `hsl()`, others `hsla()`.
    pub fn css(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Hsla {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (h, s, l) = (self.h + 0.0, self.s + 0.0, self.l + 0.0);
        if self.a >= 1.0 {
            write!(f, "hsl({h}, {s}%, {l}%)")
        } else {
            write!(f, "hsla({h}, {s}%, {l}%, {})", super::format_alpha(self.a))
        }
    }
}

impl std::str::FromStr for Hsla {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hsl(s).ok_or_else(|| Error::InvalidColor(s.to_string()))
    }
}

/// Parse a CSS `hsl()` or `hsla()` string.
///
/// Supports:
/// - `hsl(h, s%, l%)` and `hsla(h, s%, l%, a)`
/// - A missing alpha means fully opaque
/// - Case-insensitive function name, surrounding whitespace is trimmed
///
/// ## Example
///
/// ```rust
/// use glasskit_core::tokens::{parse_hsl, Hsla};
///
/// assert_eq!(parse_hsl("hsla(217, 91%, 60%, 0.15)"), Some(Hsla::hsla(217.0, 91.0, 60.0, 0.15)));
/// assert_eq!(parse_hsl("rgb(0, 0, 0)"), None);
/// ```
pub fn parse_hsl(s: &str) -> Option<Hsla> {
    let s = s.trim().to_ascii_lowercase();
    let body = s
        .strip_prefix("hsla(")
        .or_else(|| s.strip_prefix("hsl("))?
        .strip_suffix(')')?;

    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    let (h, s, l, a) = match parts.as_slice() {
        [h, s, l] => (*h, *s, *l, None),
        [h, s, l, a] => (*h, *s, *l, Some(*a)),
        _ => return None,
    };

    let h = h.strip_suffix("deg").unwrap_or(h).parse::<f64>().ok()?;
    let s = s.strip_suffix('%')?.parse::<f64>().ok()?;
    let l = l.strip_suffix('%')?.parse::<f64>().ok()?;
    let a = match a {
        Some(a) => a.parse::<f64>().ok()?,
        None => 1.0,
    };

    if !(0.0..=100.0).contains(&s) || !(0.0..=100.0).contains(&l) || !(0.0..=1.0).contains(&a) {
        return None;
    }
    Some(Hsla { h, s, l, a })
}

/// Full color token for one semantic color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorToken {
    /// Solid base color
    pub base: Hsla,
    /// Translucent fill for glass backgrounds
    pub glass: Hsla,
    /// Glow color for interactive effects
    pub glow: Hsla,
    /// Text color for contrast on `base`
    pub text: Hsla,
    /// Border gradient stops `[top, bottom]`
    pub border: [Hsla; 2],
}

/// Semantic color name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ColorName {
    #[default]
    Neutral,
    /// Electric blue
    Primary,
    Success,
    Danger,
    Warning,
    /// Purple
    Accent,
}

token_names!(ColorName, "color", {
    Neutral => "neutral",
    Primary => "primary",
    Success => "success",
    Danger => "danger",
    Warning => "warning",
    Accent => "accent",
});

const NEUTRAL: ColorToken = ColorToken {
    base: Hsla::hsl(240.0, 5.0, 15.0),
    glass: Hsla::hsla(240.0, 5.0, 15.0, 0.25),
    glow: Hsla::hsla(240.0, 10.0, 60.0, 0.4),
    text: Hsla::hsl(240.0, 21.0, 96.0),
    border: [Hsla::hsl(240.0, 5.0, 28.0), Hsla::hsl(240.0, 5.0, 22.0)],
};

const PRIMARY: ColorToken = ColorToken {
    base: Hsla::hsl(217.0, 91.0, 60.0),
    glass: Hsla::hsla(217.0, 91.0, 60.0, 0.15),
    glow: Hsla::hsla(217.0, 91.0, 65.0, 0.5),
    text: Hsla::hsl(217.0, 100.0, 97.0),
    border: [Hsla::hsl(217.0, 91.0, 65.0), Hsla::hsl(217.0, 91.0, 50.0)],
};

const SUCCESS: ColorToken = ColorToken {
    base: Hsla::hsl(142.0, 76.0, 45.0),
    glass: Hsla::hsla(142.0, 76.0, 45.0, 0.15),
    glow: Hsla::hsla(142.0, 76.0, 50.0, 0.5),
    text: Hsla::hsl(142.0, 76.0, 97.0),
    border: [Hsla::hsl(142.0, 76.0, 55.0), Hsla::hsl(142.0, 76.0, 35.0)],
};

const DANGER: ColorToken = ColorToken {
    base: Hsla::hsl(0.0, 84.0, 60.0),
    glass: Hsla::hsla(0.0, 84.0, 60.0, 0.15),
    glow: Hsla::hsla(0.0, 84.0, 65.0, 0.5),
    text: Hsla::hsl(0.0, 100.0, 97.0),
    border: [Hsla::hsl(0.0, 84.0, 65.0), Hsla::hsl(0.0, 84.0, 50.0)],
};

const WARNING: ColorToken = ColorToken {
    base: Hsla::hsl(38.0, 92.0, 55.0),
    glass: Hsla::hsla(38.0, 92.0, 55.0, 0.15),
    glow: Hsla::hsla(38.0, 92.0, 60.0, 0.5),
    text: Hsla::hsl(38.0, 100.0, 97.0),
    border: [Hsla::hsl(38.0, 92.0, 65.0), Hsla::hsl(38.0, 92.0, 45.0)],
};

const ACCENT: ColorToken = ColorToken {
    base: Hsla::hsl(271.0, 81.0, 56.0),
    glass: Hsla::hsla(271.0, 81.0, 56.0, 0.15),
    glow: Hsla::hsla(271.0, 81.0, 62.0, 0.5),
    text: Hsla::hsl(271.0, 100.0, 97.0),
    border: [Hsla::hsl(271.0, 81.0, 66.0), Hsla::hsl(271.0, 81.0, 46.0)],
};

impl ColorName {
    /// The token for this color.
    pub fn token(self) -> &'static ColorToken {
        match self {
            ColorName::Neutral => &NEUTRAL,
            ColorName::Primary => &PRIMARY,
            ColorName::Success => &SUCCESS,
            ColorName::Danger => &DANGER,
            ColorName::Warning => &WARNING,
            ColorName::Accent => &ACCENT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hsl_display() {
        assert_eq!(NEUTRAL.base.css(), "hsl(240, 5%, 15%)");
        assert_eq!(NEUTRAL.glass.css(), "hsla(240, 5%, 15%, 0.25)");
        assert_eq!(PRIMARY.glow.css(), "hsla(217, 91%, 65%, 0.5)");
    }

    #[test]
    fn with_alpha_keeps_hsl() {
        let faded = PRIMARY.glass.with_alpha(0.45);
        assert_eq!(faded.css(), "hsla(217, 91%, 60%, 0.45)");
        assert_eq!(PRIMARY.glass.with_alpha(3.0).a, 1.0);
        assert_eq!(PRIMARY.glass.with_alpha(1.0).css(), "hsl(217, 91%, 60%)");
    }

    #[test]
    fn parse_hsl_forms() {
        assert_eq!(parse_hsl("hsl(240, 5%, 15%)"), Some(NEUTRAL.base));
        assert_eq!(parse_hsl("  HSLA(240, 5%, 15%, 0.25)  "), Some(NEUTRAL.glass));
        assert_eq!(parse_hsl("hsl(120deg, 50%, 50%)"), Some(Hsla::hsl(120.0, 50.0, 50.0)));
    }

    #[test]
    fn parse_hsl_rejects_invalid() {
        assert_eq!(parse_hsl(""), None);
        assert_eq!(parse_hsl("hsl(240, 5, 15)"), None);
        assert_eq!(parse_hsl("hsl(240, 5%)"), None);
        assert_eq!(parse_hsl("hsla(240, 5%, 15%, 2)"), None);
        assert_eq!(parse_hsl("hsl(240, 105%, 15%)"), None);
        assert_eq!(parse_hsl("#ffffff"), None);
        assert!("notacolor".parse::<Hsla>().is_err());
    }

    #[test]
    fn every_token_round_trips_through_css() {
        for name in ColorName::ALL {
            let token = name.token();
            for color in [token.base, token.glass, token.glow, token.text, token.border[0], token.border[1]] {
                assert_eq!(parse_hsl(&color.css()), Some(color), "{name}");
            }
        }
    }

    #[test]
    fn glow_is_translucent() {
        for name in ColorName::ALL {
            let glow = name.token().glow;
            assert!(glow.a > 0.0 && glow.a < 1.0, "{name}");
        }
    }
}
