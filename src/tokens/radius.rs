//! Border radius tokens.

/// Named corner radius.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum RadiusToken {
    None,
    /// 4px
    Sm,
    /// 8px
    Md,
    /// 12px
    #[default]
    Lg,
    /// 16px
    Xl,
    /// 24px
    #[cfg_attr(feature = "serde", serde(rename = "2xl"))]
    Xxl,
    /// Pill shape
    Full,
}

token_names!(RadiusToken, "radius", {
    None => "none",
    Sm => "sm",
    Md => "md",
    Lg => "lg",
    Xl => "xl",
    Xxl => "2xl",
    Full => "full",
});

impl RadiusToken {
    /// CSS length for `border-radius`.
    pub fn css(self) -> &'static str {
        match self {
            RadiusToken::None => "0",
            RadiusToken::Sm => "0.25rem",
            RadiusToken::Md => "0.5rem",
            RadiusToken::Lg => "0.75rem",
            RadiusToken::Xl => "1rem",
            RadiusToken::Xxl => "1.5rem",
            RadiusToken::Full => "9999px",
        }
    }
}
