//! Shadow tokens for depth.
//!
//! Above `xs` each shadow pairs an outer drop shadow with a faint inner
//! highlight along the top edge.

/// Named shadow depth.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ShadowToken {
    None,
    Xs,
    #[default]
    Sm,
    Md,
    Lg,
    Xl,
}

token_names!(ShadowToken, "shadow", {
    None => "none",
    Xs => "xs",
    Sm => "sm",
    Md => "md",
    Lg => "lg",
    Xl => "xl",
});

impl ShadowToken {
    /// CSS value for `box-shadow`.
    pub fn css(self) -> &'static str {
        match self {
            ShadowToken::None => "none",
            ShadowToken::Xs => "0 2px 4px rgba(0, 0, 0, 0.05)",
            ShadowToken::Sm => "0 4px 6px rgba(0, 0, 0, 0.05), inset 0 1px 0 rgba(255, 255, 255, 0.1)",
            ShadowToken::Md => "0 8px 12px rgba(0, 0, 0, 0.1), inset 0 1px 0 rgba(255, 255, 255, 0.15)",
            ShadowToken::Lg => "0 16px 24px rgba(0, 0, 0, 0.15), inset 0 1px 0 rgba(255, 255, 255, 0.2)",
            ShadowToken::Xl => "0 24px 48px rgba(0, 0, 0, 0.2), inset 0 2px 0 rgba(255, 255, 255, 0.25)",
        }
    }

    /// One step deeper, used for hover elevation.
    ///
    /// `none` stays flat and `xl` is already the deepest level.
    pub fn elevated(self) -> Self {
        match self {
            ShadowToken::None => ShadowToken::None,
            ShadowToken::Xs => ShadowToken::Sm,
            ShadowToken::Sm => ShadowToken::Md,
            ShadowToken::Md => ShadowToken::Lg,
            ShadowToken::Lg | ShadowToken::Xl => ShadowToken::Xl,
        }
    }
}
