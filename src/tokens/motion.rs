//! Duration and easing tokens for transitions.
//!
//! Durations are platform-aware: desktop transitions run about 30% faster
//! than their mobile counterparts.

/// Target platform for duration lookups.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Platform {
    #[default]
    Mobile,
    Desktop,
}

token_names!(Platform, "platform", {
    Mobile => "mobile",
    Desktop => "desktop",
});

/// Named transition duration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum DurationToken {
    Instant,
    /// Micro-interactions
    Short,
    #[default]
    Medium,
    /// Large transitions
    Long,
    /// Dramatic effects, use sparingly
    ExtraLong,
}

token_names!(DurationToken, "duration", {
    Instant => "instant",
    Short => "short",
    Medium => "medium",
    Long => "long",
    ExtraLong => "extra-long",
});

impl DurationToken {
    /// Duration in milliseconds on `platform`.
    pub fn ms(self, platform: Platform) -> u32 {
        match (platform, self) {
            (_, DurationToken::Instant) => 0,
            (Platform::Mobile, DurationToken::Short) => 100,
            (Platform::Mobile, DurationToken::Medium) => 300,
            (Platform::Mobile, DurationToken::Long) => 500,
            (Platform::Mobile, DurationToken::ExtraLong) => 700,
            (Platform::Desktop, DurationToken::Short) => 50,
            (Platform::Desktop, DurationToken::Medium) => 200,
            (Platform::Desktop, DurationToken::Long) => 400,
            (Platform::Desktop, DurationToken::ExtraLong) => 600,
        }
    }

    /// Duration as a std `Duration` on `platform`.
    pub fn duration(self, platform: Platform) -> std::time::Duration {
        std::time::Duration::from_millis(u64::from(self.ms(platform)))
    }
}

/// What a transition is doing, used to pick an easing curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MotionKind {
    /// Elements entering the screen
    Enter,
    /// Elements leaving the screen
    Exit,
    /// Important state changes
    Change,
    /// Quick in/out of temporary elements
    Temporary,
}

/// Named easing curve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum EasingToken {
    #[default]
    Standard,
    Decelerate,
    Accelerate,
    Emphasized,
    Sharp,
}

token_names!(EasingToken, "easing", {
    Standard => "standard",
    Decelerate => "decelerate",
    Accelerate => "accelerate",
    Emphasized => "emphasized",
    Sharp => "sharp",
});

impl EasingToken {
    /// Cubic bezier control points `(x1, y1, x2, y2)`.
    pub fn control_points(self) -> [f64; 4] {
        match self {
            EasingToken::Standard => [0.4, 0.0, 0.2, 1.0],
            EasingToken::Decelerate => [0.0, 0.0, 0.2, 1.0],
            EasingToken::Accelerate => [0.4, 0.0, 1.0, 1.0],
            EasingToken::Emphasized => [0.2, 0.0, 0.0, 1.0],
            EasingToken::Sharp => [0.4, 0.0, 0.6, 1.0],
        }
    }

    /// CSS timing function.
    pub fn css(self) -> &'static str {
        match self {
            EasingToken::Standard => "cubic-bezier(0.4, 0.0, 0.2, 1)",
            EasingToken::Decelerate => "cubic-bezier(0.0, 0.0, 0.2, 1)",
            EasingToken::Accelerate => "cubic-bezier(0.4, 0.0, 1, 1)",
            EasingToken::Emphasized => "cubic-bezier(0.2, 0.0, 0, 1)",
            EasingToken::Sharp => "cubic-bezier(0.4, 0.0, 0.6, 1)",
        }
    }

    /// The curve to use for a kind of motion.
    pub fn for_motion(kind: MotionKind) -> Self {
        match kind {
            MotionKind::Enter => EasingToken::Decelerate,
            MotionKind::Exit => EasingToken::Accelerate,
            MotionKind::Change => EasingToken::Emphasized,
            MotionKind::Temporary => EasingToken::Sharp,
        }
    }
}
