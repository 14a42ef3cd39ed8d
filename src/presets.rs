//! Preset registries for glass surfaces.
//!
//! Context presets are tuned for a usage context (a modal needs strong
//! separation, a stats tile should barely be there). Layer depths, panel
//! presets and button presets are smaller tables consulted by the resolver
//! before the glass input itself.

use crate::tokens::{token_names, BlurToken, OpacityToken, OpacityValue};

/// Name of a context preset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum PresetName {
    Modal,
    Button,
    Card,
    Nav,
    Stats,
    Background,
}

token_names!(PresetName, "preset", {
    Modal => "modal",
    Button => "button",
    Card => "card",
    Nav => "nav",
    Stats => "stats",
    Background => "background",
});

/// A context preset: glass parameters plus documentation metadata.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PresetConfig {
    /// Blur intensity for this context
    pub blur: BlurToken,
    /// Background opacity
    pub opacity: OpacityValue,
    /// Whether the border glow is enabled
    pub border_glow: bool,
    /// Recommended usage
    pub description: &'static str,
    /// Typical use cases
    pub use_cases: &'static [&'static str],
}

static CONTEXT_PRESETS: [PresetConfig; 6] = [
    PresetConfig {
        blur: BlurToken::Lg,
        opacity: OpacityValue::Value(0.7),
        border_glow: true,
        description: "Modal dialogs and overlays that need strong separation",
        use_cases: &["Dialog boxes", "Modal windows", "Popups", "Alert overlays"],
    },
    PresetConfig {
        blur: BlurToken::Md,
        opacity: OpacityValue::Value(0.25),
        border_glow: true,
        description: "Interactive buttons with glass effect",
        use_cases: &["Primary buttons", "Secondary buttons", "Icon buttons", "Action triggers"],
    },
    PresetConfig {
        blur: BlurToken::Sm,
        opacity: OpacityValue::Value(0.15),
        border_glow: false,
        description: "Content cards with subtle glass effect",
        use_cases: &["Product cards", "Article previews", "Dashboard widgets", "Info boxes"],
    },
    PresetConfig {
        blur: BlurToken::Md,
        opacity: OpacityValue::Value(0.5),
        border_glow: false,
        description: "Navigation bars and headers",
        use_cases: &["Top navigation", "Sidebars", "Tab bars", "Toolbars"],
    },
    PresetConfig {
        blur: BlurToken::Xs,
        opacity: OpacityValue::Value(0.08),
        border_glow: false,
        description: "Stats, metrics, and data displays",
        use_cases: &["Dashboard stats", "Metric cards", "KPI displays", "Data tables"],
    },
    PresetConfig {
        blur: BlurToken::Subtle,
        opacity: OpacityValue::Value(0.05),
        border_glow: false,
        description: "Page backgrounds and ambient sections",
        use_cases: &["Page sections", "Hero backgrounds", "Ambient overlays", "Decorative elements"],
    },
];

/// Get a context preset by name.
pub fn get_preset(name: PresetName) -> &'static PresetConfig {
    let index = match name {
        PresetName::Modal => 0,
        PresetName::Button => 1,
        PresetName::Card => 2,
        PresetName::Nav => 3,
        PresetName::Stats => 4,
        PresetName::Background => 5,
    };
    &CONTEXT_PRESETS[index]
}

/// Look up a context preset by its name, `None` for unknown names.
///
/// ## Example
///
/// ```rust
/// use glasskit_core::presets::lookup_preset;
///
/// let modal = lookup_preset("modal").unwrap();
/// assert!(modal.border_glow);
/// assert!(lookup_preset("hero").is_none());
/// ```
pub fn lookup_preset(name: &str) -> Option<&'static PresetConfig> {
    name.parse::<PresetName>().ok().map(get_preset)
}

/// All context preset names in declaration order.
pub fn list_presets() -> &'static [PresetName] {
    PresetName::ALL
}

/// Nesting depth of stacked glass panels.
///
/// Deeper layers are blurrier and darker so stacked panels stay distinct.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LayerDepth {
    One,
    Two,
    Three,
}

impl LayerDepth {
    /// Depth for a 1-based layer number, `None` outside `1..=3`.
    pub fn from_number(layer: u8) -> Option<Self> {
        match layer {
            1 => Some(LayerDepth::One),
            2 => Some(LayerDepth::Two),
            3 => Some(LayerDepth::Three),
            _ => None,
        }
    }

    /// Blur and opacity for this depth.
    pub fn glass(self) -> (BlurToken, f64) {
        match self {
            LayerDepth::One => (BlurToken::Sm, 0.1),
            LayerDepth::Two => (BlurToken::Md, 0.2),
            LayerDepth::Three => (BlurToken::Lg, 0.3),
        }
    }
}

/// Glass presets for structural panels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum PanelPreset {
    /// Flush with the page
    Surface,
    /// Sits slightly above the page
    Raised,
    /// Detached panels such as popovers
    Floating,
    /// Full overlays
    Overlay,
}

token_names!(PanelPreset, "panel preset", {
    Surface => "surface",
    Raised => "raised",
    Floating => "floating",
    Overlay => "overlay",
});

impl PanelPreset {
    /// `(blur, opacity, border_glow)` for this panel.
    pub fn glass(self) -> (BlurToken, OpacityValue, bool) {
        match self {
            PanelPreset::Surface => (BlurToken::Sm, OpacityToken::Light.into(), false),
            PanelPreset::Raised => (BlurToken::Md, OpacityToken::Normal.into(), false),
            PanelPreset::Floating => (BlurToken::Lg, OpacityToken::Medium.into(), true),
            PanelPreset::Overlay => (BlurToken::Max, OpacityToken::Strong.into(), true),
        }
    }
}

/// Glass presets for the button variants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ButtonPreset {
    /// Most prominent, uses the `button` context preset
    #[default]
    Primary,
    Secondary,
    /// Minimal glass
    Ghost,
    /// Border emphasis
    Outline,
}

token_names!(ButtonPreset, "button preset", {
    Primary => "primary",
    Secondary => "secondary",
    Ghost => "ghost",
    Outline => "outline",
});

impl ButtonPreset {
    /// `(blur, opacity, border_glow)` for this button variant.
    pub fn glass(self) -> (BlurToken, OpacityValue, bool) {
        match self {
            ButtonPreset::Primary => {
                let preset = get_preset(PresetName::Button);
                (preset.blur, preset.opacity, preset.border_glow)
            }
            ButtonPreset::Secondary => (BlurToken::Sm, OpacityValue::Value(0.15), false),
            ButtonPreset::Ghost => (BlurToken::Xs, OpacityToken::Subtle.into(), false),
            ButtonPreset::Outline => (BlurToken::Sm, OpacityToken::Light.into(), true),
        }
    }
}
