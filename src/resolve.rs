//! Glass configuration resolution.
//!
//! [`resolve`] is the single entry point that turns a loose glass
//! description into a concrete [`GlassDescriptor`]. Every input, however
//! malformed, ends in a valid descriptor; anything that had to be
//! normalized along the way is reported as a [`Diagnostic`].

use crate::diagnostic::Diagnostic;
use crate::presets::{get_preset, lookup_preset, ButtonPreset, LayerDepth, PanelPreset, PresetName};
use crate::tokens::{format_px, BlurScale, BlurToken, BlurValue, OpacityToken, OpacityValue};

/// Custom glass parameters. Missing fields take the defaults
/// (`md` blur, `normal` opacity, no border glow).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GlassConfig {
    pub blur: Option<BlurValue>,
    pub opacity: Option<OpacityValue>,
    pub border_glow: Option<bool>,
}

impl GlassConfig {
    /// Create an empty config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the blur.
    pub fn blur(mut self, blur: impl Into<BlurValue>) -> Self {
        self.blur = Some(blur.into());
        self
    }

    /// Set the opacity.
    pub fn opacity(mut self, opacity: impl Into<OpacityValue>) -> Self {
        self.opacity = Some(opacity.into());
        self
    }

    /// Enable or disable the border glow.
    pub fn border_glow(mut self, border_glow: bool) -> Self {
        self.border_glow = Some(border_glow);
        self
    }
}

impl From<&crate::presets::PresetConfig> for GlassConfig {
    fn from(preset: &crate::presets::PresetConfig) -> Self {
        Self {
            blur: Some(BlurValue::Token(preset.blur)),
            opacity: Some(preset.opacity),
            border_glow: Some(preset.border_glow),
        }
    }
}

/// The glass input of a container.
///
/// `Named` holds an unchecked preset name, e.g. one read from a config
/// file; `Preset` is the typed equivalent.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum GlassInput {
    /// `true` for the default glass, `false` for a solid surface
    Toggle(bool),
    /// Unchecked context preset name
    Named(String),
    /// Context preset
    Preset(PresetName),
    /// Custom parameters
    Custom(GlassConfig),
}

impl Default for GlassInput {
    fn default() -> Self {
        GlassInput::Toggle(true)
    }
}

impl From<bool> for GlassInput {
    fn from(enabled: bool) -> Self {
        GlassInput::Toggle(enabled)
    }
}

impl From<PresetName> for GlassInput {
    fn from(name: PresetName) -> Self {
        GlassInput::Preset(name)
    }
}

impl From<&str> for GlassInput {
    fn from(name: &str) -> Self {
        GlassInput::Named(name.to_string())
    }
}

impl From<String> for GlassInput {
    fn from(name: String) -> Self {
        GlassInput::Named(name)
    }
}

impl From<GlassConfig> for GlassInput {
    fn from(config: GlassConfig) -> Self {
        GlassInput::Custom(config)
    }
}

/// Everything that decides a container's glass, in priority order:
/// layer depth, panel preset, button preset, then the glass input.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GlassRequest {
    /// Glass input, `None` behaves like `Toggle(true)`
    pub glass: Option<GlassInput>,
    /// Layer depth, valid in `1..=3`
    pub layer: Option<u8>,
    pub panel: Option<PanelPreset>,
    pub button: Option<ButtonPreset>,
    /// Blur table for token lookups and clamping
    pub scale: BlurScale,
}

impl GlassRequest {
    /// Create a request with no glass input (default glass).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the glass input.
    pub fn glass(mut self, glass: impl Into<GlassInput>) -> Self {
        self.glass = Some(glass.into());
        self
    }

    /// Set the layer depth.
    pub fn layer(mut self, layer: u8) -> Self {
        self.layer = Some(layer);
        self
    }

    /// Set the panel preset.
    pub fn panel(mut self, panel: PanelPreset) -> Self {
        self.panel = Some(panel);
        self
    }

    /// Set the button preset.
    pub fn button(mut self, button: ButtonPreset) -> Self {
        self.button = Some(button);
        self
    }

    /// Set the blur scale.
    pub fn scale(mut self, scale: BlurScale) -> Self {
        self.scale = scale;
        self
    }
}

impl From<GlassInput> for GlassRequest {
    fn from(glass: GlassInput) -> Self {
        Self::new().glass(glass)
    }
}

/// Resolved glass parameters for one render.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlassDescriptor {
    /// Blur radius in pixels
    pub blur_px: f64,
    /// Background opacity in `[0, 1]`
    pub opacity: f64,
    /// Whether the border glow is enabled
    pub border_glow: bool,
}

impl GlassDescriptor {
    /// Solid surface: no blur, fully opaque.
    pub const DISABLED: GlassDescriptor = GlassDescriptor {
        blur_px: 0.0,
        opacity: 1.0,
        border_glow: false,
    };

    /// The default glass on the standard scale.
    pub fn default_glass() -> Self {
        Self::default_on(BlurScale::Standard)
    }

    /// The default glass: `md` blur, `normal` opacity, no glow.
    pub fn default_on(scale: BlurScale) -> Self {
        Self {
            blur_px: BlurToken::Md.px_on(scale),
            opacity: OpacityToken::Normal.value(),
            border_glow: false,
        }
    }

    /// Blur as a CSS length, e.g. `"16px"`.
    pub fn blur_css(&self) -> String {
        format_px(self.blur_px)
    }

    /// Returns `true` when there is no blur to apply.
    #[inline]
    pub fn is_unblurred(&self) -> bool {
        self.blur_px <= 0.0
    }
}

impl Default for GlassDescriptor {
    fn default() -> Self {
        Self::default_glass()
    }
}

/// A descriptor together with the diagnostics collected while resolving it.
#[derive(Clone, Debug, PartialEq)]
pub struct Resolution {
    pub descriptor: GlassDescriptor,
    pub diagnostics: Vec<Diagnostic>,
}

/// Resolve a request, logging any diagnostics in debug builds.
///
/// ## Example
///
/// ```rust
/// use glasskit_core::{resolve, GlassConfig, GlassRequest};
/// use glasskit_core::tokens::BlurToken;
///
/// let request = GlassRequest::new().glass(GlassConfig::new().blur(BlurToken::Lg).opacity(0.3));
/// let glass = resolve(&request);
///
/// assert_eq!(glass.blur_css(), "16px");
/// assert_eq!(glass.opacity, 0.3);
/// assert!(!glass.border_glow);
/// ```
pub fn resolve(request: &GlassRequest) -> GlassDescriptor {
    let resolution = resolve_detailed(request);
    for diagnostic in &resolution.diagnostics {
        diagnostic.emit();
    }
    resolution.descriptor
}

/// Resolve a bare glass input on the standard scale.
///
/// ```rust
/// use glasskit_core::{resolve_glass, GlassDescriptor};
///
/// assert_eq!(resolve_glass(false), GlassDescriptor::DISABLED);
/// assert_eq!(resolve_glass("no-such-preset"), GlassDescriptor::default_glass());
/// ```
pub fn resolve_glass(glass: impl Into<GlassInput>) -> GlassDescriptor {
    resolve(&GlassRequest::from(glass.into()))
}

/// Resolve a request without logging, returning the diagnostics instead.
pub fn resolve_detailed(request: &GlassRequest) -> Resolution {
    let mut resolver = Resolver {
        scale: request.scale,
        diagnostics: Vec::new(),
    };
    let descriptor = resolver.resolve(request);
    Resolution {
        descriptor,
        diagnostics: resolver.diagnostics,
    }
}

struct Resolver {
    scale: BlurScale,
    diagnostics: Vec<Diagnostic>,
}

impl Resolver {
    fn resolve(&mut self, request: &GlassRequest) -> GlassDescriptor {
        if let Some(layer) = request.layer {
            match LayerDepth::from_number(layer) {
                Some(depth) => {
                    let (blur, opacity) = depth.glass();
                    return GlassDescriptor {
                        blur_px: blur.px_on(self.scale),
                        opacity,
                        border_glow: false,
                    };
                }
                None => self.diagnostics.push(Diagnostic::LayerOutOfRange { layer }),
            }
        }

        if let Some(panel) = request.panel {
            let (blur, opacity, border_glow) = panel.glass();
            return self.from_parts(Some(blur.into()), Some(opacity), Some(border_glow));
        }

        if let Some(button) = request.button {
            let (blur, opacity, border_glow) = button.glass();
            return self.from_parts(Some(blur.into()), Some(opacity), Some(border_glow));
        }

        match &request.glass {
            None | Some(GlassInput::Toggle(true)) => GlassDescriptor::default_on(self.scale),
            Some(GlassInput::Toggle(false)) => GlassDescriptor::DISABLED,
            Some(GlassInput::Preset(name)) => self.from_config(&GlassConfig::from(get_preset(*name))),
            Some(GlassInput::Named(name)) => match lookup_preset(name) {
                Some(preset) => self.from_config(&GlassConfig::from(preset)),
                None => {
                    self.diagnostics
                        .push(Diagnostic::UnknownPreset { name: name.clone() });
                    GlassDescriptor::default_on(self.scale)
                }
            },
            Some(GlassInput::Custom(config)) => self.from_config(config),
        }
    }

    fn from_config(&mut self, config: &GlassConfig) -> GlassDescriptor {
        self.from_parts(config.blur, config.opacity, config.border_glow)
    }

    fn from_parts(
        &mut self,
        blur: Option<BlurValue>,
        opacity: Option<OpacityValue>,
        border_glow: Option<bool>,
    ) -> GlassDescriptor {
        let (blur_px, diagnostic) = blur
            .unwrap_or(BlurValue::Token(BlurToken::Md))
            .resolve_px(self.scale);
        self.diagnostics.extend(diagnostic);

        GlassDescriptor {
            blur_px,
            opacity: opacity.unwrap_or(OpacityValue::Token(OpacityToken::Normal)).resolve(),
            border_glow: border_glow.unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::MAX_BLUR;

    fn custom(config: GlassConfig) -> Resolution {
        resolve_detailed(&GlassRequest::new().glass(config))
    }

    #[test]
    fn disabled_glass() {
        assert_eq!(resolve_glass(false), GlassDescriptor::DISABLED);
        assert_eq!(GlassDescriptor::DISABLED.blur_css(), "0px");
    }

    #[test]
    fn default_glass_for_true_and_absent() {
        let expected = GlassDescriptor {
            blur_px: 10.0,
            opacity: 0.25,
            border_glow: false,
        };
        assert_eq!(resolve_glass(true), expected);
        assert_eq!(resolve(&GlassRequest::new()), expected);
        assert_eq!(resolve_glass(GlassConfig::new()), expected);
    }

    #[test]
    fn lg_blur_with_custom_opacity() {
        let resolution = custom(GlassConfig::new().blur(BlurToken::Lg).opacity(0.3));
        assert_eq!(resolution.descriptor.blur_css(), "16px");
        assert_eq!(resolution.descriptor.opacity, 0.3);
        assert!(!resolution.descriptor.border_glow);
        assert!(resolution.diagnostics.is_empty());
    }

    #[test]
    fn oversized_blur_clamps_with_one_diagnostic() {
        let resolution = custom(GlassConfig::new().blur(50.0));
        assert_eq!(resolution.descriptor.blur_css(), "20px");
        assert_eq!(
            resolution.diagnostics,
            vec![Diagnostic::BlurClamped { requested: 50.0, max: MAX_BLUR }]
        );
    }

    #[test]
    fn numeric_blur_property() {
        for v in [-4.0, 0.0, 0.5, 7.0, 19.99, 20.0, 21.0, 400.0] {
            let resolution = custom(GlassConfig::new().blur(v));
            assert_eq!(resolution.descriptor.blur_px, v.max(0.0).min(MAX_BLUR), "{v}");
            assert_eq!(resolution.diagnostics.len(), usize::from(v > MAX_BLUR), "{v}");
        }
    }

    #[test]
    fn numeric_opacity_property() {
        for v in [-1.0, 0.0, 0.3, 1.0, 1.5] {
            let resolution = custom(GlassConfig::new().opacity(v));
            assert_eq!(resolution.descriptor.opacity, v.max(0.0).min(1.0), "{v}");
            assert!(resolution.diagnostics.is_empty());
        }
    }

    #[test]
    fn preset_name_matches_manual_construction() {
        for name in crate::presets::list_presets() {
            let preset = get_preset(*name);
            let manual = GlassConfig::new()
                .blur(preset.blur)
                .opacity(preset.opacity)
                .border_glow(preset.border_glow);
            assert_eq!(resolve_glass(name.name()), resolve_glass(manual), "{name}");
            assert_eq!(resolve_glass(*name), resolve_glass(manual), "{name}");
        }
    }

    #[test]
    fn modal_preset_resolves() {
        let modal = resolve_glass(PresetName::Modal);
        assert_eq!(modal.blur_css(), "16px");
        assert_eq!(modal.opacity, 0.7);
        assert!(modal.border_glow);
    }

    #[test]
    fn invalid_preset_falls_back_to_default() {
        let resolution = resolve_detailed(&GlassRequest::new().glass("hero"));
        assert_eq!(resolution.descriptor, GlassDescriptor::default_glass());
        assert_eq!(
            resolution.diagnostics,
            vec![Diagnostic::UnknownPreset { name: "hero".into() }]
        );
    }

    #[test]
    fn layer_takes_priority() {
        let request = GlassRequest::new()
            .glass(false)
            .layer(2)
            .panel(PanelPreset::Overlay)
            .button(ButtonPreset::Ghost);
        let glass = resolve(&request);
        assert_eq!(glass.blur_css(), "10px");
        assert_eq!(glass.opacity, 0.2);
    }

    #[test]
    fn deeper_layers_are_darker() {
        let opacity = |layer: u8| resolve(&GlassRequest::new().layer(layer)).opacity;
        assert!(opacity(2) > opacity(1));
        assert!(opacity(3) > opacity(2));
    }

    #[test]
    fn out_of_range_layer_is_ignored() {
        let resolution = resolve_detailed(&GlassRequest::new().layer(9).glass(false));
        assert_eq!(resolution.descriptor, GlassDescriptor::DISABLED);
        assert_eq!(resolution.diagnostics, vec![Diagnostic::LayerOutOfRange { layer: 9 }]);
    }

    #[test]
    fn panel_beats_button_and_glass() {
        let request = GlassRequest::new()
            .glass(true)
            .panel(PanelPreset::Floating)
            .button(ButtonPreset::Ghost);
        let glass = resolve(&request);
        assert_eq!(glass.blur_css(), "16px");
        assert_eq!(glass.opacity, 0.5);
        assert!(glass.border_glow);
    }

    #[test]
    fn button_beats_glass() {
        let glass = resolve(&GlassRequest::new().glass(false).button(ButtonPreset::Outline));
        assert_eq!(glass.blur_css(), "6px");
        assert_eq!(glass.opacity, 0.1);
        assert!(glass.border_glow);
    }

    #[test]
    fn mobile_scale() {
        let request = GlassRequest::new().scale(BlurScale::Mobile);
        assert_eq!(resolve(&request).blur_css(), "6px");

        let resolution = resolve_detailed(&request.glass(GlassConfig::new().blur(16.0)));
        assert_eq!(resolution.descriptor.blur_css(), "12px");
        assert_eq!(resolution.diagnostics.len(), 1);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let glass = resolve_glass(GlassConfig::new().border_glow(true));
        assert_eq!(glass.blur_css(), "10px");
        assert_eq!(glass.opacity, 0.25);
        assert!(glass.border_glow);

        let glass = resolve_glass(GlassConfig::new().opacity(OpacityToken::Strong));
        assert_eq!(glass.opacity, 0.7);
    }
}
