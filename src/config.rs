use crate::container::{Element, GlassContainer};
use crate::presets::{ButtonPreset, PanelPreset};
use crate::resolve::{GlassInput, GlassRequest};
use crate::tokens::{BlurScale, ColorName, RadiusToken, ShadowToken};

/// Container description from a config file such as `glass.toml`.
///
/// All fields are optional; missing ones take the container defaults.
///
/// ```toml
/// glass = { blur = "lg", opacity = 0.3 }
/// color = "primary"
/// radius = "2xl"
/// element = "section"
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ContainerConfig {
    pub glass: Option<GlassInput>,
    pub layer: Option<u8>,
    pub panel_preset: Option<PanelPreset>,
    pub button_preset: Option<ButtonPreset>,
    pub blur_scale: Option<BlurScale>,
    pub adaptive_blur: Option<bool>,
    pub color: Option<ColorName>,
    pub radius: Option<RadiusToken>,
    pub shadow: Option<ShadowToken>,
    pub element: Option<Element>,
}

impl ContainerConfig {
    /// Parse a TOML string into `ContainerConfig`.
    #[cfg(feature = "toml")]
    pub fn from_toml_str(s: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(s)?)
    }

    /// The glass request described by this config.
    pub fn request(&self) -> GlassRequest {
        GlassRequest {
            glass: self.glass.clone(),
            layer: self.layer,
            panel: self.panel_preset,
            button: self.button_preset,
            scale: self.blur_scale.unwrap_or_default(),
        }
    }

    /// Build a container, filling unset fields with defaults.
    pub fn to_container(&self) -> GlassContainer {
        GlassContainer::from_request(self.request())
            .adaptive_blur(self.adaptive_blur.unwrap_or(false))
            .color(self.color.unwrap_or_default())
            .radius(self.radius.unwrap_or_default())
            .shadow(self.shadow.unwrap_or_default())
            .element(self.element.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::StaticCapabilities;

    #[test]
    fn default_config_is_default_container() {
        assert_eq!(ContainerConfig::default().to_container(), GlassContainer::new());
    }

    #[test]
    fn fields_carry_through() {
        let config = ContainerConfig {
            glass: Some(GlassInput::Named("nav".into())),
            color: Some(ColorName::Success),
            radius: Some(RadiusToken::Xl),
            element: Some(Element::Nav),
            ..Default::default()
        };
        let rendered = config.to_container().render(&StaticCapabilities::full());
        assert_eq!(rendered.element, Element::Nav);
        assert_eq!(rendered.style.get("border-radius"), Some("1rem"));
        assert_eq!(rendered.style.get("background-color"), Some("hsla(142, 76%, 45%, 0.5)"));
    }

    #[test]
    fn request_maps_presets() {
        let config = ContainerConfig {
            layer: Some(1),
            panel_preset: Some(PanelPreset::Raised),
            blur_scale: Some(BlurScale::Mobile),
            ..Default::default()
        };
        let request = config.request();
        assert_eq!(request.layer, Some(1));
        assert_eq!(request.panel, Some(PanelPreset::Raised));
        assert_eq!(request.scale, BlurScale::Mobile);
        assert_eq!(request.glass, None);
    }

    #[cfg(feature = "toml")]
    #[test]
    fn parse_toml_custom_glass() {
        let config = ContainerConfig::from_toml_str(
            r#"
            glass = { blur = "lg", opacity = 0.3 }
            color = "primary"
            radius = "2xl"
            element = "section"
            "#,
        )
        .unwrap();
        let glass = crate::resolve(&config.request());
        assert_eq!(glass.blur_css(), "16px");
        assert_eq!(glass.opacity, 0.3);
        assert_eq!(config.radius, Some(RadiusToken::Xxl));
        assert_eq!(config.element, Some(Element::Section));
    }

    #[cfg(feature = "toml")]
    #[test]
    fn parse_toml_glass_forms() {
        let disabled = ContainerConfig::from_toml_str("glass = false").unwrap();
        assert_eq!(disabled.glass, Some(GlassInput::Toggle(false)));

        let preset = ContainerConfig::from_toml_str(r#"glass = "modal""#).unwrap();
        assert_eq!(preset.glass, Some(GlassInput::Named("modal".into())));

        let numeric = ContainerConfig::from_toml_str("glass = { blur = 50, border_glow = true }").unwrap();
        let glass = crate::resolve(&numeric.request());
        assert_eq!(glass.blur_css(), "20px");
        assert!(glass.border_glow);
    }

    #[cfg(feature = "toml")]
    #[test]
    fn parse_toml_rejects_unknown_tokens() {
        let result = ContainerConfig::from_toml_str(r#"color = "chartreuse""#);
        assert!(matches!(result, Err(crate::Error::Config(_))));
    }
}
