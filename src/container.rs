//! Glass container styling.
//!
//! A [`GlassContainer`] combines a glass request with color, radius and
//! shadow tokens, and renders to a platform-agnostic [`RenderedContainer`]:
//! an element tag plus ordered inline style declarations. Consumers apply
//! those declarations with whatever DOM or virtual-DOM layer they use; the
//! `web` feature provides helpers for `web-sys`.

use crate::capability::{fallback_opacity, CapabilityProbe};
use crate::presets::{ButtonPreset, PanelPreset};
use crate::resolve::{resolve, GlassDescriptor, GlassInput, GlassRequest};
use crate::tokens::{BlurScale, ColorName, Hsla, RadiusToken, ShadowToken};

/// Inner highlights along the top and bottom edges of a glowing panel.
const EDGE_HIGHLIGHTS: [&str; 2] = [
    "inset 0 1px 1px 0 rgba(255, 255, 255, 0.15)",
    "inset 0 -1px 1px 0 rgba(255, 255, 255, 0.05)",
];

/// Glow rings as `(blur px, spread px, alpha override)`, tight to wide.
const GLOW_RINGS: [(u32, u32, Option<f64>); 3] = [(20, 2, None), (40, 4, Some(0.2)), (60, 6, Some(0.1))];

const GLOW_BORDER: &str = "1px solid rgba(255, 255, 255, 0.08)";

/// GPU compositing hint applied to every container.
const GPU_HINT: &str = "translateZ(0)";

/// HTML element a container renders as.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Element {
    #[default]
    Div,
    Section,
    Article,
    Aside,
    Header,
    Footer,
    Main,
    Nav,
    Button,
}

impl Element {
    /// HTML tag name.
    pub fn tag(self) -> &'static str {
        match self {
            Element::Div => "div",
            Element::Section => "section",
            Element::Article => "article",
            Element::Aside => "aside",
            Element::Header => "header",
            Element::Footer => "footer",
            Element::Main => "main",
            Element::Nav => "nav",
            Element::Button => "button",
        }
    }
}

/// Ordered list of CSS declarations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleDeclaration {
    entries: Vec<(&'static str, String)>,
}

impl StyleDeclaration {
    /// Create an empty declaration list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a declaration.
    pub fn push(&mut self, property: &'static str, value: impl Into<String>) {
        self.entries.push((property, value.into()));
    }

    /// Value of the first declaration for `property`.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }

    /// Returns `true` when `property` is declared.
    #[inline]
    pub fn contains(&self, property: &str) -> bool {
        self.get(property).is_some()
    }

    /// Iterate over `(property, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries.iter().map(|(p, v)| (*p, v.as_str()))
    }

    /// Number of declarations.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when nothing is declared.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize as an inline `style` attribute value.
    pub fn to_css(&self) -> String {
        self.iter()
            .map(|(p, v)| format!("{p}: {v};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Builder for a glass container.
///
/// ## Example
///
/// ```rust
/// use glasskit_core::{GlassContainer, PresetName, StaticCapabilities};
/// use glasskit_core::tokens::ColorName;
///
/// let rendered = GlassContainer::new()
///     .glass(PresetName::Card)
///     .color(ColorName::Primary)
///     .render(&StaticCapabilities::full());
///
/// assert_eq!(rendered.style.get("backdrop-filter"), Some("blur(6px)"));
/// assert_eq!(rendered.style.get("background-color"), Some("hsla(217, 91%, 60%, 0.15)"));
/// assert_eq!(rendered.style.get("transform"), Some("translateZ(0)"));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GlassContainer {
    request: GlassRequest,
    color: ColorName,
    radius: RadiusToken,
    shadow: ShadowToken,
    element: Element,
    hovered: bool,
    adaptive_blur: bool,
}

impl GlassContainer {
    /// Default container: default glass, neutral color, `lg` radius,
    /// `sm` shadow, rendered as a `div`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a container around an existing request.
    pub fn from_request(request: GlassRequest) -> Self {
        Self {
            request,
            ..Self::default()
        }
    }

    /// Set the glass input.
    pub fn glass(mut self, glass: impl Into<GlassInput>) -> Self {
        self.request.glass = Some(glass.into());
        self
    }

    /// Set the layer depth (1-3).
    pub fn layer(mut self, layer: u8) -> Self {
        self.request.layer = Some(layer);
        self
    }

    /// Set the panel preset.
    pub fn panel_preset(mut self, panel: PanelPreset) -> Self {
        self.request.panel = Some(panel);
        self
    }

    /// Set the button preset.
    pub fn button_preset(mut self, button: ButtonPreset) -> Self {
        self.request.button = Some(button);
        self
    }

    /// Set the blur scale.
    pub fn blur_scale(mut self, scale: BlurScale) -> Self {
        self.request.scale = scale;
        self
    }

    /// Pick the blur scale from the probe's device profile at render time.
    pub fn adaptive_blur(mut self, adaptive: bool) -> Self {
        self.adaptive_blur = adaptive;
        self
    }

    pub fn color(mut self, color: ColorName) -> Self {
        self.color = color;
        self
    }

    pub fn radius(mut self, radius: RadiusToken) -> Self {
        self.radius = radius;
        self
    }

    pub fn shadow(mut self, shadow: ShadowToken) -> Self {
        self.shadow = shadow;
        self
    }

    /// Set the element to render as.
    pub fn element(mut self, element: Element) -> Self {
        self.element = element;
        self
    }

    /// Hovered containers render their shadow one level deeper.
    pub fn hovered(mut self, hovered: bool) -> Self {
        self.hovered = hovered;
        self
    }

    /// The glass request this container resolves.
    pub fn request(&self) -> &GlassRequest {
        &self.request
    }

    /// Resolve the glass and compute the final style.
    pub fn render(&self, probe: &impl CapabilityProbe) -> RenderedContainer {
        let descriptor = if self.adaptive_blur {
            let scale = probe.device_profile().blur_scale();
            resolve(&self.request.clone().scale(scale))
        } else {
            resolve(&self.request)
        };

        let supported = probe.supports_backdrop_filter();
        let opacity = fallback_opacity(descriptor.opacity, supported);
        let backdrop_filter = supported && !descriptor.is_unblurred();
        let color = self.color.token();
        let shadow = if self.hovered { self.shadow.elevated() } else { self.shadow };

        let mut style = StyleDeclaration::new();

        if self.radius != RadiusToken::None {
            style.push("border-radius", self.radius.css());
        }

        if let Some(box_shadow) = box_shadow(shadow, descriptor.border_glow, color.glow) {
            style.push("box-shadow", box_shadow);
        }

        style.push("background-color", color.glass.with_alpha(opacity).css());

        if backdrop_filter {
            let filter = format!("blur({})", descriptor.blur_css());
            style.push("backdrop-filter", filter.clone());
            style.push("-webkit-backdrop-filter", filter);
        }

        style.push("transform", GPU_HINT);

        if descriptor.border_glow {
            style.push("border", GLOW_BORDER);
        }

        RenderedContainer {
            element: self.element,
            descriptor,
            opacity,
            backdrop_filter,
            style,
        }
    }
}

/// Build the `box-shadow` value, `None` when there is nothing to draw.
fn box_shadow(shadow: ShadowToken, border_glow: bool, glow: Hsla) -> Option<String> {
    if !border_glow {
        return (shadow != ShadowToken::None).then(|| shadow.css().to_string());
    }

    let mut layers: Vec<String> = Vec::with_capacity(6);
    if shadow != ShadowToken::None {
        layers.push(shadow.css().to_string());
    }
    layers.extend(EDGE_HIGHLIGHTS.iter().map(|s| s.to_string()));
    for (blur, spread, alpha) in GLOW_RINGS {
        let ring = match alpha {
            Some(a) => glow.with_alpha(a),
            None => glow,
        };
        layers.push(format!("0 0 {blur}px {spread}px {ring}"));
    }
    Some(layers.join(", "))
}

/// Result of rendering a container.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedContainer {
    /// Element to render as
    pub element: Element,
    /// Resolved glass before any capability fallback
    pub descriptor: GlassDescriptor,
    /// Background opacity after the capability fallback
    pub opacity: f64,
    /// Whether a backdrop filter was emitted
    pub backdrop_filter: bool,
    /// Inline style declarations in application order
    pub style: StyleDeclaration,
}

impl RenderedContainer {
    /// Inline `style` attribute value.
    pub fn style_attribute(&self) -> String {
        self.style.to_css()
    }
}

/// DOM helpers for applying rendered containers.
#[cfg(feature = "web")]
pub mod web {
    use super::*;
    use crate::capability::web::BrowserCapabilities;
    use crate::Error;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Document, HtmlElement};

    fn dom_error(action: &str, err: JsValue) -> Error {
        Error::Dom(format!("{action}: {err:?}"))
    }

    /// Write every declaration onto an element's inline style.
    pub fn apply_style(element: &HtmlElement, style: &StyleDeclaration) -> Result<(), Error> {
        let css = element.style();
        for (property, value) in style.iter() {
            css.set_property(property, value)
                .map_err(|e| dom_error("Failed to set style property", e))?;
        }
        Ok(())
    }

    /// Create a styled element for a rendered container.
    pub fn create_element(document: &Document, rendered: &RenderedContainer) -> Result<HtmlElement, Error> {
        let element = document
            .create_element(rendered.element.tag())
            .map_err(|e| dom_error("Failed to create element", e))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| Error::Dom("Created element is not an HtmlElement".to_string()))?;
        apply_style(&element, &rendered.style)?;
        Ok(element)
    }

    /// Render a container against the live browser and style `element`.
    pub fn render_into(container: &GlassContainer, element: &HtmlElement) -> Result<RenderedContainer, Error> {
        let rendered = container.render(&BrowserCapabilities);
        apply_style(element, &rendered.style)?;
        Ok(rendered)
    }
}
