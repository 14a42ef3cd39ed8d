//! Rendering capability detection.
//!
//! Backdrop blur is not available everywhere. When it is missing, a glass
//! surface falls back to a more opaque fill so its content stays legible.
//! Probes are cheap and uncached; call them on every render if needed.

use crate::tokens::BlurScale;

/// Opacity added to a glass fill when backdrop blur is unavailable.
pub const FALLBACK_OPACITY_BOOST: f64 = 0.2;

/// Upper bound for a boosted fallback opacity.
pub const FALLBACK_OPACITY_CEILING: f64 = 0.9;

/// Opacity to render with, given backdrop-filter support.
///
/// Without support the opacity is raised by [`FALLBACK_OPACITY_BOOST`], up to
/// [`FALLBACK_OPACITY_CEILING`]. An opacity already above the ceiling is left
/// untouched, so a solid surface stays solid.
///
/// ## Example
///
/// ```rust
/// use glasskit_core::capability::fallback_opacity;
///
/// assert_eq!(fallback_opacity(0.25, true), 0.25);
/// assert!((fallback_opacity(0.25, false) - 0.45).abs() < 1e-9);
/// assert_eq!(fallback_opacity(0.8, false), 0.9);
/// assert_eq!(fallback_opacity(1.0, false), 1.0);
/// ```
pub fn fallback_opacity(opacity: f64, backdrop_filter_supported: bool) -> f64 {
    if backdrop_filter_supported {
        return opacity;
    }
    opacity.max((opacity + FALLBACK_OPACITY_BOOST).min(FALLBACK_OPACITY_CEILING))
}

/// Network class reported by the environment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ConnectionType {
    Slow2g,
    Cellular2g,
    Cellular3g,
    Cellular4g,
    /// Not reported
    #[default]
    Unknown,
}

impl ConnectionType {
    /// Parse a Network Information API `effectiveType` value.
    pub fn from_effective_type(effective_type: &str) -> Self {
        match effective_type {
            "slow-2g" => ConnectionType::Slow2g,
            "2g" => ConnectionType::Cellular2g,
            "3g" => ConnectionType::Cellular3g,
            "4g" => ConnectionType::Cellular4g,
            _ => ConnectionType::Unknown,
        }
    }

    /// Returns `true` for 2g-class connections.
    #[inline]
    pub fn is_slow(self) -> bool {
        matches!(self, ConnectionType::Slow2g | ConnectionType::Cellular2g)
    }
}

/// Hardware and network hints about the current device.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeviceProfile {
    /// Logical CPU cores
    pub cpu_cores: u32,
    /// Approximate device memory in gigabytes
    pub memory_gb: f64,
    pub connection: ConnectionType,
}

impl Default for DeviceProfile {
    /// Assumed profile when the environment reports nothing: 2 cores, 4 GB.
    fn default() -> Self {
        Self {
            cpu_cores: 2,
            memory_gb: 4.0,
            connection: ConnectionType::Unknown,
        }
    }
}

impl DeviceProfile {
    /// A capable desktop-class device.
    pub fn desktop() -> Self {
        Self {
            cpu_cores: 8,
            memory_gb: 8.0,
            connection: ConnectionType::Unknown,
        }
    }

    /// Fewer than 4 cores, less than 4 GB of memory, or a 2g connection.
    pub fn is_low_end(&self) -> bool {
        self.cpu_cores < 4 || self.memory_gb < 4.0 || self.connection.is_slow()
    }

    /// Blur table suited to this device.
    pub fn blur_scale(&self) -> BlurScale {
        if self.is_low_end() {
            BlurScale::Mobile
        } else {
            BlurScale::Standard
        }
    }
}

/// Queries what the rendering environment supports.
pub trait CapabilityProbe {
    /// Returns `true` when `backdrop-filter: blur()` can be rendered.
    fn supports_backdrop_filter(&self) -> bool;

    /// Hardware and network hints. Defaults to a capable desktop.
    fn device_profile(&self) -> DeviceProfile {
        DeviceProfile::desktop()
    }
}

/// Capabilities fixed up front, for tests and non-browser hosts such as
/// server-side rendering.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StaticCapabilities {
    pub backdrop_filter: bool,
    pub device: DeviceProfile,
}

impl StaticCapabilities {
    /// Everything supported on a capable desktop.
    pub fn full() -> Self {
        Self {
            backdrop_filter: true,
            device: DeviceProfile::desktop(),
        }
    }

    /// No backdrop filter.
    pub fn without_backdrop_filter() -> Self {
        Self {
            backdrop_filter: false,
            ..Self::full()
        }
    }
}

impl Default for StaticCapabilities {
    fn default() -> Self {
        Self::full()
    }
}

impl CapabilityProbe for StaticCapabilities {
    fn supports_backdrop_filter(&self) -> bool {
        self.backdrop_filter
    }

    fn device_profile(&self) -> DeviceProfile {
        self.device
    }
}

/// Browser capability probing.
#[cfg(feature = "web")]
pub mod web {
    use super::*;
    use wasm_bindgen::JsValue;

    /// Check `CSS.supports` for standard or `-webkit-` prefixed backdrop blur.
    ///
    /// Returns `false` outside a browser or when `CSS.supports` throws.
    pub fn supports_backdrop_filter() -> bool {
        if web_sys::window().is_none() {
            return false;
        }
        ["backdrop-filter", "-webkit-backdrop-filter"]
            .iter()
            .any(|property| web_sys::css::supports_with_value(property, "blur(1px)").unwrap_or(false))
    }

    /// Read hardware and network hints from `navigator`.
    ///
    /// Missing values fall back to [`DeviceProfile::default`].
    pub fn device_profile() -> DeviceProfile {
        let Some(navigator) = web_sys::window().map(|w| w.navigator()) else {
            return DeviceProfile::default();
        };
        let fallback = DeviceProfile::default();

        let cores = navigator.hardware_concurrency();
        let cpu_cores = if cores >= 1.0 { cores as u32 } else { fallback.cpu_cores };

        let memory_gb = js_sys::Reflect::get(&navigator, &JsValue::from_str("deviceMemory"))
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(fallback.memory_gb);

        let connection = js_sys::Reflect::get(&navigator, &JsValue::from_str("connection"))
            .ok()
            .filter(|c| c.is_object())
            .and_then(|c| js_sys::Reflect::get(&c, &JsValue::from_str("effectiveType")).ok())
            .and_then(|t| t.as_string())
            .map(|t| ConnectionType::from_effective_type(&t))
            .unwrap_or_default();

        DeviceProfile {
            cpu_cores,
            memory_gb,
            connection,
        }
    }

    /// Probe backed by the live browser environment.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct BrowserCapabilities;

    impl CapabilityProbe for BrowserCapabilities {
        fn supports_backdrop_filter(&self) -> bool {
            supports_backdrop_filter()
        }

        fn device_profile(&self) -> DeviceProfile {
            device_profile()
        }
    }
}
