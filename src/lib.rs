//! # glasskit-core
//!
//! Core design tokens and style resolution for glassmorphism UI.
//!
//! This crate provides platform-agnostic data and logic for:
//! - Design tokens for blur, opacity, color, radius, shadow and motion
//! - Context presets tuned for modals, buttons, cards, navigation and more
//! - Resolving loose glass descriptions into concrete blur/opacity values
//! - Detecting backdrop-filter support and falling back gracefully
//! - Computing the inline style of a glass container
//!
//! ## Features
//!
//! - `serde` - Enable serialization/deserialization for tokens and configs
//! - `toml` - Load container configs from TOML
//! - `web` - Enable browser capability probing and DOM styling
//!
//! ## Example
//!
//! ```rust
//! use glasskit_core::{GlassContainer, PresetName, StaticCapabilities};
//! use glasskit_core::tokens::{ColorName, ShadowToken};
//!
//! // Resolve a modal preset against an environment without backdrop blur
//! let rendered = GlassContainer::new()
//!     .glass(PresetName::Modal)
//!     .color(ColorName::Accent)
//!     .shadow(ShadowToken::Lg)
//!     .render(&StaticCapabilities::without_backdrop_filter());
//!
//! // Opacity is raised to keep the panel legible without blur
//! assert_eq!(rendered.descriptor.opacity, 0.7);
//! assert!((rendered.opacity - 0.9).abs() < 1e-9);
//! assert_eq!(rendered.style.get("background-color"), Some("hsla(271, 81%, 56%, 0.9)"));
//! assert!(!rendered.style.contains("backdrop-filter"));
//! ```

pub mod capability;
mod config;
mod container;
mod diagnostic;
mod error;
pub mod presets;
mod resolve;
pub mod tokens;

pub use capability::{CapabilityProbe, DeviceProfile, StaticCapabilities};
pub use config::ContainerConfig;
pub use container::{Element, GlassContainer, RenderedContainer, StyleDeclaration};
pub use diagnostic::Diagnostic;
pub use error::Error;
pub use presets::{get_preset, list_presets, lookup_preset, ButtonPreset, PanelPreset, PresetConfig, PresetName};
pub use resolve::{resolve, resolve_detailed, resolve_glass, GlassConfig, GlassDescriptor, GlassInput, GlassRequest, Resolution};

#[cfg(feature = "web")]
pub use capability::web::{supports_backdrop_filter, BrowserCapabilities};
#[cfg(feature = "web")]
pub use container::web::{apply_style, create_element, render_into};
