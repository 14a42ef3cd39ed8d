//! Advisory diagnostics produced while resolving glass styles.

/// A non-fatal note about an input that was normalized during resolution.
///
/// Diagnostics never change the outcome of a resolution. They are logged
/// through `tracing` in debug builds and silent in release builds.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Diagnostic {
    /// A numeric blur exceeded the scale's hard limit and was clamped
    #[error("blur {requested}px exceeds maximum {max}px, clamping to {max}px; large blur radii are expensive to render")]
    BlurClamped { requested: f64, max: f64 },
    /// A preset name did not match the registry; the default glass was used
    #[error("invalid preset name {name:?}, using default glass")]
    UnknownPreset { name: String },
    /// A layer depth outside 1..=3 was ignored
    #[error("layer depth {layer} is out of range 1..=3, ignoring")]
    LayerOutOfRange { layer: u8 },
}

impl Diagnostic {
    /// Log this diagnostic as a warning in debug builds.
    pub fn emit(&self) {
        if !cfg!(debug_assertions) {
            return;
        }
        match self {
            Diagnostic::BlurClamped { requested, max } => {
                tracing::warn!(requested, max, "{self}");
            }
            Diagnostic::UnknownPreset { name } => {
                tracing::warn!(preset = %name, "{self}");
            }
            Diagnostic::LayerOutOfRange { layer } => {
                tracing::warn!(layer, "{self}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let clamped = Diagnostic::BlurClamped { requested: 50.0, max: 20.0 };
        assert!(clamped.to_string().starts_with("blur 50px exceeds maximum 20px"));

        let unknown = Diagnostic::UnknownPreset { name: "hero".into() };
        assert_eq!(unknown.to_string(), "invalid preset name \"hero\", using default glass");

        let layer = Diagnostic::LayerOutOfRange { layer: 7 };
        assert_eq!(layer.to_string(), "layer depth 7 is out of range 1..=3, ignoring");
    }

    #[test]
    fn emit_without_subscriber_is_harmless() {
        Diagnostic::LayerOutOfRange { layer: 0 }.emit();
    }
}
