//! The shared logo geometry configuration.
//!
//! Every parametric variant derives from one [`LogoConfig`] value; no
//! variant carries its own copy of the geometry. The `Default` impl holds
//! the tuned production values; alternative geometries can be loaded from
//! JSON (see [`LogoConfig::from_json`]) for experimentation.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

// ============================================================================
// Geometry records
// ============================================================================

/// Geometry of the filled color composition.
///
/// The outer circle clips the whole silhouette; the three primary circles
/// (green, red, blue) share one radius and overlap to form the mixed-color
/// regions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorGeometry {
    pub outer_x: f64,
    pub outer_y: f64,
    pub outer_radius: f64,
    /// Shared radius of the three primary circles.
    pub circle_radius: f64,
    pub green_x: f64,
    pub green_y: f64,
    pub red_x: f64,
    pub red_y: f64,
    pub blue_x: f64,
    pub blue_y: f64,
}

impl ColorGeometry {
    /// Centers of the three primary circles, in paint order.
    pub fn primary_centers(&self) -> [(f64, f64); 3] {
        [
            (self.green_x, self.green_y),
            (self.red_x, self.red_y),
            (self.blue_x, self.blue_y),
        ]
    }
}

/// Geometry of the stroked monochrome composition.
///
/// The outer clip circle is deliberately distinct from the color variant's
/// (the strokes reach further out than the fills do).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonoGeometry {
    pub outer_x: f64,
    pub outer_y: f64,
    pub outer_radius: f64,
    /// Stroke width of the three primary-circle outlines.
    pub stroke_width: f64,
    /// Stroke width of the outer ring.
    pub outer_stroke_width: f64,
}

// ============================================================================
// LogoConfig
// ============================================================================

/// The single source of truth for all parametric logo variants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoConfig {
    pub color: ColorGeometry,
    pub mono: MonoGeometry,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            color: ColorGeometry {
                outer_x: 512.0,
                outer_y: 511.0,
                outer_radius: 270.0,
                circle_radius: 234.0,
                green_x: 513.0,
                green_y: 369.0,
                red_x: 365.0,
                red_y: 595.0,
                blue_x: 643.0,
                blue_y: 595.0,
            },
            mono: MonoGeometry {
                outer_x: 508.0,
                outer_y: 510.0,
                outer_radius: 283.0,
                stroke_width: 33.0,
                outer_stroke_width: 36.0,
            },
        }
    }
}

impl LogoConfig {
    /// Rejects geometry that would produce malformed or degenerate markup.
    ///
    /// Called by every geometry function before any string is built.
    pub fn validate(&self) -> Result<()> {
        let c = &self.color;
        let m = &self.mono;

        let coords = [
            c.outer_x, c.outer_y, c.green_x, c.green_y, c.red_x, c.red_y, c.blue_x, c.blue_y,
            m.outer_x, m.outer_y,
        ];
        if coords.iter().any(|v| !v.is_finite()) {
            return Err(Error::Config("non-finite coordinate".into()));
        }

        if !(c.outer_radius.is_finite() && c.outer_radius > 0.0) {
            return Err(Error::Config(format!(
                "color outer radius must be positive, got {}",
                c.outer_radius
            )));
        }
        if !(c.circle_radius.is_finite() && c.circle_radius > 0.0) {
            return Err(Error::Config(format!(
                "primary circle radius must be positive, got {}",
                c.circle_radius
            )));
        }
        if !(m.outer_radius.is_finite() && m.outer_radius > 0.0) {
            return Err(Error::Config(format!(
                "mono outer radius must be positive, got {}",
                m.outer_radius
            )));
        }
        if !(m.stroke_width.is_finite() && m.stroke_width > 0.0) {
            return Err(Error::Config(format!(
                "stroke width must be positive, got {}",
                m.stroke_width
            )));
        }
        if !(m.outer_stroke_width.is_finite() && m.outer_stroke_width > 0.0) {
            return Err(Error::Config(format!(
                "outer stroke width must be positive, got {}",
                m.outer_stroke_width
            )));
        }

        // A stroke wider than the circle it outlines folds over itself.
        if m.stroke_width > c.circle_radius {
            return Err(Error::Config(format!(
                "stroke width {} exceeds primary circle radius {}",
                m.stroke_width, c.circle_radius
            )));
        }
        if m.outer_stroke_width > m.outer_radius {
            return Err(Error::Config(format!(
                "outer stroke width {} exceeds outer radius {}",
                m.outer_stroke_width, m.outer_radius
            )));
        }

        Ok(())
    }

    /// Serializes the configuration to JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a configuration from JSON.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        LogoConfig::default().validate().unwrap();
    }

    #[test]
    fn zero_radius_rejected() {
        let mut config = LogoConfig::default();
        config.color.circle_radius = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn negative_outer_radius_rejected() {
        let mut config = LogoConfig::default();
        config.mono.outer_radius = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn stroke_wider_than_circle_rejected() {
        let mut config = LogoConfig::default();
        config.mono.stroke_width = config.color.circle_radius + 1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn non_finite_coordinate_rejected() {
        let mut config = LogoConfig::default();
        config.color.green_x = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn json_round_trip() {
        let config = LogoConfig::default();
        let json = config.to_json().unwrap();
        let restored = LogoConfig::from_json(&json).unwrap();
        assert_eq!(config, restored);
    }

    #[test]
    fn json_field_names_are_camel_case() {
        let json = LogoConfig::default().to_json().unwrap();
        assert!(json.contains("\"circleRadius\""));
        assert!(json.contains("\"outerStrokeWidth\""));
    }

    #[test]
    fn primary_centers_order() {
        let c = LogoConfig::default().color;
        let centers = c.primary_centers();
        assert_eq!(centers[0], (513.0, 369.0));
        assert_eq!(centers[1], (365.0, 595.0));
        assert_eq!(centers[2], (643.0, 595.0));
    }
}
