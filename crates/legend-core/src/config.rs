//! Legend configuration
//!
//! Plain-old-data settings for the legend. These serialize so hosts can
//! keep them in their own configuration files; the legend itself never
//! touches disk.

use serde::{Deserialize, Serialize};

use crate::constants::{highlight, placement, style};

/// Triad line style, forwarded to the host's line primitive
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TriadStyle {
    /// Line width in pixels
    pub width: f32,
    /// Whether lines are antialiased
    pub antialias: bool,
}

impl Default for TriadStyle {
    fn default() -> Self {
        Self {
            width: style::DEFAULT_WIDTH,
            antialias: true,
        }
    }
}

/// Selection highlight configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct HighlightConfig {
    /// Marker color (RGB)
    pub color: [f32; 3],
    /// Alpha while idle or hovering
    pub idle_alpha: f32,
    /// Alpha while actively dragged
    pub active_alpha: f32,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            color: highlight::COLOR,
            idle_alpha: highlight::IDLE_ALPHA,
            active_alpha: highlight::ACTIVE_ALPHA,
        }
    }
}

/// Complete legend configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LegendConfig {
    /// Initial anchor position (screen coordinates, top-left origin)
    pub anchor: [f32; 2],
    /// Desired on-screen triad radius
    pub size: f32,
    /// Seismic (z-axis down) coordinate convention
    pub seismic_coords: bool,
    /// Whether the legend starts visible
    pub visible: bool,
    /// Triad line style
    #[serde(default)]
    pub style: TriadStyle,
    /// Highlight marker settings
    #[serde(default)]
    pub highlight: HighlightConfig,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            anchor: placement::DEFAULT_ANCHOR,
            size: placement::DEFAULT_SIZE,
            seismic_coords: true,
            visible: true,
            style: TriadStyle::default(),
            highlight: HighlightConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LegendConfig::default();
        assert_eq!(config.anchor, [60.0, 60.0]);
        assert_eq!(config.size, 50.0);
        assert!(config.seismic_coords);
        assert!(config.visible);
        assert_eq!(config.style.width, 2.0);
        assert!(config.style.antialias);
        assert_eq!(config.highlight.color, [1.0, 1.0, 0.0]);
        assert!(config.highlight.idle_alpha < config.highlight.active_alpha);
    }
}
