//! Shared legend constants
//!
//! Centralizes the magic numbers used across placement, configuration,
//! and the triad geometry.

/// Placement constants
pub mod placement {
    /// Default anchor position, measured from the top-left corner
    pub const DEFAULT_ANCHOR: [f32; 2] = [60.0, 60.0];
    /// Default on-screen triad radius
    pub const DEFAULT_SIZE: f32 = 50.0;
    /// Depth scale applied to the aligned triad; the legend is a flat
    /// screen overlay, so its depth extent is collapsed to near zero
    pub const DEPTH_FLATTEN: f32 = 0.001;
    /// Fixed rotation about local X applied before the camera angles,
    /// in degrees
    pub const REST_TILT_DEGREES: f32 = 90.0;
}

/// Triad line colors
pub mod colors {
    /// X-axis color (red)
    pub const X_AXIS: [f32; 3] = [1.0, 0.0, 0.0];
    /// Y-axis color (green)
    pub const Y_AXIS: [f32; 3] = [0.0, 1.0, 0.0];
    /// Z-axis color (blue)
    pub const Z_AXIS: [f32; 3] = [0.0, 0.0, 1.0];
}

/// Highlight marker constants
pub mod highlight {
    /// Marker color (yellow)
    pub const COLOR: [f32; 3] = [1.0, 1.0, 0.0];
    /// Marker alpha while idle or hovering
    pub const IDLE_ALPHA: f32 = 0.5;
    /// Marker alpha while actively dragged
    pub const ACTIVE_ALPHA: f32 = 1.0;
}

/// Triad line style defaults
pub mod style {
    /// Default line width in pixels
    pub const DEFAULT_WIDTH: f32 = 2.0;
}
