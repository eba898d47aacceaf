//! Axis Legend Core
//!
//! Math, geometry, and configuration for the interactive axis legend:
//! a small triad overlay that shows a 3D viewport's orientation and can be
//! dragged around the screen. This crate is free of interaction state; the
//! widget itself lives in `legend-widget`.
//!
//! # Module Structure
//!
//! ```text
//! legend-core/
//! ├── camera.rs     # Turntable orientation capability (azimuth/elevation)
//! ├── transform.rs  # Screen placement and camera-aligned transform
//! ├── geometry.rs   # Canonical triad line geometry
//! ├── config.rs     # Legend configuration
//! └── constants.rs  # Shared rendering constants
//! ```

pub mod camera;
pub mod config;
pub mod constants;
pub mod geometry;
pub mod transform;

// Re-exports for convenience
pub use camera::{OrbitAngles, TurntableOrientation};
pub use config::{HighlightConfig, LegendConfig, TriadStyle};
pub use geometry::{AxisVertex, triad_vertices};
pub use transform::Placement;
