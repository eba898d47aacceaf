//! Host drawing capability
//!
//! The widget decides what to draw and where; the host decides how lines
//! and ellipses actually reach the screen.

use glam::{Mat4, Vec2};
use legend_core::TriadStyle;

/// Drawing primitives the host implements for the legend.
pub trait LegendDraw {
    /// Draws the axis triad with the given local-to-screen transform.
    ///
    /// The geometry to transform is
    /// [`triad_vertices`](legend_core::triad_vertices).
    fn triad(&mut self, transform: Mat4, style: &TriadStyle);

    /// Draws the circular highlight marker.
    fn highlight(&mut self, center: Vec2, radius: f32, color: [f32; 4]);
}
