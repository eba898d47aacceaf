//! Drag session and highlight feedback state

use glam::Vec2;

/// Ephemeral state for one drag of the legend.
///
/// Created by a qualifying pointer-down, destroyed by pointer-up (commit)
/// or selection-mode exit (cancel). While it exists the committed anchor
/// never moves; only the pending offset does.
#[derive(Debug, Clone, Copy)]
pub struct DragSession {
    /// Offset from the initial click point to the committed anchor,
    /// captured once at drag start and constant thereafter.
    pub grab_offset: Vec2,
    /// Offset from the committed anchor to the live drop target,
    /// recomputed on every pointer move.
    pub pending_offset: Vec2,
}

impl DragSession {
    /// Starts a session for a press at `click_pos` on a legend anchored
    /// at `anchor`.
    pub fn start(click_pos: Vec2, anchor: Vec2) -> Self {
        Self {
            grab_offset: click_pos - anchor,
            pending_offset: Vec2::ZERO,
        }
    }
}

/// Highlight marker feedback state.
///
/// Mutated only by the widget's drag paths, read by the drawing
/// capability. Translucent while idle, opaque while a drag is live.
#[derive(Debug, Clone, Copy)]
pub struct Highlight {
    /// Marker center in screen coordinates.
    pub center: Vec2,
    /// Current marker alpha.
    pub alpha: f32,
    /// Whether the marker is drawn at all.
    pub visible: bool,
}
