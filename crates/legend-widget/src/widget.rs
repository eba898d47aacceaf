//! The interactive axis legend widget

use glam::{Mat4, Vec2};

use legend_core::{
    HighlightConfig, LegendConfig, OrbitAngles, Placement, TriadStyle, TurntableOrientation,
};

use crate::drag::{DragSession, Highlight};
use crate::draw::LegendDraw;
use crate::events::{PointerButton, PointerEvent};

/// Interactive axis legend.
///
/// Owns the committed placement, the cached alignment transform, the
/// highlight feedback, and the drag session. Everything runs synchronously
/// on the thread that delivers pointer and camera events; the widget is a
/// plain owned value with no internal locking.
///
/// Alignment is recomputed from the last camera reading whenever that
/// reading changes ([`align_to`](Self::align_to)), a drag commits, or the
/// display size / coordinate convention change. Until the first
/// `align_to`, the widget is not attached to a camera and all recompute
/// paths keep the identity transform.
pub struct AxisLegend {
    placement: Placement,
    visible: bool,
    style: TriadStyle,
    highlight_config: HighlightConfig,
    highlight: Highlight,
    orientation: Option<OrbitAngles>,
    session: Option<DragSession>,
    transform: Mat4,
}

impl AxisLegend {
    /// Creates a legend from configuration. Not yet attached to a camera.
    pub fn new(config: LegendConfig) -> Self {
        let anchor = Vec2::from_array(config.anchor);
        Self {
            placement: Placement::new(anchor, config.size, config.seismic_coords),
            visible: config.visible,
            style: config.style,
            highlight_config: config.highlight,
            highlight: Highlight {
                center: anchor,
                alpha: config.highlight.idle_alpha,
                visible: false,
            },
            orientation: None,
            session: None,
            transform: Mat4::IDENTITY,
        }
    }

    /// Shows or hides the whole legend.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Whether the legend is drawn.
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Committed anchor position in screen coordinates.
    pub fn anchor(&self) -> Vec2 {
        self.placement.anchor
    }

    /// Desired on-screen triad radius.
    pub fn display_size(&self) -> f32 {
        self.placement.size
    }

    /// Changes the on-screen radius and realigns.
    pub fn set_display_size(&mut self, size: f32) {
        self.placement.size = size;
        self.refresh();
    }

    /// Whether the seismic (z-axis down) convention is active.
    pub fn seismic_coords(&self) -> bool {
        self.placement.seismic_coords
    }

    /// Switches coordinate convention and realigns.
    pub fn set_seismic_coords(&mut self, seismic: bool) {
        self.placement.seismic_coords = seismic;
        self.refresh();
    }

    /// Current local-to-screen transform.
    pub fn transform(&self) -> Mat4 {
        self.transform
    }

    /// Whether a drag session is live.
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Shows or hides the highlight marker (hosts toggle this on hover
    /// selection). A live drag forces it visible.
    pub fn set_highlight_visible(&mut self, visible: bool) {
        self.highlight.visible = visible;
    }

    /// Current highlight marker center.
    pub fn highlight_center(&self) -> Vec2 {
        self.highlight.center
    }

    /// Current highlight color with its state-dependent alpha.
    pub fn highlight_rgba(&self) -> [f32; 4] {
        let [r, g, b] = self.highlight_config.color;
        [r, g, b, self.highlight.alpha]
    }

    /// Takes a fresh camera reading and realigns the triad.
    ///
    /// This is the camera-change trigger: call it whenever the camera
    /// orbits. The first call attaches the widget.
    pub fn align_to(&mut self, camera: &dyn TurntableOrientation) {
        self.orientation = Some(OrbitAngles::read_from(camera));
        self.refresh();
    }

    /// Pointer motion outside the drag lifecycle.
    ///
    /// While the primary button drags the viewport (a camera orbit), the
    /// triad is realigned from the last reading so it keeps tracking the
    /// camera between [`align_to`](Self::align_to) calls.
    pub fn on_pointer_move(&mut self, event: &PointerEvent) {
        if event.button == Some(PointerButton::Primary) && event.dragging {
            self.refresh();
        }
    }

    /// Pointer-down: starts a drag session if eligible.
    ///
    /// Eligible means selection mode is active, no session is live, and
    /// the press falls inside the legend's circular footprint. Selection
    /// mode is checked only here; releasing the modifier mid-drag is
    /// handled by [`cancel_drag`](Self::cancel_drag), never by re-checking
    /// later events.
    pub fn begin_drag(&mut self, event: &PointerEvent) {
        if self.session.is_some() || !event.selection_mode {
            return;
        }
        if !self.placement.contains(event.position) {
            return;
        }

        self.session = Some(DragSession::start(event.position, self.placement.anchor));
        self.highlight.center = self.placement.anchor;
        self.highlight.alpha = self.highlight_config.active_alpha;
        self.highlight.visible = true;
        tracing::debug!(
            "Legend drag started at ({:.1}, {:.1})",
            event.position.x,
            event.position.y
        );
    }

    /// Pointer-move during a drag: updates the live drop target.
    ///
    /// Only the highlight follows the pointer; the committed anchor stays
    /// put until [`end_drag`](Self::end_drag). A no-op without a live
    /// session or when the primary button is no longer held down.
    pub fn continue_drag(&mut self, event: &PointerEvent) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if event.button != Some(PointerButton::Primary) || !event.dragging {
            return;
        }

        let live_center = event.position - session.grab_offset;
        session.pending_offset = live_center - self.placement.anchor;
        self.highlight.center = live_center;
    }

    /// Pointer-up: commits the drag.
    ///
    /// Moves the anchor to the highlight's position, realigns the triad,
    /// and clears the session. A no-op when idle.
    pub fn end_drag(&mut self) {
        let Some(session) = self.session.take() else {
            return;
        };

        self.placement.anchor += session.pending_offset;
        self.refresh();
        self.reset_highlight();
        tracing::debug!(
            "Legend anchor moved to ({:.1}, {:.1})",
            self.placement.anchor.x,
            self.placement.anchor.y
        );
    }

    /// Selection-mode exit: cancels the drag without committing.
    ///
    /// The anchor is untouched and the highlight snaps back to it. A
    /// no-op when idle.
    pub fn cancel_drag(&mut self) {
        if self.session.take().is_none() {
            return;
        }
        self.reset_highlight();
        tracing::debug!("Legend drag cancelled");
    }

    /// Draws the legend through the host's capability.
    pub fn draw(&self, out: &mut dyn LegendDraw) {
        if !self.visible {
            return;
        }
        out.triad(self.transform, &self.style);
        if self.highlight.visible {
            out.highlight(
                self.highlight.center,
                self.placement.size,
                self.highlight_rgba(),
            );
        }
    }

    /// Recomputes the alignment transform from the last camera reading.
    /// Nothing to align to before the first reading.
    fn refresh(&mut self) {
        let Some(orientation) = self.orientation else {
            return;
        };
        self.transform = self
            .placement
            .matrix(orientation.azimuth, orientation.elevation);
    }

    fn reset_highlight(&mut self) {
        self.highlight.center = self.placement.anchor;
        self.highlight.alpha = self.highlight_config.idle_alpha;
    }
}
