//! Axis Legend Widget
//!
//! The interactive part of the axis legend: pointer events, the drag state
//! machine with its highlight feedback, and the [`AxisLegend`] widget that
//! keeps a camera-aligned triad anchored to a draggable screen position.
//!
//! The widget owns no rendering and no camera. It consumes a
//! [`TurntableOrientation`](legend_core::TurntableOrientation) reading and
//! calls out to a host-implemented [`LegendDraw`] capability; the host's
//! input pipeline feeds it decoded [`PointerEvent`]s.
//!
//! # Module Structure
//!
//! ```text
//! legend-widget/
//! ├── events.rs  # Decoded pointer events
//! ├── drag.rs    # Drag session and highlight feedback state
//! ├── draw.rs    # Host drawing capability
//! └── widget.rs  # The AxisLegend widget
//! ```

pub mod drag;
pub mod draw;
pub mod events;
pub mod widget;

// Re-exports for convenience
pub use drag::{DragSession, Highlight};
pub use draw::LegendDraw;
pub use events::{PointerButton, PointerEvent};
pub use widget::AxisLegend;
