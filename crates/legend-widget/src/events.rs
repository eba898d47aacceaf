//! Decoded pointer events
//!
//! The host's input pipeline decodes its native events into this form
//! before handing them to the widget. Delivery order is the host's
//! responsibility; the widget assumes down, move*, up for one drag.

use glam::Vec2;

/// Pointer button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// The primary (usually left) button.
    Primary,
    /// The secondary (usually right) button.
    Secondary,
    /// The middle button or wheel press.
    Middle,
}

/// One decoded pointer event.
#[derive(Debug, Clone, Copy)]
pub struct PointerEvent {
    /// Button associated with the event, if any.
    pub button: Option<PointerButton>,
    /// Pointer position in screen coordinates (top-left origin).
    pub position: Vec2,
    /// Whether the host reports a drag in progress for this pointer.
    pub dragging: bool,
    /// Whether the host's selection modifier is currently held.
    pub selection_mode: bool,
}

impl PointerEvent {
    /// A plain motion event with no button and no modifier.
    pub fn motion(position: Vec2) -> Self {
        Self {
            button: None,
            position,
            dragging: false,
            selection_mode: false,
        }
    }
}
