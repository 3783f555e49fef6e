//! Host-delivered input event types.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Identifier for a pointer contact (mouse button slot or touch id).
pub type PointerId = u32;

/// Pointer event type for unified mouse/touch handling.
///
/// Positions are in the host's absolute coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { position: Point, id: PointerId },
    Moved { position: Point, id: PointerId },
    Up { position: Point, id: PointerId },
    DoubleTap { position: Point, id: PointerId },
    Cancelled { position: Point, id: PointerId },
}

impl PointerEvent {
    /// The position carried by the event.
    pub fn position(&self) -> Point {
        match *self {
            PointerEvent::Down { position, .. }
            | PointerEvent::Moved { position, .. }
            | PointerEvent::Up { position, .. }
            | PointerEvent::DoubleTap { position, .. }
            | PointerEvent::Cancelled { position, .. } => position,
        }
    }

    /// The pointer id carried by the event.
    pub fn id(&self) -> PointerId {
        match *self {
            PointerEvent::Down { id, .. }
            | PointerEvent::Moved { id, .. }
            | PointerEvent::Up { id, .. }
            | PointerEvent::DoubleTap { id, .. }
            | PointerEvent::Cancelled { id, .. } => id,
        }
    }
}

/// Keyboard event type.
///
/// The current pointer position rides on the event instead of being read
/// from a global query, so keyboard reveal/drop placement stays testable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum KeyEvent {
    Pressed { key: String, pointer: Point },
    Released { key: String, pointer: Point },
}

impl KeyEvent {
    /// The key name carried by the event.
    pub fn key(&self) -> &str {
        match self {
            KeyEvent::Pressed { key, .. } | KeyEvent::Released { key, .. } => key,
        }
    }
}

/// How pointer input reaches the panel, selected at configuration time.
///
/// Pointer targets fold double-activate timing into the press handler;
/// touch targets deliver an explicit [`PointerEvent::DoubleTap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InteractionSource {
    #[default]
    Pointer,
    Touch,
}
