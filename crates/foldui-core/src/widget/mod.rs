//! Widget definitions for the panel.
//!
//! Widgets are owned by the canvas and dispatched through a tagged enum
//! keyed by [`WidgetKind`]. Widgets that persist state expose it as an
//! opaque JSON blob through [`WidgetTrait::save_state`] /
//! [`WidgetTrait::load_state`].

mod button;
mod label;
mod slider;
mod toggle;

pub use button::Button;
pub use label::Label;
pub use slider::Slider;
pub use toggle::Toggle;

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a widget.
pub type WidgetId = Uuid;

/// Kind tag for widgets and the panel itself, used in persisted documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WidgetKind {
    SuperPanel,
    Label,
    Button,
    Slider,
    Toggle,
}

/// Behavior shared by all widgets.
///
/// Bounds are relative to the owning panel's origin; hit tests take
/// panel-local points.
pub trait WidgetTrait {
    /// Get the unique identifier.
    fn id(&self) -> WidgetId;

    /// Get the kind tag.
    fn kind(&self) -> WidgetKind;

    /// Get the widget name (persistence lookup key).
    fn name(&self) -> &str;

    /// Get the bounding box in panel-local coordinates.
    fn bounds(&self) -> Rect;

    /// Move the bounding box to a new panel-local origin, keeping size.
    fn set_origin(&mut self, origin: Point);

    /// Resize the bounding box width, keeping origin and height.
    fn set_width(&mut self, width: f64);

    /// Whether the widget is drawn and hit-testable.
    fn visible(&self) -> bool;

    fn set_visible(&mut self, visible: bool);

    /// Embedded widgets are background chrome: hit-testable but excluded
    /// from normal canvas interaction routing.
    fn embedded(&self) -> bool {
        false
    }

    /// Check if a panel-local point hits this widget.
    fn hit_test(&self, point: Point) -> bool {
        self.visible() && self.bounds().contains(point)
    }

    /// Whether the widget participates in save/load persistence.
    fn has_state(&self) -> bool {
        false
    }

    /// Serialize widget state as an opaque blob.
    fn save_state(&self) -> Option<serde_json::Value> {
        None
    }

    /// Restore widget state from a blob produced by [`Self::save_state`].
    /// Unknown or missing fields are ignored.
    fn load_state(&mut self, _state: &serde_json::Value) {}

    /// Pointer press at a panel-local point inside the widget.
    fn press(&mut self, _point: Point) {}

    /// Pointer drag while this widget owns the interaction.
    fn drag(&mut self, _point: Point) {}

    /// Pointer release ending the interaction.
    fn release(&mut self) {}
}

/// Enum wrapper for all widget types (for storage and serialization).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Widget {
    Label(Label),
    Button(Button),
    Slider(Slider),
    Toggle(Toggle),
}

impl Widget {
    pub fn id(&self) -> WidgetId {
        match self {
            Widget::Label(w) => w.id(),
            Widget::Button(w) => w.id(),
            Widget::Slider(w) => w.id(),
            Widget::Toggle(w) => w.id(),
        }
    }

    pub fn kind(&self) -> WidgetKind {
        match self {
            Widget::Label(w) => w.kind(),
            Widget::Button(w) => w.kind(),
            Widget::Slider(w) => w.kind(),
            Widget::Toggle(w) => w.kind(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Widget::Label(w) => w.name(),
            Widget::Button(w) => w.name(),
            Widget::Slider(w) => w.name(),
            Widget::Toggle(w) => w.name(),
        }
    }

    pub fn bounds(&self) -> Rect {
        match self {
            Widget::Label(w) => w.bounds(),
            Widget::Button(w) => w.bounds(),
            Widget::Slider(w) => w.bounds(),
            Widget::Toggle(w) => w.bounds(),
        }
    }

    pub fn set_origin(&mut self, origin: Point) {
        match self {
            Widget::Label(w) => w.set_origin(origin),
            Widget::Button(w) => w.set_origin(origin),
            Widget::Slider(w) => w.set_origin(origin),
            Widget::Toggle(w) => w.set_origin(origin),
        }
    }

    pub fn set_width(&mut self, width: f64) {
        match self {
            Widget::Label(w) => w.set_width(width),
            Widget::Button(w) => w.set_width(width),
            Widget::Slider(w) => w.set_width(width),
            Widget::Toggle(w) => w.set_width(width),
        }
    }

    pub fn visible(&self) -> bool {
        match self {
            Widget::Label(w) => w.visible(),
            Widget::Button(w) => w.visible(),
            Widget::Slider(w) => w.visible(),
            Widget::Toggle(w) => w.visible(),
        }
    }

    pub fn set_visible(&mut self, visible: bool) {
        match self {
            Widget::Label(w) => w.set_visible(visible),
            Widget::Button(w) => w.set_visible(visible),
            Widget::Slider(w) => w.set_visible(visible),
            Widget::Toggle(w) => w.set_visible(visible),
        }
    }

    pub fn embedded(&self) -> bool {
        match self {
            Widget::Label(w) => w.embedded(),
            Widget::Button(w) => w.embedded(),
            Widget::Slider(w) => w.embedded(),
            Widget::Toggle(w) => w.embedded(),
        }
    }

    pub fn hit_test(&self, point: Point) -> bool {
        match self {
            Widget::Label(w) => w.hit_test(point),
            Widget::Button(w) => w.hit_test(point),
            Widget::Slider(w) => w.hit_test(point),
            Widget::Toggle(w) => w.hit_test(point),
        }
    }

    pub fn has_state(&self) -> bool {
        match self {
            Widget::Label(w) => w.has_state(),
            Widget::Button(w) => w.has_state(),
            Widget::Slider(w) => w.has_state(),
            Widget::Toggle(w) => w.has_state(),
        }
    }

    pub fn save_state(&self) -> Option<serde_json::Value> {
        match self {
            Widget::Label(w) => w.save_state(),
            Widget::Button(w) => w.save_state(),
            Widget::Slider(w) => w.save_state(),
            Widget::Toggle(w) => w.save_state(),
        }
    }

    pub fn load_state(&mut self, state: &serde_json::Value) {
        match self {
            Widget::Label(w) => w.load_state(state),
            Widget::Button(w) => w.load_state(state),
            Widget::Slider(w) => w.load_state(state),
            Widget::Toggle(w) => w.load_state(state),
        }
    }

    pub fn press(&mut self, point: Point) {
        match self {
            Widget::Label(w) => w.press(point),
            Widget::Button(w) => w.press(point),
            Widget::Slider(w) => w.press(point),
            Widget::Toggle(w) => w.press(point),
        }
    }

    pub fn drag(&mut self, point: Point) {
        match self {
            Widget::Label(w) => w.drag(point),
            Widget::Button(w) => w.drag(point),
            Widget::Slider(w) => w.drag(point),
            Widget::Toggle(w) => w.drag(point),
        }
    }

    pub fn release(&mut self) {
        match self {
            Widget::Label(w) => w.release(),
            Widget::Button(w) => w.release(),
            Widget::Slider(w) => w.release(),
            Widget::Toggle(w) => w.release(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_kind_tags() {
        let label = Widget::Label(Label::new(100.0, "Title", 12.0));
        let slider = Widget::Slider(Slider::new("Gain", 0.0, 1.0, 0.5, 100.0, 16.0));
        assert_eq!(label.kind(), WidgetKind::Label);
        assert_eq!(slider.kind(), WidgetKind::Slider);
    }

    #[test]
    fn test_only_stateful_widgets_save() {
        let label = Widget::Label(Label::new(100.0, "Title", 12.0));
        let toggle = Widget::Toggle(Toggle::new("Mute", false, 16.0));
        assert!(!label.has_state());
        assert!(label.save_state().is_none());
        assert!(toggle.has_state());
        assert!(toggle.save_state().is_some());
    }

    #[test]
    fn test_hidden_widget_does_not_hit() {
        let mut button = Widget::Button(Button::new("Go", 60.0, 20.0));
        let inside = Point::new(5.0, 5.0);
        assert!(button.hit_test(inside));
        button.set_visible(false);
        assert!(!button.hit_test(inside));
    }
}
