//! Text label widget.

use super::{WidgetId, WidgetKind, WidgetTrait};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Vertical padding around label text, added to the font size for height.
const TEXT_PADDING: f64 = 4.0;

/// A text label. Stateless; the panel title bar is an embedded label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Label {
    pub(crate) id: WidgetId,
    /// Displayed text. Doubles as the widget name.
    pub text: String,
    /// Font size parameter, drives the label height.
    pub font_size: f64,
    /// Bounding box in panel-local coordinates.
    pub rect: Rect,
    pub visible: bool,
    pub embedded: bool,
}

impl Label {
    /// Create a label with the given width; height derives from font size.
    pub fn new(width: f64, text: impl Into<String>, font_size: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            font_size,
            rect: Rect::new(0.0, 0.0, width, font_size + 2.0 * TEXT_PADDING),
            visible: true,
            embedded: false,
        }
    }

    /// Mark the label as embedded background chrome.
    #[must_use]
    pub fn with_embedded(mut self) -> Self {
        self.embedded = true;
        self
    }

    /// Move the label vertically, keeping x and size.
    pub fn set_y(&mut self, y: f64) {
        let origin = Point::new(self.rect.x0, y);
        self.set_origin(origin);
    }
}

impl WidgetTrait for Label {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn kind(&self) -> WidgetKind {
        WidgetKind::Label
    }

    fn name(&self) -> &str {
        &self.text
    }

    fn bounds(&self) -> Rect {
        self.rect
    }

    fn set_origin(&mut self, origin: Point) {
        self.rect = Rect::from_origin_size(origin, self.rect.size());
    }

    fn set_width(&mut self, width: f64) {
        self.rect = Rect::new(self.rect.x0, self.rect.y0, self.rect.x0 + width, self.rect.y1);
    }

    fn visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn embedded(&self) -> bool {
        self.embedded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_height_from_font_size() {
        let label = Label::new(192.0, "Test", 12.0);
        assert_eq!(label.bounds().width(), 192.0);
        assert_eq!(label.bounds().height(), 12.0 + 2.0 * TEXT_PADDING);
    }

    #[test]
    fn test_label_set_width_keeps_origin() {
        let mut label = Label::new(100.0, "Test", 12.0);
        label.set_origin(Point::new(4.0, 4.0));
        label.set_width(50.0);
        assert_eq!(label.bounds().x0, 4.0);
        assert_eq!(label.bounds().width(), 50.0);
    }
}
