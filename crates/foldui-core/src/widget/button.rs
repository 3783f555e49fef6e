//! Push button widget.

use super::{WidgetId, WidgetKind, WidgetTrait};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A momentary push button. Pressed state is transient and not persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Button {
    pub(crate) id: WidgetId,
    pub name: String,
    pub rect: Rect,
    pub visible: bool,
    /// True while a pointer holds the button down.
    #[serde(skip)]
    pub pressed: bool,
}

impl Button {
    pub fn new(name: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            rect: Rect::new(0.0, 0.0, width, height),
            visible: true,
            pressed: false,
        }
    }
}

impl WidgetTrait for Button {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn kind(&self) -> WidgetKind {
        WidgetKind::Button
    }

    fn name(&self) -> &str {
        &self.name
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

    fn press(&mut self, _point: Point) {
        self.pressed = true;
    }

    fn release(&mut self) {
        self.pressed = false;
    }
}
