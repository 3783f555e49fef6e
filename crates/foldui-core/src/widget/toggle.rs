//! Boolean toggle widget.

use super::{WidgetId, WidgetKind, WidgetTrait};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A square on/off toggle. Stateful: persists its boolean value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Toggle {
    pub(crate) id: WidgetId,
    pub name: String,
    pub value: bool,
    pub rect: Rect,
    pub visible: bool,
}

impl Toggle {
    pub fn new(name: impl Into<String>, value: bool, size: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            value,
            rect: Rect::new(0.0, 0.0, size, size),
            visible: true,
        }
    }
}

impl WidgetTrait for Toggle {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn kind(&self) -> WidgetKind {
        WidgetKind::Toggle
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

    fn has_state(&self) -> bool {
        true
    }

    fn save_state(&self) -> Option<serde_json::Value> {
        Some(serde_json::json!({ "value": self.value }))
    }

    fn load_state(&mut self, state: &serde_json::Value) {
        if let Some(value) = state.get("value").and_then(|v| v.as_bool()) {
            self.value = value;
        }
    }

    fn press(&mut self, _point: Point) {
        self.value = !self.value;
    }
}
