//! Horizontal slider widget.

use super::{WidgetId, WidgetKind, WidgetTrait};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A horizontal value slider. Stateful: persists its current value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slider {
    pub(crate) id: WidgetId,
    pub name: String,
    pub min: f64,
    pub max: f64,
    pub value: f64,
    pub rect: Rect,
    pub visible: bool,
}

impl Slider {
    pub fn new(
        name: impl Into<String>,
        min: f64,
        max: f64,
        value: f64,
        width: f64,
        height: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            min,
            max,
            value: value.clamp(min, max),
            rect: Rect::new(0.0, 0.0, width, height),
            visible: true,
        }
    }

    /// Map a panel-local x coordinate onto the slider range.
    fn value_at(&self, x: f64) -> f64 {
        let width = self.rect.width();
        if width <= 0.0 {
            return self.min;
        }
        let t = ((x - self.rect.x0) / width).clamp(0.0, 1.0);
        self.min + (self.max - self.min) * t
    }

    /// Set the value, clamped to the slider range.
    pub fn set_value(&mut self, value: f64) {
        self.value = value.clamp(self.min, self.max);
    }
}

impl WidgetTrait for Slider {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn kind(&self) -> WidgetKind {
        WidgetKind::Slider
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
        if let Some(value) = state.get("value").and_then(|v| v.as_f64()) {
            self.set_value(value);
        }
    }

    fn press(&mut self, point: Point) {
        self.value = self.value_at(point.x);
    }

    fn drag(&mut self, point: Point) {
        self.value = self.value_at(point.x);
    }
}
