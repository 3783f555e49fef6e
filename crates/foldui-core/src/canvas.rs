//! Canvas base: owning widget storage, placement, and event pass-through.

use crate::input::{KeyEvent, PointerEvent};
use crate::widget::{Widget, WidgetId};
use kurbo::{Point, Rect, Size};
use std::collections::{HashMap, HashSet};

/// Default gap between auto-placed widgets and the panel edge.
pub const DEFAULT_WIDGET_SPACING: f64 = 4.0;

/// Direction the placer advances after each widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidgetPosition {
    #[default]
    Down,
    Right,
}

/// Horizontal alignment applied when placing down a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidgetAlign {
    /// Keep the placer cursor x.
    #[default]
    Free,
    Left,
    Center,
    Right,
}

/// Auto-placement cursor for newly added widgets.
#[derive(Debug, Clone)]
struct Placer {
    position: WidgetPosition,
    align: WidgetAlign,
    cursor: Point,
}

impl Placer {
    fn new(spacing: f64) -> Self {
        Self {
            position: WidgetPosition::default(),
            align: WidgetAlign::default(),
            cursor: Point::new(spacing, spacing),
        }
    }

    fn reset(&mut self, spacing: f64) {
        self.cursor = Point::new(spacing, spacing);
    }

    /// Position a widget at the cursor and advance it.
    fn place(&mut self, widget: &mut Widget, canvas_width: f64, spacing: f64) {
        let bounds = widget.bounds();
        match self.position {
            WidgetPosition::Down => {
                let x = match self.align {
                    WidgetAlign::Free => self.cursor.x,
                    WidgetAlign::Left => spacing,
                    WidgetAlign::Center => (canvas_width - bounds.width()) / 2.0,
                    WidgetAlign::Right => canvas_width - bounds.width() - spacing,
                };
                widget.set_origin(Point::new(x, self.cursor.y));
                self.cursor.y += bounds.height() + spacing;
            }
            WidgetPosition::Right => {
                widget.set_origin(self.cursor);
                self.cursor.x += bounds.width() + spacing;
            }
        }
    }
}

/// A rectangular widget container.
///
/// Owns its widgets in insertion order, auto-places them, routes pointer
/// events to the topmost non-embedded hit, and tracks which widgets
/// participate in persistence.
#[derive(Debug, Clone)]
pub struct Canvas {
    name: String,
    /// Geometry in the host's absolute coordinate space.
    rect: Rect,
    widgets: HashMap<WidgetId, Widget>,
    /// Insertion order, back to front.
    order: Vec<WidgetId>,
    /// Widgets declaring `has_state()`, in insertion order.
    stateful: Vec<WidgetId>,
    placer: Placer,
    widget_spacing: f64,
    bound_keys: HashSet<String>,
    pressed_keys: HashSet<String>,
    has_keyboard_focus: bool,
    /// Widget currently owning a pass-through pointer interaction.
    active: Option<WidgetId>,
}

impl Canvas {
    /// Create a canvas with the default widget spacing.
    pub fn new(name: impl Into<String>, rect: Rect) -> Self {
        Self::with_spacing(name, rect, DEFAULT_WIDGET_SPACING)
    }

    /// Create a canvas with an explicit widget spacing.
    pub fn with_spacing(name: impl Into<String>, rect: Rect, spacing: f64) -> Self {
        Self {
            name: name.into(),
            rect,
            widgets: HashMap::new(),
            order: Vec::new(),
            stateful: Vec::new(),
            placer: Placer::new(spacing),
            widget_spacing: spacing,
            bound_keys: HashSet::new(),
            pressed_keys: HashSet::new(),
            has_keyboard_focus: false,
            active: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn origin(&self) -> Point {
        self.rect.origin()
    }

    /// Move the canvas, keeping its size.
    pub fn set_origin(&mut self, origin: Point) {
        self.rect = Rect::from_origin_size(origin, self.rect.size());
    }

    /// Check if an absolute point falls inside the canvas.
    pub fn contains(&self, point: Point) -> bool {
        self.rect.contains(point)
    }

    pub fn widget_spacing(&self) -> f64 {
        self.widget_spacing
    }

    /// Add a widget, positioning it with the placer. Returns its id.
    pub fn add_widget(&mut self, mut widget: Widget) -> WidgetId {
        self.placer
            .place(&mut widget, self.rect.width(), self.widget_spacing);
        let id = widget.id();
        if widget.has_state() {
            self.stateful.push(id);
        }
        self.order.push(id);
        self.widgets.insert(id, widget);
        id
    }

    /// Remove every widget and reset interaction bookkeeping.
    pub fn remove_widgets(&mut self) {
        self.widgets.clear();
        self.order.clear();
        self.stateful.clear();
        self.active = None;
    }

    /// Reset the placement cursor to the top-left corner.
    pub fn reset_placer(&mut self) {
        self.placer.reset(self.widget_spacing);
    }

    /// Set how subsequent widgets are placed.
    pub fn set_placement(&mut self, position: WidgetPosition, align: WidgetAlign) {
        self.placer.position = position;
        self.placer.align = align;
    }

    pub fn widget(&self, id: WidgetId) -> Option<&Widget> {
        self.widgets.get(&id)
    }

    pub fn widget_mut(&mut self, id: WidgetId) -> Option<&mut Widget> {
        self.widgets.get_mut(&id)
    }

    /// Look up a widget by name (first match in insertion order).
    pub fn widget_by_name(&self, name: &str) -> Option<&Widget> {
        self.order
            .iter()
            .filter_map(|id| self.widgets.get(id))
            .find(|w| w.name() == name)
    }

    pub fn widget_by_name_mut(&mut self, name: &str) -> Option<&mut Widget> {
        let id = self
            .order
            .iter()
            .find(|id| self.widgets.get(id).is_some_and(|w| w.name() == name))
            .copied()?;
        self.widgets.get_mut(&id)
    }

    /// Widgets in insertion order (back to front).
    pub fn widgets_ordered(&self) -> impl Iterator<Item = &Widget> {
        self.order.iter().filter_map(|id| self.widgets.get(id))
    }

    /// Ids of all widgets, in insertion order.
    pub fn widget_ids(&self) -> impl Iterator<Item = WidgetId> + '_ {
        self.order.iter().copied()
    }

    /// Widgets that participate in persistence, in insertion order.
    pub fn stateful_widgets(&self) -> impl Iterator<Item = &Widget> {
        self.stateful.iter().filter_map(|id| self.widgets.get(id))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Bind a key name; bound keys drive the panel's reveal interaction.
    pub fn bind_key(&mut self, key: impl Into<String>) {
        self.bound_keys.insert(key.into());
    }

    pub fn is_bound(&self, key: &str) -> bool {
        self.bound_keys.contains(key)
    }

    pub fn has_keyboard_focus(&self) -> bool {
        self.has_keyboard_focus
    }

    pub fn set_keyboard_focus(&mut self, focus: bool) {
        self.has_keyboard_focus = focus;
    }

    pub fn is_key_pressed(&self, key: &str) -> bool {
        self.pressed_keys.contains(key)
    }

    /// Resize the canvas to the bounding box of its visible widgets,
    /// plus one spacing gap on the right and bottom. Origin is kept.
    pub fn auto_size_to_fit(&mut self) {
        let mut max_x: f64 = 0.0;
        let mut max_y: f64 = 0.0;
        for widget in self.widgets_ordered() {
            if !widget.visible() {
                continue;
            }
            let bounds = widget.bounds();
            max_x = max_x.max(bounds.x1);
            max_y = max_y.max(bounds.y1);
        }
        let size = Size::new(max_x + self.widget_spacing, max_y + self.widget_spacing);
        self.rect = Rect::from_origin_size(self.rect.origin(), size);
    }

    /// Route a pointer event to the topmost non-embedded widget it hits.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { position, .. } => {
                if !self.rect.contains(position) {
                    return;
                }
                let local = (position - self.rect.origin()).to_point();
                let hit = self.order.iter().rev().copied().find(|id| {
                    self.widgets
                        .get(id)
                        .is_some_and(|w| !w.embedded() && w.hit_test(local))
                });
                if let Some(id) = hit {
                    if let Some(widget) = self.widgets.get_mut(&id) {
                        log::trace!("canvas {:?}: press on {:?}", self.name, widget.name());
                        widget.press(local);
                    }
                    self.active = Some(id);
                }
            }
            PointerEvent::Moved { position, .. } => {
                if let Some(id) = self.active {
                    let local = (position - self.rect.origin()).to_point();
                    if let Some(widget) = self.widgets.get_mut(&id) {
                        widget.drag(local);
                    }
                }
            }
            PointerEvent::Up { .. } | PointerEvent::Cancelled { .. } => {
                if let Some(id) = self.active.take() {
                    if let Some(widget) = self.widgets.get_mut(&id) {
                        widget.release();
                    }
                }
            }
            PointerEvent::DoubleTap { position, id } => {
                // A tap not claimed by the panel header behaves as press+release.
                self.handle_pointer(PointerEvent::Down { position, id });
                self.handle_pointer(PointerEvent::Up { position, id });
            }
        }
    }

    /// Track held keys for host queries.
    pub fn handle_key(&mut self, event: &KeyEvent) {
        match event {
            KeyEvent::Pressed { key, .. } => {
                self.pressed_keys.insert(key.clone());
            }
            KeyEvent::Released { key, .. } => {
                self.pressed_keys.remove(key);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::{Button, Label, Slider, Toggle};

    fn canvas_200() -> Canvas {
        Canvas::new("test", Rect::new(0.0, 0.0, 200.0, 300.0))
    }

    #[test]
    fn test_placer_stacks_widgets_down() {
        let mut canvas = canvas_200();
        let a = canvas.add_widget(Widget::Button(Button::new("a", 60.0, 20.0)));
        let b = canvas.add_widget(Widget::Button(Button::new("b", 60.0, 20.0)));

        let spacing = canvas.widget_spacing();
        let ra = canvas.widget(a).unwrap().bounds();
        let rb = canvas.widget(b).unwrap().bounds();
        assert_eq!(ra.origin(), Point::new(spacing, spacing));
        assert_eq!(rb.y0, ra.y1 + spacing);
    }

    #[test]
    fn test_reset_placer_restarts_at_top() {
        let mut canvas = canvas_200();
        canvas.add_widget(Widget::Button(Button::new("a", 60.0, 20.0)));
        canvas.remove_widgets();
        canvas.reset_placer();
        let b = canvas.add_widget(Widget::Button(Button::new("b", 60.0, 20.0)));
        let spacing = canvas.widget_spacing();
        assert_eq!(canvas.widget(b).unwrap().bounds().origin(), Point::new(spacing, spacing));
    }

    #[test]
    fn test_stateful_registry_tracks_only_stateful() {
        let mut canvas = canvas_200();
        canvas.add_widget(Widget::Label(Label::new(100.0, "title", 12.0)));
        canvas.add_widget(Widget::Slider(Slider::new("gain", 0.0, 1.0, 0.5, 100.0, 16.0)));
        canvas.add_widget(Widget::Toggle(Toggle::new("mute", false, 16.0)));

        let names: Vec<_> = canvas.stateful_widgets().map(|w| w.name().to_string()).collect();
        assert_eq!(names, vec!["gain", "mute"]);
    }

    #[test]
    fn test_widget_by_name() {
        let mut canvas = canvas_200();
        canvas.add_widget(Widget::Toggle(Toggle::new("mute", true, 16.0)));
        assert!(canvas.widget_by_name("mute").is_some());
        assert!(canvas.widget_by_name("missing").is_none());
    }

    #[test]
    fn test_pointer_routing_updates_slider() {
        let mut canvas = canvas_200();
        let id = canvas.add_widget(Widget::Slider(Slider::new("gain", 0.0, 1.0, 0.0, 100.0, 16.0)));
        let bounds = canvas.widget(id).unwrap().bounds();
        let mid = Point::new(bounds.x0 + bounds.width() / 2.0, bounds.center().y);

        canvas.handle_pointer(PointerEvent::Down { position: mid, id: 0 });
        let Widget::Slider(slider) = canvas.widget(id).unwrap() else {
            panic!("expected slider");
        };
        assert!((slider.value - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_pointer_routing_skips_embedded() {
        let mut canvas = canvas_200();
        let id = canvas.add_widget(Widget::Label(Label::new(100.0, "title", 12.0).with_embedded()));
        let bounds = canvas.widget(id).unwrap().bounds();

        canvas.handle_pointer(PointerEvent::Down { position: bounds.center(), id: 0 });
        // Nothing captured: the only widget is embedded chrome.
        canvas.handle_pointer(PointerEvent::Up { position: bounds.center(), id: 0 });
    }

    #[test]
    fn test_auto_size_shrinks_to_visible() {
        let mut canvas = canvas_200();
        let a = canvas.add_widget(Widget::Button(Button::new("a", 60.0, 20.0)));
        let b = canvas.add_widget(Widget::Button(Button::new("b", 60.0, 20.0)));

        canvas.auto_size_to_fit();
        let full_height = canvas.rect().height();

        canvas.widget_mut(b).unwrap().set_visible(false);
        canvas.auto_size_to_fit();
        assert!(canvas.rect().height() < full_height);

        let spacing = canvas.widget_spacing();
        let ra = canvas.widget(a).unwrap().bounds();
        assert_eq!(canvas.rect().height(), ra.y1 + spacing);
    }

    #[test]
    fn test_key_bindings() {
        let mut canvas = canvas_200();
        canvas.bind_key("h");
        assert!(canvas.is_bound("h"));
        assert!(!canvas.is_bound("g"));

        canvas.handle_key(&KeyEvent::Pressed { key: "h".into(), pointer: Point::ZERO });
        assert!(canvas.is_key_pressed("h"));
        canvas.handle_key(&KeyEvent::Released { key: "h".into(), pointer: Point::ZERO });
        assert!(!canvas.is_key_pressed("h"));
    }
}
