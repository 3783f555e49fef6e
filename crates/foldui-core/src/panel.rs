//! Super panel: collapsible, draggable titled widget container.
//!
//! The panel wraps a [`Canvas`] and adds a title bar, a header widget list
//! shown while minified, and an interaction state machine for
//! drag-by-titlebar, double-activate toggling, and keyboard reveal/drop.

use crate::canvas::Canvas;
use crate::clock::{Clock, SystemClock};
use crate::input::{InteractionSource, KeyEvent, PointerEvent, PointerId};
use crate::settings::{CanvasRecord, PanelDocument, WidgetRecord};
use crate::widget::{Label, Widget, WidgetId, WidgetKind};
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// Default double-activate threshold in seconds.
pub const DEFAULT_DELTA_TIME: f64 = 0.35;

/// Transition phase a trigger notification belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriggerPhase {
    /// Entering the maximized state via a reveal gesture.
    Begin,
    /// Entering the minified state.
    End,
}

/// Which transition phases raise [`PanelEvent::Trigger`] notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerConfig {
    pub begin: bool,
    pub end: bool,
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self {
            begin: true,
            end: true,
        }
    }
}

/// Outbound notification queued for the host listener.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PanelEvent {
    /// A configured state transition happened.
    Trigger(TriggerPhase),
    /// A widget's persisted state was restored during load.
    Widget(String),
}

/// A collapsible, draggable titled panel.
#[derive(Debug)]
pub struct SuperPanel {
    canvas: Canvas,
    title: String,
    font_size: f64,
    /// The title label; always present and always first in the header.
    title_label: WidgetId,
    /// Widgets shown while minified. Non-owning references into the canvas.
    header: Vec<WidgetId>,
    minified: bool,
    /// Double-activate threshold in seconds.
    delta_time: f64,
    /// Clock reading at the most recent qualifying hit or key release.
    last_hit_time: f64,
    /// Grab offset from the panel origin, recorded on header press.
    hit_point: Vec2,
    title_hit: bool,
    /// Pointer contact currently owning the drag.
    captured: Option<PointerId>,
    key_held: bool,
    /// Origin remembered across a keyboard reveal, restored on drop.
    last_position: Point,
    clock: Box<dyn Clock>,
    source: InteractionSource,
    triggers: TriggerConfig,
    trigger_widgets_on_load: bool,
    events: Vec<PanelEvent>,
}

impl SuperPanel {
    /// Create a panel with a system clock.
    pub fn new(title: impl Into<String>, font_size: f64, rect: Rect) -> Self {
        Self::with_clock(title, font_size, rect, Box::new(SystemClock::new()))
    }

    /// Create a panel with an injected clock.
    pub fn with_clock(
        title: impl Into<String>,
        font_size: f64,
        rect: Rect,
        clock: Box<dyn Clock>,
    ) -> Self {
        let title = title.into();
        let mut canvas = Canvas::new(title.clone(), rect);
        let spacing = canvas.widget_spacing();
        let label =
            Label::new(rect.width() - 2.0 * spacing, title.clone(), font_size).with_embedded();
        let title_label = canvas.add_widget(Widget::Label(label));

        Self {
            canvas,
            title,
            font_size,
            title_label,
            header: vec![title_label],
            minified: false,
            delta_time: DEFAULT_DELTA_TIME,
            last_hit_time: 0.0,
            hit_point: Vec2::ZERO,
            title_hit: false,
            captured: None,
            key_held: false,
            last_position: rect.origin(),
            clock,
            source: InteractionSource::default(),
            triggers: TriggerConfig::default(),
            trigger_widgets_on_load: false,
            events: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    pub fn rect(&self) -> Rect {
        self.canvas.rect()
    }

    pub fn origin(&self) -> Point {
        self.canvas.origin()
    }

    /// The title label, if it has not been explicitly cleared.
    pub fn canvas_title(&self) -> Option<&Label> {
        match self.canvas.widget(self.title_label) {
            Some(Widget::Label(label)) => Some(label),
            _ => None,
        }
    }

    /// Header widget ids, title label first.
    pub fn header_widgets(&self) -> &[WidgetId] {
        &self.header
    }

    /// Set the double-activate threshold in seconds.
    pub fn set_delta_time(&mut self, delta_time: f64) {
        self.delta_time = delta_time;
    }

    pub fn set_interaction_source(&mut self, source: InteractionSource) {
        self.source = source;
    }

    pub fn set_trigger_config(&mut self, triggers: TriggerConfig) {
        self.triggers = triggers;
    }

    /// Also raise a [`PanelEvent::Widget`] per widget restored on load.
    pub fn set_trigger_widgets_on_load(&mut self, trigger: bool) {
        self.trigger_widgets_on_load = trigger;
    }

    pub fn trigger_widgets_on_load(&self) -> bool {
        self.trigger_widgets_on_load
    }

    /// Bind a key; pressing it reveals the panel at the pointer.
    pub fn bind_key(&mut self, key: impl Into<String>) {
        self.canvas.bind_key(key);
    }

    /// Take all queued outbound notifications.
    pub fn drain_events(&mut self) -> Vec<PanelEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_minified(&self) -> bool {
        self.minified
    }

    /// Transition to the target state. No-op when already there.
    pub fn set_minified(&mut self, minified: bool) {
        if self.minified == minified {
            return;
        }
        self.minified = minified;
        if minified {
            self.minify();
        } else {
            self.maximize();
        }
    }

    pub fn toggle_minified(&mut self) {
        self.set_minified(!self.minified);
    }

    /// Add a widget to the panel body via the canvas placer.
    pub fn add_widget(&mut self, widget: Widget) -> WidgetId {
        self.canvas.add_widget(widget)
    }

    /// Promote an already-added widget into the header list.
    ///
    /// Vertically centers the title label against the widget's bounds, then
    /// appends the widget. The normal widget list is unaffected.
    pub fn add_widget_to_header(&mut self, id: WidgetId) {
        let Some(bounds) = self.canvas.widget(id).map(|w| w.bounds()) else {
            return;
        };
        let title_height = self
            .canvas
            .widget(self.title_label)
            .map(|w| w.bounds().height());
        // A cleared title label is skipped, the widget still joins the header.
        if let Some(title_height) = title_height {
            if let Some(title) = self.canvas.widget_mut(self.title_label) {
                let x = title.bounds().x0;
                let y = bounds.y0 + (bounds.height() - title_height) * 0.5;
                title.set_origin(Point::new(x, y));
            }
        }
        self.header.push(id);
    }

    /// Clear all widgets and restore the post-construction header-only
    /// state: empty body, fresh title label first in the header.
    pub fn remove_widgets(&mut self) {
        self.canvas.remove_widgets();
        self.header.clear();
        self.canvas.reset_placer();

        let spacing = self.canvas.widget_spacing();
        let label = Label::new(
            self.canvas.rect().width() - 2.0 * spacing,
            self.title.clone(),
            self.font_size,
        )
        .with_embedded();
        self.title_label = self.canvas.add_widget(Widget::Label(label));
        self.header.push(self.title_label);
    }

    /// Check whether an absolute point hits any header widget.
    pub fn did_hit_header_widgets(&self, x: f64, y: f64) -> bool {
        let local = (Point::new(x, y) - self.canvas.origin()).to_point();
        self.header
            .iter()
            .any(|id| self.canvas.widget(*id).is_some_and(|w| w.hit_test(local)))
    }

    /// Handle a host key event, then forward it to the canvas.
    pub fn handle_key(&mut self, event: &KeyEvent) {
        match event {
            KeyEvent::Pressed { key, pointer } => {
                if self.canvas.is_bound(key) && !self.key_held {
                    self.key_held = true;
                    self.last_position = self.canvas.origin();
                    self.set_minified(false);
                    self.canvas.set_origin(*pointer);
                    self.fire(TriggerPhase::Begin);
                }
            }
            KeyEvent::Released { key, pointer } => {
                if self.canvas.is_bound(key) && self.key_held {
                    self.key_held = false;
                    // Release inside the window re-reveals at the pointer;
                    // outside it, the reveal is dropped back where it began.
                    if self.clock.elapsed() - self.last_hit_time < self.delta_time {
                        self.set_minified(false);
                        self.last_position = *pointer;
                        self.fire(TriggerPhase::Begin);
                    } else {
                        self.set_minified(true);
                        self.canvas.set_origin(self.last_position);
                        self.fire(TriggerPhase::End);
                    }
                    self.last_hit_time = self.clock.elapsed();
                }
            }
        }
        self.canvas.handle_key(event);
    }

    /// Handle a host pointer event according to the configured source.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match self.source {
            InteractionSource::Pointer => self.handle_mouse(event),
            InteractionSource::Touch => self.handle_touch(event),
        }
    }

    fn handle_touch(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { position, id } => {
                if self.captured.is_none()
                    && self.canvas.contains(position)
                    && self.did_hit_header_widgets(position.x, position.y)
                {
                    self.captured = Some(id);
                    self.title_hit = true;
                    self.hit_point = position - self.canvas.origin();
                    return;
                }
                self.canvas.handle_pointer(event);
            }
            PointerEvent::Moved { position, id } => {
                if self.captured == Some(id) && self.title_hit {
                    self.canvas.set_origin(position - self.hit_point);
                    return;
                }
                self.canvas.handle_pointer(event);
            }
            PointerEvent::Up { id, .. } | PointerEvent::Cancelled { id, .. } => {
                if self.captured == Some(id) {
                    self.captured = None;
                    self.title_hit = false;
                }
                self.canvas.handle_pointer(event);
            }
            PointerEvent::DoubleTap { position, .. } => {
                if self.canvas.contains(position)
                    && self.did_hit_header_widgets(position.x, position.y)
                {
                    self.toggle_from_gesture();
                    return;
                }
                self.canvas.handle_pointer(event);
            }
        }
    }

    fn handle_mouse(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { position, id } => {
                if self.canvas.contains(position)
                    && self.did_hit_header_widgets(position.x, position.y)
                {
                    self.title_hit = true;
                    self.captured = Some(id);
                    self.hit_point = position - self.canvas.origin();

                    if self.clock.elapsed() - self.last_hit_time < self.delta_time {
                        self.toggle_from_gesture();
                        return;
                    }
                    self.last_hit_time = self.clock.elapsed();
                }
                // A plain header press still reaches the canvas.
                self.canvas.handle_pointer(event);
            }
            PointerEvent::Moved { position, .. } => {
                if self.title_hit {
                    self.canvas.set_origin(position - self.hit_point);
                    return;
                }
                self.canvas.handle_pointer(event);
            }
            PointerEvent::Up { .. } | PointerEvent::Cancelled { .. } => {
                self.title_hit = false;
                self.captured = None;
                self.canvas.handle_pointer(event);
            }
            PointerEvent::DoubleTap { .. } => {
                // Pointer hosts fold double-activate into Down.
                self.canvas.handle_pointer(event);
            }
        }
    }

    fn toggle_from_gesture(&mut self) {
        if self.minified {
            self.set_minified(false);
            self.fire(TriggerPhase::Begin);
        } else {
            self.set_minified(true);
            self.fire(TriggerPhase::End);
        }
    }

    fn fire(&mut self, phase: TriggerPhase) {
        let enabled = match phase {
            TriggerPhase::Begin => self.triggers.begin,
            TriggerPhase::End => self.triggers.end,
        };
        if enabled {
            self.events.push(PanelEvent::Trigger(phase));
        }
    }

    fn minify(&mut self) {
        log::debug!("panel {:?}: minify", self.title);
        let ids: Vec<WidgetId> = self.canvas.widget_ids().collect();
        for id in ids {
            if let Some(widget) = self.canvas.widget_mut(id) {
                widget.set_visible(false);
            }
        }
        for id in self.header.clone() {
            if let Some(widget) = self.canvas.widget_mut(id) {
                widget.set_visible(true);
            }
        }
        self.auto_fit();
    }

    fn maximize(&mut self) {
        log::debug!("panel {:?}: maximize", self.title);
        let ids: Vec<WidgetId> = self.canvas.widget_ids().collect();
        for id in ids {
            if let Some(widget) = self.canvas.widget_mut(id) {
                widget.set_visible(true);
            }
        }
        self.auto_fit();
    }

    /// Refit the canvas to its visible widgets, then re-sync the title
    /// label width to panel width minus twice the spacing.
    fn auto_fit(&mut self) {
        self.canvas.auto_size_to_fit();
        let width = self.canvas.rect().width() - 2.0 * self.canvas.widget_spacing();
        if let Some(title) = self.canvas.widget_mut(self.title_label) {
            title.set_width(width);
        }
    }

    /// Snapshot panel position, minified flag, and stateful widget blobs.
    pub(crate) fn to_document(&self) -> PanelDocument {
        let origin = self.canvas.origin();
        let widgets = self
            .canvas
            .stateful_widgets()
            .filter_map(|w| {
                w.save_state().map(|state| WidgetRecord {
                    kind: w.kind(),
                    name: w.name().to_string(),
                    state,
                })
            })
            .collect();
        PanelDocument {
            canvas: Some(CanvasRecord {
                kind: WidgetKind::SuperPanel,
                name: self.title.clone(),
                is_minified: u8::from(self.minified),
                x_position: origin.x,
                y_position: origin.y,
            }),
            widgets,
        }
    }

    /// Restore a snapshot: widget blobs by name, then panel state and
    /// position. Keyboard focus is dropped unconditionally.
    pub(crate) fn apply_document(&mut self, doc: PanelDocument) {
        let trigger = self.trigger_widgets_on_load;
        for record in &doc.widgets {
            if let Some(widget) = self.canvas.widget_by_name_mut(&record.name) {
                if widget.has_state() {
                    widget.load_state(&record.state);
                    if trigger {
                        self.events.push(PanelEvent::Widget(record.name.clone()));
                    }
                }
            }
        }
        if let Some(record) = doc.canvas {
            self.set_minified(record.is_minified != 0);
            self.canvas
                .set_origin(Point::new(record.x_position, record.y_position));
        }
        self.canvas.set_keyboard_focus(false);
    }
}
