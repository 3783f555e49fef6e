//! FoldUI Core Library
//!
//! Host-agnostic controller for collapsible, draggable widget panels.

pub mod canvas;
pub mod clock;
pub mod input;
pub mod panel;
pub mod settings;
pub mod widget;

pub use canvas::{Canvas, WidgetAlign, WidgetPosition, DEFAULT_WIDGET_SPACING};
pub use clock::{Clock, ManualClock, SystemClock};
pub use input::{InteractionSource, KeyEvent, PointerEvent, PointerId};
pub use panel::{PanelEvent, SuperPanel, TriggerConfig, TriggerPhase, DEFAULT_DELTA_TIME};
pub use settings::{CanvasRecord, PanelDocument, SettingsError, WidgetRecord};
pub use widget::{Button, Label, Slider, Toggle, Widget, WidgetId, WidgetKind, WidgetTrait};
