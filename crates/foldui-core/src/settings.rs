//! Panel persistence: JSON settings documents saved to and loaded from disk.
//!
//! A document holds one canvas record (kind, name, minified flag, position)
//! and one record per stateful widget, keyed by widget name. Widgets whose
//! names are absent from a loaded document keep their current state.

use crate::panel::SuperPanel;
use crate::widget::WidgetKind;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("IO error: {0}")]
    Io(String),
}

/// Persisted record for the panel itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanvasRecord {
    pub kind: WidgetKind,
    pub name: String,
    /// 1 when minified, 0 otherwise.
    pub is_minified: u8,
    pub x_position: f64,
    pub y_position: f64,
}

/// Persisted state blob for a single stateful widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetRecord {
    pub kind: WidgetKind,
    pub name: String,
    pub state: serde_json::Value,
}

/// On-disk settings document for a panel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PanelDocument {
    pub canvas: Option<CanvasRecord>,
    #[serde(default)]
    pub widgets: Vec<WidgetRecord>,
}

impl SuperPanel {
    /// Save panel and widget state to a JSON file at `path`.
    pub fn save_settings(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(&self.to_document())
            .map_err(|e| SettingsError::Serialization(e.to_string()))?;
        fs::write(path, json)
            .map_err(|e| SettingsError::Io(format!("{}: {e}", path.display())))?;
        log::info!("saved panel settings to {}", path.display());
        Ok(())
    }

    /// Load panel and widget state from a JSON file at `path`.
    ///
    /// A missing or malformed file leaves widgets and position untouched.
    /// Keyboard focus is dropped either way.
    pub fn load_settings(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        let doc = match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<PanelDocument>(&json) {
                Ok(doc) => doc,
                Err(e) => {
                    log::warn!("ignoring malformed settings {}: {e}", path.display());
                    PanelDocument::default()
                }
            },
            Err(e) => {
                log::warn!("no settings at {}: {e}", path.display());
                PanelDocument::default()
            }
        };
        self.apply_document(doc);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::panel::PanelEvent;
    use crate::widget::{Slider, Toggle, Widget};
    use kurbo::{Point, Rect};

    fn panel() -> SuperPanel {
        SuperPanel::with_clock(
            "Test",
            12.0,
            Rect::new(0.0, 0.0, 200.0, 300.0),
            Box::new(ManualClock::new()),
        )
    }

    fn panel_with_widgets(gain: f64, mute: bool) -> SuperPanel {
        let mut panel = panel();
        panel.add_widget(Widget::Slider(Slider::new("gain", 0.0, 1.0, gain, 100.0, 16.0)));
        panel.add_widget(Widget::Toggle(Toggle::new("mute", mute, 16.0)));
        panel
    }

    fn slider_value(panel: &SuperPanel, name: &str) -> f64 {
        let Some(Widget::Slider(slider)) = panel.canvas().widget_by_name(name) else {
            panic!("expected slider {name:?}");
        };
        slider.value
    }

    fn toggle_value(panel: &SuperPanel, name: &str) -> bool {
        let Some(Widget::Toggle(toggle)) = panel.canvas().widget_by_name(name) else {
            panic!("expected toggle {name:?}");
        };
        toggle.value
    }

    #[test]
    fn test_settings_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("panel.json");

        let mut saved = panel_with_widgets(0.75, true);
        saved.set_minified(true);
        saved.canvas_mut().set_origin(Point::new(10.0, 20.0));
        saved.save_settings(&path).unwrap();

        let mut loaded = panel_with_widgets(0.0, false);
        loaded.load_settings(&path);

        assert!(loaded.is_minified());
        assert_eq!(loaded.origin(), Point::new(10.0, 20.0));
        assert!((slider_value(&loaded, "gain") - 0.75).abs() < f64::EPSILON);
        assert!(toggle_value(&loaded, "mute"));
    }

    #[test]
    fn test_document_skips_stateless_widgets() {
        let panel = panel_with_widgets(0.5, false);
        let doc = panel.to_document();
        // The title label never produces a record.
        let names: Vec<_> = doc.widgets.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["gain", "mute"]);
    }

    #[test]
    fn test_load_missing_file_is_a_noop() {
        let dir = tempfile::tempdir().unwrap();
        let mut panel = panel_with_widgets(0.25, true);
        panel.load_settings(dir.path().join("absent.json"));

        assert!(!panel.is_minified());
        assert_eq!(panel.origin(), Point::ZERO);
        assert!((slider_value(&panel, "gain") - 0.25).abs() < f64::EPSILON);
        assert!(toggle_value(&panel, "mute"));
    }

    #[test]
    fn test_load_malformed_file_is_a_noop() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("panel.json");
        std::fs::write(&path, "{ not json").unwrap();

        let mut panel = panel_with_widgets(0.25, true);
        panel.load_settings(&path);
        assert!((slider_value(&panel, "gain") - 0.25).abs() < f64::EPSILON);
        assert!(toggle_value(&panel, "mute"));
    }

    #[test]
    fn test_load_clears_keyboard_focus_even_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut panel = panel();
        panel.canvas_mut().set_keyboard_focus(true);
        panel.load_settings(dir.path().join("absent.json"));
        assert!(!panel.canvas().has_keyboard_focus());
    }

    #[test]
    fn test_load_unknown_widget_names_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("panel.json");

        let mut saved = panel_with_widgets(0.75, true);
        saved.set_minified(true);
        saved.save_settings(&path).unwrap();

        // Loading into a panel without those widgets must not fail.
        let mut loaded = panel();
        loaded.load_settings(&path);
        assert!(loaded.is_minified());
    }

    #[test]
    fn test_trigger_widgets_on_load_queues_events() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("panel.json");
        panel_with_widgets(0.75, true).save_settings(&path).unwrap();

        let mut loaded = panel_with_widgets(0.0, false);
        loaded.set_trigger_widgets_on_load(true);
        loaded.load_settings(&path);

        assert_eq!(
            loaded.drain_events(),
            vec![
                PanelEvent::Widget("gain".into()),
                PanelEvent::Widget("mute".into()),
            ]
        );
    }

    #[test]
    fn test_widget_events_not_queued_by_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("panel.json");
        panel_with_widgets(0.75, true).save_settings(&path).unwrap();

        let mut loaded = panel_with_widgets(0.0, false);
        loaded.load_settings(&path);
        assert!(loaded.drain_events().is_empty());
    }
}
