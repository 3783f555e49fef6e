//! Scripted demo: drives a panel through drag, toggle, keyboard reveal,
//! and settings persistence, logging each step.

use foldui_core::{
    KeyEvent, PanelEvent, PointerEvent, Slider, SuperPanel, Toggle, Widget, WidgetTrait,
};
use kurbo::{Point, Rect, Vec2};
use std::time::Duration;

fn report(panel: &mut SuperPanel, step: &str) {
    log::info!(
        "{step}: origin={:?} minified={}",
        panel.origin(),
        panel.is_minified()
    );
    for event in panel.drain_events() {
        match event {
            PanelEvent::Trigger(phase) => log::info!("  trigger: {phase:?}"),
            PanelEvent::Widget(name) => log::info!("  restored widget: {name:?}"),
        }
    }
}

/// Absolute center of a named widget, for aiming pointer events.
fn widget_center(panel: &SuperPanel, name: &str) -> Option<Point> {
    let bounds = panel.canvas().widget_by_name(name)?.bounds();
    Some(panel.origin() + bounds.center().to_vec2())
}

fn main() {
    env_logger::init();
    log::info!("Starting FoldUI demo");

    let mut panel = SuperPanel::new("Mixer", 12.0, Rect::new(0.0, 0.0, 200.0, 300.0));
    panel.bind_key("h");
    let mute = panel.add_widget(Widget::Toggle(Toggle::new("mute", false, 16.0)));
    panel.add_widget_to_header(mute);
    panel.add_widget(Widget::Slider(Slider::new("gain", 0.0, 1.0, 0.5, 150.0, 16.0)));

    // Let the startup double-activate window lapse before pressing.
    std::thread::sleep(Duration::from_millis(400));

    // Drag the panel by its title bar.
    let title_rect = panel.canvas_title().map(|t| t.bounds()).unwrap_or_default();
    let grab = panel.origin() + title_rect.center().to_vec2();
    let target = grab + Vec2::new(50.0, 30.0);
    panel.handle_pointer(PointerEvent::Down { position: grab, id: 0 });
    panel.handle_pointer(PointerEvent::Moved { position: target, id: 0 });
    panel.handle_pointer(PointerEvent::Up { position: target, id: 0 });
    report(&mut panel, "after drag");

    // Collapse, then reveal at the pointer with the bound key.
    panel.toggle_minified();
    report(&mut panel, "after collapse");

    panel.handle_key(&KeyEvent::Pressed { key: "h".into(), pointer: Point::new(300.0, 200.0) });
    report(&mut panel, "while key held");
    panel.handle_key(&KeyEvent::Released { key: "h".into(), pointer: Point::new(300.0, 200.0) });
    report(&mut panel, "after key release");

    // Nudge the slider, then persist and restore.
    if let Some(center) = widget_center(&panel, "gain") {
        let press = Point::new(center.x + 40.0, center.y);
        panel.handle_pointer(PointerEvent::Down { position: press, id: 0 });
        panel.handle_pointer(PointerEvent::Up { position: press, id: 0 });
    }

    let path = std::env::temp_dir().join("foldui-demo.json");
    if let Err(e) = panel.save_settings(&path) {
        log::error!("save failed: {e}");
        return;
    }

    let mut restored = SuperPanel::new("Mixer", 12.0, Rect::new(0.0, 0.0, 200.0, 300.0));
    restored.add_widget(Widget::Toggle(Toggle::new("mute", false, 16.0)));
    restored.add_widget(Widget::Slider(Slider::new("gain", 0.0, 1.0, 0.5, 150.0, 16.0)));
    restored.set_trigger_widgets_on_load(true);
    restored.load_settings(&path);
    report(&mut restored, "after load");

    if let Some(Widget::Slider(slider)) = restored.canvas().widget_by_name("gain") {
        log::info!("restored gain = {:.2}", slider.value);
    }
}
