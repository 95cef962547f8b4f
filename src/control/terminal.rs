// Crossterm-backed gesture source: the mouse plays the finger

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;
use std::io;
use std::time::Duration;

use super::gesture::{GestureSample, GestureSource, HostEvent, Point, SURFACE_HEIGHT, SURFACE_WIDTH};
use crate::config::KeyBindings;

#[derive(Debug, Clone, Copy)]
struct DragTrack {
    baseline: Point,
    last: Point,
    moved: bool,
}

/// Left mouse button drags become gestures over the field region:
/// press begins, motion changes, release ends. A press released without
/// motion is also a tap.
pub struct TerminalGestures {
    field: Rect,
    serve_key: KeyCode,
    restart_key: KeyCode,
    quit_key: KeyCode,
    drag: Option<DragTrack>,
}

impl TerminalGestures {
    pub fn new(bindings: &KeyBindings) -> Self {
        Self {
            field: Rect::default(),
            serve_key: parse_key(&bindings.serve).unwrap_or(KeyCode::Char(' ')),
            restart_key: parse_key(&bindings.restart).unwrap_or(KeyCode::Char('r')),
            quit_key: parse_key(&bindings.quit).unwrap_or(KeyCode::Char('q')),
            drag: None,
        }
    }

    /// Map a terminal cell to surface space, clamping cells outside the field
    /// to its nearest edge.
    pub fn to_surface(&self, column: u16, row: u16) -> Point {
        let width = self.field.width.max(1) as f32;
        let height = self.field.height.max(1) as f32;

        let col = column.saturating_sub(self.field.x) as f32;
        let row = row.saturating_sub(self.field.y) as f32;

        // Sample the centre of the cell
        let x = ((col + 0.5) / width).clamp(0.0, 1.0) * SURFACE_WIDTH;
        let y = ((row + 0.5) / height).clamp(0.0, 1.0) * SURFACE_HEIGHT;
        Point::new(x, y)
    }

    /// Translate one terminal event into zero or more host events
    pub fn translate(&mut self, event: Event, out: &mut Vec<HostEvent>) {
        match event {
            Event::Key(key) => {
                if let Some(host_event) = self.translate_key(key) {
                    out.push(host_event);
                }
            }
            Event::Mouse(mouse) => self.translate_mouse(mouse, out),
            _ => {}
        }
    }

    fn translate_key(&self, key: KeyEvent) -> Option<HostEvent> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            return Some(HostEvent::Quit);
        }

        let code = normalize(key.code);
        if code == self.quit_key {
            Some(HostEvent::Quit)
        } else if code == self.serve_key {
            Some(HostEvent::Tap)
        } else if code == self.restart_key {
            Some(HostEvent::Restart)
        } else {
            None
        }
    }

    fn translate_mouse(&mut self, mouse: MouseEvent, out: &mut Vec<HostEvent>) {
        let point = self.to_surface(mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.drag = Some(DragTrack {
                    baseline: point,
                    last: point,
                    moved: false,
                });
                out.push(HostEvent::Drag(GestureSample::began(point)));
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let translation = match self.drag.as_mut() {
                    Some(track) => {
                        track.last = point;
                        track.moved = true;
                        Point::new(point.x - track.baseline.x, point.y - track.baseline.y)
                    }
                    // Button went down outside the terminal; the translator drops it
                    None => Point::default(),
                };
                out.push(HostEvent::Drag(GestureSample::changed(point, translation)));
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(track) = self.drag.take() {
                    let translation =
                        Point::new(point.x - track.baseline.x, point.y - track.baseline.y);
                    out.push(HostEvent::Drag(GestureSample::ended(point, translation)));
                    if !track.moved {
                        out.push(HostEvent::Tap);
                    }
                }
            }
            _ => {}
        }
    }
}

impl GestureSource for TerminalGestures {
    fn poll(&mut self) -> io::Result<Vec<HostEvent>> {
        let mut events = Vec::new();
        while event::poll(Duration::from_millis(0))? {
            let event = event::read()?;
            self.translate(event, &mut events);
        }
        Ok(events)
    }

    fn reset_translation(&mut self) {
        if let Some(track) = self.drag.as_mut() {
            track.baseline = track.last;
        }
    }

    /// Terminal cells that map onto the touch surface
    fn set_field(&mut self, field: Rect) {
        self.field = field;
    }
}

/// Parse a key name from the config file
pub fn parse_key(name: &str) -> Option<KeyCode> {
    match name.to_ascii_lowercase().as_str() {
        "space" => Some(KeyCode::Char(' ')),
        "enter" => Some(KeyCode::Enter),
        "esc" => Some(KeyCode::Esc),
        "tab" => Some(KeyCode::Tab),
        "backspace" => Some(KeyCode::Backspace),
        other => {
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(KeyCode::Char(c)),
                _ => None,
            }
        }
    }
}

fn normalize(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::GesturePhase;

    fn source() -> TerminalGestures {
        let mut source = TerminalGestures::new(&KeyBindings::default());
        // 80×17 cells: each column is 10 surface units, each row 50
        source.set_field(Rect::new(0, 0, 80, 17));
        source
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn samples(events: &[HostEvent]) -> Vec<GestureSample> {
        events
            .iter()
            .filter_map(|event| match event {
                HostEvent::Drag(sample) => Some(*sample),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_cell_maps_to_surface_centre() {
        let source = source();
        let point = source.to_surface(10, 12);
        assert!((point.x - 105.0).abs() < 1e-3);
        assert!((point.y - 625.0).abs() < 1e-3);

        // Outside the field clamps to the edge
        let point = source.to_surface(500, 500);
        assert_eq!(point, Point::new(SURFACE_WIDTH, SURFACE_HEIGHT));
    }

    #[test]
    fn test_field_offset_is_respected() {
        let mut source = source();
        source.set_field(Rect::new(5, 3, 80, 17));
        let point = source.to_surface(5, 3);
        assert!((point.x - 5.0).abs() < 1e-3);
        assert!((point.y - 25.0).abs() < 1e-3);
    }

    #[test]
    fn test_drag_lifecycle() {
        let mut source = source();
        let mut events = Vec::new();

        source.translate(mouse(MouseEventKind::Down(MouseButton::Left), 30, 12), &mut events);
        source.translate(mouse(MouseEventKind::Drag(MouseButton::Left), 33, 12), &mut events);
        source.translate(mouse(MouseEventKind::Drag(MouseButton::Left), 35, 12), &mut events);
        source.translate(mouse(MouseEventKind::Up(MouseButton::Left), 35, 12), &mut events);

        let samples = samples(&events);
        let phases: Vec<_> = samples.iter().map(|s| s.phase).collect();
        assert_eq!(
            phases,
            vec![
                GesturePhase::Began,
                GesturePhase::Changed,
                GesturePhase::Changed,
                GesturePhase::Ended
            ]
        );
        // Without resets the translation is cumulative
        assert!((samples[1].translation_since_start.x - 30.0).abs() < 1e-3);
        assert!((samples[2].translation_since_start.x - 50.0).abs() < 1e-3);
        assert!(!events.contains(&HostEvent::Tap));
    }

    #[test]
    fn test_reset_translation_moves_baseline() {
        let mut source = source();
        let mut events = Vec::new();

        source.translate(mouse(MouseEventKind::Down(MouseButton::Left), 30, 12), &mut events);
        source.translate(mouse(MouseEventKind::Drag(MouseButton::Left), 33, 12), &mut events);
        source.reset_translation();
        source.translate(mouse(MouseEventKind::Drag(MouseButton::Left), 35, 12), &mut events);

        let samples = samples(&events);
        assert!((samples[2].translation_since_start.x - 20.0).abs() < 1e-3);
    }

    #[test]
    fn test_click_without_motion_is_a_tap() {
        let mut source = source();
        let mut events = Vec::new();

        source.translate(mouse(MouseEventKind::Down(MouseButton::Left), 40, 2), &mut events);
        source.translate(mouse(MouseEventKind::Up(MouseButton::Left), 40, 2), &mut events);

        assert_eq!(events.iter().filter(|e| **e == HostEvent::Tap).count(), 1);
        assert_eq!(samples(&events).len(), 2);
    }

    #[test]
    fn test_release_without_press_is_dropped() {
        let mut source = source();
        let mut events = Vec::new();
        source.translate(mouse(MouseEventKind::Up(MouseButton::Left), 40, 2), &mut events);
        assert!(events.is_empty());
    }

    #[test]
    fn test_key_bindings() {
        let mut source = source();
        let mut events = Vec::new();

        source.translate(key(KeyCode::Char(' ')), &mut events);
        source.translate(key(KeyCode::Char('R')), &mut events);
        source.translate(key(KeyCode::Char('q')), &mut events);
        source.translate(key(KeyCode::Esc), &mut events);
        source.translate(key(KeyCode::Char('x')), &mut events);

        assert_eq!(
            events,
            vec![
                HostEvent::Tap,
                HostEvent::Restart,
                HostEvent::Quit,
                HostEvent::Quit
            ]
        );
    }

    #[test]
    fn test_parse_key_names() {
        assert_eq!(parse_key("Space"), Some(KeyCode::Char(' ')));
        assert_eq!(parse_key("Q"), Some(KeyCode::Char('q')));
        assert_eq!(parse_key("enter"), Some(KeyCode::Enter));
        assert_eq!(parse_key("F13"), None);
    }
}
