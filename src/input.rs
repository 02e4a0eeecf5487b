use std::collections::HashSet;

use sdl2::{
    event::{Event, WindowEvent},
    keyboard::Keycode,
};

/// The current state of the keyboard.
#[derive(Default)]
pub struct KeyboardState {
    pub down: HashSet<Keycode>,
}

impl KeyboardState {
    pub fn press(&mut self, key: Keycode) {
        self.down.insert(key);
    }

    pub fn release(&mut self, key: Keycode) {
        self.down.remove(&key);
    }

    pub fn is_down(&self, key: Keycode) -> bool {
        self.down.contains(&key)
    }
}

/// What one round of event polling asked the render loop to do.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FrameEvents {
    pub quit_requested: bool,
    /// Set when the window changed size; the latest size wins.
    pub resized: Option<(i32, i32)>,
}

impl FrameEvents {
    /// Folds a single SDL event into the frame state, updating `keyboard` for key events.
    pub fn handle(&mut self, keyboard: &mut KeyboardState, event: &Event) {
        match event {
            Event::Quit { .. } => self.quit_requested = true,
            Event::Window {
                win_event: WindowEvent::SizeChanged(width, height),
                ..
            } => self.resized = Some((*width, *height)),
            Event::KeyDown {
                keycode: Some(keycode),
                repeat: false,
                ..
            } => keyboard.press(*keycode),
            Event::KeyUp {
                keycode: Some(keycode),
                ..
            } => keyboard.release(*keycode),
            _ => {}
        }
    }
}

/// Whether the render loop should stop after this frame.
pub fn should_close(keyboard: &KeyboardState, events: &FrameEvents) -> bool {
    events.quit_requested || keyboard.is_down(Keycode::Escape)
}

#[cfg(test)]
mod tests {
    use sdl2::keyboard::Mod;

    use super::*;

    fn key_down(keycode: Keycode, repeat: bool) -> Event {
        Event::KeyDown {
            timestamp: 0,
            window_id: 1,
            keycode: Some(keycode),
            scancode: None,
            keymod: Mod::NOMOD,
            repeat,
        }
    }

    fn key_up(keycode: Keycode) -> Event {
        Event::KeyUp {
            timestamp: 0,
            window_id: 1,
            keycode: Some(keycode),
            scancode: None,
            keymod: Mod::NOMOD,
            repeat: false,
        }
    }

    fn resize(width: i32, height: i32) -> Event {
        Event::Window {
            timestamp: 0,
            window_id: 1,
            win_event: WindowEvent::SizeChanged(width, height),
        }
    }

    #[test]
    fn escape_held_closes_window() {
        let mut keyboard = KeyboardState::default();
        let events = FrameEvents::default();
        assert!(!should_close(&keyboard, &events));

        keyboard.press(Keycode::Escape);
        assert!(should_close(&keyboard, &events));

        keyboard.release(Keycode::Escape);
        assert!(!should_close(&keyboard, &events));
    }

    #[test]
    fn escape_events_drive_close_state() {
        let mut keyboard = KeyboardState::default();
        let mut events = FrameEvents::default();

        // Repeats never reach the keyboard state.
        events.handle(&mut keyboard, &key_down(Keycode::Escape, true));
        assert!(!keyboard.is_down(Keycode::Escape));
        assert!(!should_close(&keyboard, &events));

        events.handle(&mut keyboard, &key_down(Keycode::Escape, false));
        assert!(should_close(&keyboard, &events));

        events.handle(&mut keyboard, &key_up(Keycode::Escape));
        assert!(!keyboard.is_down(Keycode::Escape));
        assert!(!should_close(&keyboard, &events));
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut keyboard = KeyboardState::default();
        keyboard.press(Keycode::Space);
        keyboard.press(Keycode::Q);
        assert!(keyboard.is_down(Keycode::Space));
        assert!(!should_close(&keyboard, &FrameEvents::default()));
    }

    #[test]
    fn quit_event_closes_window() {
        let mut keyboard = KeyboardState::default();
        let mut events = FrameEvents::default();
        events.handle(&mut keyboard, &Event::Quit { timestamp: 0 });
        assert!(events.quit_requested);
        assert!(should_close(&keyboard, &events));
    }

    #[test]
    fn latest_resize_wins() {
        let mut keyboard = KeyboardState::default();
        let mut events = FrameEvents::default();
        assert_eq!(events.resized, None);

        events.handle(&mut keyboard, &resize(1024, 768));
        events.handle(&mut keyboard, &resize(640, 480));
        assert_eq!(events.resized, Some((640, 480)));
        assert!(!events.quit_requested);
    }
}
