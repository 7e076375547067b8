//! Input events and the pub/sub event manager
//!
//! Raw SDL2 events are translated into a small domain enum (`InputEvent`)
//! so the rest of the game never touches SDL input types directly. The
//! `EventManager` fans events out to named listeners (states register
//! themselves on enter and unregister on exit).

use sdl2::event::Event;
use sdl2::keyboard::Keycode;

/// Keys the game reacts to
///
/// WASD moves the player; arrows navigate menus. Everything else is
/// dropped at translation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Escape,
    Return,
    Space,
    W,
    A,
    S,
    D,
}

impl Key {
    fn from_keycode(keycode: Keycode) -> Option<Key> {
        match keycode {
            Keycode::Up => Some(Key::Up),
            Keycode::Down => Some(Key::Down),
            Keycode::Left => Some(Key::Left),
            Keycode::Right => Some(Key::Right),
            Keycode::Escape => Some(Key::Escape),
            Keycode::Return => Some(Key::Return),
            Keycode::Space => Some(Key::Space),
            Keycode::W => Some(Key::W),
            Keycode::A => Some(Key::A),
            Keycode::S => Some(Key::S),
            Keycode::D => Some(Key::D),
            _ => None,
        }
    }
}

/// A discrete input event for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window close / OS quit signal
    Quit,
    KeyDown(Key),
    KeyUp(Key),
}

impl InputEvent {
    /// Translates an SDL2 event into a game event.
    ///
    /// Returns `None` for event types and keys the game does not handle.
    /// Key repeats are filtered out: movement is level-triggered via
    /// flags, so only the initial press and the release matter.
    pub fn from_sdl(event: &Event) -> Option<InputEvent> {
        match event {
            Event::Quit { .. } => Some(InputEvent::Quit),
            Event::KeyDown {
                keycode: Some(keycode),
                repeat: false,
                ..
            } => Key::from_keycode(*keycode).map(InputEvent::KeyDown),
            Event::KeyUp {
                keycode: Some(keycode),
                ..
            } => Key::from_keycode(*keycode).map(InputEvent::KeyUp),
            _ => None,
        }
    }
}

/// Synchronous fan-out of input events to named listeners.
///
/// Listeners are identified by name (the state registry keys double as
/// listener identities). Registration is idempotent and order-preserving;
/// dispatch walks listeners in registration order.
pub struct EventManager {
    listeners: Vec<String>,
}

impl EventManager {
    pub fn new() -> Self {
        EventManager {
            listeners: Vec::new(),
        }
    }

    /// Registers a listener. Adding the same name twice keeps a single
    /// entry, so a listener is never notified more than once per event.
    pub fn register_listener(&mut self, name: &str) {
        if !self.listeners.iter().any(|l| l == name) {
            self.listeners.push(name.to_string());
        }
    }

    /// Unregisters a listener. Unknown names are a no-op.
    pub fn unregister_listener(&mut self, name: &str) {
        self.listeners.retain(|l| l != name);
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.listeners.iter().any(|l| l == name)
    }

    /// Processes one frame's event batch.
    ///
    /// A quit event terminates processing immediately: it is never
    /// dispatched, and the remaining events in the batch are dropped.
    ///
    /// Returns `true` if quit was requested.
    pub fn process_events(
        &self,
        events: &[InputEvent],
        deliver: &mut dyn FnMut(&str, &InputEvent),
    ) -> bool {
        for event in events {
            if matches!(event, InputEvent::Quit) {
                return true;
            }
            self.dispatch(event, deliver);
        }
        false
    }

    /// Dispatches a single event to every registered listener in
    /// registration order.
    ///
    /// Iterates a snapshot of the listener list so a listener that
    /// unregisters itself (or another) while handling the event cannot
    /// skip or double-deliver entries mid-fan-out.
    pub fn dispatch(&self, event: &InputEvent, deliver: &mut dyn FnMut(&str, &InputEvent)) {
        let snapshot = self.listeners.clone();
        for name in &snapshot {
            deliver(name, event);
        }
    }
}

impl Default for EventManager {
    fn default() -> Self {
        Self::new()
    }
}
