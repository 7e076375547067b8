//! Game states and the machine that runs them
//!
//! Exactly one state (main menu, gameplay, pause, game over) is current
//! at a time. The manager owns every state for the lifetime of the
//! process and drives the transition protocol: the outgoing state's
//! `exit` always runs before the incoming state's `enter`.
//!
//! States cannot reach back into the manager that owns them, so their
//! callbacks return a `StateCommand` which the frame loop applies
//! immediately after the callback returns. A state must not assume it
//! keeps running after requesting its own replacement.

pub mod game_over;
pub mod gameplay;
pub mod main_menu;
pub mod pause;

use crate::assets::AssetManager;
use crate::events::{EventManager, InputEvent};
use sdl2::render::Canvas;
use sdl2::video::Window;
use std::collections::HashMap;
use tracing::warn;

/// Registry keys for the built-in states. These double as listener names
/// in the `EventManager`.
pub const MAIN_MENU: &str = "MainMenu";
pub const GAMEPLAY: &str = "Gameplay";
pub const PAUSE: &str = "Pause";
pub const GAME_OVER: &str = "GameOver";

/// A request a state hands back to the frame loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateCommand {
    ChangeState(&'static str),
    Quit,
}

/// Contract every game state implements.
pub trait State {
    /// Called right after this state becomes current. Typical setup:
    /// registering as an event listener, resetting per-run data.
    fn enter(&mut self, _events: &mut EventManager) {}

    /// Called right before this state stops being current.
    fn exit(&mut self, _events: &mut EventManager) {}

    /// Reacts to a single input event.
    fn handle_event(&mut self, event: &InputEvent) -> Option<StateCommand>;

    /// Advances the state by one frame.
    fn update(&mut self) -> Option<StateCommand>;

    /// Renders the state. The canvas arrives already cleared.
    fn draw(&mut self, canvas: &mut Canvas<Window>, assets: &AssetManager) -> Result<(), String>;
}

/// Owns the registry of named states and the currently active one.
pub struct StateManager {
    states: HashMap<String, Box<dyn State>>,
    current: Option<String>,
}

impl StateManager {
    pub fn new() -> Self {
        StateManager {
            states: HashMap::new(),
            current: None,
        }
    }

    /// Registers a state under a name. No state is current until the
    /// first `change_state`.
    pub fn add_state(&mut self, name: &str, state: Box<dyn State>) {
        self.states.insert(name.to_string(), state);
    }

    pub fn current_name(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Switches to the named state.
    ///
    /// An unregistered name logs a warning and changes nothing. Otherwise
    /// the current state (if any) exits before the new state enters;
    /// nothing ever enters a state while the previous one is still in.
    pub fn change_state(&mut self, name: &str, events: &mut EventManager) {
        if !self.states.contains_key(name) {
            warn!(state = name, "transition requested to unregistered state");
            return;
        }

        if let Some(current) = self.current.clone() {
            if let Some(state) = self.states.get_mut(&current) {
                state.exit(events);
            }
        }

        self.current = Some(name.to_string());
        if let Some(state) = self.states.get_mut(name) {
            state.enter(events);
        }
    }

    /// Delegates an event to the current state. No-op without one.
    pub fn handle_event(&mut self, event: &InputEvent) -> Option<StateCommand> {
        let current = self.current.clone()?;
        self.states.get_mut(&current)?.handle_event(event)
    }

    /// Delivers a dispatched event to a state by listener name,
    /// regardless of whether that state is current.
    pub fn deliver(&mut self, name: &str, event: &InputEvent) -> Option<StateCommand> {
        self.states.get_mut(name)?.handle_event(event)
    }

    /// Delegates the frame update to the current state.
    pub fn update(&mut self) -> Option<StateCommand> {
        let current = self.current.clone()?;
        self.states.get_mut(&current)?.update()
    }

    /// Delegates drawing to the current state. No-op without one.
    pub fn draw(
        &mut self,
        canvas: &mut Canvas<Window>,
        assets: &AssetManager,
    ) -> Result<(), String> {
        if let Some(current) = self.current.clone() {
            if let Some(state) = self.states.get_mut(&current) {
                return state.draw(canvas, assets);
            }
        }
        Ok(())
    }

    /// Applies a command from a state callback. Returns `true` when the
    /// game should quit.
    pub fn apply(&mut self, command: StateCommand, events: &mut EventManager) -> bool {
        match command {
            StateCommand::ChangeState(name) => {
                self.change_state(name, events);
                false
            }
            StateCommand::Quit => true,
        }
    }
}

impl Default for StateManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records enter/exit calls into a shared log.
    struct Probe {
        name: &'static str,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl Probe {
        fn boxed(name: &'static str, log: &Rc<RefCell<Vec<String>>>) -> Box<dyn State> {
            Box::new(Probe {
                name,
                log: Rc::clone(log),
            })
        }
    }

    impl State for Probe {
        fn enter(&mut self, _events: &mut EventManager) {
            self.log.borrow_mut().push(format!("{} enter", self.name));
        }

        fn exit(&mut self, _events: &mut EventManager) {
            self.log.borrow_mut().push(format!("{} exit", self.name));
        }

        fn handle_event(&mut self, _event: &InputEvent) -> Option<StateCommand> {
            None
        }

        fn update(&mut self) -> Option<StateCommand> {
            None
        }

        fn draw(
            &mut self,
            _canvas: &mut Canvas<Window>,
            _assets: &AssetManager,
        ) -> Result<(), String> {
            Ok(())
        }
    }

    #[test]
    fn test_first_transition_only_enters() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut events = EventManager::new();
        let mut manager = StateManager::new();
        manager.add_state("a", Probe::boxed("a", &log));

        manager.change_state("a", &mut events);

        assert_eq!(manager.current_name(), Some("a"));
        assert_eq!(*log.borrow(), vec!["a enter".to_string()]);
    }

    #[test]
    fn test_exit_runs_before_enter() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut events = EventManager::new();
        let mut manager = StateManager::new();
        manager.add_state("a", Probe::boxed("a", &log));
        manager.add_state("b", Probe::boxed("b", &log));

        manager.change_state("a", &mut events);
        manager.change_state("b", &mut events);

        assert_eq!(
            *log.borrow(),
            vec![
                "a enter".to_string(),
                "a exit".to_string(),
                "b enter".to_string()
            ]
        );
    }

    #[test]
    fn test_unregistered_transition_is_a_noop() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut events = EventManager::new();
        let mut manager = StateManager::new();
        manager.add_state("a", Probe::boxed("a", &log));
        manager.change_state("a", &mut events);
        log.borrow_mut().clear();

        manager.change_state("missing", &mut events);

        assert_eq!(manager.current_name(), Some("a"));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_delegation_without_current_state() {
        let mut manager = StateManager::new();
        assert!(manager.update().is_none());
        assert!(
            manager
                .handle_event(&InputEvent::KeyDown(crate::events::Key::Return))
                .is_none()
        );
    }

    #[test]
    fn test_apply_quit_signals_shutdown() {
        let mut events = EventManager::new();
        let mut manager = StateManager::new();

        assert!(manager.apply(StateCommand::Quit, &mut events));
        assert!(!manager.apply(StateCommand::ChangeState("missing"), &mut events));
    }
}
