//! Title screen with a keyboard-driven menu

use crate::assets::AssetManager;
use crate::events::{EventManager, InputEvent, Key};
use crate::state::{GAMEPLAY, MAIN_MENU, State, StateCommand};
use crate::text;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

const OPTIONS: [&str; 2] = ["START GAME", "EXIT"];

pub struct MainMenu {
    selected: usize,
}

impl MainMenu {
    pub fn new() -> Self {
        MainMenu { selected: 0 }
    }

    /// Moves the highlight, clamping at the ends of the list.
    fn move_selection(&mut self, delta: i32) {
        let last = OPTIONS.len() as i32 - 1;
        self.selected = (self.selected as i32 + delta).clamp(0, last) as usize;
    }

    fn confirm(&self) -> StateCommand {
        match self.selected {
            0 => StateCommand::ChangeState(GAMEPLAY),
            _ => StateCommand::Quit,
        }
    }
}

impl State for MainMenu {
    fn enter(&mut self, events: &mut EventManager) {
        events.register_listener(MAIN_MENU);
    }

    fn exit(&mut self, events: &mut EventManager) {
        events.unregister_listener(MAIN_MENU);
    }

    fn handle_event(&mut self, event: &InputEvent) -> Option<StateCommand> {
        if let InputEvent::KeyDown(key) = event {
            match key {
                Key::Up => self.move_selection(-1),
                Key::Down => self.move_selection(1),
                Key::Return => return Some(self.confirm()),
                _ => {}
            }
        }
        None
    }

    fn update(&mut self) -> Option<StateCommand> {
        None
    }

    fn draw(&mut self, canvas: &mut Canvas<Window>, _assets: &AssetManager) -> Result<(), String> {
        canvas.set_draw_color(Color::RGB(0, 0, 0));
        canvas.clear();

        let center = crate::SCREEN_WIDTH as i32 / 2;

        let title = "DUNGEON CHASE";
        let title_x = center - text::text_width(title, 4) as i32 / 2;
        text::draw_text(canvas, title, title_x, 60, Color::RGB(255, 255, 255), 4)?;

        for (index, option) in OPTIONS.iter().enumerate() {
            let color = if index == self.selected {
                Color::RGB(255, 0, 0)
            } else {
                Color::RGB(255, 255, 255)
            };
            let x = center - text::text_width(option, 2) as i32 / 2;
            let y = 150 + index as i32 * 40;
            text::draw_text(canvas, option, x, y, color, 2)?;
        }

        Ok(())
    }
}
