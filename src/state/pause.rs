//! Pause menu overlaid on a darkened screen

use crate::assets::AssetManager;
use crate::events::{InputEvent, Key};
use crate::state::{GAMEPLAY, MAIN_MENU, State, StateCommand};
use crate::text;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Canvas};
use sdl2::video::Window;

const OPTIONS: [&str; 2] = ["RESUME", "MAIN MENU"];

pub struct Pause {
    selected: usize,
}

impl Pause {
    pub fn new() -> Self {
        Pause { selected: 0 }
    }

    /// Moves the highlight, wrapping past either end of the list.
    fn move_selection(&mut self, delta: i32) {
        let len = OPTIONS.len() as i32;
        self.selected = (self.selected as i32 + delta).rem_euclid(len) as usize;
    }

    fn confirm(&self) -> StateCommand {
        match self.selected {
            0 => StateCommand::ChangeState(GAMEPLAY),
            _ => StateCommand::ChangeState(MAIN_MENU),
        }
    }
}

impl State for Pause {
    fn handle_event(&mut self, event: &InputEvent) -> Option<StateCommand> {
        if let InputEvent::KeyDown(key) = event {
            match key {
                Key::Up => self.move_selection(-1),
                Key::Down => self.move_selection(1),
                Key::Return | Key::Space => return Some(self.confirm()),
                _ => {}
            }
        }
        None
    }

    fn update(&mut self) -> Option<StateCommand> {
        None
    }

    fn draw(&mut self, canvas: &mut Canvas<Window>, _assets: &AssetManager) -> Result<(), String> {
        let (width, height) = (crate::SCREEN_WIDTH, crate::SCREEN_HEIGHT);

        canvas.set_blend_mode(BlendMode::Blend);
        canvas.set_draw_color(Color::RGBA(0, 0, 0, 128));
        canvas.fill_rect(Rect::new(0, 0, width, height))?;
        canvas.set_blend_mode(BlendMode::None);

        let center = width as i32 / 2;

        let title = "PAUSED";
        let title_x = center - text::text_width(title, 3) as i32 / 2;
        text::draw_text(canvas, title, title_x, 180, Color::RGB(255, 255, 255), 3)?;

        for (index, option) in OPTIONS.iter().enumerate() {
            let color = if index == self.selected {
                Color::RGB(255, 0, 0)
            } else {
                Color::RGB(255, 255, 255)
            };
            let x = center - text::text_width(option, 2) as i32 / 2;
            let y = height as i32 / 2 + index as i32 * 40;
            text::draw_text(canvas, option, x, y, color, 2)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_down(key: Key) -> InputEvent {
        InputEvent::KeyDown(key)
    }

    #[test]
    fn test_selection_wraps_both_directions() {
        let mut pause = Pause::new();

        pause.handle_event(&key_down(Key::Up));
        assert_eq!(pause.selected, 1);

        pause.handle_event(&key_down(Key::Down));
        assert_eq!(pause.selected, 0);

        pause.handle_event(&key_down(Key::Down));
        pause.handle_event(&key_down(Key::Down));
        assert_eq!(pause.selected, 0);
    }

    #[test]
    fn test_confirm_with_return_or_space() {
        let mut pause = Pause::new();

        assert_eq!(
            pause.handle_event(&key_down(Key::Return)),
            Some(StateCommand::ChangeState(GAMEPLAY))
        );

        pause.handle_event(&key_down(Key::Down));
        assert_eq!(
            pause.handle_event(&key_down(Key::Space)),
            Some(StateCommand::ChangeState(MAIN_MENU))
        );
    }

    #[test]
    fn test_escape_is_ignored_while_paused() {
        let mut pause = Pause::new();

        assert!(pause.handle_event(&key_down(Key::Escape)).is_none());
        assert_eq!(pause.selected, 0);
    }
}
