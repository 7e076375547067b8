//! End screen shown after the player dies

use crate::assets::AssetManager;
use crate::events::{EventManager, InputEvent, Key};
use crate::state::{MAIN_MENU, State, StateCommand};
use crate::text;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

pub struct GameOver;

impl GameOver {
    pub fn new() -> Self {
        GameOver
    }
}

impl State for GameOver {
    fn handle_event(&mut self, event: &InputEvent) -> Option<StateCommand> {
        match event {
            InputEvent::KeyDown(Key::Return) | InputEvent::KeyDown(Key::Space) => {
                Some(StateCommand::ChangeState(MAIN_MENU))
            }
            _ => None,
        }
    }

    fn update(&mut self) -> Option<StateCommand> {
        None
    }

    fn draw(&mut self, canvas: &mut Canvas<Window>, _assets: &AssetManager) -> Result<(), String> {
        canvas.set_draw_color(Color::RGB(0, 0, 0));
        canvas.clear();

        let center_x = crate::SCREEN_WIDTH as i32 / 2;
        let center_y = crate::SCREEN_HEIGHT as i32 / 2;

        let title = "GAME OVER";
        let title_x = center_x - text::text_width(title, 4) as i32 / 2;
        text::draw_text(canvas, title, title_x, center_y - 60, Color::RGB(255, 0, 0), 4)?;

        let hint = "PRESS ENTER";
        let hint_x = center_x - text::text_width(hint, 2) as i32 / 2;
        text::draw_text(
            canvas,
            hint,
            hint_x,
            center_y + 20,
            Color::RGB(255, 255, 255),
            2,
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_return_goes_back_to_menu() {
        let mut game_over = GameOver::new();

        assert_eq!(
            game_over.handle_event(&InputEvent::KeyDown(Key::Return)),
            Some(StateCommand::ChangeState(MAIN_MENU))
        );
        assert_eq!(
            game_over.handle_event(&InputEvent::KeyDown(Key::Space)),
            Some(StateCommand::ChangeState(MAIN_MENU))
        );
    }

    #[test]
    fn test_other_input_ignored() {
        let mut game_over = GameOver::new();

        assert!(
            game_over
                .handle_event(&InputEvent::KeyDown(Key::Escape))
                .is_none()
        );
        assert!(game_over.update().is_none());
    }
}
