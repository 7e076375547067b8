//! The player-controlled character
//!
//! Movement is level-triggered: key-down sets an intent flag, key-up
//! clears it, and the per-frame update turns the flags into motion.
//! Holding a key keeps the player moving until release.

use crate::assets::AssetManager;
use crate::collision::{self, Collidable};
use crate::entity::{Body, Vitality};
use crate::events::{InputEvent, Key};
use crate::level::{Level, TileKind};
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;
use tracing::info;

/// Collision response policy for the player.
///
/// `false` keeps the historical behavior: the combined (dx, dy) move is
/// tested as one rect and rejected wholesale on a wall hit, so the player
/// stops dead on diagonal approaches while enemies slide (see
/// `ai::AiBehavior`). Set to `true` to give the player the same
/// axis-decoupled sliding.
pub const PLAYER_SLIDES_ALONG_WALLS: bool = false;

pub struct Player {
    pub body: Body,
    pub sprite: String,
    pub vitality: Vitality,
    pub speed: i32,
    moving_up: bool,
    moving_down: bool,
    moving_left: bool,
    moving_right: bool,
}

impl Player {
    pub fn new(x: i32, y: i32, width: u32, height: u32, health: i32) -> Self {
        Player {
            body: Body::new(x, y, width, height),
            sprite: "player".to_string(),
            vitality: Vitality::new(health),
            speed: 5,
            moving_up: false,
            moving_down: false,
            moving_left: false,
            moving_right: false,
        }
    }

    /// Updates movement-intent flags from key events. WASD only; menu
    /// navigation keys are ignored here.
    pub fn handle_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::KeyDown(key) => match key {
                Key::A => self.moving_left = true,
                Key::D => self.moving_right = true,
                Key::W => self.moving_up = true,
                Key::S => self.moving_down = true,
                _ => {}
            },
            InputEvent::KeyUp(key) => match key {
                Key::A => self.moving_left = false,
                Key::D => self.moving_right = false,
                Key::W => self.moving_up = false,
                Key::S => self.moving_down = false,
                _ => {}
            },
            InputEvent::Quit => {}
        }
    }

    /// Applies one frame of movement.
    ///
    /// Opposing flags cancel to zero on that axis. The hypothetical rect
    /// for the combined move is tested against wall tiles; on a hit the
    /// player does not move at all this frame (or slides, if
    /// `PLAYER_SLIDES_ALONG_WALLS` is enabled).
    pub fn update(&mut self, level: &Level) {
        let dx = (self.moving_right as i32 - self.moving_left as i32) * self.speed;
        let dy = (self.moving_down as i32 - self.moving_up as i32) * self.speed;

        if PLAYER_SLIDES_ALONG_WALLS {
            let test_x = self.body.bounds_moved_by(dx, 0);
            let test_y = self.body.bounds_moved_by(0, dy);
            if !collision::check_tile_collision(level, &test_x, TileKind::Wall) {
                self.body.move_by(dx, 0);
            }
            if !collision::check_tile_collision(level, &test_y, TileKind::Wall) {
                self.body.move_by(0, dy);
            }
        } else {
            let target = self.body.bounds_moved_by(dx, dy);
            if !collision::check_tile_collision(level, &target, TileKind::Wall) {
                self.body.move_by(dx, dy);
            }
        }
    }

    pub fn take_damage(&mut self, amount: i32) {
        if self.vitality.take_damage(amount) {
            self.die();
        }
    }

    fn die(&mut self) {
        info!("player died");
    }

    pub fn is_alive(&self) -> bool {
        self.vitality.is_alive()
    }

    pub fn draw(
        &self,
        canvas: &mut Canvas<Window>,
        assets: &AssetManager,
    ) -> Result<(), String> {
        let image = assets.image(&self.sprite)?;
        canvas.copy(&image.texture, None, self.body.bounds())
    }
}

impl Collidable for Player {
    fn bounds(&self) -> Rect {
        self.body.bounds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(player: &mut Player, key: Key) {
        player.handle_event(&InputEvent::KeyDown(key));
    }

    fn release(player: &mut Player, key: Key) {
        player.handle_event(&InputEvent::KeyUp(key));
    }

    #[test]
    fn test_held_key_moves_every_frame() {
        let level = Level::new();
        let mut player = Player::new(100, 100, 32, 32, 100);

        press(&mut player, Key::D);
        player.update(&level);
        player.update(&level);
        assert_eq!((player.body.x, player.body.y), (110, 100));

        release(&mut player, Key::D);
        player.update(&level);
        assert_eq!((player.body.x, player.body.y), (110, 100));
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let level = Level::new();
        let mut player = Player::new(100, 100, 32, 32, 100);

        press(&mut player, Key::A);
        press(&mut player, Key::D);
        press(&mut player, Key::S);
        player.update(&level);

        assert_eq!(player.body.x, 100);
        assert_eq!(player.body.y, 105);
    }

    #[test]
    fn test_wall_blocks_entire_combined_move() {
        // Wall tile at (100..150, 0..50). A diagonal move whose X
        // component would clip it is rejected on both axes.
        let mut level = Level::new();
        level.load(&["..W"]);
        let mut player = Player::new(65, 10, 32, 32, 100);

        press(&mut player, Key::D);
        press(&mut player, Key::S);
        player.update(&level);
        assert_eq!((player.body.x, player.body.y), (65, 10));

        // The same frame's vertical move alone is fine.
        release(&mut player, Key::D);
        player.update(&level);
        assert_eq!((player.body.x, player.body.y), (65, 15));
    }

    #[test]
    fn test_fatal_damage_kills_once() {
        let mut player = Player::new(0, 0, 32, 32, 20);

        player.take_damage(10);
        assert!(player.is_alive());

        player.take_damage(15);
        assert!(!player.is_alive());

        // Further damage after death is ignored.
        player.take_damage(100);
        assert_eq!(player.vitality.health(), -5);
    }
}
