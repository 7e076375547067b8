//! Enemies and their per-tick updates

use crate::ai::AiBehavior;
use crate::assets::AssetManager;
use crate::collision::Collidable;
use crate::entity::{Body, Vitality};
use crate::level::Level;
use crate::player::Player;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;
use tracing::info;

pub struct Enemy {
    pub body: Body,
    pub sprite: String,
    pub vitality: Vitality,
    pub speed: i32,
    pub behavior: AiBehavior,
}

impl Enemy {
    pub fn new(x: i32, y: i32, width: u32, height: u32, health: i32, behavior: AiBehavior) -> Self {
        Enemy {
            body: Body::new(x, y, width, height),
            sprite: "enemy".to_string(),
            vitality: Vitality::new(health),
            speed: 1,
            behavior,
        }
    }

    /// Runs the assigned behavior for one tick.
    pub fn update(&mut self, player: &Player, level: &Level) {
        let behavior = self.behavior;
        behavior.execute(&mut self.body, self.speed, &player.body, level);
    }

    #[allow(dead_code)] // Nothing damages enemies yet; kept for parity with Player
    pub fn take_damage(&mut self, amount: i32) {
        if self.vitality.take_damage(amount) {
            self.die();
        }
    }

    fn die(&mut self) {
        info!("enemy died");
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

impl Collidable for Enemy {
    fn bounds(&self) -> Rect {
        self.body.bounds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inert_enemy_stays_put() {
        let level = Level::new();
        let player = Player::new(0, 0, 32, 32, 100);
        let mut enemy = Enemy::new(200, 150, 32, 32, 50, AiBehavior::Inert);

        enemy.update(&player, &level);
        assert_eq!((enemy.body.x, enemy.body.y), (200, 150));
    }

    #[test]
    fn test_chasing_enemy_closes_in() {
        let level = Level::new();
        let player = Player::new(100, 100, 32, 32, 100);
        let mut enemy = Enemy::new(200, 150, 32, 32, 50, AiBehavior::ChasePlayer);

        enemy.update(&player, &level);
        assert_eq!((enemy.body.x, enemy.body.y), (199, 149));
    }
}
