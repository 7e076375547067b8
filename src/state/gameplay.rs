//! The running game: level, player, enemies, and the per-frame rules

use crate::ai::AiBehavior;
use crate::assets::AssetManager;
use crate::collision;
use crate::enemy::Enemy;
use crate::entity::Body;
use crate::events::{EventManager, InputEvent, Key};
use crate::level::Level;
use crate::player::Player;
use crate::state::{GAME_OVER, PAUSE, State, StateCommand};
use sdl2::render::Canvas;
use sdl2::video::Window;
use tracing::info;

/// One wall-bordered room, 16x10 cells of 50px.
const ROOM_LAYOUT: [&str; 10] = [
    "WWWWWWWWWWWWWWWW",
    "WFFFFFFFFFFFFFFW",
    "WFFFFFFFFFFFFFFW",
    "WFFFFFFFFFFFFFFW",
    "WFFFFFFFFFFFFFFW",
    "WFFFFFFFFFFFFFFW",
    "WFFFFFFFFFFFFFFW",
    "WFFFFFFFFFFFFFFW",
    "WFFFFFFFFFFFFFFW",
    "WWWWWWWWWWWWWWWW",
];

/// The player spawns centered on this region of the room.
const SPAWN_REGION: (i32, i32) = (800, 500);
const PLAYER_HEALTH: i32 = 100;
const ENEMY_SPAWNS: [(i32, i32); 1] = [(200, 150)];
const ENEMY_HEALTH: i32 = 50;
const CONTACT_DAMAGE: i32 = 10;
const SEPARATION_PUSH: i32 = 5;

pub struct Gameplay {
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub level: Level,
    player_size: (u32, u32),
    enemy_size: (u32, u32),
}

impl Gameplay {
    pub fn new(player_size: (u32, u32), enemy_size: (u32, u32)) -> Self {
        let mut gameplay = Gameplay {
            player: Player::new(0, 0, player_size.0, player_size.1, PLAYER_HEALTH),
            enemies: Vec::new(),
            level: Level::new(),
            player_size,
            enemy_size,
        };
        gameplay.reset();
        gameplay
    }

    fn player_spawn(&self) -> (i32, i32) {
        (
            (SPAWN_REGION.0 - self.player_size.0 as i32) / 2,
            (SPAWN_REGION.1 - self.player_size.1 as i32) / 2,
        )
    }

    /// Rebuilds the room and respawns everyone at full health.
    fn reset(&mut self) {
        self.level.load(&ROOM_LAYOUT);
        let (spawn_x, spawn_y) = self.player_spawn();
        self.player = Player::new(
            spawn_x,
            spawn_y,
            self.player_size.0,
            self.player_size.1,
            PLAYER_HEALTH,
        );
        self.enemies = ENEMY_SPAWNS
            .iter()
            .map(|&(x, y)| {
                Enemy::new(
                    x,
                    y,
                    self.enemy_size.0,
                    self.enemy_size.1,
                    ENEMY_HEALTH,
                    AiBehavior::ChasePlayer,
                )
            })
            .collect();
        info!("gameplay world reset");
    }
}

/// Pushes `body` a fixed step away from `other` on both axes, comparing
/// raw positions (not overlap depth). Called once per overlapping pair
/// per frame, so sustained contact separates over a few frames.
fn resolve_entity_collision(body: &mut Body, other: &Body) {
    if body.x < other.x {
        body.x -= SEPARATION_PUSH;
    } else {
        body.x += SEPARATION_PUSH;
    }
    if body.y < other.y {
        body.y -= SEPARATION_PUSH;
    } else {
        body.y += SEPARATION_PUSH;
    }
}

impl State for Gameplay {
    /// Re-entry after a game over starts a fresh run; re-entry from pause
    /// finds the player alive and leaves the world untouched.
    fn enter(&mut self, _events: &mut EventManager) {
        if !self.player.is_alive() {
            self.reset();
        }
    }

    fn handle_event(&mut self, event: &InputEvent) -> Option<StateCommand> {
        if let InputEvent::KeyDown(Key::Escape) = event {
            return Some(StateCommand::ChangeState(PAUSE));
        }
        self.player.handle_event(event);
        None
    }

    /// One simulation tick: player moves, then each enemy moves and its
    /// contact with the player is resolved, then the dead are swept out.
    fn update(&mut self) -> Option<StateCommand> {
        let Gameplay {
            player,
            enemies,
            level,
            ..
        } = self;

        player.update(level);
        level.update();

        for enemy in enemies.iter_mut() {
            enemy.update(player, level);
            if collision::check_entity_collision(enemy, player) {
                player.take_damage(CONTACT_DAMAGE);
                resolve_entity_collision(&mut player.body, &enemy.body);
            }
        }
        enemies.retain(|enemy| enemy.is_alive());

        if !player.is_alive() {
            return Some(StateCommand::ChangeState(GAME_OVER));
        }
        None
    }

    fn draw(&mut self, canvas: &mut Canvas<Window>, assets: &AssetManager) -> Result<(), String> {
        self.level.draw(canvas)?;
        self.player.draw(canvas, assets)?;
        for enemy in &self.enemies {
            enemy.draw(canvas, assets)?;
        }
        Ok(())
    }
}
