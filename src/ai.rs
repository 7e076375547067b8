//! Per-enemy AI decision strategies
//!
//! Each enemy carries an `AiBehavior` and runs it once per simulation
//! tick. The set is a tagged union rather than open-ended trait objects:
//! a behavior either exists here or the enemy explicitly gets `Inert`,
//! so an unimplemented behavior can never crash at first use.

use crate::collision;
use crate::entity::Body;
use crate::level::{Level, TileKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiBehavior {
    /// Explicit no-op. An enemy without a real behavior stands still.
    Inert,
    /// Walk one step per tick toward the player, sliding along walls.
    ChasePlayer,
}

impl AiBehavior {
    /// Runs the behavior for one tick, moving `body` in place.
    pub fn execute(&self, body: &mut Body, speed: i32, target: &Body, level: &Level) {
        match self {
            AiBehavior::Inert => {}
            AiBehavior::ChasePlayer => chase(body, speed, target, level),
        }
    }
}

fn step_toward(from: i32, to: i32, speed: i32) -> i32 {
    if to > from {
        speed
    } else if to < from {
        -speed
    } else {
        0
    }
}

/// Axis-decoupled chase step.
///
/// Both hypothetical rects start from the *current* position; the Y test
/// deliberately ignores whether the X step gets committed. Decoupling the
/// axes lets the enemy slide along a wall on a diagonal approach instead
/// of stopping dead. X is always resolved before Y, which fixes the slide
/// priority on perfect diagonals.
fn chase(body: &mut Body, speed: i32, target: &Body, level: &Level) {
    let dx = step_toward(body.x, target.x, speed);
    let dy = step_toward(body.y, target.y, speed);

    let test_x = body.bounds_moved_by(dx, 0);
    let test_y = body.bounds_moved_by(0, dy);

    if !collision::check_tile_collision(level, &test_x, TileKind::Wall) {
        body.move_by(dx, 0);
    }
    if !collision::check_tile_collision(level, &test_y, TileKind::Wall) {
        body.move_by(0, dy);
    }
}
