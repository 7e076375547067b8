//! Shared entity building blocks
//!
//! `Player` and `Enemy` are separate types that compose these pieces
//! instead of inheriting from a common base:
//!
//! - `Body`: position and size with the bounding rect derived on demand.
//!   Position is the single source of truth; there is no stored rect that
//!   could drift out of sync with it.
//! - `Vitality`: integer health with a death latch so damage after death
//!   is ignored and the death signal fires exactly once.

use sdl2::rect::Rect;

/// An entity's position and footprint in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Body {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Body {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Body {
            x,
            y,
            width,
            height,
        }
    }

    /// The axis-aligned bounding box, computed from the current position.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// The bounding box this body would have after moving by (dx, dy).
    /// Used for hypothetical collision tests before committing a move.
    pub fn bounds_moved_by(&self, dx: i32, dy: i32) -> Rect {
        Rect::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    pub fn move_by(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }
}

/// Health with a one-shot death latch.
///
/// Health may go negative transiently; death triggers at <= 0. Once dead,
/// further damage is a no-op and the death signal is never repeated.
#[derive(Debug, Clone)]
pub struct Vitality {
    health: i32,
    alive: bool,
}

impl Vitality {
    pub fn new(health: i32) -> Self {
        Vitality {
            health,
            alive: true,
        }
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Applies damage. Returns `true` exactly once: on the call that
    /// brings health to zero or below.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        if !self.alive {
            return false;
        }
        self.health -= amount;
        if self.health <= 0 {
            self.alive = false;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_tracks_position_after_move() {
        let mut body = Body::new(10, 20, 32, 48);
        body.move_by(5, -3);

        let bounds = body.bounds();
        assert_eq!((bounds.x(), bounds.y()), (body.x, body.y));
        assert_eq!((bounds.x(), bounds.y()), (15, 17));
        assert_eq!((bounds.width(), bounds.height()), (32, 48));
    }

    #[test]
    fn test_hypothetical_bounds_leave_body_unchanged() {
        let body = Body::new(100, 100, 32, 32);
        let moved = body.bounds_moved_by(5, 0);

        assert_eq!(moved.x(), 105);
        assert_eq!(body.x, 100);
    }

    #[test]
    fn test_damage_reduces_health() {
        let mut vitality = Vitality::new(100);
        let died = vitality.take_damage(30);

        assert!(!died);
        assert_eq!(vitality.health(), 70);
        assert!(vitality.is_alive());
    }

    #[test]
    fn test_death_triggers_at_or_below_zero() {
        let mut vitality = Vitality::new(10);
        let died = vitality.take_damage(25);

        assert!(died);
        assert!(!vitality.is_alive());
        // Negative health is allowed; no clamping beyond the death latch.
        assert_eq!(vitality.health(), -15);
    }

    #[test]
    fn test_damage_after_death_is_ignored() {
        let mut vitality = Vitality::new(10);
        assert!(vitality.take_damage(10));

        // The death signal must not fire a second time.
        assert!(!vitality.take_damage(50));
        assert_eq!(vitality.health(), 0);
    }
}
