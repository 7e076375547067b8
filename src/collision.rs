//! Collision detection queries
//!
//! Pure AABB predicates over entity bounds and the level's tile grid.
//! Nothing here mutates anything; collision *response* lives with the
//! gameplay state that decides what a hit means.

use crate::level::{Level, TileKind};
use sdl2::rect::Rect;

/// Implemented by anything that occupies a rectangle in the world.
pub trait Collidable {
    /// The entity's current axis-aligned bounding box.
    fn bounds(&self) -> Rect;
}

/// Checks whether two axis-aligned rectangles overlap.
///
/// Rectangles that merely share an edge (zero-area overlap) do NOT
/// collide; the overlap must be strictly positive on both axes.
pub fn aabb_intersect(a: &Rect, b: &Rect) -> bool {
    let x_overlap = a.x() < b.x() + b.width() as i32 && a.x() + a.width() as i32 > b.x();
    let y_overlap = a.y() < b.y() + b.height() as i32 && a.y() + a.height() as i32 > b.y();

    x_overlap && y_overlap
}

/// True iff the two entities' bounding boxes overlap.
pub fn check_entity_collision(a: &dyn Collidable, b: &dyn Collidable) -> bool {
    aabb_intersect(&a.bounds(), &b.bounds())
}

/// True iff any tile of the given kind overlaps `test_rect`.
///
/// Linear scan over the tile list. Fine at this scale; a spatial index
/// would slot in here if levels ever grew large.
pub fn check_tile_collision(level: &Level, test_rect: &Rect, kind: TileKind) -> bool {
    level
        .tiles
        .iter()
        .any(|tile| tile.kind == kind && aabb_intersect(test_rect, &tile.rect))
}
