//! Level geometry: static tile grid plus level-owned entities
//!
//! Tiles are created once when a layout is loaded and never mutated
//! afterwards. The entity list is an extension point for level-local
//! objects (doors, pickups, ...); nothing populates it yet.

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Side length of one grid cell in logical units.
pub const TILE_SIZE: u32 = 50;

/// Categories of level tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileKind {
    Wall,
    Floor,
}

impl TileKind {
    fn color(&self) -> Color {
        match self {
            TileKind::Wall => Color::RGB(100, 100, 100),
            TileKind::Floor => Color::RGB(200, 200, 200),
        }
    }
}

/// A fixed-size static grid cell. Immutable after level load.
#[derive(Debug, Clone, Copy)]
pub struct Tile {
    pub rect: Rect,
    pub kind: TileKind,
}

impl Tile {
    pub fn new(x: i32, y: i32, kind: TileKind) -> Self {
        Tile {
            rect: Rect::new(x, y, TILE_SIZE, TILE_SIZE),
            kind,
        }
    }

    pub fn draw(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        canvas.set_draw_color(self.kind.color());
        canvas.fill_rect(self.rect)
    }
}

/// An object owned by the level rather than by the gameplay state.
#[allow(dead_code)] // Reserved for level-local objects (doors, pickups)
pub trait LevelEntity {
    fn update(&mut self);
    fn draw(&self, canvas: &mut Canvas<Window>) -> Result<(), String>;
}

/// Owns the tile grid and any level-local entities.
///
/// Tile order follows the layout scan (row-major, insertion order), which
/// keeps iteration deterministic for collision scans and drawing.
pub struct Level {
    pub tiles: Vec<Tile>,
    pub entities: Vec<Box<dyn LevelEntity>>,
}

impl Level {
    pub fn new() -> Self {
        Level {
            tiles: Vec::new(),
            entities: Vec::new(),
        }
    }

    /// Loads tiles from a layout of equal-length rows.
    ///
    /// `'W'` becomes a wall, `'F'` a floor; any other character leaves the
    /// cell empty. Each character occupies a `TILE_SIZE` square at
    /// `(col * TILE_SIZE, row * TILE_SIZE)`. Loading replaces any
    /// previously loaded tiles.
    pub fn load(&mut self, layout: &[&str]) {
        self.tiles.clear();
        for (row, line) in layout.iter().enumerate() {
            for (col, cell) in line.chars().enumerate() {
                let x = col as i32 * TILE_SIZE as i32;
                let y = row as i32 * TILE_SIZE as i32;
                match cell {
                    'W' => self.tiles.push(Tile::new(x, y, TileKind::Wall)),
                    'F' => self.tiles.push(Tile::new(x, y, TileKind::Floor)),
                    _ => {}
                }
            }
        }
    }

    /// Advances level-local entities. The tile grid itself never changes.
    pub fn update(&mut self) {
        for entity in self.entities.iter_mut() {
            entity.update();
        }
    }

    /// Draws tiles first, then level-local entities on top.
    pub fn draw(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        for tile in &self.tiles {
            tile.draw(canvas)?;
        }
        for entity in &self.entities {
            entity.draw(canvas)?;
        }
        Ok(())
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_places_tiles_on_grid() {
        let mut level = Level::new();
        level.load(&["WF", "FW"]);

        assert_eq!(level.tiles.len(), 4);
        assert_eq!(level.tiles[0].kind, TileKind::Wall);
        assert_eq!((level.tiles[0].rect.x(), level.tiles[0].rect.y()), (0, 0));
        assert_eq!(level.tiles[1].kind, TileKind::Floor);
        assert_eq!((level.tiles[1].rect.x(), level.tiles[1].rect.y()), (50, 0));
        assert_eq!(level.tiles[3].kind, TileKind::Wall);
        assert_eq!((level.tiles[3].rect.x(), level.tiles[3].rect.y()), (50, 50));
    }

    #[test]
    fn test_load_ignores_unknown_characters() {
        let mut level = Level::new();
        level.load(&["W.F", "..."]);

        assert_eq!(level.tiles.len(), 2);
    }

    #[test]
    fn test_load_replaces_previous_tiles() {
        let mut level = Level::new();
        level.load(&["WWWW"]);
        level.load(&["F"]);

        assert_eq!(level.tiles.len(), 1);
        assert_eq!(level.tiles[0].kind, TileKind::Floor);
    }

    #[test]
    fn test_tile_size_is_fifty() {
        let tile = Tile::new(100, 150, TileKind::Wall);
        assert_eq!(tile.rect.width(), 50);
        assert_eq!(tile.rect.height(), 50);
    }
}
