//! Asset registry: images and sounds keyed by name
//!
//! Assets are loaded up front (individually or in bulk from a JSON config
//! file) and looked up by name afterwards. Lookups return a `Result` so a
//! missing asset is a checked error at the call site, never a silent
//! absent value used later.

use sdl2::image::LoadTexture;
use sdl2::mixer::Chunk;
use sdl2::render::{Texture, TextureCreator};
use sdl2::video::WindowContext;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;

/// Errors from loading or looking up assets
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("image '{0}' has not been loaded")]
    ImageNotFound(String),

    #[error("sound '{0}' has not been loaded")]
    SoundNotFound(String),

    #[error("failed to load '{path}': {message}")]
    Load { path: String, message: String },

    #[error("failed to read asset config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid asset config: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<AssetError> for String {
    fn from(error: AssetError) -> Self {
        error.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Image,
    Sound,
}

/// One entry of the asset config file.
///
/// The config is a JSON array of these records; `width`/`height` are only
/// meaningful for images and override the texture's natural size.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetRecord {
    #[serde(rename = "type")]
    pub kind: AssetKind,
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

/// A loaded texture plus the logical size it is drawn at.
pub struct ImageAsset<'a> {
    pub texture: Texture<'a>,
    pub width: u32,
    pub height: u32,
}

/// Loads, stores, and hands out game assets by name.
pub struct AssetManager<'a> {
    texture_creator: &'a TextureCreator<WindowContext>,
    images: HashMap<String, ImageAsset<'a>>,
    sounds: HashMap<String, Chunk>,
}

impl<'a> AssetManager<'a> {
    pub fn new(texture_creator: &'a TextureCreator<WindowContext>) -> Self {
        AssetManager {
            texture_creator,
            images: HashMap::new(),
            sounds: HashMap::new(),
        }
    }

    /// Loads an image and stores it under `name`. A second load of the
    /// same name is a no-op (the first load wins, matching cache
    /// semantics). `size` overrides the texture's natural draw size.
    pub fn load_image(
        &mut self,
        name: &str,
        path: &str,
        size: Option<(u32, u32)>,
    ) -> Result<(), AssetError> {
        if self.images.contains_key(name) {
            return Ok(());
        }

        let texture = self
            .texture_creator
            .load_texture(path)
            .map_err(|message| AssetError::Load {
                path: path.to_string(),
                message,
            })?;
        let query = texture.query();
        let (width, height) = size.unwrap_or((query.width, query.height));

        self.images.insert(
            name.to_string(),
            ImageAsset {
                texture,
                width,
                height,
            },
        );
        Ok(())
    }

    /// Looks up a previously loaded image.
    pub fn image(&self, name: &str) -> Result<&ImageAsset<'a>, AssetError> {
        self.images
            .get(name)
            .ok_or_else(|| AssetError::ImageNotFound(name.to_string()))
    }

    /// The logical draw size of a loaded image.
    pub fn image_size(&self, name: &str) -> Result<(u32, u32), AssetError> {
        self.image(name).map(|img| (img.width, img.height))
    }

    /// Loads a sound chunk and stores it under `name`. Requires the mixer
    /// to be opened first. A second load of the same name is a no-op.
    pub fn load_sound(&mut self, name: &str, path: &str) -> Result<(), AssetError> {
        if self.sounds.contains_key(name) {
            return Ok(());
        }

        let chunk = Chunk::from_file(path).map_err(|message| AssetError::Load {
            path: path.to_string(),
            message,
        })?;
        self.sounds.insert(name.to_string(), chunk);
        Ok(())
    }

    /// Looks up a previously loaded sound.
    #[allow(dead_code)] // Registry API; gameplay currently only draws images
    pub fn sound(&self, name: &str) -> Result<&Chunk, AssetError> {
        self.sounds
            .get(name)
            .ok_or_else(|| AssetError::SoundNotFound(name.to_string()))
    }

    /// Loads every asset listed in a JSON config file.
    pub fn load_from_config(&mut self, path: &str) -> Result<(), AssetError> {
        let contents = fs::read_to_string(path)?;
        let records = parse_config(&contents)?;
        self.load_records(&records)
    }

    fn load_records(&mut self, records: &[AssetRecord]) -> Result<(), AssetError> {
        for record in records {
            match record.kind {
                AssetKind::Image => {
                    let size = record.width.zip(record.height);
                    self.load_image(&record.name, &record.path, size)?;
                }
                AssetKind::Sound => {
                    self.load_sound(&record.name, &record.path)?;
                }
            }
        }
        Ok(())
    }
}

/// Parses the asset config format: a JSON array of asset records.
pub fn parse_config(json: &str) -> Result<Vec<AssetRecord>, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config_image_with_size() {
        let records = parse_config(
            r#"[{"type": "image", "name": "player", "path": "assets/player.png",
                 "width": 32, "height": 32}]"#,
        )
        .unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].kind, AssetKind::Image);
        assert_eq!(records[0].name, "player");
        assert_eq!(records[0].width, Some(32));
        assert_eq!(records[0].height, Some(32));
    }

    #[test]
    fn test_parse_config_sound_without_size() {
        let records =
            parse_config(r#"[{"type": "sound", "name": "hit", "path": "assets/hit.wav"}]"#)
                .unwrap();

        assert_eq!(records[0].kind, AssetKind::Sound);
        assert_eq!(records[0].width, None);
        assert_eq!(records[0].height, None);
    }

    #[test]
    fn test_parse_config_rejects_unknown_type() {
        let result = parse_config(r#"[{"type": "font", "name": "ui", "path": "ui.ttf"}]"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_config_empty_list() {
        let records = parse_config("[]").unwrap();
        assert!(records.is_empty());
    }
}
