//! Texture loading
//!
//! All five images are loaded up front. They are owned by `GameTextures`
//! and freed when it drops, whichever way `main` returns.

use macroquad::prelude::*;
use crate::anim::SheetLayout;
use crate::config::AssetPaths;
use crate::game::SpriteSizes;

/// Error type for texture loading
#[derive(Debug)]
pub struct AssetError {
    pub path: String,
    pub message: String,
}

impl std::fmt::Display for AssetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "failed to load {}: {}", self.path, self.message)
    }
}

pub struct GameTextures {
    pub obstacle: Texture2D,
    pub player: Texture2D,
    /// Far, mid, fore
    pub backgrounds: [Texture2D; 3],
}

async fn load(path: &str) -> Result<Texture2D, AssetError> {
    let tex = load_texture(path).await.map_err(|e| AssetError {
        path: path.to_string(),
        message: e.to_string(),
    })?;
    if tex.width() <= 0.0 || tex.height() <= 0.0 {
        return Err(AssetError {
            path: path.to_string(),
            message: "texture is empty".to_string(),
        });
    }
    // Pixel art: no smoothing when scaled
    tex.set_filter(FilterMode::Nearest);
    println!("Loaded texture {} ({}x{})", path, tex.width(), tex.height());
    Ok(tex)
}

impl GameTextures {
    pub async fn load(paths: &AssetPaths) -> Result<Self, AssetError> {
        Ok(Self {
            obstacle: load(&paths.obstacle).await?,
            player: load(&paths.player).await?,
            backgrounds: [
                load(&paths.background).await?,
                load(&paths.midground).await?,
                load(&paths.foreground).await?,
            ],
        })
    }

    /// Frame sizes for the simulation, cut by each sheet's layout
    pub fn sprite_sizes(&self, player: SheetLayout, obstacle: SheetLayout) -> SpriteSizes {
        SpriteSizes {
            player: player.frame_size(self.player.width(), self.player.height()),
            obstacle: obstacle.frame_size(self.obstacle.width(), self.obstacle.height()),
        }
    }

    /// Background widths after scaling, far to fore
    pub fn tile_widths(&self, scale: f32) -> [f32; 3] {
        self.backgrounds.each_ref().map(|t| t.width() * scale)
    }
}
