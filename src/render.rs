//! Frame drawing

use macroquad::prelude::*;
use crate::anim::AnimData;
use crate::assets::GameTextures;
use crate::game::{GameWorld, Outcome, Parallax};

const BANNER_FONT_SIZE: f32 = 40.0;

/// Both tiles of each layer, far first
pub fn draw_parallax(textures: &GameTextures, parallax: &Parallax, scale: f32) {
    for (tex, layer) in textures.backgrounds.iter().zip(&parallax.layers) {
        let tile_w = tex.width() * scale;
        let size = vec2(tile_w, tex.height() * scale);
        for x in layer.tile_positions(tile_w) {
            draw_texture_ex(
                tex,
                x,
                0.0,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(size),
                    ..Default::default()
                },
            );
        }
    }
}

fn draw_sprite(tex: &Texture2D, anim: &AnimData) {
    draw_texture_ex(
        tex,
        anim.pos.x,
        anim.pos.y,
        WHITE,
        DrawTextureParams {
            source: Some(anim.rec.into()),
            ..Default::default()
        },
    );
}

/// Sprites while playing, banner once the run is over
pub fn draw_world(textures: &GameTextures, world: &GameWorld, window_w: f32, window_h: f32) {
    let color = match world.outcome {
        Outcome::Playing => {
            for sprite in &world.obstacles.sprites {
                draw_sprite(&textures.obstacle, sprite);
            }
            draw_sprite(&textures.player, &world.player.anim);
            return;
        }
        Outcome::Lose => YELLOW,
        Outcome::Win => BLUE,
    };
    if let Some(text) = world.outcome.message() {
        // macroquad positions text by baseline; shift so the top sits at h/2
        let dims = measure_text(text, None, BANNER_FONT_SIZE as u16, 1.0);
        draw_text(
            text,
            window_w / 4.0,
            window_h / 2.0 + dims.offset_y,
            BANNER_FONT_SIZE,
            color,
        );
    }
}
