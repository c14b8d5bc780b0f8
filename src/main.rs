//! Dapper Dasher: a tiny side-scroller
//!
//! Scarfy runs along the bottom of the screen while nebulae drift in from
//! the right. Jump over all ten to reach the finish line; touch one and the
//! run is over.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod anim;
mod assets;
mod config;
mod game;
mod input;
mod rect;
mod render;

use macroquad::prelude::*;
use assets::GameTextures;
use config::{FpsLimit, SETTINGS_PATH, WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
use game::{GameWorld, Parallax};
use input::InputState;

fn window_conf() -> Conf {
    Conf {
        window_title: WINDOW_TITLE.to_string(),
        window_width: WINDOW_WIDTH,
        window_height: WINDOW_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    let settings = config::load_or_default(SETTINGS_PATH).await;

    let textures = match GameTextures::load(&settings.assets).await {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Assets: {}", e);
            return;
        }
    };

    let (window_w, window_h) = (WINDOW_WIDTH as f32, WINDOW_HEIGHT as f32);
    let sizes = textures.sprite_sizes(settings.player_sheet, settings.obstacle_sheet);
    if let Err(e) = settings.validate_hitbox(sizes.obstacle) {
        eprintln!("Settings: {}", e);
        return;
    }
    let mut world = GameWorld::new(&settings, sizes, window_w, window_h);

    let tile_widths = textures.tile_widths(settings.background_scale);
    let mut parallax = Parallax::new(settings.parallax_speed);

    let mut input = InputState::new();

    println!("=== DAPPER DASHER v{} ===", VERSION);
    println!(
        "FPS limit: {}, gamepad: {}",
        settings.fps_limit.label(),
        if input.has_gamepad() { "connected" } else { "none" }
    );

    loop {
        let frame_start = get_time();

        if input.quit_requested() {
            println!("Quit requested");
            break;
        }

        let delta_time = get_frame_time();

        clear_background(WHITE);

        parallax.scroll(delta_time, tile_widths);
        render::draw_parallax(&textures, &parallax, settings.background_scale);

        let frame_input = input.poll();
        if let Some(outcome) = world.step(delta_time, &frame_input) {
            println!("Outcome: {:?} after {} frames", outcome, world.frame);
        }

        render::draw_world(&textures, &world, window_w, window_h);

        limit_frame_rate(settings.fps_limit, frame_start);

        next_frame().await;
    }
}

/// Hold the frame until the target frame time has passed
fn limit_frame_rate(limit: FpsLimit, frame_start: f64) {
    let Some(target_frame_time) = limit.frame_time() else { return };
    if target_frame_time - (get_time() - frame_start) <= 0.0 {
        return;
    }

    // Native: use sleep for bulk, then spin-wait for precision
    #[cfg(not(target_arch = "wasm32"))]
    {
        let spin_margin = 0.002; // 2ms
        while get_time() - frame_start + spin_margin < target_frame_time {
            std::thread::sleep(std::time::Duration::from_millis(1));
        }
        while get_time() - frame_start < target_frame_time {
            std::hint::spin_loop();
        }
    }
    // WASM: the browser paces frames through requestAnimationFrame
}
