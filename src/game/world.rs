//! One run of the game: player, obstacles and outcome
//!
//! `GameWorld::step` is the whole per-frame simulation. It has no macroquad
//! context dependency so it can be driven headless from tests.

use crate::config::Settings;
use crate::input::FrameInput;
use super::{Obstacles, Outcome, Player};

/// Simulation constants pulled out of `Settings`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Physics {
    pub gravity: f32,
    pub jump_velocity: f32,
    pub player_speed: f32,
    pub obstacle_velocity: f32,
    pub hitbox_padding: f32,
    pub player_max_frame: u32,
    pub obstacle_max_frame: u32,
}

impl From<&Settings> for Physics {
    fn from(s: &Settings) -> Self {
        Self {
            gravity: s.gravity,
            jump_velocity: s.jump_velocity,
            player_speed: s.player_speed,
            obstacle_velocity: s.obstacle_velocity,
            hitbox_padding: s.hitbox_padding,
            player_max_frame: s.player_sheet.max_frame(),
            obstacle_max_frame: s.obstacle_sheet.max_frame(),
        }
    }
}

/// Frame sizes cut from the loaded sprite sheets
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteSizes {
    pub player: (f32, f32),
    pub obstacle: (f32, f32),
}

pub struct GameWorld {
    pub physics: Physics,
    pub player: Player,
    pub obstacles: Obstacles,
    /// Set on the first overlap and never cleared
    pub collided: bool,
    pub outcome: Outcome,
    /// Window height; sprites stand on it
    pub ground_level: f32,
    pub frame: u64,
    pub debug_log: bool,
}

impl GameWorld {
    pub fn new(settings: &Settings, sizes: SpriteSizes, window_w: f32, window_h: f32) -> Self {
        let (pw, ph) = sizes.player;
        let (ow, oh) = sizes.obstacle;
        Self {
            physics: Physics::from(settings),
            player: Player::spawn(pw, ph, settings.player_update_time, window_w, window_h),
            obstacles: Obstacles::spawn(
                ow,
                oh,
                settings.obstacle_spacing,
                settings.obstacle_update_time,
                window_w,
                window_h,
            ),
            collided: false,
            outcome: Outcome::Playing,
            ground_level: window_h,
            frame: 0,
            debug_log: settings.debug_log,
        }
    }

    /// Advance one frame. Keeps simulating after the outcome is decided;
    /// only drawing stops. Returns the new outcome when it changes.
    pub fn step(&mut self, delta_time: f32, input: &FrameInput) -> Option<Outcome> {
        let p = self.physics;

        self.player.apply_gravity(p.gravity, delta_time, self.ground_level);
        if input.jump_pressed {
            self.player.try_jump(p.jump_velocity);
        }

        self.obstacles.scroll(p.obstacle_velocity, delta_time);
        self.player.integrate(delta_time, self.ground_level);
        self.player.walk(input, p.player_speed);

        self.player.animate(delta_time, p.player_max_frame);
        self.obstacles.animate(delta_time, p.obstacle_max_frame);

        let changed = self.check_outcome();
        self.frame += 1;

        if self.debug_log {
            let pos = self.player.anim.pos;
            println!(
                "SIM|f:{}|dt:{:.4}|pos:({:.1},{:.1})|vv:{:.1}|air:{}|finish:{:.1}|hit:{}|{:?}",
                self.frame,
                delta_time,
                pos.x,
                pos.y,
                self.player.velocity,
                if self.player.in_air { "Y" } else { "N" },
                self.obstacles.finish_line,
                if self.collided { "Y" } else { "N" },
                self.outcome,
            );
        }
        changed
    }

    /// Test the player against every obstacle hit-box and settle the outcome.
    /// Win and lose are both final.
    pub fn check_outcome(&mut self) -> Option<Outcome> {
        let player_box = self.player.hitbox();
        if self
            .obstacles
            .hitboxes(self.physics.hitbox_padding)
            .any(|hb| hb.intersects(&player_box))
        {
            self.collided = true;
        }

        if self.outcome.is_over() {
            return None;
        }
        let next = Outcome::decide(self.collided, self.player.anim.pos.x, self.obstacles.finish_line);
        if next != self.outcome {
            self.outcome = next;
            Some(next)
        } else {
            None
        }
    }
}
