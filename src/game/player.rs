//! The player sprite (Scarfy)

use macroquad::math::Vec2;
use crate::anim::{is_on_ground, update_anim_data, AnimData};
use crate::rect::Rect;
use crate::input::FrameInput;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub anim: AnimData,
    /// Vertical velocity (pixels/s, positive is down)
    pub velocity: f32,
    pub in_air: bool,
}

impl Player {
    /// Stand centred horizontally on the ground line
    pub fn spawn(frame_w: f32, frame_h: f32, update_time: f32, window_w: f32, ground_level: f32) -> Self {
        let pos = Vec2::new(window_w / 2.0 - frame_w / 2.0, ground_level - frame_h);
        Self {
            anim: AnimData::new(frame_w, frame_h, pos, update_time),
            velocity: 0.0,
            in_air: false,
        }
    }

    /// Ground check, then either stop or accelerate downward
    pub fn apply_gravity(&mut self, gravity: f32, delta_time: f32, ground_level: f32) {
        if is_on_ground(self.anim.pos, &self.anim.rec, ground_level) {
            self.snap_to_ground(ground_level);
            self.velocity = 0.0;
            self.in_air = false;
        } else {
            self.velocity += gravity * delta_time;
            self.in_air = true;
        }
    }

    /// Add the jump impulse if standing. Returns whether it was applied.
    pub fn try_jump(&mut self, jump_velocity: f32) -> bool {
        if self.in_air {
            return false;
        }
        self.velocity += jump_velocity;
        true
    }

    /// Move by the current velocity; a landing never sinks below the ground line
    pub fn integrate(&mut self, delta_time: f32, ground_level: f32) {
        self.anim.pos.y += self.velocity * delta_time;
        if is_on_ground(self.anim.pos, &self.anim.rec, ground_level) {
            self.snap_to_ground(ground_level);
        }
    }

    fn snap_to_ground(&mut self, ground_level: f32) {
        self.anim.pos.y = ground_level - self.anim.rec.h;
    }

    /// Per-frame horizontal step. Right is applied before left, so holding
    /// both cancels out.
    pub fn walk(&mut self, input: &FrameInput, speed: f32) {
        if input.move_right {
            self.anim.pos.x += speed;
        }
        if input.move_left {
            self.anim.pos.x -= speed;
        }
    }

    /// Run cycle only plays while on the ground
    pub fn animate(&mut self, delta_time: f32, max_frame: u32) {
        if !self.in_air {
            self.anim = update_anim_data(self.anim, delta_time, max_frame);
        }
    }

    /// Full draw rect; the player's hit-box is not inset
    pub fn hitbox(&self) -> Rect {
        self.anim.draw_rect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> Player {
        Player::spawn(128.0, 128.0, 1.0 / 12.0, 512.0, 380.0)
    }

    #[test]
    fn test_spawn_on_ground_centered() {
        let p = player();
        assert_eq!(p.anim.pos, Vec2::new(192.0, 252.0));
        assert!(is_on_ground(p.anim.pos, &p.anim.rec, 380.0));
    }

    #[test]
    fn test_gravity_accumulates_in_air() {
        let mut p = player();
        p.anim.pos.y = 0.0;
        p.apply_gravity(600.0, 0.5, 380.0);
        assert!(p.in_air);
        assert_eq!(p.velocity, 300.0);
        p.apply_gravity(600.0, 0.5, 380.0);
        assert_eq!(p.velocity, 600.0);
    }

    #[test]
    fn test_grounded_clears_velocity() {
        let mut p = player();
        p.velocity = 123.0;
        p.in_air = true;
        p.apply_gravity(600.0, 0.5, 380.0);
        assert!(!p.in_air);
        assert_eq!(p.velocity, 0.0);
    }

    #[test]
    fn test_landing_snaps_to_ground() {
        let mut p = player();
        p.anim.pos.y = 240.0;
        p.velocity = 6000.0;
        p.in_air = true;
        p.integrate(0.1, 380.0);
        assert_eq!(p.anim.pos.y, 252.0);

        // Already below the line: the ground check lifts it back
        p.anim.pos.y = 400.0;
        p.apply_gravity(1000.0, 0.1, 380.0);
        assert_eq!(p.anim.pos.y, 252.0);
        assert!(!p.in_air);
        assert_eq!(p.velocity, 0.0);
    }

    #[test]
    fn test_jump_only_when_grounded() {
        let mut p = player();
        assert!(p.try_jump(-1000.0));
        assert_eq!(p.velocity, -1000.0);

        p.in_air = true;
        assert!(!p.try_jump(-1000.0));
        assert_eq!(p.velocity, -1000.0);
    }

    #[test]
    fn test_both_move_keys_cancel() {
        // Inherited ordering: right then left, both applied
        let mut p = player();
        let input = FrameInput { move_left: true, move_right: true, jump_pressed: false };
        p.walk(&input, 10.0);
        assert_eq!(p.anim.pos.x, 192.0);
    }

    #[test]
    fn test_no_run_cycle_in_air() {
        let mut p = player();
        p.in_air = true;
        p.animate(1.0, 5);
        assert_eq!(p.anim.frame, 0);
        p.in_air = false;
        p.animate(1.0, 5);
        assert_eq!(p.anim.frame, 1);
    }
}
