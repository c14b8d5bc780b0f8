//! Nebula obstacles and the finish line that trails them

use macroquad::math::Vec2;
use crate::anim::{update_anim_data, AnimData};
use crate::config::OBSTACLE_COUNT;
use crate::rect::Rect;

#[derive(Debug, Clone, PartialEq)]
pub struct Obstacles {
    pub sprites: [AnimData; OBSTACLE_COUNT],
    /// Starts at the last obstacle's spawn x and scrolls with them
    pub finish_line: f32,
}

impl Obstacles {
    /// Line obstacles up on the ground, the first at the window's right edge
    pub fn spawn(
        frame_w: f32,
        frame_h: f32,
        spacing: f32,
        update_time: f32,
        window_w: f32,
        ground_level: f32,
    ) -> Self {
        let sprites: [AnimData; OBSTACLE_COUNT] = std::array::from_fn(|i| {
            let pos = Vec2::new(window_w + i as f32 * spacing, ground_level - frame_h);
            AnimData::new(frame_w, frame_h, pos, update_time)
        });
        let finish_line = sprites[OBSTACLE_COUNT - 1].pos.x;
        Self { sprites, finish_line }
    }

    pub fn scroll(&mut self, velocity: f32, delta_time: f32) {
        let dx = velocity * delta_time;
        for sprite in &mut self.sprites {
            sprite.pos.x += dx;
        }
        self.finish_line += dx;
    }

    pub fn animate(&mut self, delta_time: f32, max_frame: u32) {
        for sprite in &mut self.sprites {
            *sprite = update_anim_data(*sprite, delta_time, max_frame);
        }
    }

    /// Collision rects, inset from each draw rect by `padding`
    pub fn hitboxes(&self, padding: f32) -> impl Iterator<Item = Rect> + '_ {
        self.sprites.iter().map(move |s| s.draw_rect().pad(padding))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obstacles() -> Obstacles {
        Obstacles::spawn(100.0, 100.0, 400.0, 1.0 / 12.0, 512.0, 380.0)
    }

    #[test]
    fn test_spawn_spacing() {
        let o = obstacles();
        for (i, s) in o.sprites.iter().enumerate() {
            assert_eq!(s.pos.x, 512.0 + i as f32 * 400.0);
            assert_eq!(s.pos.y, 280.0);
        }
        assert_eq!(o.finish_line, 512.0 + 9.0 * 400.0);
    }

    #[test]
    fn test_scroll_is_monotonic() {
        let mut o = obstacles();
        let mut prev_x: Vec<f32> = o.sprites.iter().map(|s| s.pos.x).collect();
        let mut prev_finish = o.finish_line;
        for dt in [0.016, 0.0, 0.033, 0.5] {
            o.scroll(-300.0, dt);
            for (s, prev) in o.sprites.iter().zip(&prev_x) {
                assert!(s.pos.x <= *prev);
            }
            assert!(o.finish_line <= prev_finish);
            prev_x = o.sprites.iter().map(|s| s.pos.x).collect();
            prev_finish = o.finish_line;
        }
        assert!((o.finish_line - (4112.0 - 300.0 * 0.549)).abs() < 0.01);
    }

    #[test]
    fn test_hitbox_inset() {
        let o = obstacles();
        let first = o.hitboxes(20.0).next().unwrap();
        assert_eq!(first, Rect::new(532.0, 300.0, 60.0, 60.0));
        assert_eq!(o.hitboxes(20.0).count(), OBSTACLE_COUNT);
    }

    #[test]
    fn test_all_obstacles_animate() {
        let mut o = obstacles();
        o.animate(0.1, 7);
        assert!(o.sprites.iter().all(|s| s.frame == 1));
    }
}
