//! Sprite-sheet animation state
//!
//! Each animated sprite carries an `AnimData` value: the source rectangle
//! inside its sheet, where it is drawn, and a small timer that steps the
//! frame index. Updates are value-in, value-out; the caller stores the
//! returned copy back.

use macroquad::math::Vec2;
use serde::{Deserialize, Serialize};
use crate::rect::Rect;

/// Grid layout of a sprite sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetLayout {
    pub columns: u32,
    pub rows: u32,
}

impl SheetLayout {
    pub const fn new(columns: u32, rows: u32) -> Self {
        Self { columns, rows }
    }

    /// Size of one frame for a sheet of the given pixel size
    pub fn frame_size(&self, sheet_width: f32, sheet_height: f32) -> (f32, f32) {
        (
            sheet_width / self.columns.max(1) as f32,
            sheet_height / self.rows.max(1) as f32,
        )
    }

    /// Highest frame index along the animated row
    pub fn max_frame(&self) -> u32 {
        self.columns.saturating_sub(1)
    }
}

/// Per-sprite animation record
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimData {
    /// Source rectangle within the sprite sheet
    pub rec: Rect,
    /// Top-left corner of the draw rectangle in world space
    pub pos: Vec2,
    /// Current frame index
    pub frame: u32,
    /// Seconds between frame advances
    pub update_time: f32,
    /// Seconds accumulated since the last advance
    pub running_time: f32,
}

impl AnimData {
    /// Start at frame 0 with a source rect of `frame_w` x `frame_h` at the sheet origin
    pub fn new(frame_w: f32, frame_h: f32, pos: Vec2, update_time: f32) -> Self {
        Self {
            rec: Rect::new(0.0, 0.0, frame_w, frame_h),
            pos,
            frame: 0,
            update_time,
            running_time: 0.0,
        }
    }

    /// Where the sprite lands on screen
    pub fn draw_rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.rec.w, self.rec.h)
    }
}

/// Bottom edge at or below the ground line
pub fn is_on_ground(pos: Vec2, rec: &Rect, ground_level: f32) -> bool {
    pos.y + rec.h >= ground_level
}

/// Accumulate `delta_time` and step the frame once `update_time` is reached.
///
/// `rec.x` is set from the frame index *before* it is incremented, so the
/// displayed source rect trails `frame` by one tick.
pub fn update_anim_data(mut data: AnimData, delta_time: f32, max_frame: u32) -> AnimData {
    data.running_time += delta_time;
    if data.running_time >= data.update_time {
        data.running_time = 0.0;
        data.rec.x = data.frame as f32 * data.rec.w;
        data.frame += 1;
        if data.frame > max_frame {
            data.frame = 0;
        }
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sprite() -> AnimData {
        AnimData::new(100.0, 100.0, Vec2::new(0.0, 0.0), 0.1)
    }

    #[test]
    fn test_is_on_ground_boundary() {
        let rec = Rect::new(0.0, 0.0, 50.0, 100.0);
        assert!(is_on_ground(Vec2::new(0.0, 280.0), &rec, 380.0));
        assert!(is_on_ground(Vec2::new(0.0, 300.0), &rec, 380.0));
        assert!(!is_on_ground(Vec2::new(0.0, 279.5), &rec, 380.0));
    }

    #[test]
    fn test_advance_below_update_time_only_accumulates() {
        let a = update_anim_data(sprite(), 0.04, 7);
        assert_eq!(a.frame, 0);
        assert!((a.running_time - 0.04).abs() < 1e-6);
        assert_eq!(a.rec.x, 0.0);
    }

    #[test]
    fn test_zero_delta_is_noop() {
        let a = update_anim_data(sprite(), 0.0, 7);
        assert_eq!(a, sprite());
    }

    #[test]
    fn test_advance_once_per_crossing() {
        let mut a = sprite();
        let mut advances = 0;
        let mut last = a.frame;
        // 0.03 * 4 = 0.12 -> one crossing every 4 calls
        for _ in 0..16 {
            a = update_anim_data(a, 0.03, 7);
            if a.frame != last {
                advances += 1;
                last = a.frame;
            }
        }
        assert_eq!(advances, 4);
        assert_eq!(a.frame, 4);
        assert_eq!(a.running_time, 0.0);
    }

    #[test]
    fn test_source_rect_trails_frame() {
        let mut a = sprite();
        a = update_anim_data(a, 0.1, 7);
        assert_eq!(a.frame, 1);
        assert_eq!(a.rec.x, 0.0);
        a = update_anim_data(a, 0.1, 7);
        assert_eq!(a.frame, 2);
        assert_eq!(a.rec.x, 100.0);
    }

    #[test]
    fn test_frame_wraps_after_max() {
        let mut a = sprite();
        for _ in 0..6 {
            a = update_anim_data(a, 0.1, 5);
        }
        // Frame 5 was shown, then wrapped
        assert_eq!(a.frame, 0);
        assert_eq!(a.rec.x, 500.0);
        a = update_anim_data(a, 0.1, 5);
        assert_eq!(a.frame, 1);
        assert_eq!(a.rec.x, 0.0);
    }

    #[test]
    fn test_sheet_layout() {
        let nebula = SheetLayout::new(8, 8);
        assert_eq!(nebula.frame_size(800.0, 800.0), (100.0, 100.0));
        assert_eq!(nebula.max_frame(), 7);
        let scarfy = SheetLayout::new(6, 1);
        assert_eq!(scarfy.frame_size(768.0, 128.0), (128.0, 128.0));
        assert_eq!(scarfy.max_frame(), 5);
    }
}
