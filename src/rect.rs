//! Axis-aligned rectangles for sprite sources, draw bounds and hit-boxes

/// A rectangle defined by its top-left corner and size
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Right edge
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Bottom edge
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Shrink by padding on all sides. Size clamps at 0, so an over-padded
    /// rect becomes a point that can still intersect (a negative-size rect
    /// would never hit anything); `Settings::validate_hitbox` rules that out.
    pub fn pad(&self, padding: f32) -> Self {
        Self::new(
            self.x + padding,
            self.y + padding,
            (self.w - padding * 2.0).max(0.0),
            (self.h - padding * 2.0).max(0.0),
        )
    }

    /// Overlap test. Edges that only touch still count as intersecting.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x <= other.right()
            && other.x <= self.right()
            && self.y <= other.bottom()
            && other.y <= self.bottom()
    }
}

impl From<Rect> for macroquad::math::Rect {
    fn from(r: Rect) -> Self {
        macroquad::math::Rect::new(r.x, r.y, r.w, r.h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad() {
        let r = Rect::new(10.0, 20.0, 100.0, 60.0).pad(10.0);
        assert_eq!(r, Rect::new(20.0, 30.0, 80.0, 40.0));
    }

    #[test]
    fn test_pad_clamps_to_zero() {
        let r = Rect::new(0.0, 0.0, 100.0, 100.0).pad(60.0);
        assert_eq!(r.w, 0.0);
        assert_eq!(r.h, 0.0);
        assert_eq!(r.x, 60.0);
    }

    #[test]
    fn test_intersects() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&Rect::new(5.0, 5.0, 10.0, 10.0)));
        assert!(!a.intersects(&Rect::new(11.0, 0.0, 10.0, 10.0)));
        assert!(!a.intersects(&Rect::new(0.0, 10.5, 10.0, 10.0)));
    }

    #[test]
    fn test_touching_edges_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&Rect::new(10.0, 0.0, 5.0, 5.0)));
        assert!(a.intersects(&Rect::new(0.0, 10.0, 5.0, 5.0)));
        // Zero-sized rect (fully padded hit-box) sitting inside
        assert!(a.intersects(&Rect::new(5.0, 5.0, 0.0, 0.0)));
    }
}
