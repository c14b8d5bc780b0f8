//! Scrolling background layers
//!
//! Each layer is one image drawn twice side by side. The offset runs left
//! and snaps back to 0 once a full (scaled) tile has gone by, which makes
//! the pair loop seamlessly.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxLayer {
    /// Current x of the first tile (<= 0)
    pub offset: f32,
    /// Leftward speed (pixels/s)
    pub speed: f32,
}

impl ParallaxLayer {
    pub const fn new(speed: f32) -> Self {
        Self { offset: 0.0, speed }
    }

    pub fn scroll(&mut self, delta_time: f32, tile_width: f32) {
        self.offset -= self.speed * delta_time;
        if self.offset <= -tile_width {
            self.offset = 0.0;
        }
    }

    /// X of the two tiles
    pub fn tile_positions(&self, tile_width: f32) -> [f32; 2] {
        [self.offset, self.offset + tile_width]
    }
}

/// Far, mid and fore layers at 1x, 2x and 4x the base speed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parallax {
    pub layers: [ParallaxLayer; 3],
}

impl Parallax {
    pub fn new(base_speed: f32) -> Self {
        Self {
            layers: [
                ParallaxLayer::new(base_speed),
                ParallaxLayer::new(base_speed * 2.0),
                ParallaxLayer::new(base_speed * 4.0),
            ],
        }
    }

    /// `tile_widths` are the scaled widths of the far, mid and fore images
    pub fn scroll(&mut self, delta_time: f32, tile_widths: [f32; 3]) {
        for (layer, width) in self.layers.iter_mut().zip(tile_widths) {
            layer.scroll(delta_time, width);
        }
    }
}
