//! Cone falloff state for a single light pass.
//!
//! The modifier is not a function of a pixel's position alone: it is a
//! running value that evolves with the scan order (x-major, y ascending).
//! Above the light's center row it grows by `brightness` while successive
//! in-range pixels get closer to the center, and snaps back to 1.0 when
//! they stop getting closer. At or below the center it shrinks by
//! `brightness` while distance is non-decreasing.
//!
//! One `ConeFalloff` lives for exactly one light and is threaded through
//! every in-range pixel of that light's scan.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConeFalloff {
    /// Distance of the last in-range pixel at or above the center row.
    pub old_dist: f64,
    /// Distance of the pixel being processed (or the last one below center).
    pub new_dist: f64,
    /// Multiplier applied to the summed color channels.
    pub modifier: f32,
}

impl Default for ConeFalloff {
    fn default() -> Self {
        Self { old_dist: 0.0, new_dist: 0.0, modifier: 1.0 }
    }
}

impl ConeFalloff {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the modifier for an in-range pixel at row `py`, `dist` away
    /// from a light centered on row `center_y`. Returns the modifier to
    /// blend this pixel with.
    pub fn enter(&mut self, py: f64, center_y: f64, dist: f64, brightness: f32) -> f32 {
        self.new_dist = dist;
        if py < center_y {
            if self.new_dist < self.old_dist {
                self.modifier += brightness;
            } else {
                self.modifier = 1.0;
            }
        } else if self.old_dist <= self.new_dist {
            self.modifier -= brightness;
        }
        self.modifier
    }

    /// Record the pixel just blended.
    pub fn leave(&mut self, py: f64, center_y: f64, dist: f64) {
        if py <= center_y {
            self.old_dist = dist;
        } else {
            self.new_dist = dist;
        }
    }
}
