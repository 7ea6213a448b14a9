//! Smooth scroll animation
//!
//! Target-based glide: each tick moves a fractional position toward the
//! target and snaps when close enough, then writes the rounded offset
//! back into the scroll state. Manual scrolling cancels a pending glide.

use super::ScrollState;

/// Interpolation applied per tick
const LERP_FACTOR: f32 = 0.2;

/// Snap to the target when within this distance, avoiding an infinite
/// asymptotic approach
const SNAP_THRESHOLD: f32 = 0.5;

/// Animated glide toward a scroll destination
#[derive(Debug, Clone, Default)]
pub struct SmoothScroll {
    position: f32,
    target: Option<f32>,
}

impl SmoothScroll {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start gliding from the current offset to `target`
    pub fn glide_to(&mut self, scroll: &ScrollState, target: usize) {
        let clamped = target.min(scroll.max_scroll);
        self.position = scroll.offset as f32;
        self.target = Some(clamped as f32);
    }

    /// Abort the glide, leaving the offset wherever it is
    pub fn cancel(&mut self) {
        self.target = None;
    }

    pub fn is_gliding(&self) -> bool {
        self.target.is_some()
    }

    /// Advance the animation one tick
    ///
    /// Returns true while the glide is still moving (the caller should
    /// redraw). The final tick lands exactly on the target.
    pub fn tick(&mut self, scroll: &mut ScrollState) -> bool {
        let Some(target) = self.target else {
            return false;
        };
        // Bounds may have shrunk since the glide started
        let target = target.min(scroll.max_scroll as f32);

        self.position += (target - self.position) * LERP_FACTOR;
        if (target - self.position).abs() < SNAP_THRESHOLD {
            self.position = target;
            self.target = None;
        } else {
            self.target = Some(target);
        }

        scroll.scroll_to(self.position.round() as usize);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scroll(total: usize, viewport: usize) -> ScrollState {
        let mut s = ScrollState::new();
        s.update_bounds(total, viewport);
        s
    }

    #[test]
    fn test_glide_converges_on_target() {
        let mut scroll = scroll(500, 20);
        let mut glide = SmoothScroll::new();
        glide.glide_to(&scroll, 300);

        let mut ticks = 0;
        while glide.tick(&mut scroll) {
            ticks += 1;
            assert!(ticks < 200, "glide never settled");
        }
        assert_eq!(scroll.offset, 300);
        assert!(!glide.is_gliding());
    }

    #[test]
    fn test_glide_clamps_to_max_scroll() {
        let mut scroll = scroll(100, 20);
        let mut glide = SmoothScroll::new();
        glide.glide_to(&scroll, 5000);
        while glide.tick(&mut scroll) {}
        assert_eq!(scroll.offset, scroll.max_scroll);
    }

    #[test]
    fn test_cancel_stops_midway() {
        let mut scroll = scroll(500, 20);
        let mut glide = SmoothScroll::new();
        glide.glide_to(&scroll, 400);
        glide.tick(&mut scroll);
        let midway = scroll.offset;
        assert!(midway > 0 && midway < 400);

        glide.cancel();
        assert!(!glide.tick(&mut scroll));
        assert_eq!(scroll.offset, midway);
    }

    #[test]
    fn test_glide_upward() {
        let mut scroll = scroll(500, 20);
        scroll.scroll_to(400);
        let mut glide = SmoothScroll::new();
        glide.glide_to(&scroll, 50);
        while glide.tick(&mut scroll) {}
        assert_eq!(scroll.offset, 50);
    }
}
