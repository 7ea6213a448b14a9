//! Scroll state - viewport offset tracking
//!
//! Owns the current offset, its upper bound, and the viewport height.
//! Derived each tick from content geometry; nothing here persists.

/// Scroll position for the page view
#[derive(Debug, Clone, Default)]
pub struct ScrollState {
    /// Current scroll offset (0 = top, max_scroll = bottom)
    pub offset: usize,
    /// Maximum scroll offset for bounds checking
    pub max_scroll: usize,
    /// Height of the visible area in lines
    pub viewport_height: usize,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scroll up by the given amount
    pub fn scroll_up(&mut self, amount: usize) {
        self.offset = self.offset.saturating_sub(amount);
    }

    /// Scroll down by the given amount
    pub fn scroll_down(&mut self, amount: usize) {
        self.offset = self.offset.saturating_add(amount).min(self.max_scroll);
    }

    /// Jump to a specific offset, clamped to bounds
    pub fn scroll_to(&mut self, offset: usize) {
        self.offset = offset.min(self.max_scroll);
    }

    /// Jump to the top of the page
    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    /// Jump to the bottom of the page
    pub fn scroll_to_end(&mut self) {
        self.offset = self.max_scroll;
    }

    /// Update bounds after a layout or resize change
    ///
    /// Clamps the current offset into the new valid range.
    pub fn update_bounds(&mut self, total_lines: usize, viewport_height: usize) {
        self.viewport_height = viewport_height;
        self.max_scroll = total_lines.saturating_sub(viewport_height);
        if self.offset > self.max_scroll {
            self.offset = self.max_scroll;
        }
    }

    /// Check if can scroll up (not at top)
    pub fn can_scroll_up(&self) -> bool {
        self.offset > 0
    }

    /// Check if can scroll down (not at bottom)
    pub fn can_scroll_down(&self) -> bool {
        self.offset < self.max_scroll
    }

    /// Check if a scrollbar is needed (content exceeds viewport)
    pub fn needs_scrollbar(&self) -> bool {
        self.max_scroll > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_clamps_to_bounds() {
        let mut scroll = ScrollState::new();
        scroll.update_bounds(100, 20);
        assert_eq!(scroll.max_scroll, 80);

        scroll.scroll_down(200);
        assert_eq!(scroll.offset, 80);

        scroll.scroll_up(200);
        assert_eq!(scroll.offset, 0);
    }

    #[test]
    fn test_bounds_shrink_clamps_offset() {
        let mut scroll = ScrollState::new();
        scroll.update_bounds(100, 20);
        scroll.scroll_to(80);

        // Taller viewport after a resize, less room to scroll
        scroll.update_bounds(100, 60);
        assert_eq!(scroll.offset, 40);
    }

    #[test]
    fn test_short_content_never_scrolls() {
        let mut scroll = ScrollState::new();
        scroll.update_bounds(10, 20);
        assert_eq!(scroll.max_scroll, 0);
        assert!(!scroll.needs_scrollbar());
        scroll.scroll_down(5);
        assert_eq!(scroll.offset, 0);
    }
}
