//! Layout state - cached screen areas for hit testing
//!
//! Updated each frame during rendering, read by mouse handlers.

use ratatui::layout::Rect;

/// Cached layout areas from the last rendered frame
#[derive(Debug, Default)]
pub struct LayoutState {
    /// Page content area (below the navbar, above the status bar)
    pub content_area: Option<Rect>,
    /// Navbar area (overlays the top of the content)
    pub navbar_area: Option<Rect>,
    /// One rect per nav link, in link order
    pub nav_link_areas: Vec<Rect>,
    /// One rect per visible form field row, `(field_index, rect)`
    pub field_areas: Vec<(usize, Rect)>,
    /// Submit control rect, when visible
    pub submit_area: Option<Rect>,
    /// Scrollbar track area
    pub scrollbar_area: Option<Rect>,
}

impl LayoutState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget per-frame hit targets before a render pass
    pub fn clear_frame(&mut self) {
        self.nav_link_areas.clear();
        self.field_areas.clear();
        self.submit_area = None;
    }
}
