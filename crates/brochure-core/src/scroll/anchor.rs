//! Anchor navigation
//!
//! Resolves an in-page fragment to the scroll destination that puts the
//! section's heading just below the fixed navbar. Unknown fragments
//! resolve to nothing: activation becomes a silent no-op.

use crate::page::PageLayout;

/// Fragment-to-offset resolution for nav link activation
#[derive(Debug, Clone)]
pub struct AnchorNavigator {
    navbar_height: usize,
}

impl AnchorNavigator {
    pub fn new(navbar_height: usize) -> Self {
        Self { navbar_height }
    }

    /// Destination offset for a fragment: section top minus navbar height,
    /// so the heading clears the bar. None when no section matches.
    pub fn destination(&self, layout: &PageLayout, fragment: &str) -> Option<usize> {
        layout
            .section_top(fragment)
            .map(|top| top.saturating_sub(self.navbar_height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> PageLayout {
        PageLayout::stack([("home".to_string(), 100), ("pricing".to_string(), 200)])
    }

    #[test]
    fn test_destination_clears_navbar() {
        let anchor = AnchorNavigator::new(8);
        assert_eq!(anchor.destination(&layout(), "pricing"), Some(92));
    }

    #[test]
    fn test_first_section_saturates_at_top() {
        let anchor = AnchorNavigator::new(8);
        assert_eq!(anchor.destination(&layout(), "home"), Some(0));
    }

    #[test]
    fn test_unknown_fragment_is_none() {
        let anchor = AnchorNavigator::new(8);
        assert_eq!(anchor.destination(&layout(), "careers"), None);
    }
}
