//! Navbar style controller
//!
//! Toggles the navbar between its default and scrolled styles based on a
//! fixed scroll-distance threshold. Evaluated once at startup (the page
//! may open already scrolled) and on every scroll tick.

use crate::constants::NAVBAR_SCROLL_THRESHOLD;

/// Visual mode of the navbar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavbarMode {
    #[default]
    Default,
    Scrolled,
}

/// Threshold-driven navbar mode
#[derive(Debug, Clone)]
pub struct NavbarStyle {
    threshold: usize,
    mode: NavbarMode,
}

impl NavbarStyle {
    pub fn new(threshold: usize) -> Self {
        Self {
            threshold,
            mode: NavbarMode::Default,
        }
    }

    /// Re-evaluate the mode for the given offset
    ///
    /// Scrolled iff `offset > threshold`; exactly at the threshold is
    /// still Default. Idempotent: repeated calls with the same offset
    /// settle on the same mode. Returns true if the mode changed.
    pub fn update(&mut self, offset: usize) -> bool {
        let mode = if offset > self.threshold {
            NavbarMode::Scrolled
        } else {
            NavbarMode::Default
        };
        if mode != self.mode {
            self.mode = mode;
            tracing::debug!(?mode, offset, "Navbar mode changed");
            true
        } else {
            false
        }
    }

    pub fn mode(&self) -> NavbarMode {
        self.mode
    }
}

impl Default for NavbarStyle {
    fn default() -> Self {
        Self::new(NAVBAR_SCROLL_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundary() {
        let mut navbar = NavbarStyle::new(50);
        navbar.update(50);
        assert_eq!(navbar.mode(), NavbarMode::Default);
        navbar.update(51);
        assert_eq!(navbar.mode(), NavbarMode::Scrolled);
        navbar.update(0);
        assert_eq!(navbar.mode(), NavbarMode::Default);
    }

    #[test]
    fn test_update_is_idempotent() {
        let mut navbar = NavbarStyle::new(50);
        assert!(navbar.update(120));
        // Same offset again: same mode, no change reported
        assert!(!navbar.update(120));
        assert_eq!(navbar.mode(), NavbarMode::Scrolled);
    }

    #[test]
    fn test_starts_default_until_evaluated() {
        let navbar = NavbarStyle::default();
        assert_eq!(navbar.mode(), NavbarMode::Default);
    }
}
