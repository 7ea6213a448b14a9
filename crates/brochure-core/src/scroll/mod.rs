//! Scroll-driven UI state
//!
//! Everything that reacts to the viewport's vertical position: the scroll
//! state itself, navbar styling, active-section tracking, anchor
//! resolution, and the smooth glide animation.

mod anchor;
mod navbar;
mod smooth;
mod state;
mod tracker;

pub use anchor::AnchorNavigator;
pub use navbar::{NavbarMode, NavbarStyle};
pub use smooth::SmoothScroll;
pub use state::ScrollState;
pub use tracker::ActiveSectionTracker;
