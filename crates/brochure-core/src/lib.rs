//! Brochure Core - Page model and scroll-driven UI state
//!
//! This crate provides the headless logic behind the Brochure TUI:
//! - Page definitions loaded from TOML
//! - Section geometry and scroll state
//! - Navbar styling, active-section tracking, smooth anchor navigation
//! - Reveal-on-view transitions and the contact-form acknowledgment

pub mod constants;
pub mod error;
pub mod form;
pub mod nav;
pub mod page;
pub mod paths;
pub mod reveal;
pub mod scroll;

// Re-exports for convenience
pub use error::PageError;
pub use form::{AckState, ContactForm};
pub use nav::{NavLink, NavModel, NavTarget};
pub use page::{PageDef, PageLayout, SectionBand, SectionDef};
pub use reveal::{Reveal, RevealPhase, RevealSet};
pub use scroll::{
    ActiveSectionTracker, AnchorNavigator, NavbarMode, NavbarStyle, ScrollState, SmoothScroll,
};
