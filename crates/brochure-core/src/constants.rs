//! Fixed values of the page-interaction contract
//!
//! Components take explicit values at construction; these are the defaults.
//! Geometry values are in layout units (pixels on the web, rows in a
//! terminal); callers working at a coarser granularity pass scaled values.

use std::time::Duration;

/// Scroll distance after which the navbar switches to its scrolled style
pub const NAVBAR_SCROLL_THRESHOLD: usize = 50;

/// Look-ahead margin added to the reference point when deciding which
/// section is current (keeps the highlight slightly ahead of the fold)
pub const SECTION_LOOKAHEAD: usize = 100;

/// Fraction of a revealable's height that must be visible to trigger it
pub const REVEAL_VISIBILITY: f32 = 0.10;

/// Distance before geometric viewport entry at which a revealable
/// already counts as in view
pub const REVEAL_MARGIN: usize = 50;

/// Duration of the hidden-to-revealed transition
pub const REVEAL_DURATION: Duration = Duration::from_millis(600);

/// How long the form acknowledgment stays up before the submit control
/// reverts to its original label
pub const ACK_DURATION: Duration = Duration::from_millis(3000);
