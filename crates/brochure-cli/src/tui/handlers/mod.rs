//! Event handler implementations for App
//!
//! Split by concern: keyboard input, mouse input, per-tick updates.

mod keyboard;
mod mouse;
mod update;
