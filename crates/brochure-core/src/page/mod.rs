//! Page model
//!
//! A page is data: a TOML definition (what the page says) plus a computed
//! layout (where each section sits once rendered at some width).

mod definition;
mod layout;

pub use definition::{FormDef, NavLinkDef, PageDef, SectionDef};
pub use layout::{PageLayout, SectionBand};
