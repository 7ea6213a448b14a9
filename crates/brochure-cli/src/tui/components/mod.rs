//! Reusable TUI components

pub mod contact_form;
pub mod navbar;
pub mod page_view;
pub mod scrollbar;
pub mod status_bar;
