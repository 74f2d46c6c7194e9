//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the voyage form, per-row detail popovers, and toasts.
//! They receive state and the notification port as props from the page.

pub mod create_voyage_sheet;
pub mod toast_region;
pub mod unit_types_popover;
