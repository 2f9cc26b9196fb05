//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render console chrome and overlay panels. Inventory is read
//! through the repository handle in Leptos context; overlay side effects go
//! through the shared `OverlaySurface`.

pub mod badge;
pub mod custom_select;
pub mod drawer;
pub mod manage_pool_drawer;
pub mod monitoring_chart;
pub mod pool_detail_drawer;
pub mod stat_card;
pub mod usage_bar;
