//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (loading, dialogs, persistence)
//! and delegates rendering details to `components`.

pub mod monitoring;
pub mod resource_pools;
