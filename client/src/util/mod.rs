//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic so the pure parts stay testable natively.

pub mod latency;
pub mod overlay;
pub mod usage;
