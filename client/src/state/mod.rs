pub mod inventory;
pub mod monitoring;
pub mod pools;
