//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod analytics;
pub mod cards;
pub mod filters;
pub mod footer;
pub mod header;
pub mod logs;
pub mod stats;
pub mod table;
