//! Craft Snapshot - crafting knowledge graph exporter
//!
//! Walks a simulation's skills, items, tags, and recipes and produces one
//! flat, localized JSON document for a read-only site.

pub mod core;
pub mod export;
pub mod localization;
pub mod model;
