//! Snapshot export engine
//!
//! A single synchronous pass: build the lookup index, project every entity,
//! filter, and serialize the root document.

pub mod assembler;
pub mod dynamic_value;
pub mod index;
pub mod projector;
pub mod records;
pub mod writer;

pub use assembler::{assemble_snapshot, export_snapshot, ExportSummary};
pub use dynamic_value::{resolve_quantity, ElementRole, ResolvedQuantity};
pub use index::ExportIndex;
pub use projector::Projector;
pub use records::{
    ElementExported, ExportedData, ItemExported, RecipeExported, SkillExported, TagExported,
};
pub use writer::{to_json, write_json, write_snapshot};
