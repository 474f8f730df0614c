//! Source data model
//!
//! The simulation's crafting knowledge graph as the exporter sees it. These
//! types are owned by the host and never mutated during an export.

pub mod item;
pub mod quantity;
pub mod recipe;
pub mod registry;
pub mod skill;
pub mod tag;

pub use item::{CraftingTable, Item, ModuleAttachment, PluginModule};
pub use quantity::DynamicValue;
pub use recipe::{CraftingElement, IngredientElement, Recipe, RecipeFamily, RequiredSkill};
pub use registry::{GameData, WorldDefinition};
pub use skill::{Skill, Talent, TalentGroup};
pub use tag::Tag;
