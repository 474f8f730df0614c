//! Items, plugin modules, and crafting tables

use serde::{Deserialize, Serialize};

use crate::core::types::{ItemId, SkillId, TagId};

/// An item type registered with the simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    /// Stable type name
    pub name: ItemId,
    /// Display name, also the localization key
    pub display_name: String,
    /// Hidden items are never exported
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub tags: Vec<TagId>,
    /// Present when the item can be attached to a crafting table
    #[serde(default)]
    pub module: Option<PluginModule>,
    /// Present when the item can host crafting
    #[serde(default)]
    pub crafting_table: Option<CraftingTable>,
}

impl Item {
    pub fn new(name: impl Into<ItemId>, display_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            hidden: false,
            tags: Vec::new(),
            module: None,
            crafting_table: None,
        }
    }

    pub fn with_tag(mut self, tag: impl Into<TagId>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn has_tag(&self, tag: &TagId) -> bool {
        self.tags.contains(tag)
    }
}

/// Efficiency bonus an item grants when attached to a crafting table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PluginModule {
    /// Multiplier used when the module has no skill
    pub generic_multiplier: f64,
    /// Skill that changes the module's effect, if any
    #[serde(default)]
    pub skill: Option<SkillId>,
    /// Multiplier used when `skill` is set
    #[serde(default)]
    pub skill_multiplier: f64,
}

impl PluginModule {
    pub fn generic(multiplier: f64) -> Self {
        Self {
            generic_multiplier: multiplier,
            ..Self::default()
        }
    }

    /// The effective percentage exported for this module
    pub fn percent(&self) -> f64 {
        if self.skill.is_some() {
            self.skill_multiplier
        } else {
            self.generic_multiplier
        }
    }
}

/// Crafting table component of an item
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CraftingTable {
    /// Attachments the table accepts; `None` when the table declares no list
    #[serde(default)]
    pub allowed_modules: Option<Vec<ModuleAttachment>>,
}

/// Something a crafting table accepts as a stackable attachment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleAttachment {
    /// One specific item type
    Item(ItemId),
    /// Any item type carrying the tag
    Tag(TagId),
}
