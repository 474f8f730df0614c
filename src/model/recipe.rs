//! Recipe families and their variants
//!
//! A family groups alternative recipes that share a crafting table, labor
//! cost, and skill requirement. One variant is designated the default.

use serde::{Deserialize, Serialize};

use crate::core::types::{ItemId, SkillId, TagId};
use crate::model::quantity::DynamicValue;

/// A group of recipe variants crafted at the same table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeFamily {
    /// Stable type name
    pub name: String,
    /// Display name, used for variants that have none of their own
    pub display_name: String,
    /// Craft duration in minutes
    pub craft_minutes: DynamicValue,
    /// Labor cost in calories
    #[serde(default)]
    pub labor: f64,
    /// Item that hosts the crafting action
    pub crafting_table: ItemId,
    /// Required skills; only the first one is exported
    #[serde(default)]
    pub required_skills: Vec<RequiredSkill>,
    /// Variants, at least one
    pub recipes: Vec<Recipe>,
    /// Index into `recipes` of the default variant
    #[serde(default)]
    pub default_recipe: usize,
}

impl RecipeFamily {
    pub fn primary_skill(&self) -> Option<&RequiredSkill> {
        self.required_skills.first()
    }

    pub fn default_variant(&self) -> Option<&Recipe> {
        self.recipes.get(self.default_recipe)
    }

    pub fn is_default(&self, index: usize) -> bool {
        index == self.default_recipe
    }
}

/// Skill level a family requires
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequiredSkill {
    pub skill: SkillId,
    #[serde(default)]
    pub level: u32,
}

/// One recipe variant
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Recipe {
    /// Own type name; `None` for the family's generic shape
    #[serde(default)]
    pub name: Option<String>,
    /// Display name; falls back to the family's
    #[serde(default)]
    pub display_name: Option<String>,
    /// Needs a blueprint or other special unlock
    #[serde(default)]
    pub requires_unlock: bool,
    #[serde(default)]
    pub ingredients: Vec<IngredientElement>,
    #[serde(default)]
    pub products: Vec<CraftingElement>,
}

impl Recipe {
    /// Exported identity: own name, or the family's for the generic shape
    pub fn identity<'a>(&'a self, family: &'a RecipeFamily) -> &'a str {
        self.name.as_deref().unwrap_or(&family.name)
    }

    pub fn display_name<'a>(&'a self, family: &'a RecipeFamily) -> &'a str {
        self.display_name.as_deref().unwrap_or(&family.display_name)
    }
}

/// A recipe input
///
/// An ingredient may name a tag to mean "any item carrying this tag". When
/// both are present the tag wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientElement {
    #[serde(default)]
    pub item: Option<ItemId>,
    #[serde(default)]
    pub tag: Option<TagId>,
    pub quantity: DynamicValue,
}

impl IngredientElement {
    pub fn item(item: impl Into<ItemId>, quantity: DynamicValue) -> Self {
        Self {
            item: Some(item.into()),
            tag: None,
            quantity,
        }
    }

    pub fn tag(tag: impl Into<TagId>, quantity: DynamicValue) -> Self {
        Self {
            item: None,
            tag: Some(tag.into()),
            quantity,
        }
    }
}

/// A recipe output; always a concrete item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CraftingElement {
    pub item: ItemId,
    pub quantity: DynamicValue,
}

impl CraftingElement {
    pub fn new(item: impl Into<ItemId>, quantity: DynamicValue) -> Self {
        Self {
            item: item.into(),
            quantity,
        }
    }
}
