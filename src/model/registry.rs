//! Game data registry and world definition loading
//!
//! `GameData` is the read-only view of the simulation the exporter works
//! from: ordered collections of every skill, item, tag, talent, and recipe
//! family. The host fills it directly, or it can be parsed from a TOML world
//! definition that also carries translation tables.

use std::fmt::Display;
use std::hash::Hash;
use std::path::Path;

use ahash::{AHashMap, AHashSet};
use serde::Deserialize;

use crate::core::error::{ExportError, Result};
use crate::core::types::{ItemId, SkillId, TagId, TalentId};
use crate::localization::DictionaryLocalizer;
use crate::model::item::{Item, ModuleAttachment};
use crate::model::quantity::DynamicValue;
use crate::model::recipe::RecipeFamily;
use crate::model::skill::{Skill, Talent, TalentGroup};
use crate::model::tag::Tag;

/// Every entity collection the exporter reads, in enumeration order
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GameData {
    pub skills: Vec<Skill>,
    pub items: Vec<Item>,
    pub tags: Vec<Tag>,
    pub talent_groups: Vec<TalentGroup>,
    pub talents: Vec<Talent>,
    pub recipe_families: Vec<RecipeFamily>,
}

impl GameData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that every reference resolves and every family is well formed
    ///
    /// All problems are collected rather than stopping at the first one.
    pub fn validate(&self) -> Result<()> {
        let skills: AHashSet<&SkillId> = self.skills.iter().map(|s| &s.name).collect();
        let items: AHashSet<&ItemId> = self.items.iter().map(|i| &i.name).collect();
        let tags: AHashSet<&TagId> = self.tags.iter().map(|t| &t.name).collect();
        let talents: AHashSet<&TalentId> = self.talents.iter().map(|t| &t.name).collect();

        let mut errors = Vec::new();

        report_duplicates("skill", self.skills.iter().map(|s| &s.name), &mut errors);
        report_duplicates("item", self.items.iter().map(|i| &i.name), &mut errors);
        report_duplicates("tag", self.tags.iter().map(|t| &t.name), &mut errors);
        report_duplicates("talent", self.talents.iter().map(|t| &t.name), &mut errors);

        for skill in &self.skills {
            for prerequisite in &skill.prerequisites {
                if !skills.contains(prerequisite) {
                    errors.push(format!(
                        "skill {} requires unknown skill {}",
                        skill.name, prerequisite
                    ));
                }
            }
        }

        for item in &self.items {
            for tag in &item.tags {
                if !tags.contains(tag) {
                    errors.push(format!("item {} carries unknown tag {}", item.name, tag));
                }
            }
            if let Some(skill) = item.module.as_ref().and_then(|m| m.skill.as_ref()) {
                if !skills.contains(skill) {
                    errors.push(format!("module {} uses unknown skill {}", item.name, skill));
                }
            }
            let attachments = item
                .crafting_table
                .as_ref()
                .and_then(|t| t.allowed_modules.as_deref())
                .unwrap_or_default();
            for attachment in attachments {
                match attachment {
                    ModuleAttachment::Item(id) if !items.contains(id) => errors.push(format!(
                        "table {} accepts unknown item {}",
                        item.name, id
                    )),
                    ModuleAttachment::Tag(id) if !tags.contains(id) => errors.push(format!(
                        "table {} accepts unknown tag {}",
                        item.name, id
                    )),
                    _ => {}
                }
            }
        }

        for group in &self.talent_groups {
            if !skills.contains(&group.owner) {
                errors.push(format!(
                    "talent group {} is owned by unknown skill {}",
                    group.name, group.owner
                ));
            }
            for talent in &group.talents {
                if !talents.contains(talent) {
                    errors.push(format!(
                        "talent group {} offers unknown talent {}",
                        group.name, talent
                    ));
                }
            }
        }

        for family in &self.recipe_families {
            if family.recipes.is_empty() {
                errors.push(format!("recipe family {} has no recipes", family.name));
            } else if family.default_recipe >= family.recipes.len() {
                errors.push(format!(
                    "recipe family {} has default index {} but only {} recipes",
                    family.name,
                    family.default_recipe,
                    family.recipes.len()
                ));
            }
            if !items.contains(&family.crafting_table) {
                errors.push(format!(
                    "recipe family {} uses unknown crafting table {}",
                    family.name, family.crafting_table
                ));
            }
            for required in &family.required_skills {
                if !skills.contains(&required.skill) {
                    errors.push(format!(
                        "recipe family {} requires unknown skill {}",
                        family.name, required.skill
                    ));
                }
            }

            let mut quantities: Vec<&DynamicValue> = vec![&family.craft_minutes];
            for recipe in &family.recipes {
                let recipe_name = recipe.identity(family);
                for ingredient in &recipe.ingredients {
                    match (&ingredient.tag, &ingredient.item) {
                        (Some(tag), _) if !tags.contains(tag) => errors.push(format!(
                            "recipe {} uses unknown tag {}",
                            recipe_name, tag
                        )),
                        (None, Some(item)) if !items.contains(item) => errors.push(format!(
                            "recipe {} uses unknown item {}",
                            recipe_name, item
                        )),
                        (None, None) => errors.push(format!(
                            "recipe {} has an ingredient with neither item nor tag",
                            recipe_name
                        )),
                        _ => {}
                    }
                    quantities.push(&ingredient.quantity);
                }
                for product in &recipe.products {
                    if !items.contains(&product.item) {
                        errors.push(format!(
                            "recipe {} produces unknown item {}",
                            recipe_name, product.item
                        ));
                    }
                    quantities.push(&product.quantity);
                }
            }

            for skill in quantities.into_iter().flat_map(|q| q.skill_refs()) {
                if !skills.contains(skill) {
                    errors.push(format!(
                        "recipe family {} scales by unknown skill {}",
                        family.name, skill
                    ));
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ExportError::InvalidWorld(errors))
        }
    }
}

/// Push one problem per repeated identity, after its first occurrence
fn report_duplicates<'a, T>(
    kind: &str,
    names: impl IntoIterator<Item = &'a T>,
    errors: &mut Vec<String>,
) where
    T: Eq + Hash + Display + 'a,
{
    let mut seen = AHashSet::new();
    for name in names {
        if !seen.insert(name) {
            errors.push(format!("{} {} is defined more than once", kind, name));
        }
    }
}

/// TOML representation of a world: game data plus translations
#[derive(Debug, Default, Deserialize)]
pub struct WorldDefinition {
    #[serde(flatten)]
    pub data: GameData,
    /// culture -> (display name -> translation)
    #[serde(default)]
    pub translations: AHashMap<String, AHashMap<String, String>>,
}

impl WorldDefinition {
    /// Load a world definition from a TOML file
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }

    /// Parse a world definition from a TOML string
    pub fn parse_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Split into the game data and a localizer over its translations
    pub fn into_parts(self) -> (GameData, DictionaryLocalizer) {
        (self.data, DictionaryLocalizer::from_tables(self.translations))
    }
}
