//! Entity projection
//!
//! One mapping per entity kind, from the source model to its exported
//! record. Projection never mutates the source and fails fast on any
//! reference it cannot resolve.

use tracing::warn;

use crate::core::config::ExportConfig;
use crate::core::error::{ExportError, Result};
use crate::export::dynamic_value::{resolve_quantity, ElementRole, ResolvedQuantity};
use crate::export::index::ExportIndex;
use crate::export::records::{
    ElementExported, ItemExported, RecipeExported, SkillExported, TagExported,
};
use crate::localization::{localized_name, LocalizedName, Localizer};
use crate::model::{
    CraftingElement, IngredientElement, Item, ModuleAttachment, Recipe, RecipeFamily, Skill, Tag,
};

/// Everything a projection needs besides the entity itself
pub struct Projector<'a> {
    index: &'a ExportIndex<'a>,
    localizer: &'a dyn Localizer,
    config: &'a ExportConfig,
}

impl<'a> Projector<'a> {
    pub fn new(
        index: &'a ExportIndex<'a>,
        localizer: &'a dyn Localizer,
        config: &'a ExportConfig,
    ) -> Self {
        Self {
            index,
            localizer,
            config,
        }
    }

    fn localize(&self, key: &str) -> LocalizedName {
        localized_name(key, &self.config.locales, self.localizer)
    }

    pub fn skill(&self, skill: &Skill) -> Result<SkillExported> {
        let profession = skill
            .profession()
            .map(|id| self.index.skill(id).map(|s| s.display_name.clone()))
            .transpose()?;

        Ok(SkillExported {
            name: skill.name.to_string(),
            localized_name: self.localize(&skill.display_name),
            profession,
            labor_reduce_percent: skill.labor_reduce_percent.clone(),
            lavish_talent_value: self.lavish_talent_value(skill)?,
        })
    }

    /// Value of the first talent in the skill's first lavish workspace group
    fn lavish_talent_value(&self, skill: &Skill) -> Result<Option<f64>> {
        let mut groups = self
            .index
            .talent_groups_for(&skill.name, &self.config.lavish_marker);
        let Some(group) = groups.next() else {
            return Ok(None);
        };
        if let Some(ignored) = groups.next() {
            warn!(
                skill = %skill.name,
                chosen = %group.name,
                ignored = %ignored.name,
                "Skill owns several lavish workspace talent groups, using the first"
            );
        }

        group
            .talents
            .first()
            .map(|talent| self.index.talent_value(talent))
            .transpose()
    }

    pub fn item(&self, item: &Item) -> Result<ItemExported> {
        let module = item.module.as_ref();

        let (is_crafting_table, crafting_table_plugin_modules) =
            if self.index.is_crafting_table(&item.name) {
                (Some(true), self.table_modules(item)?)
            } else {
                (None, None)
            };

        Ok(ItemExported {
            name: item.name.to_string(),
            localized_name: self.localize(&item.display_name),
            is_plugin_module: module.map(|_| true),
            plugin_module_percent: module.map(|m| m.percent()),
            is_crafting_table,
            crafting_table_plugin_modules,
        })
    }

    /// Names of every item the table accepts as an attachment
    ///
    /// `None` when the table declares no attachment list at all.
    fn table_modules(&self, item: &Item) -> Result<Option<Vec<String>>> {
        let Some(attachments) = item
            .crafting_table
            .as_ref()
            .and_then(|t| t.allowed_modules.as_ref())
        else {
            return Ok(None);
        };

        let mut names = Vec::new();
        for attachment in attachments {
            match attachment {
                ModuleAttachment::Item(id) => {
                    let module = self.index.item(id)?;
                    if !module.hidden {
                        names.push(module.name.to_string());
                    }
                }
                ModuleAttachment::Tag(tag) => {
                    names.extend(
                        self.index
                            .items_with_tag(tag)
                            .iter()
                            .map(|i| i.name.to_string()),
                    );
                }
            }
        }
        Ok(Some(names))
    }

    pub fn tag(&self, tag: &Tag) -> TagExported {
        TagExported {
            name: tag.name.to_string(),
            localized_name: self.localize(&tag.display_name),
            associated_items: self
                .index
                .items_with_tag(&tag.name)
                .iter()
                .map(|i| i.name.to_string())
                .collect(),
        }
    }

    pub fn recipe(
        &self,
        family: &RecipeFamily,
        recipe: &Recipe,
        is_default: bool,
    ) -> Result<RecipeExported> {
        let name = recipe.identity(family);
        let table = self.index.item(&family.crafting_table)?;

        let (required_skill, required_skill_level) = match family.primary_skill() {
            Some(required) => (
                self.index.skill(&required.skill)?.display_name.clone(),
                required.level,
            ),
            None => (String::new(), 0),
        };

        let ingredients = recipe
            .ingredients
            .iter()
            .map(|e| self.ingredient(name, e))
            .collect::<Result<Vec<_>>>()?;
        let products = recipe
            .products
            .iter()
            .map(|e| self.product(e))
            .collect::<Result<Vec<_>>>()?;

        Ok(RecipeExported {
            name: name.to_string(),
            localized_name: self.localize(recipe.display_name(family)),
            family_name: family.name.clone(),
            craft_minutes: family.craft_minutes.base_value(),
            crafting_table: table.name.to_string(),
            labor: family.labor,
            required_skill,
            required_skill_level,
            is_blueprint: recipe.requires_unlock,
            is_default,
            ingredients,
            products,
        })
    }

    fn ingredient(&self, recipe: &str, element: &IngredientElement) -> Result<ElementExported> {
        let item_or_tag = match (&element.tag, &element.item) {
            (Some(tag), _) => tag.to_string(),
            (None, Some(item)) => self.index.item(item)?.name.to_string(),
            (None, None) => {
                return Err(ExportError::EmptyIngredient {
                    recipe: recipe.to_string(),
                })
            }
        };
        let quantity = resolve_quantity(&element.quantity, ElementRole::Ingredient, self.index)?;
        Ok(element_record(item_or_tag, quantity))
    }

    fn product(&self, element: &CraftingElement) -> Result<ElementExported> {
        let item = self.index.item(&element.item)?;
        let quantity = resolve_quantity(&element.quantity, ElementRole::Product, self.index)?;
        Ok(element_record(item.name.to_string(), quantity))
    }
}

fn element_record(item_or_tag: String, quantity: ResolvedQuantity) -> ElementExported {
    ElementExported {
        item_or_tag,
        quantity: quantity.base_value,
        is_dynamic: quantity.is_dynamic,
        skill: quantity.skill,
        lavish_talent: quantity.is_lavish,
    }
}
