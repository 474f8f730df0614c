//! Exported record types
//!
//! Flat, serializable records consumed by the site. Field order here is the
//! field order in the JSON document, and absent optional fields are omitted.

use serde::{Deserialize, Serialize};

use crate::localization::LocalizedName;

/// Root document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExportedData {
    pub skills: Vec<SkillExported>,
    pub items: Vec<ItemExported>,
    pub tags: Vec<TagExported>,
    pub recipes: Vec<RecipeExported>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SkillExported {
    pub name: String,
    pub localized_name: LocalizedName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profession: Option<String>,
    pub labor_reduce_percent: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lavish_talent_value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ItemExported {
    pub name: String,
    pub localized_name: LocalizedName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_plugin_module: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugin_module_percent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_crafting_table: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crafting_table_plugin_modules: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TagExported {
    pub name: String,
    pub localized_name: LocalizedName,
    pub associated_items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecipeExported {
    pub name: String,
    pub localized_name: LocalizedName,
    pub family_name: String,
    pub craft_minutes: f64,
    pub crafting_table: String,
    pub labor: f64,
    pub required_skill: String,
    pub required_skill_level: u32,
    pub is_blueprint: bool,
    pub is_default: bool,
    pub ingredients: Vec<ElementExported>,
    pub products: Vec<ElementExported>,
}

/// One ingredient or product line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ElementExported {
    pub item_or_tag: String,
    pub quantity: f64,
    pub is_dynamic: bool,
    /// Empty for constants and for ingredients scaled by the abstract skill
    pub skill: String,
    pub lavish_talent: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_field_order() {
        let json = serde_json::to_string(&ExportedData::default()).unwrap();
        assert_eq!(json, r#"{"Skills":[],"Items":[],"Tags":[],"Recipes":[]}"#);
    }

    #[test]
    fn test_absent_item_fields_are_omitted() {
        let item = ItemExported {
            name: "LogItem".into(),
            localized_name: LocalizedName::new(),
            is_plugin_module: None,
            plugin_module_percent: None,
            is_crafting_table: None,
            crafting_table_plugin_modules: None,
        };
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"Name":"LogItem","LocalizedName":{}}"#);
        assert!(!json.contains("null"));
    }

    #[test]
    fn test_constant_element_keeps_empty_skill() {
        let element = ElementExported {
            item_or_tag: "LogItem".into(),
            quantity: 4.0,
            is_dynamic: false,
            skill: String::new(),
            lavish_talent: false,
        };
        let json = serde_json::to_string(&element).unwrap();
        assert_eq!(
            json,
            r#"{"ItemOrTag":"LogItem","Quantity":4.0,"IsDynamic":false,"Skill":"","LavishTalent":false}"#
        );
    }
}
