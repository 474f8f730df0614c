//! Export integration tests
//!
//! Drives the public API end to end: world definition in, JSON document out.

use std::path::Path;

use craft_snapshot::core::config::ExportConfig;
use craft_snapshot::core::error::ExportError;
use craft_snapshot::core::types::{ItemId, SkillId};
use craft_snapshot::export::{assemble_snapshot, export_snapshot, to_json};
use craft_snapshot::localization::{DictionaryLocalizer, LocaleTable};
use craft_snapshot::model::*;
use serde_json::{json, Value};

fn english_only() -> ExportConfig {
    ExportConfig {
        locales: LocaleTable::from_pairs([("en-US", "en"), ("en-GB", "en")]),
        ..ExportConfig::default()
    }
}

fn load_sample_world() -> (GameData, DictionaryLocalizer) {
    WorldDefinition::load_file(Path::new("data/sample_world.toml"))
        .expect("sample world should parse")
        .into_parts()
}

fn export_value(data: &GameData, localizer: &DictionaryLocalizer, config: &ExportConfig) -> Value {
    let snapshot = assemble_snapshot(data, localizer, config).unwrap();
    serde_json::from_str(&to_json(&snapshot, true).unwrap()).unwrap()
}

/// Plank family: constant Wood ingredient, Carpentry-scaled Plank product
fn plank_world() -> GameData {
    let mut data = GameData::new();
    data.skills.push(Skill::new("CarpentrySkill", "Carpentry"));
    data.items.push(Item::new("Wood", "Wood"));
    data.items.push(Item::new("Plank", "Plank"));
    data.items.push(Item::new("Workbench", "Workbench"));
    data.recipe_families.push(RecipeFamily {
        name: "PlankRecipe".into(),
        display_name: "Plank".into(),
        craft_minutes: DynamicValue::constant(1.0),
        labor: 20.0,
        crafting_table: ItemId::new("Workbench"),
        required_skills: vec![RequiredSkill {
            skill: SkillId::new("CarpentrySkill"),
            level: 1,
        }],
        recipes: vec![Recipe {
            ingredients: vec![IngredientElement::item("Wood", DynamicValue::constant(4.0))],
            products: vec![CraftingElement::new(
                "Plank",
                DynamicValue::skill_scaled(2.0, "CarpentrySkill"),
            )],
            ..Recipe::default()
        }],
        default_recipe: 0,
    });
    data
}

#[test]
fn test_plank_recipe_scenario() {
    let value = export_value(&plank_world(), &DictionaryLocalizer::new(), &english_only());
    let recipe = &value["Recipes"][0];

    assert_eq!(recipe["Name"], "PlankRecipe");
    assert_eq!(recipe["IsDefault"], true);
    assert_eq!(
        recipe["Ingredients"],
        json!([{
            "ItemOrTag": "Wood",
            "Quantity": 4.0,
            "IsDynamic": false,
            "Skill": "",
            "LavishTalent": false
        }])
    );
    assert_eq!(
        recipe["Products"],
        json!([{
            "ItemOrTag": "Plank",
            "Quantity": 2.0,
            "IsDynamic": true,
            "Skill": "Carpentry",
            "LavishTalent": false
        }])
    );
    assert_eq!(recipe["RequiredSkill"], "Carpentry");
    assert_eq!(recipe["CraftingTable"], "Workbench");
}

#[test]
fn test_module_that_is_also_a_bare_crafting_table() {
    let mut data = plank_world();
    let bench = data
        .items
        .iter_mut()
        .find(|i| i.name == ItemId::new("Workbench"))
        .unwrap();
    bench.module = Some(PluginModule::generic(0.1));
    bench.crafting_table = Some(CraftingTable::default());

    let value = export_value(&data, &DictionaryLocalizer::new(), &english_only());
    let bench = value["Items"]
        .as_array()
        .unwrap()
        .iter()
        .find(|i| i["Name"] == "Workbench")
        .unwrap();

    assert_eq!(bench["IsPluginModule"], true);
    assert_eq!(bench["PluginModulePercent"], 0.1);
    assert_eq!(bench["IsCraftingTable"], true);
    assert!(bench.get("CraftingTablePluginModules").is_none());
}

#[test]
fn test_sample_world_counts_and_filters() {
    let (data, localizer) = load_sample_world();
    let snapshot = assemble_snapshot(&data, &localizer, &ExportConfig::default()).unwrap();

    assert_eq!(snapshot.skills.len(), 5);
    assert_eq!(snapshot.items.len(), 9);
    assert!(snapshot.items.iter().all(|i| i.name != "DebugLogItem"));

    let tags: Vec<&str> = snapshot.tags.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(tags, vec!["Wood", "Vegetable", "Upgrade"]);
    let wood = &snapshot.tags[0];
    assert_eq!(wood.associated_items, vec!["LogItem", "BirchLogItem"]);

    assert_eq!(snapshot.recipes.len(), 3);
    for family in ["BoardRecipe", "BeetSaladRecipe"] {
        let defaults = snapshot
            .recipes
            .iter()
            .filter(|r| r.family_name == family && r.is_default)
            .count();
        assert_eq!(defaults, 1, "family {} should have one default", family);
    }
}

#[test]
fn test_sample_world_skills() {
    let (data, localizer) = load_sample_world();
    let snapshot = assemble_snapshot(&data, &localizer, &ExportConfig::default()).unwrap();

    let carpentry = snapshot
        .skills
        .iter()
        .find(|s| s.name == "CarpentrySkill")
        .unwrap();
    assert_eq!(carpentry.profession.as_deref(), Some("Carpenter"));
    assert_eq!(carpentry.lavish_talent_value, Some(0.95));
    assert_eq!(carpentry.labor_reduce_percent.len(), 8);
    assert_eq!(carpentry.localized_name["fr"], "Menuiserie");
    assert_eq!(carpentry.localized_name["de"], "Tischlerei");
    assert_eq!(carpentry.localized_name["en"], "Carpentry");

    let expected_cultures = ExportConfig::default().locales.cultures().len();
    assert_eq!(carpentry.localized_name.len(), expected_cultures);

    let cooking = snapshot.skills.iter().find(|s| s.name == "CookingSkill").unwrap();
    assert!(cooking.lavish_talent_value.is_none());
}

#[test]
fn test_sample_world_items_and_recipes() {
    let (data, localizer) = load_sample_world();
    let snapshot = assemble_snapshot(&data, &localizer, &english_only()).unwrap();

    let table = snapshot
        .items
        .iter()
        .find(|i| i.name == "CarpentryTableItem")
        .unwrap();
    assert_eq!(table.is_crafting_table, Some(true));
    assert_eq!(
        table.crafting_table_plugin_modules.as_deref(),
        Some(
            &[
                "BasicUpgradeItem".to_string(),
                "AdvancedUpgradeItem".to_string(),
                "BoardItem".to_string(),
            ][..]
        )
    );

    let advanced = snapshot
        .items
        .iter()
        .find(|i| i.name == "AdvancedUpgradeItem")
        .unwrap();
    assert_eq!(advanced.plugin_module_percent, Some(0.25));
    assert!(advanced.is_crafting_table.is_none());

    let birch = snapshot
        .recipes
        .iter()
        .find(|r| r.name == "BoardFromBirchRecipe")
        .unwrap();
    assert!(birch.is_blueprint);
    assert!(!birch.is_default);
    assert_eq!(birch.family_name, "BoardRecipe");
    assert_eq!(birch.craft_minutes, 0.5);
    let lavish = &birch.ingredients[0];
    assert_eq!(lavish.item_or_tag, "BirchLogItem");
    assert!(lavish.is_dynamic);
    assert!(lavish.lavish_talent);
    assert_eq!(lavish.skill, "Carpentry");

    let salad = snapshot
        .recipes
        .iter()
        .find(|r| r.name == "BeetSaladRecipe")
        .unwrap();
    assert_eq!(salad.required_skill, "Cooking");
    assert_eq!(salad.required_skill_level, 2);
    assert_eq!(salad.ingredients[0].item_or_tag, "Vegetable");
    assert_eq!(salad.localized_name["en"], "Beet Salad");
}

#[test]
fn test_export_writes_file_deterministically() {
    let (data, localizer) = load_sample_world();
    let dir = tempfile::tempdir().unwrap();
    let config = ExportConfig {
        output_path: dir.path().join("exported_data.json"),
        ..ExportConfig::default()
    };

    let first = export_snapshot(&data, &localizer, &config).unwrap();
    let first_bytes = std::fs::read(&config.output_path).unwrap();
    let second = export_snapshot(&data, &localizer, &config).unwrap();
    let second_bytes = std::fs::read(&config.output_path).unwrap();

    assert_eq!(first, second);
    assert_eq!(first_bytes, second_bytes);
    assert_eq!(first.bytes_written, first_bytes.len());

    let text = String::from_utf8(first_bytes).unwrap();
    assert!(!text.contains("null"));
    let root: Value = serde_json::from_str(&text).unwrap();
    let keys: Vec<&String> = root.as_object().unwrap().keys().collect();
    assert_eq!(keys.len(), 4);
}

#[test]
fn test_root_key_order_in_text() {
    let (data, localizer) = load_sample_world();
    let snapshot = assemble_snapshot(&data, &localizer, &english_only()).unwrap();
    let text = to_json(&snapshot, false).unwrap();

    let positions: Vec<usize> = ["\"Skills\"", "\"Items\"", "\"Tags\"", "\"Recipes\""]
        .iter()
        .map(|k| text.find(k).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_lavish_without_leading_skill_term_fails() {
    let mut data = plank_world();
    data.recipe_families[0].recipes[0].products[0].quantity = DynamicValue::LavishCombination {
        base: 2.0,
        terms: vec![
            DynamicValue::constant(0.9),
            DynamicValue::skill_scaled(2.0, "CarpentrySkill"),
        ],
    };

    let result = assemble_snapshot(&data, &DictionaryLocalizer::new(), &english_only());
    assert!(matches!(
        result,
        Err(ExportError::LavishWithoutSkillTerm { .. })
    ));
}

#[test]
fn test_unwritable_sink_is_fatal() {
    let (data, localizer) = load_sample_world();
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "not a directory").unwrap();

    let config = ExportConfig {
        output_path: blocker.join("exported_data.json"),
        ..ExportConfig::default()
    };
    let result = export_snapshot(&data, &localizer, &config);
    assert!(matches!(result, Err(ExportError::IoError(_))));
}
