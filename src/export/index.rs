//! Read-only lookup indexes for one export run
//!
//! Built once from `GameData` before any projection, then shared by every
//! projector. Nothing here outlives the run.

use ahash::{AHashMap, AHashSet};
use tracing::debug;

use crate::core::error::{ExportError, Result};
use crate::core::types::{ItemId, SkillId, TagId, TalentId};
use crate::model::{GameData, Item, Skill, TalentGroup};

pub struct ExportIndex<'a> {
    skills: AHashMap<&'a SkillId, &'a Skill>,
    items: AHashMap<&'a ItemId, &'a Item>,
    /// Non-hidden items per tag, in item enumeration order
    tag_members: AHashMap<&'a TagId, Vec<&'a Item>>,
    /// Items used as the crafting table of at least one family
    crafting_tables: AHashSet<&'a ItemId>,
    talent_values: AHashMap<&'a TalentId, f64>,
    talent_groups: &'a [TalentGroup],
}

impl<'a> ExportIndex<'a> {
    pub fn build(data: &'a GameData) -> Self {
        let skills = data.skills.iter().map(|s| (&s.name, s)).collect();
        let items = data.items.iter().map(|i| (&i.name, i)).collect();

        let mut tag_members: AHashMap<&TagId, Vec<&Item>> = AHashMap::new();
        for item in data.items.iter().filter(|i| !i.hidden) {
            // An item joins each tag once, however often the tag is listed
            let mut seen: AHashSet<&TagId> = AHashSet::new();
            for tag in item.tags.iter().filter(|t| seen.insert(*t)) {
                tag_members.entry(tag).or_default().push(item);
            }
        }

        let crafting_tables = data
            .recipe_families
            .iter()
            .map(|f| &f.crafting_table)
            .collect();

        let talent_values = data.talents.iter().map(|t| (&t.name, t.value)).collect();

        let index = Self {
            skills,
            items,
            tag_members,
            crafting_tables,
            talent_values,
            talent_groups: &data.talent_groups,
        };
        debug!(
            skills = index.skills.len(),
            items = index.items.len(),
            tags_in_use = index.tag_members.len(),
            crafting_tables = index.crafting_tables.len(),
            "Built export index"
        );
        index
    }

    pub fn skill(&self, id: &SkillId) -> Result<&'a Skill> {
        self.skills
            .get(id)
            .copied()
            .ok_or_else(|| ExportError::UnknownSkill(id.clone()))
    }

    pub fn item(&self, id: &ItemId) -> Result<&'a Item> {
        self.items
            .get(id)
            .copied()
            .ok_or_else(|| ExportError::UnknownItem(id.clone()))
    }

    /// Non-hidden items carrying `tag`, in enumeration order
    pub fn items_with_tag(&self, tag: &TagId) -> &[&'a Item] {
        self.tag_members.get(tag).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_crafting_table(&self, item: &ItemId) -> bool {
        self.crafting_tables.contains(item)
    }

    pub fn talent_value(&self, talent: &TalentId) -> Result<f64> {
        self.talent_values
            .get(talent)
            .copied()
            .ok_or_else(|| ExportError::UnknownTalent(talent.clone()))
    }

    /// Talent groups owned by `skill` whose category contains `marker`
    pub fn talent_groups_for<'s>(
        &'s self,
        skill: &'s SkillId,
        marker: &'s str,
    ) -> impl Iterator<Item = &'a TalentGroup> + 's {
        let groups: &'a [TalentGroup] = self.talent_groups;
        groups
            .iter()
            .filter(move |g| &g.owner == skill && g.is_in_category(marker))
    }
}
