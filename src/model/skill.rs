//! Skills and talents

use serde::{Deserialize, Serialize};

use crate::core::types::{SkillId, TalentId};

/// A skill as defined by the simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    /// Stable type name
    pub name: SkillId,
    /// Display name, also the localization key
    pub display_name: String,
    /// Prerequisite skills; the first one is the profession
    #[serde(default)]
    pub prerequisites: Vec<SkillId>,
    /// Labor reduction percentage per skill level
    #[serde(default)]
    pub labor_reduce_percent: Vec<f64>,
    /// The abstract base skill every concrete skill derives from
    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,
}

impl Skill {
    pub fn new(name: impl Into<SkillId>, display_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            prerequisites: Vec::new(),
            labor_reduce_percent: Vec::new(),
            is_abstract: false,
        }
    }

    pub fn profession(&self) -> Option<&SkillId> {
        self.prerequisites.first()
    }
}

/// A bucket of talents tied to one skill
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TalentGroup {
    pub name: String,
    /// Skill this group belongs to
    pub owner: SkillId,
    /// Category tag; lavish workspace groups are detected by its name
    pub category: String,
    /// Talent variants offered, in order
    #[serde(default)]
    pub talents: Vec<TalentId>,
}

impl TalentGroup {
    pub fn is_in_category(&self, marker: &str) -> bool {
        self.category.contains(marker)
    }
}

/// A talent instance and the numeric bonus it grants
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Talent {
    pub name: TalentId,
    pub value: f64,
}
