//! Quantity expressions
//!
//! A recipe quantity is either fixed or scaled by the crafter's skill. Lavish
//! combinations stack bonus terms on top of a skill-scaled base term.

use serde::{Deserialize, Serialize};

use crate::core::types::SkillId;

/// A quantity whose effective value may depend on a skill level
///
/// Only the base value and the skill reference matter to the exporter; the
/// runtime-modified value is never computed here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DynamicValue {
    /// Fixed value
    Constant(f64),
    /// Base value modified by the level of `skill`
    SkillScaled {
        base: f64,
        #[serde(default)]
        skill: Option<SkillId>,
    },
    /// Base value plus bonus terms; the first term carries the skill
    LavishCombination {
        base: f64,
        terms: Vec<DynamicValue>,
    },
}

impl DynamicValue {
    pub fn constant(value: f64) -> Self {
        DynamicValue::Constant(value)
    }

    pub fn skill_scaled(base: f64, skill: impl Into<SkillId>) -> Self {
        DynamicValue::SkillScaled {
            base,
            skill: Some(skill.into()),
        }
    }

    pub fn base_value(&self) -> f64 {
        match self {
            DynamicValue::Constant(value) => *value,
            DynamicValue::SkillScaled { base, .. } => *base,
            DynamicValue::LavishCombination { base, .. } => *base,
        }
    }

    pub fn is_dynamic(&self) -> bool {
        !matches!(self, DynamicValue::Constant(_))
    }

    /// Every skill this expression refers to, including nested terms
    pub fn skill_refs(&self) -> Vec<&SkillId> {
        match self {
            DynamicValue::Constant(_) => Vec::new(),
            DynamicValue::SkillScaled { skill, .. } => skill.iter().collect(),
            DynamicValue::LavishCombination { terms, .. } => {
                terms.iter().flat_map(|t| t.skill_refs()).collect()
            }
        }
    }
}

impl Default for DynamicValue {
    fn default() -> Self {
        DynamicValue::Constant(0.0)
    }
}
