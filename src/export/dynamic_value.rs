//! Quantity expression resolution
//!
//! Collapses a `DynamicValue` into the flat numbers the site shows: the base
//! value, whether it scales, and by which skill.

use crate::core::error::{ExportError, Result};
use crate::core::types::SkillId;
use crate::export::index::ExportIndex;
use crate::model::DynamicValue;

/// Which side of a recipe a quantity belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementRole {
    Ingredient,
    Product,
}

/// A quantity flattened for export
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedQuantity {
    pub base_value: f64,
    pub is_dynamic: bool,
    /// Skill display name; empty for constants or unresolvable skills
    pub skill: String,
    pub is_lavish: bool,
}

impl ResolvedQuantity {
    fn constant(base_value: f64) -> Self {
        Self {
            base_value,
            is_dynamic: false,
            skill: String::new(),
            is_lavish: false,
        }
    }
}

pub fn resolve_quantity(
    value: &DynamicValue,
    role: ElementRole,
    index: &ExportIndex<'_>,
) -> Result<ResolvedQuantity> {
    match value {
        DynamicValue::Constant(base) => Ok(ResolvedQuantity::constant(*base)),
        DynamicValue::SkillScaled { base, skill } => Ok(ResolvedQuantity {
            base_value: *base,
            is_dynamic: true,
            skill: skill_name(skill.as_ref(), role, index)?,
            is_lavish: false,
        }),
        DynamicValue::LavishCombination { base, terms } => {
            let lead_skill = match terms.first() {
                Some(DynamicValue::SkillScaled { skill, .. }) => skill.as_ref(),
                _ => return Err(ExportError::LavishWithoutSkillTerm { base: *base }),
            };
            Ok(ResolvedQuantity {
                base_value: *base,
                is_dynamic: true,
                skill: skill_name(lead_skill, role, index)?,
                is_lavish: true,
            })
        }
    }
}

/// Display name of a referenced skill
///
/// Empty when there is no reference, or when an ingredient points at the
/// abstract base skill.
fn skill_name(
    skill: Option<&SkillId>,
    role: ElementRole,
    index: &ExportIndex<'_>,
) -> Result<String> {
    let Some(id) = skill else {
        return Ok(String::new());
    };
    let skill = index.skill(id)?;
    if role == ElementRole::Ingredient && skill.is_abstract {
        return Ok(String::new());
    }
    Ok(skill.display_name.clone())
}
