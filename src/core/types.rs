//! Core type definitions used throughout the codebase
//!
//! Every source entity is identified by a stable type name (for example
//! `CarpentrySkill` or `WoodItem`). These names are what the exported
//! document carries in its `Name` fields.

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

/// Identity of a skill
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SkillId(pub String);

/// Identity of an item
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ItemId(pub String);

/// Identity of a tag
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TagId(pub String);

/// Identity of a talent variant
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TalentId(pub String);

macro_rules! impl_id_accessors {
    ($($id:ty),*) => {
        $(
            impl $id {
                pub fn new(name: impl Into<String>) -> Self {
                    Self(name.into())
                }

                pub fn as_str(&self) -> &str {
                    &self.0
                }
            }

            impl From<&str> for $id {
                fn from(name: &str) -> Self {
                    Self(name.to_string())
                }
            }
        )*
    };
}

impl_id_accessors!(SkillId, ItemId, TagId, TalentId);
