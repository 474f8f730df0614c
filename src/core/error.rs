use thiserror::Error;

use crate::core::types::{ItemId, SkillId, TalentId};

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Unknown skill: {0}")]
    UnknownSkill(SkillId),

    #[error("Unknown item: {0}")]
    UnknownItem(ItemId),

    #[error("Unknown talent: {0}")]
    UnknownTalent(TalentId),

    #[error("Lavish combination (base {base}) does not start with a skill-scaled term")]
    LavishWithoutSkillTerm { base: f64 },

    #[error("Ingredient in recipe {recipe} references neither an item nor a tag")]
    EmptyIngredient { recipe: String },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Invalid world definition: {}", .0.join(", "))]
    InvalidWorld(Vec<String>),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ExportError>;
