//! Snapshot assembly
//!
//! Pulls every entity collection through the projector and applies the
//! export filters: hidden items are dropped and tags with no visible item
//! are dropped. Skills and recipes are exported unfiltered.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::core::config::ExportConfig;
use crate::core::error::{ExportError, Result};
use crate::export::index::ExportIndex;
use crate::export::projector::Projector;
use crate::export::records::ExportedData;
use crate::export::writer::write_snapshot;
use crate::localization::Localizer;
use crate::model::GameData;

/// Outcome of a completed export run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub skills: usize,
    pub items: usize,
    pub tags: usize,
    pub recipes: usize,
    pub output_path: PathBuf,
    pub bytes_written: usize,
}

/// Build the full in-memory document
pub fn assemble_snapshot(
    data: &GameData,
    localizer: &dyn Localizer,
    config: &ExportConfig,
) -> Result<ExportedData> {
    config.validate().map_err(ExportError::InvalidConfig)?;
    data.validate()?;

    let index = ExportIndex::build(data);
    let projector = Projector::new(&index, localizer, config);

    let skills = data
        .skills
        .iter()
        .map(|s| projector.skill(s))
        .collect::<Result<Vec<_>>>()?;
    debug!(count = skills.len(), "Projected skills");

    let items = data
        .items
        .iter()
        .filter(|item| {
            if item.hidden {
                debug!(item = %item.name, "Skipping hidden item");
            }
            !item.hidden
        })
        .map(|i| projector.item(i))
        .collect::<Result<Vec<_>>>()?;
    debug!(count = items.len(), "Projected items");

    let tags: Vec<_> = data
        .tags
        .iter()
        .map(|t| projector.tag(t))
        .filter(|tag| {
            if tag.associated_items.is_empty() {
                debug!(tag = %tag.name, "Skipping tag with no visible items");
            }
            !tag.associated_items.is_empty()
        })
        .collect();
    debug!(count = tags.len(), "Projected tags");

    let mut recipes = Vec::new();
    for family in &data.recipe_families {
        for (position, recipe) in family.recipes.iter().enumerate() {
            recipes.push(projector.recipe(family, recipe, family.is_default(position))?);
        }
    }
    debug!(count = recipes.len(), "Projected recipes");

    Ok(ExportedData {
        skills,
        items,
        tags,
        recipes,
    })
}

/// Assemble the document and write it to the configured sink
pub fn export_snapshot(
    data: &GameData,
    localizer: &dyn Localizer,
    config: &ExportConfig,
) -> Result<ExportSummary> {
    info!(output = %config.output_path.display(), "Starting snapshot export");

    let snapshot = assemble_snapshot(data, localizer, config)?;
    let bytes_written = write_snapshot(&snapshot, &config.output_path, config.pretty)?;

    let summary = ExportSummary {
        skills: snapshot.skills.len(),
        items: snapshot.items.len(),
        tags: snapshot.tags.len(),
        recipes: snapshot.recipes.len(),
        output_path: config.output_path.clone(),
        bytes_written,
    };
    info!(
        skills = summary.skills,
        items = summary.items,
        tags = summary.tags,
        recipes = summary.recipes,
        bytes = summary.bytes_written,
        "Snapshot export finished"
    );
    Ok(summary)
}
