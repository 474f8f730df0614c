//! Tags group interchangeable items

use serde::{Deserialize, Serialize};

use crate::core::types::TagId;

/// A tag; membership is declared on the items carrying it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub name: TagId,
    pub display_name: String,
}

impl Tag {
    pub fn new(name: impl Into<TagId>, display_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
        }
    }
}
