// ABOUTME: Content identifiers and the external content table contract.
// ABOUTME: The layout engine indexes into the table but never owns its entries.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::Color;

/// Index into the workspace's content table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentId(pub u32);

/// A renderable unit hosted in a leaf tile. The layout engine treats these
/// as opaque; only the painter reads the fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentCard {
    pub title: String,
    pub color: Color,
}

impl ContentCard {
    pub fn new(title: impl Into<String>, color: Color) -> Self {
        Self {
            title: title.into(),
            color,
        }
    }
}

/// Lookup contract supplied by the workspace. Absent ids are a normal
/// outcome, not an error: the tile simply renders nothing.
pub trait ContentTable {
    fn get(&self, id: ContentId) -> Option<&ContentCard>;
}

impl ContentTable for HashMap<ContentId, ContentCard> {
    fn get(&self, id: ContentId) -> Option<&ContentCard> {
        HashMap::get(self, &id)
    }
}
