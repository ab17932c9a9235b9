// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sample world-building data shared by the Folio demos.

/// Kind of a world-building entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// A person or creature.
    Character,
    /// A location.
    Place,
    /// An object.
    Item,
}

/// A minimal stand-in for an entity card's data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    /// Display name.
    pub name: String,
    /// Entity kind.
    pub kind: EntityKind,
}

/// Builds `count` entities cycling through every kind.
pub fn sample_entities(count: usize) -> Vec<Entity> {
    const KINDS: [EntityKind; 3] = [EntityKind::Character, EntityKind::Place, EntityKind::Item];
    (0..count)
        .map(|i| {
            let kind = KINDS[i % KINDS.len()];
            Entity {
                name: format!("{kind:?} #{i}"),
                kind,
            }
        })
        .collect()
}
