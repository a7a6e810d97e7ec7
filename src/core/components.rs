use bevy::prelude::*;

use super::color::PaletteColor;
use super::team::TeamKind;

/// Stable identity key (player id, team id) used to seed the color draw.
#[derive(Component, Debug, Clone, PartialEq, Eq, Hash, Deref)]
pub struct Identity(pub String);

impl Identity {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

/// Team membership; members draw from their team's variation table.
#[derive(Component, Debug, Clone, PartialEq, Eq, Deref)]
pub struct TeamMember(pub TeamKind);

/// Color assigned to an entity. Never changes once inserted.
#[derive(Component, Debug, Copy, Clone, PartialEq, Deref)]
pub struct AssignedColor(pub PaletteColor);
