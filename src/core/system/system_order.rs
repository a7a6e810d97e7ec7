//! System ordering labels for color assignment.
//! Anything reading `AssignedColor` in the same frame should run after `ColorAssignSet`.
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct ColorAssignSet; // identities without a color receive one
