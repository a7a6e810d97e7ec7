//! Identity-seeded color allocator (partial Fisher–Yates over an owned palette buffer).
//!
//! The active palette is split by `cursor`: indices `[0, len - cursor)` are still
//! available, `[len - cursor, len)` hold colors already handed out. Each draw picks an
//! index from the available region with a generator seeded from the identity and swaps the
//! pick to the boundary. When every entry is consumed the active buffer is replaced by a
//! fresh copy of the fallback palette and the cursor restarts at 0.
//!
//! Determinism: the draw for an identity depends only on the identity hash and on the
//! allocator state, so two allocators built from the same palettes and fed the same
//! identity sequence hand out the same colors.

use std::collections::HashMap;

use bevy::log::{debug, trace};
use bevy::prelude::Resource;

use crate::core::color::PaletteColor;
use crate::core::config::PaletteConfig;
use crate::core::team::TeamKind;
use crate::error::PaletteError;
use crate::perceptual::select_distinct_color_index;

use super::seed::{Blake3Seeder, IdentitySeeder, RangeDraw};
use super::variations::TeamTables;

/// Which palette the active buffer was copied from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteRole {
    Primary,
    Fallback,
}

/// Swap two entries after validating both indices.
pub(crate) fn swap_checked<T>(buf: &mut [T], a: usize, b: usize) -> Result<(), PaletteError> {
    let len = buf.len();
    for index in [a, b] {
        if index >= len {
            return Err(PaletteError::IndexOutOfBounds { index, len });
        }
    }
    buf.swap(a, b);
    Ok(())
}

#[derive(Resource, Debug)]
pub struct ColorAllocator<S: IdentitySeeder = Blake3Seeder> {
    active: Vec<PaletteColor>,
    fallback: Vec<PaletteColor>,
    cursor: usize,
    role: PaletteRole,
    recycles: u64,
    assigned: HashMap<String, PaletteColor>,
    team_player_colors: HashMap<String, PaletteColor>,
    teams: TeamTables,
    seeder: S,
}

impl ColorAllocator<Blake3Seeder> {
    /// Copies both palettes. The fallback must be non-empty; an empty primary is allowed
    /// (the first draw recycles straight into the fallback).
    pub fn new(primary: &[PaletteColor], fallback: &[PaletteColor]) -> Result<Self, PaletteError> {
        Self::with_seeder(primary, fallback, Blake3Seeder)
    }

    /// Palettes and team tables from config.
    pub fn from_config(cfg: &PaletteConfig) -> Result<Self, PaletteError> {
        Ok(Self::new(&cfg.primary, &cfg.fallback)?.with_team_tables(TeamTables::from_config(cfg)))
    }
}

impl Default for ColorAllocator<Blake3Seeder> {
    fn default() -> Self {
        let cfg = PaletteConfig::default();
        // built-in fallback is never empty
        Self::from_parts(&cfg.primary, cfg.fallback.clone(), Blake3Seeder)
            .with_team_tables(TeamTables::from_config(&cfg))
    }
}

impl<S: IdentitySeeder> ColorAllocator<S> {
    pub fn with_seeder(
        primary: &[PaletteColor],
        fallback: &[PaletteColor],
        seeder: S,
    ) -> Result<Self, PaletteError> {
        if fallback.is_empty() {
            return Err(PaletteError::EmptyPalette("fallback"));
        }
        Ok(Self::from_parts(primary, fallback.to_vec(), seeder))
    }

    fn from_parts(primary: &[PaletteColor], fallback: Vec<PaletteColor>, seeder: S) -> Self {
        Self {
            active: primary.to_vec(),
            fallback,
            cursor: 0,
            role: PaletteRole::Primary,
            recycles: 0,
            assigned: HashMap::new(),
            team_player_colors: HashMap::new(),
            teams: TeamTables::new(),
            seeder,
        }
    }

    pub fn with_team_tables(mut self, teams: TeamTables) -> Self {
        self.teams = teams;
        self
    }

    pub fn team_tables(&self) -> &TeamTables {
        &self.teams
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Entries of the active palette not yet handed out.
    pub fn remaining(&self) -> usize {
        self.active.len() - self.cursor
    }

    pub fn active_role(&self) -> PaletteRole {
        self.role
    }

    /// How many times the active palette has been replaced by the fallback.
    pub fn recycle_count(&self) -> u64 {
        self.recycles
    }

    pub fn assigned_color(&self, identity: &str) -> Option<PaletteColor> {
        self.assigned.get(identity).copied()
    }

    pub fn assigned_len(&self) -> usize {
        self.assigned.len()
    }

    fn recycle_if_exhausted(&mut self) {
        if self.cursor < self.active.len() {
            return;
        }
        self.active.clone_from(&self.fallback);
        self.cursor = 0;
        self.role = PaletteRole::Fallback;
        self.recycles += 1;
        debug!(
            target: "palette",
            "palette exhausted; recycled fallback ({} colors, recycle #{})",
            self.active.len(),
            self.recycles
        );
    }

    /// Hand out `active[index]` and move it past the consumed boundary.
    /// Validation happens before any field changes, so a failure leaves the allocator untouched.
    fn consume(&mut self, index: usize) -> Result<PaletteColor, PaletteError> {
        let len = self.active.len();
        let next_cursor = self.cursor + 1;
        let boundary = len
            .checked_sub(next_cursor)
            .ok_or(PaletteError::IndexOutOfBounds { index: len, len })?;
        let color = *self
            .active
            .get(index)
            .ok_or(PaletteError::IndexOutOfBounds { index, len })?;
        swap_checked(&mut self.active, index, boundary)?;
        self.cursor = next_cursor;
        Ok(color)
    }

    /// Stable color for `identity`, drawn without replacement from the active palette.
    ///
    /// # Errors
    /// `IndexOutOfBounds` only if the draw source breaks its `[lo, hi)` contract; nothing is
    /// recorded in that case.
    pub fn assign(&mut self, identity: &str) -> Result<PaletteColor, PaletteError> {
        if let Some(color) = self.assigned.get(identity) {
            return Ok(*color);
        }
        self.recycle_if_exhausted();

        let mut source = self.seeder.source_for(identity);
        let index = source.draw(0, self.remaining());
        let color = self.consume(index)?;
        trace!(
            target: "palette",
            "assign '{identity}' -> {} ({}/{} used, {:?})",
            color.to_hex(),
            self.cursor,
            self.active.len(),
            self.role
        );
        self.assigned.insert(identity.to_owned(), color);
        Ok(color)
    }

    /// Like [`assign`](Self::assign), but picks the remaining color perceptually farthest from
    /// every color already handed out instead of a seeded one. The first identity (nothing
    /// assigned yet) falls back to the seeded draw.
    pub fn assign_distinct(&mut self, identity: &str) -> Result<PaletteColor, PaletteError> {
        if let Some(color) = self.assigned.get(identity) {
            return Ok(*color);
        }
        if self.assigned.is_empty() {
            return self.assign(identity);
        }
        self.recycle_if_exhausted();

        let in_use: Vec<PaletteColor> = self.assigned.values().copied().collect();
        let available = &self.active[..self.remaining()];
        let index = select_distinct_color_index(available, &in_use)?;
        let color = self.consume(index)?;
        trace!(target: "palette", "assign_distinct '{identity}' -> {}", color.to_hex());
        self.assigned.insert(identity.to_owned(), color);
        Ok(color)
    }

    /// Variation list for a team. Named teams use their fixed table; ad-hoc teams (and named
    /// teams without a table) get a single color drawn for the team identity itself.
    pub fn team_variations(&mut self, team: &TeamKind) -> Result<Vec<PaletteColor>, PaletteError> {
        let fixed = match team {
            TeamKind::Custom(_) => None,
            named => self
                .teams
                .variations(named)
                .filter(|v| !v.is_empty())
                .map(<[PaletteColor]>::to_vec),
        };
        match fixed {
            Some(variations) => Ok(variations),
            None => Ok(vec![self.assign(team.name())?]),
        }
    }

    /// Canonical team color: first variation with channels rounded to integers.
    pub fn assign_team_variant(&mut self, team: &TeamKind) -> Result<PaletteColor, PaletteError> {
        self.team_variations(team)?
            .first()
            .map(PaletteColor::rounded)
            .ok_or(PaletteError::EmptyPalette("team variation"))
    }

    /// Stable per-player color picked from the team's variations by `hash(player_id) mod len`.
    ///
    /// Memoized by `player_id` alone: once a player has a color, later calls return it even
    /// with a different `team`.
    pub fn assign_team_player_color(
        &mut self,
        team: &TeamKind,
        player_id: &str,
    ) -> Result<PaletteColor, PaletteError> {
        if let Some(color) = self.team_player_colors.get(player_id) {
            return Ok(*color);
        }
        let variations = self.team_variations(team)?;
        if variations.is_empty() {
            return Err(PaletteError::EmptyPalette("team variation"));
        }
        let index = (self.seeder.hash(player_id) % variations.len() as u64) as usize;
        let color = variations[index];
        self.team_player_colors.insert(player_id.to_owned(), color);
        Ok(color)
    }
}
