//! Per-team color variation tables.
//!
//! Each named team owns an ordered list of variations; entry 0 is the team's canonical
//! color. Lists come from config or, when a team has none, are generated by stepping HSL
//! lightness around the team's base color.

use std::collections::HashMap;

use bevy::color::Hsla;
use bevy::log::warn;

use crate::core::color::PaletteColor;
use crate::core::config::PaletteConfig;
use crate::core::team::TeamKind;

/// Deterministic variation list: `base` first, then lightness offsets alternating above and
/// below it, widening until they cover `lightness_spread` in total.
pub fn generate_variations(
    base: PaletteColor,
    count: usize,
    lightness_spread: f32,
) -> Vec<PaletteColor> {
    let count = count.max(1);
    let hsla = base.to_hsla();
    let half = (count / 2).max(1) as f32;
    let step = lightness_spread.clamp(0.0, 1.0) * 0.5 / half;

    let mut out = Vec::with_capacity(count);
    out.push(base);
    for i in 1..count {
        let k = ((i + 1) / 2) as f32;
        let sign = if i % 2 == 1 { 1.0 } else { -1.0 };
        let lightness = (hsla.lightness + sign * k * step).clamp(0.05, 0.95);
        out.push(PaletteColor::from_hsla(Hsla { lightness, ..hsla }));
    }
    out
}

/// Fixed variation lists for the named teams.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamTables {
    tables: HashMap<TeamKind, Vec<PaletteColor>>,
}

impl TeamTables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table for every named team. Missing or empty entries are generated from the
    /// configured base (or the built-in one) using `cfg.variations`.
    pub fn from_config(cfg: &PaletteConfig) -> Self {
        let mut tables = HashMap::with_capacity(TeamKind::NAMED.len());
        for team in TeamKind::NAMED {
            let entry = cfg.teams.get(team.name());
            let Some(base) = entry.map(|e| e.base).or_else(|| team.default_base()) else {
                continue;
            };
            let variations = match entry {
                Some(e) if !e.variations.is_empty() => e.variations.clone(),
                _ => generate_variations(
                    base,
                    cfg.variations.count,
                    cfg.variations.lightness_spread,
                ),
            };
            tables.insert(team, variations);
        }
        Self { tables }
    }

    /// Replace a named team's list. Custom teams never consult the tables, so they are rejected.
    pub fn insert(&mut self, team: TeamKind, variations: Vec<PaletteColor>) -> bool {
        if !team.is_named() {
            warn!(target: "palette", "ignoring variation table for ad-hoc team '{team}'");
            return false;
        }
        self.tables.insert(team, variations);
        true
    }

    pub fn variations(&self, team: &TeamKind) -> Option<&[PaletteColor]> {
        self.tables.get(team).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
