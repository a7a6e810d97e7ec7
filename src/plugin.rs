use bevy::prelude::*;

use crate::allocation::ColorAllocator;
use crate::core::color::PaletteColor;
use crate::core::components::{AssignedColor, Identity, TeamMember};
use crate::core::config::PaletteConfig;
use crate::core::system::system_order::ColorAssignSet;

pub const DEFAULT_CONFIG_PATH: &str = "assets/config/palette.ron";

/// Bevy resource wrapper for the pure-data palette config.
/// Inserting it before the plugin skips file loading.
#[derive(Resource, Debug, Clone, Default)]
pub struct PaletteConfigRes(pub PaletteConfig);

/// Emitted once per entity when it receives its color.
#[derive(Event, Debug, Clone)]
pub struct ColorAssigned {
    pub entity: Entity,
    pub identity: String,
    pub color: PaletteColor,
}

pub struct TeamPalettePlugin {
    /// Config layers, later overriding earlier. Missing files are reported and skipped.
    pub config_paths: Vec<String>,
}

impl Default for TeamPalettePlugin {
    fn default() -> Self {
        Self {
            config_paths: vec![DEFAULT_CONFIG_PATH.to_string()],
        }
    }
}

impl Plugin for TeamPalettePlugin {
    fn build(&self, app: &mut App) {
        let cfg = match app.world().get_resource::<PaletteConfigRes>() {
            Some(res) => res.0.clone(),
            None => {
                let (cfg, used, errors) = PaletteConfig::load_layered(&self.config_paths);
                for e in &errors {
                    warn!(target: "palette", "config: {e}");
                }
                if !used.is_empty() {
                    info!(target: "palette", "palette config layers: {}", used.join(", "));
                }
                cfg
            }
        };
        for w in cfg.validate() {
            warn!(target: "palette", "{w}");
        }
        let cfg = cfg.with_builtin_fallback();

        let allocator = match ColorAllocator::from_config(&cfg) {
            Ok(alloc) => alloc,
            Err(e) => {
                error!(target: "palette", "invalid palette config ({e}); using built-in palettes");
                ColorAllocator::default()
            }
        };
        info!(
            target: "palette",
            "color allocator ready: primary={} fallback={} team_tables={}",
            cfg.primary.len(),
            cfg.fallback.len(),
            allocator.team_tables().len()
        );

        app.insert_resource(PaletteConfigRes(cfg))
            .insert_resource(allocator)
            .add_event::<ColorAssigned>()
            .add_systems(Update, assign_entity_colors.in_set(ColorAssignSet));
    }
}

/// Gives every entity with an `Identity` and no color yet its color. Team members draw from
/// their team's variations, everyone else from the general allocator.
pub fn assign_entity_colors(
    mut commands: Commands,
    mut allocator: ResMut<ColorAllocator>,
    q_new: Query<(Entity, &Identity, Option<&TeamMember>), Without<AssignedColor>>,
    mut ew: EventWriter<ColorAssigned>,
) {
    for (entity, identity, team) in &q_new {
        let result = match team {
            Some(TeamMember(team)) => allocator.assign_team_player_color(team, identity),
            None => allocator.assign(identity),
        };
        match result {
            Ok(color) => {
                commands.entity(entity).insert(AssignedColor(color));
                ew.write(ColorAssigned {
                    entity,
                    identity: identity.0.clone(),
                    color,
                });
            }
            Err(e) => error!(target: "palette", "color assignment for '{}' failed: {e}", identity.0),
        }
    }
}
