pub mod allocation;
pub mod core;
pub mod error;
pub mod perceptual;
pub mod plugin;

// Curated re-exports
pub use allocation::{ColorAllocator, PaletteRole, TeamTables};
pub use crate::core::color::PaletteColor;
pub use crate::core::components::{AssignedColor, Identity, TeamMember};
pub use crate::core::config::PaletteConfig;
pub use crate::core::system::system_order::ColorAssignSet;
pub use crate::core::team::TeamKind;
pub use error::PaletteError;
pub use perceptual::select_distinct_color_index;
pub use plugin::{ColorAssigned, PaletteConfigRes, TeamPalettePlugin};
