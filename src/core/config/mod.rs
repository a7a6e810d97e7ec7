pub mod config;

pub use config::{PaletteConfig, TeamTableConfig, VariationConfig, ALPHABET, FALLBACK};
