//! Color allocation: seeded sampling without replacement plus team variation tables.

pub mod allocator;
pub mod seed;
pub mod variations;

pub use allocator::{ColorAllocator, PaletteRole};
pub use seed::{identity_hash, Blake3Seeder, IdentitySeeder, RangeDraw};
pub use variations::{generate_variations, TeamTables};
