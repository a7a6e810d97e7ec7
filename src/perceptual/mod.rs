//! Perceptual color distance and distinct-color selection.

mod ciede2000;
mod selector;

pub use ciede2000::{delta_e_2000, palette_delta_e, CieLab};
pub use selector::select_distinct_color_index;
