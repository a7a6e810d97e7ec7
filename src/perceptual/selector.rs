use crate::core::color::PaletteColor;
use crate::error::PaletteError;

use super::ciede2000::{delta_e_2000, CieLab};

/// Index of the candidate whose closest assigned color is farthest away (max-min ΔE00).
///
/// Ties keep the leftmost candidate. Degenerate inputs (every candidate identical to an
/// assigned color) still return index 0.
///
/// # Errors
/// `InvalidArgument` when `assigned` is empty (nothing to be distinct from) or when there are
/// no candidates to choose between.
pub fn select_distinct_color_index(
    candidates: &[PaletteColor],
    assigned: &[PaletteColor],
) -> Result<usize, PaletteError> {
    if assigned.is_empty() {
        return Err(PaletteError::InvalidArgument(
            "assigned colors must not be empty",
        ));
    }
    if candidates.is_empty() {
        return Err(PaletteError::InvalidArgument("no candidate colors"));
    }

    let assigned_lab: Vec<CieLab> = assigned.iter().copied().map(CieLab::from).collect();

    let mut best_index = 0;
    let mut best_distance = f32::NEG_INFINITY;
    for (i, candidate) in candidates.iter().copied().enumerate() {
        let lab = CieLab::from(candidate);
        let closest = assigned_lab
            .iter()
            .map(|other| delta_e_2000(lab, *other))
            .fold(f32::INFINITY, f32::min);
        if closest > best_distance {
            best_distance = closest;
            best_index = i;
        }
    }
    Ok(best_index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_black_against_white() {
        let candidates = [PaletteColor::BLACK, PaletteColor::from_rgb8(245, 245, 245)];
        let idx = select_distinct_color_index(&candidates, &[PaletteColor::WHITE]).unwrap();
        assert_eq!(idx, 0);

        // order independent
        let flipped = [candidates[1], candidates[0]];
        let idx = select_distinct_color_index(&flipped, &[PaletteColor::WHITE]).unwrap();
        assert_eq!(idx, 1);
    }

    #[test]
    fn empty_assigned_is_invalid() {
        let err = select_distinct_color_index(&[PaletteColor::BLACK], &[]).unwrap_err();
        assert!(matches!(err, PaletteError::InvalidArgument(_)));
    }

    #[test]
    fn empty_candidates_is_invalid() {
        let err = select_distinct_color_index(&[], &[PaletteColor::WHITE]).unwrap_err();
        assert!(matches!(err, PaletteError::InvalidArgument(_)));
    }

    #[test]
    fn ties_keep_first() {
        let red = PaletteColor::from_rgb8(255, 0, 0);
        let candidates = [red, red, red];
        let idx = select_distinct_color_index(&candidates, &[PaletteColor::WHITE]).unwrap();
        assert_eq!(idx, 0);
    }

    #[test]
    fn degenerate_identical_returns_zero() {
        let c = PaletteColor::from_rgb8(12, 34, 56);
        assert_eq!(select_distinct_color_index(&[c], &[c]).unwrap(), 0);
    }

    #[test]
    fn maximizes_nearest_neighbor_not_sum() {
        // Red is far from blue but identical to an assigned red; green is moderately far from both.
        let red = PaletteColor::from_rgb8(255, 0, 0);
        let blue = PaletteColor::from_rgb8(0, 0, 255);
        let green = PaletteColor::from_rgb8(0, 200, 0);
        let idx = select_distinct_color_index(&[red, green], &[red, blue]).unwrap();
        assert_eq!(idx, 1);
    }
}
