//! CIEDE2000 color difference.
//!
//! Formula and reference pairs follow Sharma, Wu & Dalal, "The CIEDE2000 Color-Difference
//! Formula: Implementation Notes, Supplementary Test Data, and Mathematical Observations"
//! (2005). Weighting factors kL = kC = kH = 1.

use bevy::color::Laba;

use crate::core::color::PaletteColor;

const POW25_7: f64 = 6_103_515_625.0; // 25^7

/// CIE L*a*b* with L on the conventional 0–100 scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CieLab {
    pub l: f32,
    pub a: f32,
    pub b: f32,
}

impl CieLab {
    pub const fn new(l: f32, a: f32, b: f32) -> Self {
        Self { l, a, b }
    }
}

impl From<Laba> for CieLab {
    /// bevy stores Lab divided by 100.
    fn from(lab: Laba) -> Self {
        Self::new(lab.lightness * 100.0, lab.a * 100.0, lab.b * 100.0)
    }
}

impl From<PaletteColor> for CieLab {
    fn from(c: PaletteColor) -> Self {
        CieLab::from(c.to_laba())
    }
}

/// Hue angle in degrees, 0..360; 0 for the achromatic axis.
fn hue_deg(b: f64, a_prime: f64) -> f64 {
    if b == 0.0 && a_prime == 0.0 {
        return 0.0;
    }
    let h = b.atan2(a_prime).to_degrees();
    if h < 0.0 {
        h + 360.0
    } else {
        h
    }
}

/// ΔE00 between two Lab colors. Symmetric and non-negative.
pub fn delta_e_2000(x: CieLab, y: CieLab) -> f32 {
    let (l1, a1, b1) = (x.l as f64, x.a as f64, x.b as f64);
    let (l2, a2, b2) = (y.l as f64, y.a as f64, y.b as f64);

    let c1 = a1.hypot(b1);
    let c2 = a2.hypot(b2);
    let c_bar7 = ((c1 + c2) * 0.5).powi(7);
    let g = 0.5 * (1.0 - (c_bar7 / (c_bar7 + POW25_7)).sqrt());

    let a1p = (1.0 + g) * a1;
    let a2p = (1.0 + g) * a2;
    let c1p = a1p.hypot(b1);
    let c2p = a2p.hypot(b2);
    let h1p = hue_deg(b1, a1p);
    let h2p = hue_deg(b2, a2p);
    let chroma_product = c1p * c2p;

    let dl = l2 - l1;
    let dc = c2p - c1p;
    let dh_angle = if chroma_product == 0.0 {
        0.0
    } else {
        let d = h2p - h1p;
        if d > 180.0 {
            d - 360.0
        } else if d < -180.0 {
            d + 360.0
        } else {
            d
        }
    };
    let dh = 2.0 * chroma_product.sqrt() * (dh_angle.to_radians() * 0.5).sin();

    let l_bar = (l1 + l2) * 0.5;
    let c_bar_p = (c1p + c2p) * 0.5;
    let h_bar_p = if chroma_product == 0.0 {
        h1p + h2p
    } else if (h1p - h2p).abs() <= 180.0 {
        (h1p + h2p) * 0.5
    } else if h1p + h2p < 360.0 {
        (h1p + h2p + 360.0) * 0.5
    } else {
        (h1p + h2p - 360.0) * 0.5
    };

    let t = 1.0 - 0.17 * (h_bar_p - 30.0).to_radians().cos()
        + 0.24 * (2.0 * h_bar_p).to_radians().cos()
        + 0.32 * (3.0 * h_bar_p + 6.0).to_radians().cos()
        - 0.20 * (4.0 * h_bar_p - 63.0).to_radians().cos();
    let d_theta = 30.0 * (-((h_bar_p - 275.0) / 25.0).powi(2)).exp();
    let c_bar_p7 = c_bar_p.powi(7);
    let r_c = 2.0 * (c_bar_p7 / (c_bar_p7 + POW25_7)).sqrt();
    let l50 = (l_bar - 50.0).powi(2);
    let s_l = 1.0 + 0.015 * l50 / (20.0 + l50).sqrt();
    let s_c = 1.0 + 0.045 * c_bar_p;
    let s_h = 1.0 + 0.015 * c_bar_p * t;
    let r_t = -(2.0 * d_theta).to_radians().sin() * r_c;

    let tl = dl / s_l;
    let tc = dc / s_c;
    let th = dh / s_h;
    (tl * tl + tc * tc + th * th + r_t * tc * th).max(0.0).sqrt() as f32
}

/// ΔE00 between two palette colors (sRGB → Lab D65).
pub fn palette_delta_e(x: PaletteColor, y: PaletteColor) -> f32 {
    delta_e_2000(x.into(), y.into())
}
