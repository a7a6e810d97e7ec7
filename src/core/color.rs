//! Palette color value type.
//!
//! Channels live on the 0–255 scale but are stored as `f32` so externally authored
//! variation tables can carry fractional values (see [`PaletteColor::rounded`]).
//! Conversions to perceptual spaces go through `bevy::color`.

use bevy::color::{Color, Hsla, Laba, Lcha, Srgba};
use serde::{Deserialize, Serialize};

/// Immutable RGB color on the 0–255 channel scale.
///
/// Serialized as a plain `(r, g, b)` tuple so RON palettes stay compact.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f32, f32, f32)", into = "(f32, f32, f32)")]
pub struct PaletteColor {
    r: f32,
    g: f32,
    b: f32,
}

impl PaletteColor {
    pub const BLACK: PaletteColor = PaletteColor::rgb(0.0, 0.0, 0.0);
    pub const WHITE: PaletteColor = PaletteColor::rgb(255.0, 255.0, 255.0);

    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f32, g as f32, b as f32)
    }

    #[inline]
    pub fn channels(&self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Channels rounded to the nearest integer (half away from zero) and clamped to 0–255.
    pub fn rounded(&self) -> Self {
        let [r, g, b] = self.rgb8();
        Self::from_rgb8(r, g, b)
    }

    pub fn rgb8(&self) -> [u8; 3] {
        self.channels().map(|c| c.round().clamp(0.0, 255.0) as u8)
    }

    /// True when every channel is finite and inside 0–255.
    pub fn in_gamut(&self) -> bool {
        self.channels()
            .iter()
            .all(|c| c.is_finite() && (0.0..=255.0).contains(c))
    }

    pub fn to_hex(&self) -> String {
        let [r, g, b] = self.rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    pub fn to_srgba(&self) -> Srgba {
        Srgba::new(self.r / 255.0, self.g / 255.0, self.b / 255.0, 1.0)
    }

    /// Drops alpha; channels are kept fractional.
    pub fn from_srgba(srgba: Srgba) -> Self {
        Self::rgb(srgba.red * 255.0, srgba.green * 255.0, srgba.blue * 255.0)
    }

    /// CIE L*a*b* (D65). Note bevy scales lightness to 0–1 rather than 0–100.
    pub fn to_laba(&self) -> Laba {
        Laba::from(Color::from(self.to_srgba()))
    }

    pub fn to_lcha(&self) -> Lcha {
        Lcha::from(Color::from(self.to_srgba()))
    }

    pub fn to_hsla(&self) -> Hsla {
        Hsla::from(Color::from(self.to_srgba()))
    }

    /// Channels are clamped to the gamut; HSL round trips can overshoot by an ulp.
    pub fn from_hsla(hsla: Hsla) -> Self {
        let c = Self::from_srgba(Srgba::from(Color::from(hsla)));
        let [r, g, b] = c.channels().map(|v| v.clamp(0.0, 255.0));
        Self::rgb(r, g, b)
    }
}

impl From<(f32, f32, f32)> for PaletteColor {
    fn from((r, g, b): (f32, f32, f32)) -> Self {
        Self::rgb(r, g, b)
    }
}

impl From<PaletteColor> for (f32, f32, f32) {
    fn from(c: PaletteColor) -> Self {
        (c.r, c.g, c.b)
    }
}

impl From<[u8; 3]> for PaletteColor {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::from_rgb8(r, g, b)
    }
}

impl From<PaletteColor> for Color {
    fn from(c: PaletteColor) -> Self {
        Color::from(c.to_srgba())
    }
}
