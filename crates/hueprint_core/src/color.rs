//! RGBA color values

use crate::format::{fmt_num, round_half_up, round_to};

/// RGBA color in sRGB space
///
/// Channels are kept in the 0-255 range (fractional while derivations are
/// in flight), alpha in 0-1. Rounding happens once, in [`Rgba::to_css`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Rgba = Rgba::rgb(255.0, 255.0, 255.0);
    pub const TRANSPARENT: Rgba = Rgba::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f64;
        let g = ((hex >> 8) & 0xFF) as f64;
        let b = (hex & 0xFF) as f64;
        Self::rgb(r, g, b)
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.a = alpha;
        self
    }

    /// Move every channel towards 0 by `amount` (0-1). Alpha is preserved.
    pub fn darken(self, amount: f64) -> Self {
        let factor = 1.0 - amount;
        Self {
            r: self.r * factor,
            g: self.g * factor,
            b: self.b * factor,
            a: self.a,
        }
    }

    /// Move every channel towards 255 by `amount` (0-1). Alpha is preserved.
    pub fn lighten(self, amount: f64) -> Self {
        Self {
            r: self.r + (255.0 - self.r) * amount,
            g: self.g + (255.0 - self.g) * amount,
            b: self.b + (255.0 - self.b) * amount,
            a: self.a,
        }
    }

    /// Add a flat offset to every channel, clamped to 255.
    pub fn brighten(self, delta: f64) -> Self {
        Self {
            r: (self.r + delta).min(255.0),
            g: (self.g + delta).min(255.0),
            b: (self.b + delta).min(255.0),
            a: self.a,
        }
    }

    /// Channels rounded to integers, as written into CSS
    pub fn rounded_channels(&self) -> [i64; 3] {
        [self.r, self.g, self.b].map(|c| round_half_up(c.clamp(0.0, 255.0)) as i64)
    }

    /// Canonical CSS form: `rgba(r,g,b,a)` without spaces.
    ///
    /// Channels are rounded half-up, alpha is rounded to three decimals.
    pub fn to_css(&self) -> String {
        let [r, g, b] = self.rounded_channels();
        format!("rgba({r},{g},{b},{})", fmt_num(round_to(self.a.clamp(0.0, 1.0), 3)))
    }

    /// Channels as an array, alpha last
    pub fn to_array(&self) -> [f64; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_form_has_no_spaces() {
        assert_eq!(Rgba::rgb(1.0, 2.0, 3.0).to_css(), "rgba(1,2,3,1)");
        assert_eq!(Rgba::new(0.0, 0.0, 0.0, 0.2).to_css(), "rgba(0,0,0,0.2)");
    }

    #[test]
    fn css_form_rounds_channels_half_up() {
        assert_eq!(Rgba::rgb(94.0, 94.5, 200.49).to_css(), "rgba(94,95,200,1)");
    }

    #[test]
    fn darken_scales_towards_black() {
        let c = Rgba::rgb(100.0, 200.0, 50.0).darken(0.1);
        assert_eq!(c.rounded_channels(), [90, 180, 45]);
    }

    #[test]
    fn lighten_scales_towards_white() {
        let c = Rgba::rgb(0.0, 255.0, 155.0).lighten(0.5);
        assert_eq!(c.rounded_channels(), [128, 255, 205]);
    }

    #[test]
    fn brighten_clamps_at_255() {
        let c = Rgba::rgb(250.0, 10.0, 0.0).brighten(20.0);
        assert_eq!(c.rounded_channels(), [255, 30, 20]);
    }

    #[test]
    fn alpha_is_preserved_by_channel_ops() {
        let c = Rgba::new(10.0, 10.0, 10.0, 0.5);
        assert_eq!(c.darken(0.5).a, 0.5);
        assert_eq!(c.lighten(0.5).a, 0.5);
    }

    #[test]
    fn from_hex_reads_channels() {
        assert_eq!(Rgba::from_hex(0x5861CB).to_css(), "rgba(88,97,203,1)");
    }
}
