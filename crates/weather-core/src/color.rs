//! Grayscale cloud tint.
//!
//! The scene only ever tints the cloud with shades of gray, so a color is
//! stored as a single channel intensity and rendered as `#rrggbb` with the
//! byte repeated. Parsing rejects colors whose channels differ instead of
//! silently reading one of them.

use std::fmt;
use std::str::FromStr;

use glam::Vec3;

use crate::error::ParamError;

/// A gray level in `0..=255`, displayed as a 6-digit hex color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GrayColor(pub u8);

impl GrayColor {
    pub const WHITE: GrayColor = GrayColor(0xff);
    pub const BLACK: GrayColor = GrayColor(0x00);

    #[inline]
    pub const fn new(intensity: u8) -> Self {
        Self(intensity)
    }

    #[inline]
    pub const fn intensity(self) -> u8 {
        self.0
    }

    /// Normalized RGB for shading.
    #[inline]
    pub fn to_rgb(self) -> Vec3 {
        Vec3::splat(self.0 as f32 / 255.0)
    }
}

impl Default for GrayColor {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for GrayColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{0:02x}{0:02x}{0:02x}", self.0)
    }
}

impl FromStr for GrayColor {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix('#')
            .filter(|h| h.len() == 6 && h.is_ascii())
            .ok_or_else(|| ParamError::InvalidColor(s.to_string()))?;
        let mut channels = [0u8; 3];
        for (i, c) in channels.iter_mut().enumerate() {
            *c = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16)
                .map_err(|_| ParamError::InvalidColor(s.to_string()))?;
        }
        if channels[0] != channels[1] || channels[1] != channels[2] {
            return Err(ParamError::NotGrayscale(s.to_string()));
        }
        Ok(Self(channels[0]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_zero_padded_repeated_byte() {
        assert_eq!(GrayColor(0x23).to_string(), "#232323");
        assert_eq!(GrayColor(0x05).to_string(), "#050505");
        assert_eq!(GrayColor::WHITE.to_string(), "#ffffff");
        assert_eq!(GrayColor::BLACK.to_string(), "#000000");
    }

    #[test]
    fn parses_gray_hex_in_either_case() {
        assert_eq!("#ffffff".parse::<GrayColor>(), Ok(GrayColor(255)));
        assert_eq!("#A0a0A0".parse::<GrayColor>(), Ok(GrayColor(0xa0)));
    }

    #[test]
    fn rejects_malformed_input() {
        for bad in ["ffffff", "#fff", "#fffffff", "#gggggg", "", "#ffé0ff"] {
            assert!(
                matches!(bad.parse::<GrayColor>(), Err(ParamError::InvalidColor(_))),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn rejects_non_gray_colors() {
        assert_eq!(
            "#ff0000".parse::<GrayColor>(),
            Err(ParamError::NotGrayscale("#ff0000".into()))
        );
    }

    #[test]
    fn rgb_is_normalized() {
        assert_eq!(GrayColor::WHITE.to_rgb(), Vec3::ONE);
        assert_eq!(GrayColor::BLACK.to_rgb(), Vec3::ZERO);
    }
}
