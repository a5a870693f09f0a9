//! Weather presets and the target state they select.

use std::fmt;
use std::str::FromStr;

use crate::color::GrayColor;
use crate::constants::*;
use crate::error::ParamError;
use crate::state::ParameterSnapshot;

/// Values the engine drives the live cloud toward. Replaced wholesale on
/// every preset selection, never edited in place.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TargetState {
    pub opacity: f32,
    pub volume: f32,
    pub fade: f32,
    pub growth: f32,
    pub speed: f32,
    pub color: GrayColor,
}

impl Default for TargetState {
    fn default() -> Self {
        Self {
            opacity: DEFAULT_OPACITY,
            volume: DEFAULT_VOLUME,
            fade: DEFAULT_FADE,
            growth: DEFAULT_GROWTH,
            speed: DEFAULT_SPEED,
            color: GrayColor::new(DEFAULT_GRAY),
        }
    }
}

impl TargetState {
    /// The tracked subset of a live snapshot.
    pub fn from_snapshot(snapshot: &ParameterSnapshot) -> Self {
        Self {
            opacity: snapshot.opacity,
            volume: snapshot.volume,
            fade: snapshot.fade,
            growth: snapshot.growth,
            speed: snapshot.speed,
            color: snapshot.color,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Preset {
    Cloudy,
    Rainy,
    Normal,
    Clear,
}

impl Preset {
    pub const ALL: [Preset; 4] = [Preset::Cloudy, Preset::Rainy, Preset::Normal, Preset::Clear];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Cloudy => "cloudy",
            Preset::Rainy => "rainy",
            Preset::Normal => "normal",
            Preset::Clear => "clear",
        }
    }

    pub fn target(self) -> TargetState {
        match self {
            Preset::Cloudy => TargetState {
                opacity: 1.0,
                volume: 13.7,
                fade: 0.0,
                growth: 2.0,
                speed: 0.1,
                color: GrayColor::WHITE,
            },
            Preset::Rainy => TargetState {
                opacity: 1.0,
                volume: 13.7,
                fade: 0.0,
                growth: 4.0,
                speed: 0.5,
                color: GrayColor::new(0x23),
            },
            Preset::Normal => TargetState {
                opacity: 0.25,
                volume: 2.2,
                fade: 0.0,
                growth: 2.0,
                speed: 0.1,
                color: GrayColor::WHITE,
            },
            Preset::Clear => TargetState {
                opacity: 0.0,
                volume: 0.1,
                fade: 0.0,
                growth: 1.0,
                speed: 0.1,
                color: GrayColor::WHITE,
            },
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParamError::UnknownPreset(s.to_string()))
    }
}
