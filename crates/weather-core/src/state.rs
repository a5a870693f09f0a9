//! Live scene parameters.
//!
//! `ParameterSnapshot` is the full set of values the renderer reads each
//! frame. `LiveState` owns the current snapshot and only changes through
//! merged `ParamUpdate` writes, so the per-frame engine step and live-tuning
//! input can both write in the same frame without clobbering each other.

use glam::Vec3;
use smallvec::SmallVec;

use crate::color::GrayColor;
use crate::constants::*;

/// Every live parameter of the scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Seed,
    Segments,
    Volume,
    Opacity,
    Fade,
    Growth,
    Speed,
    BoundsX,
    BoundsY,
    BoundsZ,
    Color,
    Temperature,
    UseCelsius,
    SkyInclination,
    SkyAzimuth,
}

/// Producer-side limits for a numeric field. The engine never enforces these.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldRange {
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl FieldRange {
    const fn new(min: f32, max: f32, step: f32) -> Self {
        Self { min, max, step }
    }

    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::Seed => "seed",
            Field::Segments => "segments",
            Field::Volume => "volume",
            Field::Opacity => "opacity",
            Field::Fade => "fade",
            Field::Growth => "growth",
            Field::Speed => "speed",
            Field::BoundsX => "x",
            Field::BoundsY => "y",
            Field::BoundsZ => "z",
            Field::Color => "color",
            Field::Temperature => "temp",
            Field::UseCelsius => "useCelsius",
            Field::SkyInclination => "skyInclination",
            Field::SkyAzimuth => "skyAzimuth",
        }
    }

    /// Range and step of a numeric field; `None` for color and the unit flag.
    pub fn range(self) -> Option<FieldRange> {
        let r = match self {
            Field::Seed => FieldRange::new(1.0, 100.0, 1.0),
            Field::Segments => FieldRange::new(1.0, 80.0, 1.0),
            Field::Volume => FieldRange::new(0.0, 100.0, 0.1),
            Field::Opacity => FieldRange::new(0.0, 1.0, 0.01),
            Field::Fade => FieldRange::new(0.0, 400.0, 1.0),
            Field::Growth => FieldRange::new(0.0, 20.0, 1.0),
            Field::Speed => FieldRange::new(0.0, 1.0, 0.01),
            Field::BoundsX | Field::BoundsY | Field::BoundsZ => FieldRange::new(0.0, 100.0, 1.0),
            Field::Temperature => FieldRange::new(-10.0, 40.0, 1.0),
            Field::SkyInclination | Field::SkyAzimuth => FieldRange::new(0.0, 1.0, 0.01),
            Field::Color | Field::UseCelsius => return None,
        };
        Some(r)
    }
}

/// Point-in-time values of every live parameter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParameterSnapshot {
    pub seed: f32,
    pub segments: f32,
    pub volume: f32,
    pub opacity: f32,
    pub fade: f32,
    pub growth: f32,
    pub speed: f32,
    pub bounds: Vec3,
    pub color: GrayColor,
    pub temperature: f32,
    pub use_celsius: bool,
    pub sky_inclination: f32,
    pub sky_azimuth: f32,
}

impl Default for ParameterSnapshot {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            segments: DEFAULT_SEGMENTS,
            volume: DEFAULT_VOLUME,
            opacity: DEFAULT_OPACITY,
            fade: DEFAULT_FADE,
            growth: DEFAULT_GROWTH,
            speed: DEFAULT_SPEED,
            bounds: Vec3::from(DEFAULT_BOUNDS),
            color: GrayColor::new(DEFAULT_GRAY),
            temperature: DEFAULT_TEMPERATURE,
            use_celsius: true,
            sky_inclination: DEFAULT_SKY_INCLINATION,
            sky_azimuth: DEFAULT_SKY_AZIMUTH,
        }
    }
}

impl ParameterSnapshot {
    /// Read a numeric field.
    pub fn number(&self, field: Field) -> Option<f32> {
        let v = match field {
            Field::Seed => self.seed,
            Field::Segments => self.segments,
            Field::Volume => self.volume,
            Field::Opacity => self.opacity,
            Field::Fade => self.fade,
            Field::Growth => self.growth,
            Field::Speed => self.speed,
            Field::BoundsX => self.bounds.x,
            Field::BoundsY => self.bounds.y,
            Field::BoundsZ => self.bounds.z,
            Field::Temperature => self.temperature,
            Field::SkyInclination => self.sky_inclination,
            Field::SkyAzimuth => self.sky_azimuth,
            Field::Color | Field::UseCelsius => return None,
        };
        Some(v)
    }

    /// Write one field in place.
    pub fn apply(&mut self, update: ParamUpdate) {
        match update {
            ParamUpdate::Seed(v) => self.seed = v,
            ParamUpdate::Segments(v) => self.segments = v,
            ParamUpdate::Volume(v) => self.volume = v,
            ParamUpdate::Opacity(v) => self.opacity = v,
            ParamUpdate::Fade(v) => self.fade = v,
            ParamUpdate::Growth(v) => self.growth = v,
            ParamUpdate::Speed(v) => self.speed = v,
            ParamUpdate::BoundsX(v) => self.bounds.x = v,
            ParamUpdate::BoundsY(v) => self.bounds.y = v,
            ParamUpdate::BoundsZ(v) => self.bounds.z = v,
            ParamUpdate::Color(c) => self.color = c,
            ParamUpdate::Temperature(v) => self.temperature = v,
            ParamUpdate::UseCelsius(b) => self.use_celsius = b,
            ParamUpdate::SkyInclination(v) => self.sky_inclination = v,
            ParamUpdate::SkyAzimuth(v) => self.sky_azimuth = v,
        }
    }
}

/// A typed write to a single field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParamUpdate {
    Seed(f32),
    Segments(f32),
    Volume(f32),
    Opacity(f32),
    Fade(f32),
    Growth(f32),
    Speed(f32),
    BoundsX(f32),
    BoundsY(f32),
    BoundsZ(f32),
    Color(GrayColor),
    Temperature(f32),
    UseCelsius(bool),
    SkyInclination(f32),
    SkyAzimuth(f32),
}

impl ParamUpdate {
    pub fn field(&self) -> Field {
        match self {
            ParamUpdate::Seed(_) => Field::Seed,
            ParamUpdate::Segments(_) => Field::Segments,
            ParamUpdate::Volume(_) => Field::Volume,
            ParamUpdate::Opacity(_) => Field::Opacity,
            ParamUpdate::Fade(_) => Field::Fade,
            ParamUpdate::Growth(_) => Field::Growth,
            ParamUpdate::Speed(_) => Field::Speed,
            ParamUpdate::BoundsX(_) => Field::BoundsX,
            ParamUpdate::BoundsY(_) => Field::BoundsY,
            ParamUpdate::BoundsZ(_) => Field::BoundsZ,
            ParamUpdate::Color(_) => Field::Color,
            ParamUpdate::Temperature(_) => Field::Temperature,
            ParamUpdate::UseCelsius(_) => Field::UseCelsius,
            ParamUpdate::SkyInclination(_) => Field::SkyInclination,
            ParamUpdate::SkyAzimuth(_) => Field::SkyAzimuth,
        }
    }

    /// Build the write for a numeric field; `None` for color and the unit flag.
    pub fn number(field: Field, value: f32) -> Option<Self> {
        let u = match field {
            Field::Seed => ParamUpdate::Seed(value),
            Field::Segments => ParamUpdate::Segments(value),
            Field::Volume => ParamUpdate::Volume(value),
            Field::Opacity => ParamUpdate::Opacity(value),
            Field::Fade => ParamUpdate::Fade(value),
            Field::Growth => ParamUpdate::Growth(value),
            Field::Speed => ParamUpdate::Speed(value),
            Field::BoundsX => ParamUpdate::BoundsX(value),
            Field::BoundsY => ParamUpdate::BoundsY(value),
            Field::BoundsZ => ParamUpdate::BoundsZ(value),
            Field::Temperature => ParamUpdate::Temperature(value),
            Field::SkyInclination => ParamUpdate::SkyInclination(value),
            Field::SkyAzimuth => ParamUpdate::SkyAzimuth(value),
            Field::Color | Field::UseCelsius => return None,
        };
        Some(u)
    }
}

/// Writes committed together; the engine never produces more than six.
pub type ParamBatch = SmallVec<[ParamUpdate; 8]>;

/// Authoritative current parameter values.
#[derive(Clone, Debug, Default)]
pub struct LiveState {
    snapshot: ParameterSnapshot,
}

impl LiveState {
    pub fn new(snapshot: ParameterSnapshot) -> Self {
        Self { snapshot }
    }

    #[inline]
    pub fn read(&self) -> ParameterSnapshot {
        self.snapshot
    }

    /// Merge updates in order. Fields not named keep their current value.
    pub fn write<I>(&mut self, updates: I)
    where
        I: IntoIterator<Item = ParamUpdate>,
    {
        for u in updates {
            self.snapshot.apply(u);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_merges_without_touching_other_fields() {
        let mut live = LiveState::default();
        let before = live.read();
        live.write([ParamUpdate::Opacity(0.3), ParamUpdate::Temperature(21.0)]);
        let after = live.read();
        assert_eq!(after.opacity, 0.3);
        assert_eq!(after.temperature, 21.0);
        assert_eq!(
            ParameterSnapshot {
                opacity: before.opacity,
                temperature: before.temperature,
                ..after
            },
            before
        );
    }

    #[test]
    fn later_write_to_same_field_wins() {
        let mut live = LiveState::default();
        live.write([ParamUpdate::Volume(1.0), ParamUpdate::Volume(2.0)]);
        assert_eq!(live.read().volume, 2.0);
    }

    #[test]
    fn out_of_range_values_are_accepted() {
        let mut live = LiveState::default();
        live.write([ParamUpdate::Opacity(7.5)]);
        assert_eq!(live.read().opacity, 7.5);
    }

    #[test]
    fn numeric_update_round_trips_through_field() {
        let snap = ParameterSnapshot::default();
        for field in [
            Field::Seed,
            Field::Segments,
            Field::Volume,
            Field::Opacity,
            Field::Fade,
            Field::Growth,
            Field::Speed,
            Field::BoundsX,
            Field::BoundsY,
            Field::BoundsZ,
            Field::Temperature,
            Field::SkyInclination,
            Field::SkyAzimuth,
        ] {
            let update = ParamUpdate::number(field, 42.0).unwrap();
            assert_eq!(update.field(), field);
            let mut s = snap;
            s.apply(update);
            assert_eq!(s.number(field), Some(42.0), "{}", field.name());
            assert!(field.range().is_some());
        }
        assert_eq!(ParamUpdate::number(Field::Color, 1.0), None);
        assert_eq!(snap.number(Field::UseCelsius), None);
        assert_eq!(Field::Color.range(), None);
    }

    #[test]
    fn defaults_sit_inside_their_ranges() {
        let snap = ParameterSnapshot::default();
        for field in crate::tuning::Tuner::FIELDS {
            let r = field.range().unwrap();
            let v = snap.number(field).unwrap();
            assert!(v >= r.min && v <= r.max, "{} = {v}", field.name());
        }
    }
}
