//! Live-tuning cursor: pick a numeric field and nudge it by its step.

use rand::Rng;

use crate::state::{Field, ParamUpdate, ParameterSnapshot};

#[derive(Clone, Debug, Default)]
pub struct Tuner {
    index: usize,
}

impl Tuner {
    pub const FIELDS: [Field; 13] = [
        Field::Opacity,
        Field::Volume,
        Field::Fade,
        Field::Growth,
        Field::Speed,
        Field::Seed,
        Field::Segments,
        Field::BoundsX,
        Field::BoundsY,
        Field::BoundsZ,
        Field::Temperature,
        Field::SkyInclination,
        Field::SkyAzimuth,
    ];

    #[inline]
    pub fn selected(&self) -> Field {
        Self::FIELDS[self.index]
    }

    pub fn next(&mut self) -> Field {
        self.index = (self.index + 1) % Self::FIELDS.len();
        self.selected()
    }

    pub fn prev(&mut self) -> Field {
        self.index = (self.index + Self::FIELDS.len() - 1) % Self::FIELDS.len();
        self.selected()
    }

    /// Move the selected field `steps` increments, kept on its step grid and
    /// clamped to its range.
    pub fn nudge(&self, snapshot: &ParameterSnapshot, steps: i32) -> Option<ParamUpdate> {
        let field = self.selected();
        let range = field.range()?;
        let current = snapshot.number(field)?;
        let grid = (current / range.step).round() + steps as f32;
        ParamUpdate::number(field, range.clamp(grid * range.step))
    }

    pub fn toggle_units(snapshot: &ParameterSnapshot) -> ParamUpdate {
        ParamUpdate::UseCelsius(!snapshot.use_celsius)
    }

    pub fn reseed<R: Rng>(rng: &mut R) -> ParamUpdate {
        ParamUpdate::Seed(f32::from(rng.gen_range(1u8..=100)))
    }
}
