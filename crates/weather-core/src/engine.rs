use crate::color::GrayColor;
use crate::constants::{LERP_RATE, SNAP_TOLERANCE};
use crate::presets::TargetState;
use crate::state::{Field, LiveState, ParamBatch, ParamUpdate, ParameterSnapshot};

/// How a tracked field moves toward its target on each step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateKind {
    /// Jumps straight to the target.
    Passthrough,
    /// Covers a fixed fraction of the distance, snapping once close enough.
    ScalarLerp,
    /// Same fraction on the gray channel, quantized to whole levels.
    ColorLerp,
}

/// Fields driven by the engine. Everything else in the snapshot is left alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TrackedField {
    Opacity,
    Volume,
    Fade,
    Growth,
    Speed,
    Color,
}

impl TrackedField {
    pub const ALL: [TrackedField; 6] = [
        TrackedField::Opacity,
        TrackedField::Volume,
        TrackedField::Fade,
        TrackedField::Growth,
        TrackedField::Speed,
        TrackedField::Color,
    ];

    pub fn kind(self) -> UpdateKind {
        match self {
            TrackedField::Opacity
            | TrackedField::Volume
            | TrackedField::Fade
            | TrackedField::Growth => UpdateKind::ScalarLerp,
            TrackedField::Speed => UpdateKind::Passthrough,
            TrackedField::Color => UpdateKind::ColorLerp,
        }
    }

    pub fn field(self) -> Field {
        match self {
            TrackedField::Opacity => Field::Opacity,
            TrackedField::Volume => Field::Volume,
            TrackedField::Fade => Field::Fade,
            TrackedField::Growth => Field::Growth,
            TrackedField::Speed => Field::Speed,
            TrackedField::Color => Field::Color,
        }
    }

    // Color reads as its channel intensity (0..=255).
    fn read_live(self, s: &ParameterSnapshot) -> f32 {
        match self {
            TrackedField::Opacity => s.opacity,
            TrackedField::Volume => s.volume,
            TrackedField::Fade => s.fade,
            TrackedField::Growth => s.growth,
            TrackedField::Speed => s.speed,
            TrackedField::Color => s.color.intensity() as f32,
        }
    }

    fn read_target(self, t: &TargetState) -> f32 {
        match self {
            TrackedField::Opacity => t.opacity,
            TrackedField::Volume => t.volume,
            TrackedField::Fade => t.fade,
            TrackedField::Growth => t.growth,
            TrackedField::Speed => t.speed,
            TrackedField::Color => t.color.intensity() as f32,
        }
    }

    fn write(self, value: f32) -> ParamUpdate {
        match self {
            TrackedField::Opacity => ParamUpdate::Opacity(value),
            TrackedField::Volume => ParamUpdate::Volume(value),
            TrackedField::Fade => ParamUpdate::Fade(value),
            TrackedField::Growth => ParamUpdate::Growth(value),
            TrackedField::Speed => ParamUpdate::Speed(value),
            TrackedField::Color => ParamUpdate::Color(GrayColor::new(value.clamp(0.0, 255.0) as u8)),
        }
    }
}

#[derive(Clone, Debug)]
pub struct EngineConfig {
    pub rate: f32,
    pub snap_tolerance: f32,
    /// When false (the default) a color-only difference does not start a
    /// transition; color still moves while any other tracked field differs.
    pub color_drives_transition: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rate: LERP_RATE,
            snap_tolerance: SNAP_TOLERANCE,
            color_drives_transition: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Nothing to do; live state was not written.
    Converged,
    /// One corrective step was committed.
    Stepped,
}

/// Moves live parameters toward a target by a fixed fraction per invocation.
///
/// The step is frame-count driven: it has no notion of elapsed time, so the
/// apparent transition length follows the host's frame rate.
#[derive(Clone, Debug, Default)]
pub struct InterpolationEngine {
    pub config: EngineConfig,
}

impl InterpolationEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// True when any tracked field that can start a transition differs from
    /// the target. Exact comparison, so a snapped field stops counting.
    pub fn is_diverging(&self, live: &ParameterSnapshot, target: &TargetState) -> bool {
        TrackedField::ALL
            .into_iter()
            .filter(|f| self.config.color_drives_transition || f.kind() != UpdateKind::ColorLerp)
            .any(|f| f.read_live(live) != f.read_target(target))
    }

    /// Compute the next value of every tracked field without committing.
    pub fn plan(&self, live: &ParameterSnapshot, target: &TargetState) -> ParamBatch {
        let rate = self.config.rate;
        TrackedField::ALL
            .into_iter()
            .map(|f| match f.kind() {
                UpdateKind::Passthrough => f.write(f.read_target(target)),
                UpdateKind::ScalarLerp => f.write(lerp_scalar(
                    f.read_live(live),
                    f.read_target(target),
                    rate,
                    self.config.snap_tolerance,
                )),
                UpdateKind::ColorLerp => ParamUpdate::Color(lerp_gray(live.color, target.color, rate)),
            })
            .collect()
    }

    /// Advance one frame. Writes all tracked fields in one batch, or nothing
    /// at all once converged.
    pub fn step(&self, live: &mut LiveState, target: &TargetState) -> StepOutcome {
        let current = live.read();
        if !self.is_diverging(&current, target) {
            return StepOutcome::Converged;
        }
        live.write(self.plan(&current, target));
        StepOutcome::Stepped
    }
}

/// Move `rate` of the way toward `target`, or land on it when within
/// `tolerance` or when the step is too small to change an `f32` at this magnitude.
#[inline]
pub fn lerp_scalar(current: f32, target: f32, rate: f32, tolerance: f32) -> f32 {
    let delta = target - current;
    let next = current + delta * rate;
    if delta.abs() < tolerance || next == current {
        target
    } else {
        next
    }
}

/// Gray-level lerp. The result is rounded toward the target so an 8-bit
/// channel advances at least one level per step and never overshoots.
pub fn lerp_gray(current: GrayColor, target: GrayColor, rate: f32) -> GrayColor {
    let c = current.intensity() as f32;
    let t = target.intensity() as f32;
    let next = c + (t - c) * rate;
    let q = if t > c { next.ceil() } else { next.floor() };
    GrayColor::new(q.clamp(0.0, 255.0) as u8)
}
