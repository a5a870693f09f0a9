//! Frame-driven owner of the live cloud parameters.
//!
//! The host creates one `WeatherScene`, forwards preset picks and live-tuning
//! edits into it, and calls `tick` once per rendered frame before reading
//! `snapshot` for drawing.

use crate::engine::{EngineConfig, InterpolationEngine, StepOutcome};
use crate::presets::{Preset, TargetState};
use crate::readout::format_temperature;
use crate::state::{LiveState, ParamUpdate, ParameterSnapshot};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionPhase {
    Converged,
    Transitioning,
}

pub struct WeatherScene {
    live: LiveState,
    target: TargetState,
    preset: Option<Preset>,
    engine: InterpolationEngine,
    phase: TransitionPhase,
    steps_in_transition: u64,
}

impl Default for WeatherScene {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl WeatherScene {
    pub fn new(config: EngineConfig) -> Self {
        Self::with_state(ParameterSnapshot::default(), TargetState::default(), config)
    }

    pub fn with_state(live: ParameterSnapshot, target: TargetState, config: EngineConfig) -> Self {
        Self {
            live: LiveState::new(live),
            target,
            preset: None,
            engine: InterpolationEngine::new(config),
            phase: TransitionPhase::Converged,
            steps_in_transition: 0,
        }
    }

    pub fn select_preset(&mut self, preset: Preset) {
        log::info!("weather preset: {preset}");
        self.set_target(preset.target());
        self.preset = Some(preset);
    }

    /// Replace the target. Live values are kept, so an in-flight transition
    /// simply bends toward the new target on the next tick.
    pub fn set_target(&mut self, target: TargetState) {
        log::debug!("target replaced: {target:?}");
        self.target = target;
        self.preset = None;
    }

    /// Live-tuning writes, merged over the current snapshot.
    pub fn tune<I>(&mut self, updates: I)
    where
        I: IntoIterator<Item = ParamUpdate>,
    {
        self.live.write(updates);
    }

    /// Run one engine step. Call once per frame.
    pub fn tick(&mut self) -> StepOutcome {
        let outcome = self.engine.step(&mut self.live, &self.target);
        match (self.phase, outcome) {
            (TransitionPhase::Converged, StepOutcome::Stepped) => {
                log::info!("transition started");
                self.phase = TransitionPhase::Transitioning;
                self.steps_in_transition = 1;
            }
            (TransitionPhase::Transitioning, StepOutcome::Stepped) => {
                self.steps_in_transition += 1;
            }
            (TransitionPhase::Transitioning, StepOutcome::Converged) => {
                log::info!("transition converged after {} steps", self.steps_in_transition);
                self.phase = TransitionPhase::Converged;
            }
            (TransitionPhase::Converged, StepOutcome::Converged) => {}
        }
        outcome
    }

    #[inline]
    pub fn snapshot(&self) -> ParameterSnapshot {
        self.live.read()
    }

    pub fn target(&self) -> &TargetState {
        &self.target
    }

    pub fn preset(&self) -> Option<Preset> {
        self.preset
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    /// Steps taken by the current (or most recent) transition.
    pub fn steps_in_transition(&self) -> u64 {
        self.steps_in_transition
    }

    pub fn readout(&self) -> String {
        let s = self.live.read();
        format_temperature(s.temperature, s.use_celsius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_scene_is_converged() {
        let mut scene = WeatherScene::default();
        assert_eq!(scene.tick(), StepOutcome::Converged);
        assert_eq!(scene.phase(), TransitionPhase::Converged);
        assert_eq!(scene.readout(), "0 C˚");
    }

    #[test]
    fn phase_follows_transition_and_counts_steps() {
        let mut scene = WeatherScene::default();
        scene.select_preset(Preset::Clear);
        assert_eq!(scene.preset(), Some(Preset::Clear));
        assert_eq!(scene.tick(), StepOutcome::Stepped);
        assert_eq!(scene.phase(), TransitionPhase::Transitioning);
        let mut guard = 0;
        while scene.tick() == StepOutcome::Stepped {
            guard += 1;
            assert!(guard < 10_000, "never converged");
        }
        assert_eq!(scene.phase(), TransitionPhase::Converged);
        assert_eq!(scene.steps_in_transition(), guard + 1);
        assert_eq!(
            TargetState::from_snapshot(&scene.snapshot()),
            Preset::Clear.target()
        );
    }

    #[test]
    fn custom_target_clears_preset() {
        let mut scene = WeatherScene::default();
        scene.select_preset(Preset::Rainy);
        scene.set_target(TargetState::default());
        assert_eq!(scene.preset(), None);
    }
}
