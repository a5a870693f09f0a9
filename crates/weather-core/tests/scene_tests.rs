// Host-side integration tests for the frame-driven scene driver.

use weather_core::*;

fn tick_n(scene: &mut WeatherScene, n: usize) {
    for _ in 0..n {
        scene.tick();
    }
}

#[test]
fn redirect_keeps_live_values_and_bends_toward_new_target() {
    let mut scene = WeatherScene::default();
    scene.select_preset(Preset::Cloudy);
    tick_n(&mut scene, 50);
    let mid = scene.snapshot();
    assert!(mid.opacity > 0.8 && mid.opacity < 1.0);

    scene.select_preset(Preset::Clear);
    assert_eq!(scene.snapshot(), mid);
    assert_eq!(scene.phase(), TransitionPhase::Transitioning);

    scene.tick();
    let next = scene.snapshot();
    assert!(next.opacity < mid.opacity, "still heading to the old target");
    assert!(next.volume < mid.volume);
}

#[test]
fn tuning_in_the_same_frame_is_merged_not_lost() {
    let mut scene = WeatherScene::default();
    scene.select_preset(Preset::Rainy);
    scene.tune([ParamUpdate::Temperature(18.0), ParamUpdate::Opacity(0.5)]);
    scene.tick();
    let s = scene.snapshot();
    assert_eq!(s.temperature, 18.0);
    // continued from the tuned value: 0.5 + 0.5 * 0.01
    assert!((s.opacity - 0.505).abs() < 1e-6, "opacity {}", s.opacity);
    assert_eq!(scene.readout(), "18 C˚");
}

#[test]
fn tuner_edits_flow_into_the_readout() {
    let mut scene = WeatherScene::default();
    let mut tuner = Tuner::default();
    while tuner.selected() != Field::Temperature {
        tuner.next();
    }
    let update = tuner.nudge(&scene.snapshot(), 5).unwrap();
    scene.tune([update, Tuner::toggle_units(&scene.snapshot())]);
    assert_eq!(scene.readout(), "5 F˚");
    assert_eq!(scene.tick(), StepOutcome::Converged);
}

#[test]
fn converges_back_after_a_tuned_tracked_field() {
    let mut scene = WeatherScene::default();
    scene.tune([ParamUpdate::Volume(40.0)]);
    let mut n = 0;
    while scene.tick() == StepOutcome::Stepped {
        n += 1;
        assert!(n < 5_000);
    }
    assert_eq!(scene.snapshot().volume, TargetState::default().volume);
}
