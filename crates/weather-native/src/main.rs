mod controls;
mod gpu;

use weather_core::{Preset, Tuner, WeatherScene};
use winit::{
    event::*,
    event_loop::EventLoop,
    keyboard::ModifiersState,
    window::WindowBuilder,
};

use controls::{action_for_key, Action, HELP};
use gpu::GpuState;

const WINDOW_TITLE: &str = "tenki";

fn window_title(scene: &WeatherScene, tuner: &Tuner) -> String {
    let preset = scene.preset().map_or("custom", Preset::name);
    let field = tuner.selected();
    let value = scene
        .snapshot()
        .number(field)
        .map(|v| format!("{v:.2}"))
        .unwrap_or_default();
    format!(
        "{WINDOW_TITLE} | {preset} ({:?}) | {} | {} = {value}",
        scene.phase(),
        scene.readout(),
        field.name()
    )
}

fn apply_action(action: Action, scene: &mut WeatherScene, tuner: &mut Tuner) {
    match action {
        Action::SelectPreset(p) => scene.select_preset(p),
        Action::NextField => log::info!("tuning {}", tuner.next().name()),
        Action::PrevField => log::info!("tuning {}", tuner.prev().name()),
        Action::Nudge(steps) => {
            if let Some(update) = tuner.nudge(&scene.snapshot(), steps) {
                log::debug!("tune {update:?}");
                scene.tune([update]);
            }
        }
        Action::ToggleUnits => {
            let update = Tuner::toggle_units(&scene.snapshot());
            scene.tune([update]);
        }
        Action::Reseed => {
            let update = Tuner::reseed(&mut rand::thread_rng());
            log::info!("reseed {update:?}");
            scene.tune([update]);
        }
        // handled by the event loop
        Action::Quit => {}
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let mut scene = WeatherScene::default();
    if let Some(arg) = std::env::args().nth(1) {
        scene.select_preset(arg.parse::<Preset>()?);
    }
    let mut tuner = Tuner::default();
    for line in HELP {
        log::info!("{line}");
    }

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(WINDOW_TITLE)
        .build(&event_loop)?;

    let mut gpu = pollster::block_on(GpuState::new(&window))?;
    let mut modifiers = ModifiersState::empty();
    let mut title = String::new();

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => gpu.resize(size),
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::ModifiersChanged(m) => modifiers = m.state(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key,
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => match action_for_key(&logical_key, modifiers.shift_key()) {
                Some(Action::Quit) => elwt.exit(),
                Some(action) => apply_action(action, &mut scene, &mut tuner),
                None => {}
            },
            _ => {}
        },
        Event::AboutToWait => {
            scene.tick();
            let next_title = window_title(&scene, &tuner);
            if next_title != title {
                gpu.window.set_title(&next_title);
                title = next_title;
            }
            match gpu.render(&scene.snapshot()) {
                Ok(_) => gpu.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost) => gpu.resize(gpu.window.inner_size()),
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(e) => log::warn!("surface error: {e}"),
            }
        }
        _ => {}
    })?;
    Ok(())
}
