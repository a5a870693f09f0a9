use weather_core::Preset;
use winit::keyboard::{Key, NamedKey};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    SelectPreset(Preset),
    NextField,
    PrevField,
    Nudge(i32),
    ToggleUnits,
    Reseed,
    Quit,
}

#[inline]
pub fn preset_for_key(key: &str) -> Option<Preset> {
    match key {
        "1" | "c" | "C" => Some(Preset::Cloudy),
        "2" | "r" | "R" => Some(Preset::Rainy),
        "3" | "n" | "N" => Some(Preset::Normal),
        "4" | "x" | "X" => Some(Preset::Clear),
        _ => None,
    }
}

pub fn action_for_key(key: &Key, shift: bool) -> Option<Action> {
    match key {
        Key::Named(NamedKey::Tab) => Some(if shift {
            Action::PrevField
        } else {
            Action::NextField
        }),
        Key::Named(NamedKey::ArrowUp) => Some(Action::Nudge(if shift { 10 } else { 1 })),
        Key::Named(NamedKey::ArrowDown) => Some(Action::Nudge(if shift { -10 } else { -1 })),
        Key::Named(NamedKey::Escape) => Some(Action::Quit),
        Key::Character(c) => match c.as_str() {
            "u" | "U" => Some(Action::ToggleUnits),
            "s" | "S" => Some(Action::Reseed),
            other => preset_for_key(other).map(Action::SelectPreset),
        },
        _ => None,
    }
}

pub const HELP: &[&str] = &[
    "1/C cloudy  2/R rainy  3/N normal  4/X clear",
    "Tab / Shift+Tab  select tuned field",
    "Up / Down  nudge field (Shift = x10)",
    "U  toggle C/F   S  reseed   Esc  quit",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_and_letters_pick_presets() {
        assert_eq!(preset_for_key("1"), Some(Preset::Cloudy));
        assert_eq!(preset_for_key("r"), Some(Preset::Rainy));
        assert_eq!(preset_for_key("N"), Some(Preset::Normal));
        assert_eq!(preset_for_key("4"), Some(Preset::Clear));
        assert_eq!(preset_for_key("5"), None);
    }

    #[test]
    fn shift_reverses_tab_and_scales_nudge() {
        let tab = Key::Named(NamedKey::Tab);
        assert_eq!(action_for_key(&tab, false), Some(Action::NextField));
        assert_eq!(action_for_key(&tab, true), Some(Action::PrevField));
        let down = Key::Named(NamedKey::ArrowDown);
        assert_eq!(action_for_key(&down, true), Some(Action::Nudge(-10)));
    }

    #[test]
    fn character_keys_map_to_actions() {
        assert_eq!(
            action_for_key(&Key::Character("x".into()), false),
            Some(Action::SelectPreset(Preset::Clear))
        );
        assert_eq!(
            action_for_key(&Key::Character("u".into()), false),
            Some(Action::ToggleUnits)
        );
        assert_eq!(action_for_key(&Key::Character("q".into()), false), None);
    }
}
