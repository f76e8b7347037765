//! Translates raw keys into engine intents for the active display mode.
use crate::core::mode::DisplayMode;
use crate::core::motion::{Step, Turn};

/// Keys the engine reacts to, independent of the windowing backend.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Tab,
    Escape,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    Move(Step),
    Turn(Turn),
    CycleMode,
    Quit,
}

/// Arrow keys walk and turn in first person, and step along the world
/// axes in top-down view. The art modes ignore them.
pub fn translate(key: Key, mode: DisplayMode) -> Option<Intent> {
    match key {
        Key::Escape => Some(Intent::Quit),
        Key::Tab => Some(Intent::CycleMode),
        _ if !mode.uses_world() => None,
        _ => match mode {
            DisplayMode::Raycast => match key {
                Key::Up => Some(Intent::Move(Step::Forward)),
                Key::Down => Some(Intent::Move(Step::Backward)),
                Key::Left => Some(Intent::Turn(Turn::Left)),
                Key::Right => Some(Intent::Turn(Turn::Right)),
                _ => None,
            },
            DisplayMode::TopDown => match key {
                Key::Up => Some(Intent::Move(Step::Up)),
                Key::Down => Some(Intent::Move(Step::Down)),
                Key::Left => Some(Intent::Move(Step::Left)),
                Key::Right => Some(Intent::Move(Step::Right)),
                _ => None,
            },
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_person_bindings() {
        let m = DisplayMode::Raycast;
        assert_eq!(translate(Key::Up, m), Some(Intent::Move(Step::Forward)));
        assert_eq!(translate(Key::Left, m), Some(Intent::Turn(Turn::Left)));
        assert_eq!(translate(Key::Right, m), Some(Intent::Turn(Turn::Right)));
    }

    #[test]
    fn top_down_never_turns() {
        for key in [Key::Up, Key::Down, Key::Left, Key::Right] {
            assert!(matches!(translate(key, DisplayMode::TopDown), Some(Intent::Move(_))));
        }
    }

    #[test]
    fn global_keys_work_everywhere() {
        for mode in DisplayMode::ALL {
            assert_eq!(translate(Key::Escape, mode), Some(Intent::Quit));
            assert_eq!(translate(Key::Tab, mode), Some(Intent::CycleMode));
        }
        assert_eq!(translate(Key::Up, DisplayMode::Art), None);
    }

    #[test]
    fn arrows_only_reach_world_modes() {
        for mode in DisplayMode::ALL {
            for key in [Key::Up, Key::Down, Key::Left, Key::Right] {
                assert_eq!(translate(key, mode).is_some(), mode.uses_world(), "{:?} in {:?}", key, mode);
            }
        }
    }
}
