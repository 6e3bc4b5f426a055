use raylib::prelude::*;
use crate::slideshow::Direction;

/// Left half goes back, right half goes forward.
pub fn direction_for_pointer(x: f32, logical_width: f32) -> Direction {
    if x < logical_width / 2.0 { Direction::Backward } else { Direction::Forward }
}

pub fn direction_for_key(key: KeyboardKey) -> Option<Direction> {
    match key {
        KeyboardKey::KEY_RIGHT | KeyboardKey::KEY_SPACE => Some(Direction::Forward),
        KeyboardKey::KEY_LEFT => Some(Direction::Backward),
        _ => None,
    }
}

/// Reads this frame's click, tap or key press. Raylib reports the primary
/// touch point as the left mouse button, so taps come through here too.
pub fn poll(rl: &RaylibHandle, logical_width: f32) -> Option<Direction> {
    if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
        return Some(direction_for_pointer(rl.get_mouse_x() as f32, logical_width));
    }
    [KeyboardKey::KEY_RIGHT, KeyboardKey::KEY_SPACE, KeyboardKey::KEY_LEFT]
        .into_iter()
        .find(|key| rl.is_key_pressed(*key))
        .and_then(direction_for_key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_halves_map_to_directions() {
        assert_eq!(direction_for_pointer(10.0, 800.0), Direction::Backward);
        assert_eq!(direction_for_pointer(399.9, 800.0), Direction::Backward);
        assert_eq!(direction_for_pointer(400.0, 800.0), Direction::Forward);
        assert_eq!(direction_for_pointer(790.0, 800.0), Direction::Forward);
    }

    #[test]
    fn only_arrow_keys_and_space_advance() {
        assert_eq!(direction_for_key(KeyboardKey::KEY_RIGHT), Some(Direction::Forward));
        assert_eq!(direction_for_key(KeyboardKey::KEY_SPACE), Some(Direction::Forward));
        assert_eq!(direction_for_key(KeyboardKey::KEY_LEFT), Some(Direction::Backward));
        assert_eq!(direction_for_key(KeyboardKey::KEY_A), None);
    }
}
