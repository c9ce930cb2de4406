//! Input mapping
//!
//! Keyboard, mouse and touch all collapse into a handful of actions. The
//! game itself only understands `Activate`; the rest are shell toggles.

/// A player intent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Flap / start / restart
    Activate,
    /// Mute or unmute audio
    ToggleMute,
    /// Hand control to the autopilot (or take it back)
    ToggleDemo,
}

impl Action {
    /// Whether the browser's default handling should be suppressed
    /// (space would otherwise scroll the page)
    pub fn prevents_default(&self) -> bool {
        matches!(self, Action::Activate)
    }
}

/// Source of a pointer press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
}

/// Map a `KeyboardEvent.code` to an action
pub fn action_for_key(code: &str) -> Option<Action> {
    match code {
        "Space" | "Enter" | "ArrowUp" => Some(Action::Activate),
        "KeyM" => Some(Action::ToggleMute),
        "KeyD" => Some(Action::ToggleDemo),
        _ => None,
    }
}

/// Map a pointer press to an action
///
/// `button` is `MouseEvent.button` (0 = primary) and is ignored for touch.
pub fn action_for_pointer(kind: PointerKind, button: i16) -> Option<Action> {
    match kind {
        PointerKind::Touch => Some(Action::Activate),
        PointerKind::Mouse if button == 0 => Some(Action::Activate),
        PointerKind::Mouse => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys() {
        assert_eq!(action_for_key("Space"), Some(Action::Activate));
        assert_eq!(action_for_key("Enter"), Some(Action::Activate));
        assert_eq!(action_for_key("ArrowUp"), Some(Action::Activate));
        assert_eq!(action_for_key("KeyM"), Some(Action::ToggleMute));
        assert_eq!(action_for_key("KeyD"), Some(Action::ToggleDemo));
        assert_eq!(action_for_key("KeyQ"), None);
        // Codes are case-sensitive names, not characters
        assert_eq!(action_for_key("space"), None);
    }

    #[test]
    fn test_pointers() {
        assert_eq!(
            action_for_pointer(PointerKind::Mouse, 0),
            Some(Action::Activate)
        );
        assert_eq!(action_for_pointer(PointerKind::Mouse, 2), None);
        assert_eq!(
            action_for_pointer(PointerKind::Touch, -1),
            Some(Action::Activate)
        );
    }

    #[test]
    fn test_prevent_default() {
        assert!(Action::Activate.prevents_default());
        assert!(!Action::ToggleMute.prevents_default());
    }
}
