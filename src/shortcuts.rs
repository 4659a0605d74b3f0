/// Global keyboard shortcuts

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Ctrl+Enter (Cmd+Enter on macOS)
    Submit,
    /// Escape
    ClearInput,
}

/// Map a keydown to a shortcut, if any
///
/// Either control or meta counts as the modifier so the same binding works
/// across platforms.
pub fn shortcut_for(key: &str, ctrl: bool, meta: bool) -> Option<Shortcut> {
    match key {
        "Enter" if ctrl || meta => Some(Shortcut::Submit),
        "Escape" => Some(Shortcut::ClearInput),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_enter_submits() {
        assert_eq!(shortcut_for("Enter", true, false), Some(Shortcut::Submit));
        assert_eq!(shortcut_for("Enter", false, true), Some(Shortcut::Submit));
        assert_eq!(shortcut_for("Enter", true, true), Some(Shortcut::Submit));
    }

    #[test]
    fn test_plain_enter_is_ignored() {
        assert_eq!(shortcut_for("Enter", false, false), None);
    }

    #[test]
    fn test_escape_clears_with_or_without_modifiers() {
        assert_eq!(shortcut_for("Escape", false, false), Some(Shortcut::ClearInput));
        assert_eq!(shortcut_for("Escape", true, false), Some(Shortcut::ClearInput));
    }

    #[test]
    fn test_other_keys() {
        assert_eq!(shortcut_for("a", true, false), None);
        assert_eq!(shortcut_for("Tab", false, false), None);
    }
}
