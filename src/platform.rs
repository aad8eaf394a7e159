//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for wizard shortcuts
/// - macOS: SUPER (Cmd key), Ctrl also accepted
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Whether a key event carries the shortcut modifier
pub fn has_shortcut_modifier(modifiers: KeyModifiers) -> bool {
    modifiers.contains(SHORTCUT_MODIFIER) || modifiers.contains(KeyModifiers::CONTROL)
}

/// Submit shortcut display for help text
/// Ctrl+S works on all platforms
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Next step shortcut display
#[cfg(target_os = "macos")]
pub const NEXT_SHORTCUT: &str = "Cmd+N";

#[cfg(not(target_os = "macos"))]
pub const NEXT_SHORTCUT: &str = "Ctrl+N";

/// Previous step shortcut display
#[cfg(target_os = "macos")]
pub const BACK_SHORTCUT: &str = "Cmd+B";

#[cfg(not(target_os = "macos"))]
pub const BACK_SHORTCUT: &str = "Ctrl+B";
