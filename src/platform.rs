//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for list shortcuts
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const ACTION_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const ACTION_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display
/// Ctrl+S works on all platforms
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Add tech shortcut display
#[cfg(target_os = "macos")]
pub const ADD_TECH_SHORTCUT: &str = "Cmd+N";

#[cfg(not(target_os = "macos"))]
pub const ADD_TECH_SHORTCUT: &str = "Ctrl+N";

/// Remove focused tech shortcut display
#[cfg(target_os = "macos")]
pub const REMOVE_TECH_SHORTCUT: &str = "Cmd+D";

#[cfg(not(target_os = "macos"))]
pub const REMOVE_TECH_SHORTCUT: &str = "Ctrl+D";
