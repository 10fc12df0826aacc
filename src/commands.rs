//! Command pattern for key event handling.
//!
//! This module provides a clean separation between key input and application
//! actions, making it easy to:
//! - Test key mappings in isolation
//! - Add new keybindings
//! - Support future keybinding customization

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// ============================================================================
// Input Context
// ============================================================================

/// Represents the current input context for key mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Browsing the article card; the share menu is closed.
    Card,
    /// The share menu is open and the link group is interactive.
    ShareMenu,
}

// ============================================================================
// App Commands
// ============================================================================

/// All possible commands the application can execute.
///
/// Commands are the result of mapping key events to application actions;
/// they represent the "what" of user intent, decoupled from the "how" of
/// key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    // === Application Control ===
    /// Exit the application.
    Quit,

    // === Share Menu Control ===
    /// Flip the share menu between open and closed.
    ToggleShareMenu,
    /// Close the share menu.
    Dismiss,

    // === Link Group Navigation ===
    /// Move focus to the next link, wrapping.
    FocusNextLink,
    /// Move focus to the previous link, wrapping.
    FocusPrevLink,
    /// Tab forward within the link group.
    TabForward,
    /// Tab backward within the link group.
    TabBackward,

    // === Dispatch ===
    /// Open the focused link's share URL and close the menu.
    ActivateFocusedLink,
    /// Invoke the OS-level share path.
    NativeShare,

    /// No operation.
    Noop,
}

// ============================================================================
// Key Mapping
// ============================================================================

/// Maps a key event to a command for the given input context.
#[must_use]
pub fn map_key(key: KeyEvent, context: &InputContext) -> AppCommand {
    // Ctrl-C quits from any context.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return AppCommand::Quit;
    }

    match context {
        InputContext::Card => map_card_key(key),
        InputContext::ShareMenu => map_share_menu_key(key),
    }
}

fn map_card_key(key: KeyEvent) -> AppCommand {
    match key.code {
        KeyCode::Char('q') => AppCommand::Quit,
        KeyCode::Char('s') | KeyCode::Enter | KeyCode::Char(' ') => AppCommand::ToggleShareMenu,
        _ => AppCommand::Noop,
    }
}

fn map_share_menu_key(key: KeyEvent) -> AppCommand {
    match key.code {
        KeyCode::Esc => AppCommand::Dismiss,
        KeyCode::Right | KeyCode::Down => AppCommand::FocusNextLink,
        KeyCode::Left | KeyCode::Up => AppCommand::FocusPrevLink,
        KeyCode::Tab => AppCommand::TabForward,
        KeyCode::BackTab => AppCommand::TabBackward,
        KeyCode::Enter | KeyCode::Char(' ') => AppCommand::ActivateFocusedLink,
        KeyCode::Char('s') => AppCommand::ToggleShareMenu,
        KeyCode::Char('n') => AppCommand::NativeShare,
        KeyCode::Char('q') => AppCommand::Quit,
        _ => AppCommand::Noop,
    }
}

// ============================================================================
// Tests
// ============================================================================
