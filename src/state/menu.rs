//! The share menu state machine.
//!
//! [`MenuController`] owns the single piece of state in this application:
//! whether the share menu is open, and in which presentation. Every
//! transition drives a [`PresentationSurface`] so the expanded indicator,
//! the hidden indicator, link focusability, the visual variant, and
//! keyboard focus stay consistent with the state.
//!
//! Invariant: while the menu is open exactly one presentation variant is
//! applied, never both, never neither.

use super::config::MenuBehavior;
use super::surface::PresentationSurface;
use super::viewport::{Presentation, ViewportClass};

// ============================================================================
// Menu State
// ============================================================================

/// Open/closed state of the share menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    /// Menu is closed. Initial state.
    #[default]
    Closed,
    /// Menu is open in the given presentation.
    Open(Presentation),
}

impl MenuState {
    /// Returns `true` if the menu is open.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open(_))
    }

    /// Returns the active presentation, if open.
    #[must_use]
    pub const fn presentation(self) -> Option<Presentation> {
        match self {
            Self::Open(presentation) => Some(presentation),
            Self::Closed => None,
        }
    }
}

// ============================================================================
// Menu Controller
// ============================================================================

/// Owns the share menu state machine.
///
/// The controller is constructed with its behavior flags and drives an
/// injected surface; it holds no ambient state and knows nothing about the
/// renderer behind the surface.
#[derive(Debug)]
pub struct MenuController {
    state: MenuState,
    behavior: MenuBehavior,
}

impl MenuController {
    /// Creates a closed controller with the given behavior flags.
    #[must_use]
    pub fn new(behavior: MenuBehavior) -> Self {
        Self {
            state: MenuState::Closed,
            behavior,
        }
    }

    /// Current menu state.
    #[must_use]
    pub const fn state(&self) -> MenuState {
        self.state
    }

    /// Returns `true` if the menu is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Flips the menu between open and closed.
    ///
    /// `width` is the current viewport width in layout units; it selects
    /// the presentation when opening. Returns `true` when the caller should
    /// schedule the deferred focus move to the first link.
    pub fn toggle(&mut self, width: u32, surface: &mut impl PresentationSurface) -> bool {
        if self.state.is_open() {
            self.close(surface);
            false
        } else {
            self.open(width, surface)
        }
    }

    /// Opens the menu in the presentation appropriate for `width`.
    ///
    /// Returns `true` when the focus move to the first link should be
    /// scheduled instead of applied immediately.
    pub fn open(&mut self, width: u32, surface: &mut impl PresentationSurface) -> bool {
        if self.state.is_open() {
            return false;
        }

        let presentation = ViewportClass::classify(width).presentation();
        self.state = MenuState::Open(presentation);

        surface.set_expanded(true);
        surface.set_hidden(false);
        surface.set_links_focusable(true);
        surface.apply_presentation(presentation);

        if surface.link_count() == 0 {
            return false;
        }
        if self.behavior.defer_focus_on_open {
            return true;
        }
        surface.focus_link(0);
        false
    }

    /// Closes the menu and returns focus to the share button.
    ///
    /// Idempotent: when already closed, no attribute is written.
    pub fn close(&mut self, surface: &mut impl PresentationSurface) {
        if !self.state.is_open() {
            return;
        }
        self.state = MenuState::Closed;

        surface.set_expanded(false);
        surface.set_hidden(true);
        surface.set_links_focusable(false);
        surface.clear_presentation();
        surface.focus_button();
    }

    /// Unconditionally forces the closed baseline.
    ///
    /// Used when the viewport settles after a resize so a stale presentation
    /// is never left active. Unlike [`Self::close`] this always rewrites the
    /// baseline attributes and does not move focus.
    pub fn reset(&mut self, surface: &mut impl PresentationSurface) {
        self.state = MenuState::Closed;

        surface.set_expanded(false);
        surface.set_hidden(true);
        surface.set_links_focusable(false);
        surface.clear_presentation();
    }

    /// Moves keyboard focus to the first link.
    ///
    /// Target of the deferred focus timer. The timer is fire-and-forget and
    /// is deliberately not gated on the menu still being open when it
    /// fires.
    pub fn focus_first_link(&self, surface: &mut impl PresentationSurface) {
        if surface.link_count() > 0 {
            surface.focus_link(0);
        }
    }

    /// Moves focus to the next link, wrapping past the last back to the
    /// first.
    pub fn focus_next_link(&self, surface: &mut impl PresentationSurface) {
        let count = surface.link_count();
        if !self.state.is_open() || count == 0 {
            return;
        }
        let next = match surface.focused_link() {
            Some(index) => (index + 1) % count,
            None => 0,
        };
        surface.focus_link(next);
    }

    /// Moves focus to the previous link, wrapping before the first back to
    /// the last.
    pub fn focus_prev_link(&self, surface: &mut impl PresentationSurface) {
        let count = surface.link_count();
        if !self.state.is_open() || count == 0 {
            return;
        }
        let prev = match surface.focused_link() {
            Some(index) => (index + count - 1) % count,
            None => count - 1,
        };
        surface.focus_link(prev);
    }

    /// Tab within the link group.
    ///
    /// Past the last link the menu closes and focus returns to the button
    /// when the `tab_wrap_closes` flag is set; otherwise focus stays put at
    /// the boundary.
    pub fn tab_forward(&mut self, surface: &mut impl PresentationSurface) {
        let count = surface.link_count();
        if !self.state.is_open() || count == 0 {
            return;
        }
        match surface.focused_link() {
            Some(index) if index + 1 < count => surface.focus_link(index + 1),
            Some(_) if self.behavior.tab_wrap_closes => self.close(surface),
            Some(_) => {}
            None => surface.focus_link(0),
        }
    }

    /// Shift-tab within the link group; mirror of [`Self::tab_forward`].
    pub fn tab_backward(&mut self, surface: &mut impl PresentationSurface) {
        let count = surface.link_count();
        if !self.state.is_open() || count == 0 {
            return;
        }
        match surface.focused_link() {
            Some(0) if self.behavior.tab_wrap_closes => self.close(surface),
            Some(0) => {}
            Some(index) => surface.focus_link(index - 1),
            None => surface.focus_link(count - 1),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
