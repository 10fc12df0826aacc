//! Presentation surface abstraction for the share menu.
//!
//! The menu controller never touches the renderer directly. It drives a
//! [`PresentationSurface`]: a small effects interface covering the expanded
//! indicator, the link group's hidden indicator, per-link focusability, the
//! active presentation variant, and keyboard focus. [`SurfaceState`] is the
//! concrete attribute store the TUI renders from; tests substitute a
//! recording implementation to observe exactly which writes occur.

use super::viewport::Presentation;

// ============================================================================
// Focus Target
// ============================================================================

/// Which element currently holds keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusTarget {
    /// The share button.
    #[default]
    ShareButton,
    /// A link in the link group, by index.
    Link(usize),
}

// ============================================================================
// Presentation Surface
// ============================================================================

/// Effects interface between the menu state machine and the rendering
/// surface.
///
/// Implementations must treat each setter as an attribute write; the state
/// machine guarantees it performs no writes on no-op transitions, and tests
/// hold it to that.
pub trait PresentationSurface {
    /// Sets the share button's expanded indicator.
    fn set_expanded(&mut self, expanded: bool);

    /// Sets the link group's hidden indicator.
    fn set_hidden(&mut self, hidden: bool);

    /// Makes every link focusable or unfocusable.
    fn set_links_focusable(&mut self, focusable: bool);

    /// Applies the given presentation variant.
    fn apply_presentation(&mut self, presentation: Presentation);

    /// Removes whichever presentation variant is active.
    fn clear_presentation(&mut self);

    /// Moves keyboard focus to the link at `index`.
    ///
    /// Out-of-range indices are ignored.
    fn focus_link(&mut self, index: usize);

    /// Returns keyboard focus to the share button.
    fn focus_button(&mut self);

    /// Number of links in the link group.
    fn link_count(&self) -> usize;

    /// Index of the focused link, if focus is inside the link group.
    fn focused_link(&self) -> Option<usize>;
}

// ============================================================================
// Surface State
// ============================================================================

/// Concrete attribute store backing the rendered share control.
///
/// Starts at the closed baseline: collapsed, hidden, every link
/// unfocusable, no presentation, focus on the share button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceState {
    /// Share button expanded indicator.
    pub expanded: bool,
    /// Link group hidden indicator.
    pub hidden: bool,
    /// Active presentation variant, when the menu is visible.
    pub presentation: Option<Presentation>,
    /// Current keyboard focus.
    pub focus: FocusTarget,
    link_focusable: Vec<bool>,
}

impl SurfaceState {
    /// Creates a surface for a link group of `link_count` links, at the
    /// closed baseline.
    #[must_use]
    pub fn new(link_count: usize) -> Self {
        Self {
            expanded: false,
            hidden: true,
            presentation: None,
            focus: FocusTarget::ShareButton,
            link_focusable: vec![false; link_count],
        }
    }

    /// Returns `true` if the link at `index` is focusable.
    #[must_use]
    pub fn is_link_focusable(&self, index: usize) -> bool {
        self.link_focusable.get(index).copied().unwrap_or(false)
    }
}

impl PresentationSurface for SurfaceState {
    fn set_expanded(&mut self, expanded: bool) {
        self.expanded = expanded;
    }

    fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    fn set_links_focusable(&mut self, focusable: bool) {
        for slot in &mut self.link_focusable {
            *slot = focusable;
        }
    }

    fn apply_presentation(&mut self, presentation: Presentation) {
        self.presentation = Some(presentation);
    }

    fn clear_presentation(&mut self) {
        self.presentation = None;
    }

    fn focus_link(&mut self, index: usize) {
        if index < self.link_focusable.len() {
            self.focus = FocusTarget::Link(index);
        }
    }

    fn focus_button(&mut self) {
        self.focus = FocusTarget::ShareButton;
    }

    fn link_count(&self) -> usize {
        self.link_focusable.len()
    }

    fn focused_link(&self) -> Option<usize> {
        match self.focus {
            FocusTarget::Link(index) => Some(index),
            FocusTarget::ShareButton => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
