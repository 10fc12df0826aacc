//! Viewport classification for the share menu.
//!
//! The menu adapts its presentation to the viewport width: narrow viewports
//! get a footer takeover, wide ones a tooltip popover. The class is derived
//! on demand from the current width and never cached. The width itself comes
//! from an injected [`ViewportSource`], so the state machine never reads
//! terminal state directly.

use crate::constants::{FALLBACK_CELL_WIDTH, VIEWPORT_BREAKPOINT};

// ============================================================================
// Viewport Class
// ============================================================================

/// Viewport classification derived from the current width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportClass {
    /// Width strictly below the breakpoint.
    Mobile,
    /// Width at or above the breakpoint.
    Desktop,
}

impl ViewportClass {
    /// Classifies a viewport width in layout units.
    ///
    /// The boundary is inclusive on the desktop side: width 607 is mobile,
    /// width 608 is desktop.
    #[must_use]
    pub const fn classify(width: u32) -> Self {
        if width < VIEWPORT_BREAKPOINT {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    /// Returns the presentation variant this class opens the menu with.
    #[must_use]
    pub const fn presentation(self) -> Presentation {
        match self {
            Self::Mobile => Presentation::FooterTakeover,
            Self::Desktop => Presentation::Tooltip,
        }
    }
}

// ============================================================================
// Viewport Source
// ============================================================================

/// Source of the current viewport width in layout units.
///
/// Injected into the app so the presentation choice is a pure function of
/// the supplied width; tests substitute a deterministic source.
pub trait ViewportSource {
    /// Current viewport width. `columns` is the terminal's column count,
    /// available as a fallback basis when the source has nothing better.
    fn width(&self, columns: u16) -> u32;
}

/// Production source: the terminal's reported pixel width, approximated
/// from the column count when the terminal does not report pixels.
#[derive(Debug, Default)]
pub struct TerminalViewport;

impl ViewportSource for TerminalViewport {
    fn width(&self, columns: u16) -> u32 {
        match crossterm::terminal::window_size() {
            Ok(size) if size.width > 0 => u32::from(size.width),
            _ => u32::from(columns) * FALLBACK_CELL_WIDTH,
        }
    }
}

// ============================================================================
// Presentation
// ============================================================================

/// Visual mode of an open share menu.
///
/// Exactly one of these is active while the menu is open; they are mutually
/// exclusive and distinguish only the visual effect, not the menu's
/// accessibility semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    /// Mobile mode: the card footer transforms into the link group.
    FooterTakeover,
    /// Desktop/tablet mode: the link group pops over the share button.
    Tooltip,
}

// ============================================================================
// Tests
// ============================================================================
