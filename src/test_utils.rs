//! Shared test utilities and Mother pattern factories.
//!
//! Reusable fixtures and recording test doubles so setup code is not
//! copy-pasted across test modules.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use url::Url;

use crate::constants::FALLBACK_CELL_WIDTH;
use crate::domain::{ShareContext, ShareError};
use crate::share::{NativeShare, NativeShareRequest, PopupSpec, UrlLauncher};
use crate::state::surface::{PresentationSurface, SurfaceState};
use crate::state::viewport::{Presentation, ViewportSource};

// ============================================================================
// Mother Pattern Factories
// ============================================================================

pub struct ContextMother;

impl ContextMother {
    /// The canonical example article: no description, no image.
    #[must_use]
    pub fn example() -> ShareContext {
        ShareContext::new(
            "https://example.com/article",
            "Shift the overall look and feel",
            "",
            None,
        )
    }

    /// Example article with a description.
    #[must_use]
    pub fn with_description() -> ShareContext {
        ShareContext::new(
            "https://example.com/article",
            "Shift the overall look and feel",
            "Ever been in a room and felt like something was missing?",
            None,
        )
    }

    /// Example article with a lead image.
    #[must_use]
    pub fn with_image() -> ShareContext {
        ShareContext::new(
            "https://example.com/article",
            "Shift the overall look and feel",
            "",
            Some("https://example.com/drawers.jpg".to_string()),
        )
    }
}

// ============================================================================
// Viewport Sources
// ============================================================================

/// [`ViewportSource`] double deriving the width from the column count
/// alone, unaffected by whatever terminal the tests run in.
#[derive(Debug, Default)]
pub struct CellViewport;

impl ViewportSource for CellViewport {
    fn width(&self, columns: u16) -> u32 {
        u32::from(columns) * FALLBACK_CELL_WIDTH
    }
}

/// [`ViewportSource`] double returning a fixed width.
#[derive(Debug)]
pub struct FixedViewport(pub u32);

impl ViewportSource for FixedViewport {
    fn width(&self, _columns: u16) -> u32 {
        self.0
    }
}

// ============================================================================
// Recording Launcher
// ============================================================================

/// [`UrlLauncher`] double that records every launch instead of opening a
/// browser. Clones share the same record, so a test can keep a handle while
/// the dispatcher owns another.
#[derive(Debug, Clone, Default)]
pub struct RecordingLauncher {
    launches: Arc<Mutex<Vec<(String, PopupSpec)>>>,
}

impl RecordingLauncher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every launched URL with its popup spec, in order.
    #[must_use]
    pub fn launches(&self) -> Vec<(String, PopupSpec)> {
        self.launches.lock().unwrap().clone()
    }
}

impl UrlLauncher for RecordingLauncher {
    fn launch(&self, url: &Url, popup: PopupSpec) -> Result<(), ShareError> {
        self.launches
            .lock()
            .unwrap()
            .push((url.as_str().to_string(), popup));
        Ok(())
    }
}

/// [`UrlLauncher`] double that always fails.
#[derive(Debug, Default)]
pub struct FailingLauncher;

impl UrlLauncher for FailingLauncher {
    fn launch(&self, _url: &Url, _popup: PopupSpec) -> Result<(), ShareError> {
        Err(ShareError::Browser(std::io::Error::other(
            "no browser in test environment",
        )))
    }
}

// ============================================================================
// Recording Native Share
// ============================================================================

/// [`NativeShare`] double with a scripted outcome.
#[derive(Debug, Clone)]
pub struct ScriptedNativeShare {
    cancelled: bool,
    requests: Arc<Mutex<Vec<NativeShareRequest>>>,
}

impl ScriptedNativeShare {
    #[must_use]
    pub fn succeeding() -> Self {
        Self {
            cancelled: false,
            requests: Arc::default(),
        }
    }

    #[must_use]
    pub fn cancelling() -> Self {
        Self {
            cancelled: true,
            requests: Arc::default(),
        }
    }

    #[must_use]
    pub fn requests(&self) -> Vec<NativeShareRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl NativeShare for ScriptedNativeShare {
    fn share(&self, request: &NativeShareRequest) -> Result<(), ShareError> {
        self.requests.lock().unwrap().push(request.clone());
        if self.cancelled {
            Err(ShareError::NativeCancelled)
        } else {
            Ok(())
        }
    }
}

// ============================================================================
// Counting Surface
// ============================================================================

/// [`PresentationSurface`] wrapper counting attribute writes, for asserting
/// that no-op transitions write nothing.
#[derive(Debug)]
pub struct CountingSurface {
    inner: SurfaceState,
    writes: usize,
}

impl CountingSurface {
    #[must_use]
    pub fn new(link_count: usize) -> Self {
        Self {
            inner: SurfaceState::new(link_count),
            writes: 0,
        }
    }

    /// Number of attribute writes performed so far.
    #[must_use]
    pub const fn writes(&self) -> usize {
        self.writes
    }

    /// The wrapped surface state.
    #[must_use]
    pub const fn state(&self) -> &SurfaceState {
        &self.inner
    }
}

impl PresentationSurface for CountingSurface {
    fn set_expanded(&mut self, expanded: bool) {
        self.writes += 1;
        self.inner.set_expanded(expanded);
    }

    fn set_hidden(&mut self, hidden: bool) {
        self.writes += 1;
        self.inner.set_hidden(hidden);
    }

    fn set_links_focusable(&mut self, focusable: bool) {
        self.writes += 1;
        self.inner.set_links_focusable(focusable);
    }

    fn apply_presentation(&mut self, presentation: Presentation) {
        self.writes += 1;
        self.inner.apply_presentation(presentation);
    }

    fn clear_presentation(&mut self) {
        self.writes += 1;
        self.inner.clear_presentation();
    }

    fn focus_link(&mut self, index: usize) {
        self.writes += 1;
        self.inner.focus_link(index);
    }

    fn focus_button(&mut self) {
        self.writes += 1;
        self.inner.focus_button();
    }

    fn link_count(&self) -> usize {
        self.inner.link_count()
    }

    fn focused_link(&self) -> Option<usize> {
        self.inner.focused_link()
    }
}
