//! Outbound share dispatch.
//!
//! [`ShareDispatcher`] maps a platform to its share URL, built from the
//! immutable [`ShareContext`], and hands the URL to a [`UrlLauncher`]. The
//! launcher seam keeps the wire contract (exact endpoints, parameter names,
//! percent-encoding) testable without a browser; the production launcher
//! opens the URL in the system browser with a fixed-size popup hint.

use url::Url;

use crate::constants::{SHARE_POPUP_HEIGHT, SHARE_POPUP_WIDTH};
use crate::domain::{ShareContext, ShareError, SharePlatform};

// ============================================================================
// Popup Spec
// ============================================================================

/// Requested dimensions for the browser popup a share link opens in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopupSpec {
    pub width: u32,
    pub height: u32,
}

impl Default for PopupSpec {
    fn default() -> Self {
        Self {
            width: SHARE_POPUP_WIDTH,
            height: SHARE_POPUP_HEIGHT,
        }
    }
}

// ============================================================================
// Url Launcher
// ============================================================================

/// Opens a share URL in a new browsing context.
pub trait UrlLauncher {
    /// Launches `url`, requesting a popup of the given dimensions where the
    /// environment supports it.
    ///
    /// # Errors
    /// Returns an error if the browsing context could not be opened.
    fn launch(&self, url: &Url, popup: PopupSpec) -> Result<(), ShareError>;
}

/// Production launcher: opens the URL with the system browser.
///
/// Terminal environments have no window-size control over the spawned
/// browser; the popup hint is accepted and ignored here.
#[derive(Debug, Default)]
pub struct SystemLauncher;

impl UrlLauncher for SystemLauncher {
    fn launch(&self, url: &Url, _popup: PopupSpec) -> Result<(), ShareError> {
        open::that(url.as_str())?;
        Ok(())
    }
}

// ============================================================================
// Native Share
// ============================================================================

/// Payload for the OS-level share path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeShareRequest {
    pub title: String,
    pub text: String,
    pub url: String,
}

/// OS-level share capability, where the environment exposes one.
pub trait NativeShare {
    /// Presents the OS share sheet for `request`.
    ///
    /// # Errors
    /// Returns [`ShareError::NativeUnavailable`] when the capability is
    /// absent and [`ShareError::NativeCancelled`] when the user dismisses
    /// the sheet. Both are benign.
    fn share(&self, request: &NativeShareRequest) -> Result<(), ShareError>;
}

/// Default capability: no OS share sheet is available.
#[derive(Debug, Default)]
pub struct NoNativeShare;

impl NativeShare for NoNativeShare {
    fn share(&self, _request: &NativeShareRequest) -> Result<(), ShareError> {
        Err(ShareError::NativeUnavailable)
    }
}

// ============================================================================
// Share Dispatcher
// ============================================================================

/// Builds platform share URLs and launches them.
pub struct ShareDispatcher {
    context: ShareContext,
    launcher: Box<dyn UrlLauncher + Send>,
    native: Box<dyn NativeShare + Send>,
    track_shares: bool,
}

impl std::fmt::Debug for ShareDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShareDispatcher")
            .field("context", &self.context)
            .field("track_shares", &self.track_shares)
            .finish_non_exhaustive()
    }
}

impl ShareDispatcher {
    /// Creates a dispatcher that opens share links in the system browser.
    #[must_use]
    pub fn new(context: ShareContext, track_shares: bool) -> Self {
        Self::with_parts(
            context,
            Box::new(SystemLauncher),
            Box::new(NoNativeShare),
            track_shares,
        )
    }

    /// Creates a dispatcher with injected launcher and native capability.
    #[must_use]
    pub fn with_parts(
        context: ShareContext,
        launcher: Box<dyn UrlLauncher + Send>,
        native: Box<dyn NativeShare + Send>,
        track_shares: bool,
    ) -> Self {
        Self {
            context,
            launcher,
            native,
            track_shares,
        }
    }

    /// The article snapshot this dispatcher shares.
    #[must_use]
    pub const fn context(&self) -> &ShareContext {
        &self.context
    }

    /// Builds the outbound share URL for `platform`.
    ///
    /// All query components are percent-encoded; spaces use the form
    /// encoding `+`, which the platforms decode identically to `%20`. The
    /// Pinterest image is resolved from the context at call time, empty
    /// when absent.
    ///
    /// # Errors
    /// Returns an error if the platform endpoint fails to parse, which
    /// would indicate a broken endpoint constant.
    pub fn share_url(&self, platform: SharePlatform) -> Result<Url, ShareError> {
        let mut url = Url::parse(platform.endpoint())?;
        {
            let mut query = url.query_pairs_mut();
            match platform {
                SharePlatform::Facebook => {
                    query.append_pair("u", &self.context.page_url);
                }
                SharePlatform::Twitter => {
                    query.append_pair("url", &self.context.page_url);
                    query.append_pair("text", &self.context.tweet_text());
                }
                SharePlatform::Pinterest => {
                    query.append_pair("url", &self.context.page_url);
                    query.append_pair("media", &self.context.resolve_image());
                    query.append_pair("description", &self.context.title);
                }
            }
        }
        Ok(url)
    }

    /// Dispatches a share to `platform`: builds the URL and launches it in
    /// a 580x400 popup context.
    ///
    /// # Errors
    /// Returns an error if the URL could not be built or launched.
    pub fn dispatch(&self, platform: SharePlatform) -> Result<(), ShareError> {
        let url = self.share_url(platform)?;
        self.launcher.launch(&url, PopupSpec::default())?;
        if self.track_shares {
            tracing::info!(platform = platform.as_str(), "Share dispatched");
        }
        Ok(())
    }

    /// Dispatches by platform identifier.
    ///
    /// Unrecognized identifiers are logged and skipped; the caller closes
    /// the menu either way.
    pub fn dispatch_named(&self, name: &str) {
        match name.parse::<SharePlatform>() {
            Ok(platform) => {
                if let Err(e) = self.dispatch(platform) {
                    tracing::warn!("Share via {name} failed: {e}");
                }
            }
            Err(e) => {
                tracing::warn!("{e}");
            }
        }
    }

    /// Invokes the OS-level share path.
    ///
    /// Success, cancellation, and an absent capability are all non-fatal
    /// and only logged.
    pub fn dispatch_native(&self) {
        let request = NativeShareRequest {
            title: self.context.title.clone(),
            text: self.context.description.clone(),
            url: self.context.page_url.clone(),
        };
        match self.native.share(&request) {
            Ok(()) => {
                tracing::debug!("Shared via native share sheet");
                if self.track_shares {
                    tracing::info!(platform = "native", "Share dispatched");
                }
            }
            Err(e) if e.is_benign() => {
                tracing::debug!("Native share skipped: {e}");
            }
            Err(e) => {
                tracing::warn!("Native share failed: {e}");
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
