//! Error types for share dispatch operations.
//!
//! This module defines the custom error types used by the share dispatcher,
//! providing structured error handling with helpful messages. Every failure
//! in this application degrades to a no-op plus a diagnostic log line; these
//! types carry the diagnostic.

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Custom error type for share dispatch operations.
#[derive(Debug, Error)]
pub enum ShareError {
    /// A share endpoint failed to parse as a URL.
    #[error("Invalid share URL: {0}")]
    Url(#[from] url::ParseError),

    /// The system browser could not be launched.
    #[error("Failed to open browser: {0}")]
    Browser(#[from] std::io::Error),

    /// A platform identifier that is not part of the closed platform set.
    #[error("Unknown share platform: {0}")]
    UnknownPlatform(String),

    /// The environment exposes no OS-level share capability.
    #[error("Native share is not available on this platform")]
    NativeUnavailable,

    /// The user dismissed the OS share sheet.
    #[error("Native share cancelled")]
    NativeCancelled,
}

impl ShareError {
    /// Create a new unknown-platform error.
    #[must_use]
    pub fn unknown_platform(name: impl Into<String>) -> Self {
        Self::UnknownPlatform(name.into())
    }

    /// Returns `true` for failures that represent a user choice rather than
    /// a fault (cancelling the OS share sheet, lacking the capability).
    #[must_use]
    pub const fn is_benign(&self) -> bool {
        matches!(self, Self::NativeUnavailable | Self::NativeCancelled)
    }
}

// ============================================================================
// Tests
// ============================================================================
