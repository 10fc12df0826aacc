//! The closed set of social platforms the share menu links to.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ShareError;

// ============================================================================
// Share Platform
// ============================================================================

/// Social platform variants the share menu can dispatch to.
///
/// This is a closed enumeration: the link group always contains exactly
/// these platforms, in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SharePlatform {
    Facebook,
    Twitter,
    Pinterest,
}

impl SharePlatform {
    /// All platforms in link-group order.
    pub const ALL: [Self; 3] = [Self::Facebook, Self::Twitter, Self::Pinterest];

    /// Returns the lowercase platform identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Facebook => "facebook",
            Self::Twitter => "twitter",
            Self::Pinterest => "pinterest",
        }
    }

    /// Returns the human-readable link label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Facebook => "Facebook",
            Self::Twitter => "Twitter",
            Self::Pinterest => "Pinterest",
        }
    }

    /// Returns the share endpoint this platform's links point at.
    ///
    /// Query parameters are appended by the dispatcher; the endpoint itself
    /// is fixed per platform.
    #[must_use]
    pub const fn endpoint(&self) -> &'static str {
        match self {
            Self::Facebook => "https://www.facebook.com/sharer/sharer.php",
            Self::Twitter => "https://twitter.com/intent/tweet",
            Self::Pinterest => "https://pinterest.com/pin/create/button/",
        }
    }
}

impl FromStr for SharePlatform {
    type Err = ShareError;

    /// Parses a platform identifier, case-insensitively.
    ///
    /// Identifiers outside the closed set are an error; callers log and
    /// skip the dispatch rather than failing.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "facebook" => Ok(Self::Facebook),
            "twitter" => Ok(Self::Twitter),
            "pinterest" => Ok(Self::Pinterest),
            _ => Err(ShareError::unknown_platform(name)),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
