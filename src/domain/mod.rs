//! Domain types for the sharecard application.
//!
//! This module contains the share-menu domain model:
//!
//! - [`SharePlatform`] - the closed set of social platforms links dispatch to
//! - [`ShareContext`] - the immutable article snapshot shared links describe
//! - [`ShareError`] - structured errors for dispatch failures

pub mod context;
pub mod error;
pub mod platform;

pub use context::ShareContext;
pub use error::ShareError;
pub use platform::SharePlatform;
