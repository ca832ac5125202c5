//! Utility functions shared across the application.
//!
//! - [`slug`] - short slug generation
//! - [`device`] - user-agent classification for click analytics

pub mod device;
pub mod slug;
