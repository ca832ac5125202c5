//! DTOs for the shorten endpoint.

use serde::{Deserialize, Serialize};

/// Request to shorten a URL.
///
/// `url` defaults to empty when absent so that a missing field surfaces as
/// the same validation error as an empty one, instead of a serde rejection.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    #[serde(default)]
    pub url: String,
}

/// The created link, addressed by store id and slug.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    #[serde(rename = "_id")]
    pub id: i64,
    pub slug: String,
}
