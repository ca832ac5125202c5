//! Link entity representing a slug to URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL.
///
/// The slug is globally unique and assigned at creation time only.
/// `total_clicks` is a denormalized summary counter maintained by the store:
/// it never decreases, and the click log remains the source of truth for
/// historical detail.
#[derive(Debug, Clone)]
pub struct Link {
    pub id: i64,
    pub slug: String,
    pub original_url: String,
    /// `None` for anonymous links; visits to those are not tracked.
    pub owner_id: Option<i64>,
    pub total_clicks: i64,
    pub last_visited_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        slug: String,
        original_url: String,
        owner_id: Option<i64>,
        total_clicks: i64,
        last_visited_at: Option<DateTime<Utc>>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            slug,
            original_url,
            owner_id,
            total_clicks,
            last_visited_at,
            created_at,
        }
    }

    /// Returns true if the link belongs to the given user.
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.owner_id == Some(user_id)
    }
}

/// Input data for creating a new link.
///
/// Counters start at zero and `last_visited_at` unset; both are managed by
/// the store afterwards.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub slug: String,
    pub original_url: String,
    pub owner_id: Option<i64>,
}
