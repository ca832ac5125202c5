//! Click aggregation and ownership-gated reporting.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{Click, Identity};
use crate::domain::stores::{ClickStore, LinkStore};
use crate::error::AppError;

/// One value of a category and how many clicks carried it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupCount {
    pub value: String,
    pub count: i64,
}

/// Aggregated click report for a single link.
///
/// Grouping vectors are in first-seen order over the click rows (scan
/// order, not sorted by count); `clicks` preserves the store's insertion
/// order.
#[derive(Debug, Clone)]
pub struct StatsReport {
    pub total_clicks: i64,
    pub devices: Vec<GroupCount>,
    pub browsers: Vec<GroupCount>,
    pub operating_systems: Vec<GroupCount>,
    pub countries: Vec<GroupCount>,
    pub clicks: Vec<Click>,
}

impl StatsReport {
    /// Builds a report from a slug's click rows.
    fn from_clicks(clicks: Vec<Click>) -> Self {
        Self {
            total_clicks: clicks.len() as i64,
            devices: group_counts(clicks.iter().map(|c| c.device.as_str())),
            browsers: group_counts(clicks.iter().map(|c| c.browser.as_str())),
            operating_systems: group_counts(clicks.iter().map(|c| c.os.as_str())),
            countries: group_counts(clicks.iter().map(|c| c.country.as_str())),
            clicks,
        }
    }
}

/// Counts occurrences of each distinct value, keeping first-seen order.
fn group_counts<'a>(values: impl Iterator<Item = &'a str>) -> Vec<GroupCount> {
    let mut groups: Vec<GroupCount> = Vec::new();

    for value in values {
        match groups.iter_mut().find(|g| g.value == value) {
            Some(group) => group.count += 1,
            None => groups.push(GroupCount {
                value: value.to_string(),
                count: 1,
            }),
        }
    }

    groups
}

/// Service producing click reports for link owners.
pub struct StatsService {
    links: Arc<dyn LinkStore>,
    clicks: Arc<dyn ClickStore>,
}

impl StatsService {
    /// Creates a new stats service.
    pub fn new(links: Arc<dyn LinkStore>, clicks: Arc<dyn ClickStore>) -> Self {
        Self { links, clicks }
    }

    /// Builds the click report for a slug on behalf of `identity`.
    ///
    /// Unowned links have no retrievable stats: they report not-found, the
    /// same as an unknown slug, so nothing about them leaks. A link with
    /// zero clicks yields an empty report, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the slug is unknown or the link is
    /// anonymous, [`AppError::Unauthorized`] if `identity` is absent or not
    /// the owner, and [`AppError::Store`] on database errors.
    pub async fn stats_for_slug(
        &self,
        slug: &str,
        identity: Option<&Identity>,
    ) -> Result<StatsReport, AppError> {
        let link = self
            .links
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::not_found("Url not found", json!({ "slug": slug })))?;

        let Some(owner_id) = link.owner_id else {
            return Err(AppError::not_found("Url not found", json!({ "slug": slug })));
        };

        let identity = identity
            .ok_or_else(|| AppError::unauthorized("You are unauthorized", json!({})))?;

        if identity.user_id != owner_id {
            return Err(AppError::unauthorized("You are unauthorized", json!({})));
        }

        let clicks = self.clicks.find_by_slug(slug).await?;

        Ok(StatsReport::from_clicks(clicks))
    }
}
