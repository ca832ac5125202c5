//! The visit pipeline: look up, count, record, redirect.

use std::sync::Arc;

use serde_json::json;
use tracing::warn;

use crate::domain::entities::{NewClick, VisitMeta};
use crate::domain::stores::{ClickStore, LinkStore};
use crate::error::AppError;
use crate::utils::device::classify;

/// Service orchestrating a visit to a shortened link.
pub struct RedirectService {
    links: Arc<dyn LinkStore>,
    clicks: Arc<dyn ClickStore>,
}

impl RedirectService {
    /// Creates a new redirect service.
    pub fn new(links: Arc<dyn LinkStore>, clicks: Arc<dyn ClickStore>) -> Self {
        Self { links, clicks }
    }

    /// Resolves a visit to its redirect target.
    ///
    /// Anonymous links (no owner) are not tracked: the original URL comes
    /// back untouched, with no counter bump and no click row. For owned
    /// links the counter increment is atomic at the store boundary, the
    /// user agent is classified, and a click row is appended best-effort:
    /// an append failure is logged and the visitor is still redirected.
    ///
    /// The counter and the click log share no transaction, so a crash
    /// between the two can leave them one apart. The counter is a fast-path
    /// summary, not a derived aggregate, and the window is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown slug and
    /// [`AppError::Store`] if the lookup or counter update fails.
    pub async fn visit(&self, slug: &str, meta: VisitMeta) -> Result<String, AppError> {
        let not_found =
            || AppError::not_found("Url not found or expired", json!({ "slug": slug }));

        let link = self.links.find_by_slug(slug).await?.ok_or_else(not_found)?;

        if link.owner_id.is_none() {
            return Ok(link.original_url);
        }

        // Deleted between lookup and update resolves to the same not-found
        // the earlier lookup would have produced.
        let link = self
            .links
            .record_visit(slug)
            .await?
            .ok_or_else(not_found)?;

        let info = classify(&meta.user_agent);
        let new_click = NewClick {
            link_id: link.id,
            slug: link.slug.clone(),
            ip: meta.ip,
            user_agent: meta.user_agent,
            device: info.device.to_string(),
            browser: info.browser.to_string(),
            os: info.os.to_string(),
            country: meta.country,
            referer: meta.referer,
        };

        if let Err(e) = self.clicks.append(new_click).await {
            warn!(slug = %link.slug, error = %e, "failed to record click, redirect unaffected");
        }

        Ok(link.original_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Click, Link};
    use crate::domain::stores::{MockClickStore, MockLinkStore};
    use chrono::Utc;

    fn link(slug: &str, owner_id: Option<i64>, total_clicks: i64) -> Link {
        Link::new(
            7,
            slug.to_string(),
            "https://example.com/target".to_string(),
            owner_id,
            total_clicks,
            None,
            Utc::now(),
        )
    }

    fn chrome_meta() -> VisitMeta {
        VisitMeta {
            ip: "203.0.113.9".to_string(),
            country: "DE".to_string(),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) Chrome/115".to_string(),
            referer: Some("https://google.com".to_string()),
        }
    }

    #[tokio::test]
    async fn test_visit_unknown_slug_not_found() {
        let mut mock_links = MockLinkStore::new();
        mock_links
            .expect_find_by_slug()
            .times(1)
            .returning(|_| Ok(None));

        let service = RedirectService::new(Arc::new(mock_links), Arc::new(MockClickStore::new()));

        let err = service
            .visit("missing", VisitMeta::unknown())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_visit_anonymous_link_untracked() {
        let mut mock_links = MockLinkStore::new();
        mock_links
            .expect_find_by_slug()
            .times(1)
            .returning(|slug| Ok(Some(link(slug, None, 0))));
        mock_links.expect_record_visit().times(0);

        let mut mock_clicks = MockClickStore::new();
        mock_clicks.expect_append().times(0);

        let service = RedirectService::new(Arc::new(mock_links), Arc::new(mock_clicks));

        let target = service
            .visit("abc1234", chrome_meta())
            .await
            .unwrap();

        assert_eq!(target, "https://example.com/target");
    }

    #[tokio::test]
    async fn test_visit_owned_link_counts_and_records() {
        let mut mock_links = MockLinkStore::new();
        mock_links
            .expect_find_by_slug()
            .times(1)
            .returning(|slug| Ok(Some(link(slug, Some(42), 0))));
        mock_links
            .expect_record_visit()
            .withf(|slug| slug == "abc1234")
            .times(1)
            .returning(|slug| Ok(Some(link(slug, Some(42), 1))));

        let mut mock_clicks = MockClickStore::new();
        mock_clicks
            .expect_append()
            .withf(|c| {
                c.link_id == 7
                    && c.slug == "abc1234"
                    && c.ip == "203.0.113.9"
                    && c.device == "desktop"
                    && c.browser == "Chrome"
                    && c.os == "Windows"
                    && c.country == "DE"
                    && c.referer.as_deref() == Some("https://google.com")
            })
            .times(1)
            .returning(|c| {
                Ok(Click {
                    id: 1,
                    link_id: c.link_id,
                    slug: c.slug,
                    ip: c.ip,
                    user_agent: c.user_agent,
                    device: c.device,
                    browser: c.browser,
                    os: c.os,
                    country: c.country,
                    referer: c.referer,
                    created_at: Utc::now(),
                })
            });

        let service = RedirectService::new(Arc::new(mock_links), Arc::new(mock_clicks));

        let target = service.visit("abc1234", chrome_meta()).await.unwrap();

        assert_eq!(target, "https://example.com/target");
    }

    #[tokio::test]
    async fn test_visit_redirects_even_if_click_append_fails() {
        let mut mock_links = MockLinkStore::new();
        mock_links
            .expect_find_by_slug()
            .times(1)
            .returning(|slug| Ok(Some(link(slug, Some(42), 0))));
        mock_links
            .expect_record_visit()
            .times(1)
            .returning(|slug| Ok(Some(link(slug, Some(42), 1))));

        let mut mock_clicks = MockClickStore::new();
        mock_clicks
            .expect_append()
            .times(1)
            .returning(|_| Err(AppError::store("Database error", json!({}))));

        let service = RedirectService::new(Arc::new(mock_links), Arc::new(mock_clicks));

        let target = service.visit("abc1234", chrome_meta()).await.unwrap();

        assert_eq!(target, "https://example.com/target");
    }

    #[tokio::test]
    async fn test_visit_counter_failure_propagates() {
        let mut mock_links = MockLinkStore::new();
        mock_links
            .expect_find_by_slug()
            .times(1)
            .returning(|slug| Ok(Some(link(slug, Some(42), 0))));
        mock_links
            .expect_record_visit()
            .times(1)
            .returning(|_| Err(AppError::store("Database error", json!({}))));

        let mut mock_clicks = MockClickStore::new();
        mock_clicks.expect_append().times(0);

        let service = RedirectService::new(Arc::new(mock_links), Arc::new(mock_clicks));

        let err = service.visit("abc1234", chrome_meta()).await.unwrap_err();

        assert!(matches!(err, AppError::Store { .. }));
    }
}
