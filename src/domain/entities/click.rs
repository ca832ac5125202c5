//! Click entity representing a single recorded visit.

use chrono::{DateTime, Utc};

/// A visit event recorded when an owned link is accessed.
///
/// Append-only: once created a click is never mutated, and it is only
/// removed by the cascade when its link is deleted. The slug is a
/// denormalized copy kept for query convenience.
#[derive(Debug, Clone)]
pub struct Click {
    pub id: i64,
    pub link_id: i64,
    pub slug: String,
    pub ip: String,
    pub user_agent: String,
    pub device: String,
    pub browser: String,
    pub os: String,
    pub country: String,
    pub referer: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input data for recording a new click event.
#[derive(Debug, Clone)]
pub struct NewClick {
    pub link_id: i64,
    pub slug: String,
    pub ip: String,
    pub user_agent: String,
    pub device: String,
    pub browser: String,
    pub os: String,
    pub country: String,
    pub referer: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_click_creation() {
        let new_click = NewClick {
            link_id: 99,
            slug: "abc1234".to_string(),
            ip: "10.0.0.1".to_string(),
            user_agent: "Mozilla/5.0".to_string(),
            device: "desktop".to_string(),
            browser: "Chrome".to_string(),
            os: "Windows".to_string(),
            country: "DE".to_string(),
            referer: None,
        };

        assert_eq!(new_click.link_id, 99);
        assert_eq!(new_click.slug, "abc1234");
        assert!(new_click.referer.is_none());
    }

    #[test]
    fn test_click_clone_keeps_fields() {
        let click = Click {
            id: 1,
            link_id: 42,
            slug: "abc1234".to_string(),
            ip: "192.168.1.1".to_string(),
            user_agent: "Mozilla/5.0".to_string(),
            device: "mobile".to_string(),
            browser: "Safari".to_string(),
            os: "iOS".to_string(),
            country: "FR".to_string(),
            referer: Some("https://google.com".to_string()),
            created_at: Utc::now(),
        };

        let cloned = click.clone();

        assert_eq!(cloned.id, click.id);
        assert_eq!(cloned.device, "mobile");
        assert_eq!(cloned.referer, Some("https://google.com".to_string()));
    }
}
