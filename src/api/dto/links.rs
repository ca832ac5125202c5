//! DTOs for link listing, counting, and deletion.

use serde::Serialize;

use crate::domain::entities::Link;

/// One owned link in the `/my-urls` listing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnedLinkItem {
    pub id: i64,
    pub original_url: String,
    pub total_clicks: i64,
    pub slug: String,
}

impl From<Link> for OwnedLinkItem {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            original_url: link.original_url,
            total_clicks: link.total_clicks,
            slug: link.slug,
        }
    }
}

/// Total number of links in the store.
#[derive(Debug, Serialize)]
pub struct LinkCountResponse {
    pub total: i64,
}

/// The link removed by a delete request.
#[derive(Debug, Serialize)]
pub struct DeletedLinkResponse {
    #[serde(rename = "_id")]
    pub id: i64,
    pub slug: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_owned_link_item_wire_names() {
        let link = Link::new(
            3,
            "ab3Xy9z".to_string(),
            "https://example.com".to_string(),
            Some(1),
            12,
            None,
            Utc::now(),
        );

        let body = serde_json::to_value(OwnedLinkItem::from(link)).unwrap();

        assert_eq!(body["id"], 3);
        assert_eq!(body["originalUrl"], "https://example.com");
        assert_eq!(body["totalClicks"], 12);
        assert_eq!(body["slug"], "ab3Xy9z");
    }
}
