//! Client metadata captured on a visit.

/// Request metadata recorded alongside a click.
///
/// Derived at the API boundary (see `api::extract`); fields that cannot be
/// determined default to `"unknown"` rather than failing the visit.
#[derive(Debug, Clone)]
pub struct VisitMeta {
    pub ip: String,
    pub country: String,
    pub user_agent: String,
    pub referer: Option<String>,
}

impl VisitMeta {
    /// Metadata for a client about which nothing is known.
    pub fn unknown() -> Self {
        Self {
            ip: "unknown".to_string(),
            country: "unknown".to_string(),
            user_agent: "unknown".to_string(),
            referer: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_defaults() {
        let meta = VisitMeta::unknown();

        assert_eq!(meta.ip, "unknown");
        assert_eq!(meta.country, "unknown");
        assert_eq!(meta.user_agent, "unknown");
        assert!(meta.referer.is_none());
    }
}
