//! Request-metadata extraction for the visit pipeline.

use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::{HeaderMap, header, request::Parts};
use std::convert::Infallible;
use std::net::SocketAddr;

use crate::domain::entities::VisitMeta;

/// Extracts [`VisitMeta`] from the request.
///
/// Never rejects: every field degrades to `"unknown"` (or `None` for the
/// referer) when the request carries no usable value.
///
/// - ip: first `x-forwarded-for` entry, else the peer address, else unknown
/// - country: `cf-ipcountry`, else `x-vercel-ip-country`, else unknown
pub struct ExtractVisitMeta(pub VisitMeta);

impl<S> FromRequestParts<S> for ExtractVisitMeta
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let peer_addr = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| *addr);

        Ok(Self(VisitMeta {
            ip: client_ip(&parts.headers, peer_addr),
            country: client_country(&parts.headers),
            user_agent: header_str(&parts.headers, header::USER_AGENT.as_str())
                .unwrap_or("unknown")
                .to_string(),
            referer: header_str(&parts.headers, header::REFERER.as_str()).map(String::from),
        }))
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

/// Client IP: forwarded-for chain first, then the connection itself.
fn client_ip(headers: &HeaderMap, peer_addr: Option<SocketAddr>) -> String {
    if let Some(forwarded) = header_str(headers, "x-forwarded-for")
        && let Some(first) = forwarded.split(',').next()
        && !first.trim().is_empty()
    {
        return first.trim().to_string();
    }

    peer_addr
        .map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Country as reported by the CDN or platform edge, if any.
fn client_country(headers: &HeaderMap) -> String {
    header_str(headers, "cf-ipcountry")
        .or_else(|| header_str(headers, "x-vercel-ip-country"))
        .unwrap_or("unknown")
        .to_string()
}
