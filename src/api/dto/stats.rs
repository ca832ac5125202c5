//! DTOs for the stats endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::services::StatsReport;
use crate::domain::entities::Click;

/// Aggregated click report for one link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_clicks: i64,
    pub devices: Vec<DeviceCount>,
    pub browsers: Vec<BrowserCount>,
    pub operating_systems: Vec<OperatingSystemCount>,
    pub countries: Vec<CountryCount>,
    pub record_list: Vec<ClickRecord>,
}

#[derive(Debug, Serialize)]
pub struct DeviceCount {
    pub device: String,
    pub count: i64,
}

#[derive(Debug, Serialize)]
pub struct BrowserCount {
    pub browser: String,
    pub count: i64,
}

#[derive(Debug, Serialize)]
pub struct OperatingSystemCount {
    #[serde(rename = "operatingSystem")]
    pub operating_system: String,
    pub count: i64,
}

#[derive(Debug, Serialize)]
pub struct CountryCount {
    pub country: String,
    pub count: i64,
}

/// One click row in the flat record list.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClickRecord {
    pub slug: String,
    pub ip: String,
    pub device: String,
    pub browser: String,
    pub operating_system: String,
    pub country: String,
    pub timestamp: DateTime<Utc>,
}

impl From<Click> for ClickRecord {
    fn from(click: Click) -> Self {
        Self {
            slug: click.slug,
            ip: click.ip,
            device: click.device,
            browser: click.browser,
            operating_system: click.os,
            country: click.country,
            timestamp: click.created_at,
        }
    }
}

impl From<StatsReport> for StatsResponse {
    fn from(report: StatsReport) -> Self {
        Self {
            total_clicks: report.total_clicks,
            devices: report
                .devices
                .into_iter()
                .map(|g| DeviceCount {
                    device: g.value,
                    count: g.count,
                })
                .collect(),
            browsers: report
                .browsers
                .into_iter()
                .map(|g| BrowserCount {
                    browser: g.value,
                    count: g.count,
                })
                .collect(),
            operating_systems: report
                .operating_systems
                .into_iter()
                .map(|g| OperatingSystemCount {
                    operating_system: g.value,
                    count: g.count,
                })
                .collect(),
            countries: report
                .countries
                .into_iter()
                .map(|g| CountryCount {
                    country: g.value,
                    count: g.count,
                })
                .collect(),
            record_list: report.clicks.into_iter().map(Into::into).collect(),
        }
    }
}
