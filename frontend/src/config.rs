use log::Level;

/// Lead intake URL, baked in at build time from `GMN_LEAD_ENDPOINT`.
/// `None` means leads are only acknowledged in the browser.
pub fn lead_endpoint() -> Option<&'static str> {
    option_env!("GMN_LEAD_ENDPOINT")
        .map(str::trim)
        .filter(|url| !url.is_empty())
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
