/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Backend origin, overridable at build time with `BILLWISE_API_URL`
    pub const API_BASE_URL: &'static str = match option_env!("BILLWISE_API_URL") {
        Some(url) => url,
        None => "http://localhost:8080",
    };

    /// Upper bound for any single backend request (15 seconds)
    pub const REQUEST_TIMEOUT_MS: u32 = 15_000;

    /// Issue a compare request as soon as a bill submission succeeds
    pub const COMPARE_AFTER_SUBMIT: bool = true;

    /// Quiet period before charts re-render after a window resize
    pub const CHART_RESIZE_DEBOUNCE_MS: u32 = 150;
}
