/// Configuration constants for the application
pub struct Config;

impl Config {
    /// API host, taken from `REVENUE_DASHBOARD_API_URL` at build time
    pub const API_BASE_URL: &'static str = match option_env!("REVENUE_DASHBOARD_API_URL") {
        Some(url) => url,
        None => "http://localhost:8000",
    };

    /// Rows shown in the top-fee customer table
    pub const TOP_FEE_CUSTOMERS: usize = 5;

    /// Base revenue per customer used by the estimated-revenue heuristic
    pub const REVENUE_PER_CUSTOMER: f64 = 5000.0;

    /// Delay before charts re-render after the window stops resizing
    pub const RESIZE_DEBOUNCE_MS: u32 = 150;

    /// localStorage key for the last visited page
    pub const PAGE_STORAGE_KEY: &'static str = "page";
}
