use std::time::Duration;

/// Base URL of the GitHub REST API.
pub const GITHUB_API_BASE_URL: &str = "https://api.github.com";
/// Sent with every request; GitHub rejects requests without a user agent.
pub const USER_AGENT: &str = "GitHub-Activity-CLI/1.0";
/// Media type pinning the v3 REST API.
pub const GITHUB_MEDIA_TYPE: &str = "application/vnd.github.v3+json";
/// Upper bound on a single fetch, connection setup included.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
/// Maximum number of events shown per run.
pub const DISPLAY_LIMIT: usize = 10;
