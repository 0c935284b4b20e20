/// Source name constants to ensure consistency across the codebase.
/// These are the names accepted by `--sources` and the `[[sources]]` config tables.

// Source names (used in CLI, config and logs)
pub const DEVPOST_SOURCE: &str = "devpost";
pub const HACKCLUB_SOURCE: &str = "hackclub";

// Site origins used for link resolution
pub const DEVPOST_BASE_URL: &str = "https://devpost.com";
pub const HACKCLUB_BASE_URL: &str = "https://hackathons.hackclub.com";

// Listing paths relative to the origin
pub const DEVPOST_LISTING_PATH: &str = "/hackathons";
pub const HACKCLUB_LISTING_PATH: &str = "/";

/// Output files are `<prefix>.csv` and `<prefix>.json`
pub const DEFAULT_OUTPUT_PREFIX: &str = "hackathons";

/// Get all supported source names, in default run order
pub fn get_supported_sources() -> Vec<&'static str> {
    vec![DEVPOST_SOURCE, HACKCLUB_SOURCE]
}

/// Default origin for a supported source
pub fn default_base_url(source: &str) -> Option<&'static str> {
    match source {
        DEVPOST_SOURCE => Some(DEVPOST_BASE_URL),
        HACKCLUB_SOURCE => Some(HACKCLUB_BASE_URL),
        _ => None,
    }
}
