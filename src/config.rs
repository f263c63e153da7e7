//! Environment Configuration
//!
//! Base URL for the REST backend, switched between development and
//! production builds.

/// Environment-dependent settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    /// Base URL of the REST API, without a trailing slash.
    pub rest_url: &'static str,
}

const DEV_CONFIG: Configuration = Configuration {
    rest_url: "http://localhost:3000/api",
};

// Production serves the API same-origin.
const PROD_CONFIG: Configuration = Configuration { rest_url: "" };

pub fn get_configuration() -> Configuration {
    if cfg!(debug_assertions) {
        DEV_CONFIG
    } else {
        PROD_CONFIG
    }
}
