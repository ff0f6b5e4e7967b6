//! Client configuration

/// Server address used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:4000";

/// Client configuration for connecting to the directory server
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:4000")
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Join an endpoint path onto the base URL
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let config = ClientConfig::new("http://localhost:4000/");
        assert_eq!(config.url("/employees"), "http://localhost:4000/employees");
        assert_eq!(config.url("employees/3"), "http://localhost:4000/employees/3");
        assert_eq!(ClientConfig::default().url("login"), "http://localhost:4000/login");
    }
}
