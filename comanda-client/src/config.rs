//! Client configuration

/// Client configuration for connecting to the POS backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL (e.g., "http://localhost:8080")
    pub base_url: String,

    /// Bearer token for authentication; supplied by the surrounding session,
    /// never read from ambient storage
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: 30,
        }
    }

    /// Read configuration from the environment
    ///
    /// `COMANDA_API_URL`, `COMANDA_API_TOKEN`, `COMANDA_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("COMANDA_API_URL").unwrap_or_else(|_| "http://localhost:8080".into());
        let mut config = Self::new(base_url);
        if let Ok(token) = std::env::var("COMANDA_API_TOKEN") {
            config.token = Some(token);
        }
        if let Some(timeout) = std::env::var("COMANDA_TIMEOUT_SECS")
            .ok()
            .and_then(|t| t.parse().ok())
        {
            config.timeout = timeout;
        }
        config
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> super::HttpClient {
        super::HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}
