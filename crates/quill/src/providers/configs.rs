pub const GEMINI_HOST: &str = "https://generativelanguage.googleapis.com";
pub const GEMINI_MODEL: &str = "gemini-2.0-flash";

#[derive(Debug, Clone)]
pub struct GeminiProviderConfig {
    pub host: String,
    pub model: String,
    pub api_key: String,
    /// Full URL of the generate endpoint; when set, host and model are not used
    pub endpoint: Option<String>,
}

impl GeminiProviderConfig {
    pub fn new<S: Into<String>>(api_key: S) -> Self {
        Self {
            host: GEMINI_HOST.to_string(),
            model: GEMINI_MODEL.to_string(),
            api_key: api_key.into(),
            endpoint: None,
        }
    }

    pub fn url(&self) -> String {
        match &self.endpoint {
            Some(endpoint) => endpoint.clone(),
            None => format!(
                "{}/v1beta/models/{}:generateContent",
                self.host.trim_end_matches('/'),
                self.model
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_from_host_and_model() {
        let mut config = GeminiProviderConfig::new("key");
        assert_eq!(
            config.url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent"
        );

        config.host = "http://localhost:8080/".to_string();
        config.model = "gemini-pro".to_string();
        assert_eq!(
            config.url(),
            "http://localhost:8080/v1beta/models/gemini-pro:generateContent"
        );
    }

    #[test]
    fn test_endpoint_override() {
        let mut config = GeminiProviderConfig::new("key");
        config.endpoint = Some("http://proxy.local/generate".to_string());
        assert_eq!(config.url(), "http://proxy.local/generate");
    }
}
