use crate::error::NetworkError;

/// Plain-text echo of the caller's address, IPv4 or IPv6.
pub const DEFAULT_IP_ECHO_URL: &str = "https://api64.ipify.org?format=text";

pub struct PublicIpResolver {
    client: reqwest::Client,
    url: String,
}

impl PublicIpResolver {
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn with_default_url(client: reqwest::Client) -> Self {
        Self::new(client, DEFAULT_IP_ECHO_URL)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// The response body with surrounding whitespace removed. The address format is not checked.
    pub async fn current_ip(&self) -> Result<String, NetworkError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(NetworkError::Request)?;
        let body = response.text().await.map_err(NetworkError::Body)?;

        Ok(body.trim().to_string())
    }
}
