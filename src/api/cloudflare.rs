use super::{client::DnsApiClient, models::*};
use crate::config::Config;
use crate::error::{EndpointError, LookupError, UpdateError};
use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, RequestBuilder, StatusCode};

const ZONE_PLACEHOLDER: &str = "%s";
const AUTH_EMAIL_HEADER: &str = "X-Auth-Email";
const AUTH_KEY_HEADER: &str = "X-Auth-Key";

/// Substitutes the zone id into an endpoint template such as
/// `https://api.cloudflare.com/client/v4/zones/%s/dns_records`.
pub fn expand_endpoint(template: &str, zone_id: &str) -> Result<String, EndpointError> {
    match template.matches(ZONE_PLACEHOLDER).count() {
        1 => Ok(template.replacen(ZONE_PLACEHOLDER, zone_id, 1)),
        found => Err(EndpointError {
            template: template.to_string(),
            found,
        }),
    }
}

/// Cloudflare v4 client authenticated with an account email and global API key.
pub struct CloudflareClient {
    client: reqwest::Client,
    api_endpoint: String,
    api_email: String,
    api_key: String,
}

#[async_trait]
impl DnsApiClient for CloudflareClient {
    async fn get_record_id(
        &self,
        zone_id: &str,
        domain: &str,
        record_type: &str,
    ) -> Result<String, LookupError> {
        let url = expand_endpoint(&self.api_endpoint, zone_id)?;
        let response = self
            .authorized(self.client.get(&url))
            .send()
            .await
            .map_err(LookupError::Request)?;

        let text = response.text().await.map_err(LookupError::Body)?;
        let body: serde_json::Value =
            serde_json::from_str(&text).map_err(LookupError::InvalidJson)?;
        let ApiResponse { result, errors } =
            serde_json::from_value::<ApiResponse<Vec<ApiDnsRecord>>>(body)
                .map_err(LookupError::Schema)?;

        result
            .ok_or(LookupError::MissingResult { errors })?
            .into_iter()
            .find(|record| record.name == domain && record.r#type == record_type)
            .map(|record| record.id)
            .ok_or_else(|| LookupError::NotFound {
                domain: domain.to_string(),
                record_type: record_type.to_string(),
            })
    }

    async fn update_record(
        &self,
        zone_id: &str,
        record_id: &str,
        update: &DnsRecordUpdate,
    ) -> Result<(), UpdateError> {
        let url = format!("{}/{}", expand_endpoint(&self.api_endpoint, zone_id)?, record_id);
        let body = serde_json::to_string(update).map_err(UpdateError::Serialize)?;

        let response = self
            .authorized(self.client.put(&url))
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(UpdateError::Request)?;

        // Any status but 200 is a failure, other 2xx codes included.
        let status = response.status();
        if status != StatusCode::OK {
            return Err(UpdateError::Status {
                status: status.as_u16(),
            });
        }

        Ok(())
    }
}

impl CloudflareClient {
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            api_endpoint: config.api_endpoint.clone(),
            api_email: config.api_email.clone(),
            api_key: config.api_key.clone(),
        }
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header(AUTH_EMAIL_HEADER, self.api_email.as_str())
            .header(AUTH_KEY_HEADER, self.api_key.as_str())
    }
}
