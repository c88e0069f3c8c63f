use serde::Deserialize;
use std::fmt;

/// Contents of `config.json`. Fields missing from the file stay empty.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_key: String,
    pub api_email: String,
    pub zone_id: String,
    pub domain: Vec<String>,
    /// Record list URL with a `%s` where the zone id goes.
    pub api_endpoint: String,
    pub record_type: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("api_email", &self.api_email)
            .field("zone_id", &self.zone_id)
            .field("domain", &self.domain)
            .field("api_endpoint", &self.api_endpoint)
            .field("record_type", &self.record_type)
            .finish()
    }
}
