use serde::{Deserialize, Serialize};

/// A record as listed by the provider. Other fields in the listing are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiDnsRecord {
    pub id: String,
    pub name: String,
    pub r#type: String,
}

/// Body of the record update request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecordUpdate {
    pub r#type: String,
    pub name: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub result: Option<T>,
    #[serde(default)]
    pub errors: Vec<serde_json::Value>,
}
