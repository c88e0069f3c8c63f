use super::models::DnsRecordUpdate;
use crate::error::{LookupError, UpdateError};
use async_trait::async_trait;

#[async_trait]
pub trait DnsApiClient: Send + Sync {
    /// Id of the first record in the zone named `domain` with type `record_type`.
    async fn get_record_id(
        &self,
        zone_id: &str,
        domain: &str,
        record_type: &str,
    ) -> Result<String, LookupError>;

    async fn update_record(
        &self,
        zone_id: &str,
        record_id: &str,
        update: &DnsRecordUpdate,
    ) -> Result<(), UpdateError>;
}
