pub mod client;
pub mod cloudflare;
pub mod models;

pub use client::DnsApiClient;
pub use cloudflare::{expand_endpoint, CloudflareClient};
pub use models::{ApiDnsRecord, ApiResponse, DnsRecordUpdate};
