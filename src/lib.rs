//! Keeps Cloudflare DNS records pointed at this host's public IP.
//!
//! One run loads `config.json`, asks an IP echo service for the current
//! address and rewrites each configured record with it, logging every step
//! to a per-run log file.

pub mod api;
pub mod config;
pub mod ddns;
pub mod error;
pub mod ip;
pub mod logging;

#[cfg(test)]
mod tests;

pub use ddns::{run, Ddns};
