use crate::api::{CloudflareClient, DnsApiClient, DnsRecordUpdate};
use crate::config::{load_config, Config, Paths};
use crate::error::RunError;
use crate::ip::PublicIpResolver;
use crate::logging::RunLog;

/// Loads the config under `paths` and brings every configured record up to date.
///
/// Each step is logged to `log`. The first failure is logged, ends the run and is
/// returned; domains after it are not touched.
pub async fn run(
    paths: &Paths,
    resolver: &PublicIpResolver,
    http: reqwest::Client,
    log: &RunLog,
) -> Result<usize, RunError> {
    let config = match load_config(&paths.config_file()) {
        Ok(config) => {
            log.info("Loading config done successfully.");
            config
        }
        Err(e) => {
            log.error(format_args!("Error loading config.json : {e}"));
            return Err(e.into());
        }
    };

    let api = CloudflareClient::new(http, &config);
    Ddns::new(&config, &api, resolver, log)
        .update_all_records()
        .await
}

pub struct Ddns<'a, A> {
    config: &'a Config,
    api: &'a A,
    resolver: &'a PublicIpResolver,
    log: &'a RunLog,
}

impl<'a, A: DnsApiClient> Ddns<'a, A> {
    pub fn new(
        config: &'a Config,
        api: &'a A,
        resolver: &'a PublicIpResolver,
        log: &'a RunLog,
    ) -> Self {
        Self {
            config,
            api,
            resolver,
            log,
        }
    }

    /// Returns how many domains were updated, which on success is all of them.
    pub async fn update_all_records(&self) -> Result<usize, RunError> {
        let current_ip = match self.resolver.current_ip().await {
            Ok(ip) => {
                self.log
                    .info(format_args!("Fetching current IP done successfully: {ip}"));
                ip
            }
            Err(e) => {
                self.log
                    .error(format_args!("Error fetching current IP: {e}"));
                return Err(e.into());
            }
        };

        let mut updated = 0;
        for domain in &self.config.domain {
            self.update_record(domain, &current_ip).await?;
            updated += 1;
        }

        Ok(updated)
    }

    async fn update_record(&self, domain: &str, current_ip: &str) -> Result<(), RunError> {
        let zone_id = &self.config.zone_id;
        let record_type = &self.config.record_type;

        let record_id = match self.api.get_record_id(zone_id, domain, record_type).await {
            Ok(id) => {
                self.log.info(format_args!(
                    "Fetching DNS record ID for {domain} done successfully: {id}"
                ));
                id
            }
            Err(source) => {
                self.log
                    .error(format_args!("Error fetching DNS record ID: {source}"));
                return Err(RunError::Lookup {
                    domain: domain.to_string(),
                    source,
                });
            }
        };

        let update = DnsRecordUpdate {
            r#type: record_type.clone(),
            name: domain.to_string(),
            content: current_ip.to_string(),
        };

        match self.api.update_record(zone_id, &record_id, &update).await {
            Ok(()) => self.log.info(format_args!(
                "Updating DNS record ID done successfully: {current_ip}"
            )),
            Err(source) => {
                self.log
                    .error(format_args!("Error updating DNS record ID: {source}"));
                return Err(RunError::Update {
                    domain: domain.to_string(),
                    source,
                });
            }
        }

        self.log.info(format_args!(
            "DNS record updated successfully: {domain}({record_id}) as {current_ip}"
        ));
        Ok(())
    }
}
