use anyhow::{Context, Result};
use cf_ddns::{config::Paths, ip::PublicIpResolver, logging};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let paths = Paths::from_home()?;
    let log = logging::init(&paths.log_dir()).with_context(|| {
        format!("Failed to set up logging under {}", paths.root().display())
    })?;
    log.info("Initializing logger done successfully.");

    let http = reqwest::Client::new();
    let resolver = PublicIpResolver::with_default_url(http.clone());

    if cf_ddns::run(&paths, &resolver, http, &log).await.is_err() {
        // already logged
    }

    log.flush();
    Ok(())
}
