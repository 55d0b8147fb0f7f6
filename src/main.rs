pub mod config;
pub mod enums;
pub mod errors;
pub mod models;
pub mod repositories;
pub mod services;
pub mod utils;
#[cfg(test)]
mod test_support;

use anyhow::Context;
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;
use crate::config::AppConfig;
use crate::repositories::soap_repository::SoapRepository;
use crate::services::iec_service::IecService;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok()))
        .with_writer(std::io::stderr)
        .init();

    // Initialize environment
    let app_config = get_app_config();

    //Instantiate service
    let soap_repo = SoapRepository::new(
        app_config.iec_endpoint_url.clone(),
        app_config.request_timeout(),
        app_config.dump_request,
    )
    .context("Error building HTTP client")?;
    let iec_service = IecService::new(
        soap_repo,
        app_config.iec_soap_action.clone(),
        app_config.on_stage_error,
    );

    let outcome = iec_service.run(&app_config.customer_tender_id).await;
    if outcome.aborted {
        warn!(failures = outcome.failures.len(), "GetIecData aborted");
    }

    println!("===============Result=============");
    println!("{:?}", outcome.envelope);

    println!("============ IEC Data =============");
    println!("{}", outcome.response_code());

    Ok(())
}

//RUST_LOG wins when it parses, info otherwise
fn log_filter(rust_log: Option<String>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

pub fn get_app_config() -> AppConfig {
    dotenv::dotenv().ok();
    AppConfig::parse()
}
