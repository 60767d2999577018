use clap::Parser;
use log::info;

use petclinic::api::ClinicApi;
use petclinic::conf::Config;
use petclinic::core::{CliArgs, setup_logging};
use petclinic::service::ClinicService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_logging();
    let args = CliArgs::parse();
    info!(args = args; "Pet clinic mock server starting.");

    let config = Config::load(args.config.as_deref())?;
    let service = ClinicService::open(&config).await?;
    ClinicApi::new(service).serve(&config.server.addr()).await?;
    Ok(())
}
