use anyhow::Result;
use bank_users::{config, server, telemetry};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;
    telemetry::init_tracing(&config);
    config.print_summary();

    server::run(config).await
}
