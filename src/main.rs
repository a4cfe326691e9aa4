use color_eyre::eyre::Result;
use dotenv::dotenv;
use courtside_api::config::ApiConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;

    // Open the roster, absentee and attendance stores
    let stores = courtside_api::connect_stores(&config).await?;

    // Start API server
    courtside_api::start_server(config, stores).await?;

    Ok(())
}
