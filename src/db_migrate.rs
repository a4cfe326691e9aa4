use color_eyre::eyre::{Result, eyre};
use dotenv::dotenv;
use courtside_db::schema::initialize_database;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Load environment variables
    dotenv().ok();

    let database_url = std::env::var("DATABASE_URL")
        .map_err(|_| eyre!("DATABASE_URL environment variable must be set"))?;

    info!("Connecting to database...");
    let db_pool = courtside_db::create_pool(&database_url).await?;

    initialize_database(&db_pool).await?;

    Ok(())
}
