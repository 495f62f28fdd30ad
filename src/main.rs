use std::sync::Arc;

use color_eyre::eyre::Result;
use dotenv::dotenv;
use canchas_api::config::ApiConfig;
use canchas_core::repository::BookingRepository;
use canchas_db::{
    create_pool, memory::MemoryBookingRepository, postgres::PgBookingRepository,
    schema::initialize_database,
};
use tracing::warn;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;

    // Initialize logging
    canchas_api::init_tracing(config.log_level)?;

    let repo: Arc<dyn BookingRepository> = match &config.database_url {
        Some(database_url) => {
            // Create database connection pool
            let db_pool = create_pool(database_url, config.max_connections).await?;

            // Initialize database schema
            initialize_database(&db_pool).await?;

            Arc::new(PgBookingRepository::new(db_pool))
        }
        None => {
            warn!("DATABASE_URL is not set; reservations are kept in memory and lost on exit");
            Arc::new(MemoryBookingRepository::new())
        }
    };

    // Start API server
    canchas_api::start_server(config, repo).await?;

    Ok(())
}
