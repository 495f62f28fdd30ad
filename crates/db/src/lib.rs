//! # Canchas DB
//!
//! Storage for courts and reservations. Two [`BookingRepository`]
//! implementations are provided:
//!
//! - [`postgres::PgBookingRepository`]: PostgreSQL via SQLx, with
//!   transactional conflict checks
//! - [`memory::MemoryBookingRepository`]: in-process storage for local runs
//!   and tests
//!
//! [`BookingRepository`]: canchas_core::repository::BookingRepository

pub mod memory;
pub mod models;
pub mod postgres;
pub mod repositories;
pub mod schema;

pub mod mock;

use eyre::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};

pub type DbPool = Pool<Postgres>;

pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    Ok(pool)
}
