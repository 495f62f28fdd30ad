use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create courts table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS canchas (
            id BIGSERIAL PRIMARY KEY,
            nombre VARCHAR(255) NOT NULL,
            techada BOOLEAN NOT NULL DEFAULT FALSE
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create reservations table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS reservaciones (
            id BIGSERIAL PRIMARY KEY,
            cancha_id BIGINT NOT NULL REFERENCES canchas(id),
            fecha DATE NOT NULL,
            hora_inicio TIME NOT NULL,
            duracion INTEGER NOT NULL,
            nombre_contacto VARCHAR(255) NOT NULL,
            telefono_area VARCHAR(4) NOT NULL,
            telefono_numero VARCHAR(8) NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_duration CHECK (duracion BETWEEN 15 AND 120)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_reservaciones_cancha_fecha ON reservaciones(cancha_id, fecha, hora_inicio);
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
