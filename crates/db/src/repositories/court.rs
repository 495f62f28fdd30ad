use crate::models::DbCourt;
use canchas_core::{
    errors::{BookingError, BookingResult},
    models::court::{Court, NewCourt},
    scheduler::court_not_found,
};
use eyre::WrapErr;
use sqlx::{PgConnection, Pool, Postgres};

pub async fn list_courts(pool: &Pool<Postgres>) -> BookingResult<Vec<Court>> {
    let courts = sqlx::query_as::<_, DbCourt>(
        r#"
        SELECT id, nombre, techada
        FROM canchas
        ORDER BY id ASC
        "#,
    )
    .fetch_all(pool)
    .await
    .wrap_err("failed to list courts")?;

    Ok(courts.into_iter().map(Court::from).collect())
}

pub async fn get_court(pool: &Pool<Postgres>, id: i64) -> BookingResult<Option<Court>> {
    tracing::debug!("Getting court by id: {}", id);

    let court = sqlx::query_as::<_, DbCourt>(
        r#"
        SELECT id, nombre, techada
        FROM canchas
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .wrap_err_with(|| format!("failed to load court {id}"))?;

    Ok(court.map(Court::from))
}

pub async fn create_court(pool: &Pool<Postgres>, court: &NewCourt) -> BookingResult<Court> {
    let created = sqlx::query_as::<_, DbCourt>(
        r#"
        INSERT INTO canchas (nombre, techada)
        VALUES ($1, $2)
        RETURNING id, nombre, techada
        "#,
    )
    .bind(&court.name)
    .bind(court.covered)
    .fetch_one(pool)
    .await
    .wrap_err("failed to insert court")?;

    tracing::debug!("Court created successfully: id={}", created.id);
    Ok(created.into())
}

pub async fn update_court(
    pool: &Pool<Postgres>,
    id: i64,
    court: &NewCourt,
) -> BookingResult<Court> {
    let mut tx = pool.begin().await.wrap_err("failed to open transaction")?;

    lock_court(&mut tx, id).await?;
    ensure_unreferenced(&mut tx, id).await?;

    let updated = sqlx::query_as::<_, DbCourt>(
        r#"
        UPDATE canchas
        SET nombre = $2, techada = $3
        WHERE id = $1
        RETURNING id, nombre, techada
        "#,
    )
    .bind(id)
    .bind(&court.name)
    .bind(court.covered)
    .fetch_optional(&mut *tx)
    .await
    .wrap_err_with(|| format!("failed to update court {id}"))?
    .ok_or_else(|| court_not_found(id))?;

    tx.commit().await.wrap_err("failed to commit court update")?;

    Ok(updated.into())
}

pub async fn delete_court(pool: &Pool<Postgres>, id: i64) -> BookingResult<()> {
    let mut tx = pool.begin().await.wrap_err("failed to open transaction")?;

    lock_court(&mut tx, id).await?;
    ensure_unreferenced(&mut tx, id).await?;

    let result = sqlx::query(
        r#"
        DELETE FROM canchas
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(&mut *tx)
    .await
    .wrap_err_with(|| format!("failed to delete court {id}"))?;

    if result.rows_affected() == 0 {
        return Err(court_not_found(id));
    }

    tx.commit().await.wrap_err("failed to commit court deletion")?;

    Ok(())
}

/// Serializes every write touching `court_id` until the transaction ends.
pub(crate) async fn lock_court(conn: &mut PgConnection, court_id: i64) -> BookingResult<()> {
    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(court_id)
        .execute(&mut *conn)
        .await
        .wrap_err_with(|| format!("failed to lock court {court_id}"))?;

    Ok(())
}

pub(crate) async fn ensure_court_exists(conn: &mut PgConnection, court_id: i64) -> BookingResult<()> {
    let exists = sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS (SELECT 1 FROM canchas WHERE id = $1)
        "#,
    )
    .bind(court_id)
    .fetch_one(&mut *conn)
    .await
    .wrap_err_with(|| format!("failed to look up court {court_id}"))?;

    if !exists {
        return Err(court_not_found(court_id));
    }
    Ok(())
}

async fn ensure_unreferenced(conn: &mut PgConnection, court_id: i64) -> BookingResult<()> {
    let referenced = sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS (SELECT 1 FROM reservaciones WHERE cancha_id = $1)
        "#,
    )
    .bind(court_id)
    .fetch_one(&mut *conn)
    .await
    .wrap_err_with(|| format!("failed to count reservations of court {court_id}"))?;

    if referenced {
        return Err(BookingError::Conflict(format!(
            "Court {court_id} has reservations and can no longer be changed"
        )));
    }
    Ok(())
}
