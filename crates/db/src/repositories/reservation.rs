use crate::{
    models::DbReservation,
    repositories::court::{ensure_court_exists, lock_court},
};
use canchas_core::{
    errors::BookingResult,
    models::reservation::{NewReservation, Reservation},
    scheduler::reservation_not_found,
    scheduling::{conflict_error, find_conflict, search_dates},
};
use chrono::NaiveDate;
use eyre::WrapErr;
use sqlx::{PgConnection, Pool, Postgres};

pub async fn list_reservations(pool: &Pool<Postgres>) -> BookingResult<Vec<Reservation>> {
    let rows = sqlx::query_as::<_, DbReservation>(
        r#"
        SELECT id, cancha_id, fecha, hora_inicio, duracion, nombre_contacto,
               telefono_area, telefono_numero, created_at
        FROM reservaciones
        ORDER BY cancha_id ASC, fecha ASC, hora_inicio ASC, id ASC
        "#,
    )
    .fetch_all(pool)
    .await
    .wrap_err("failed to list reservations")?;

    Ok(rows.into_iter().map(Reservation::from).collect())
}

pub async fn list_reservations_by_court(
    pool: &Pool<Postgres>,
    court_id: i64,
    date: Option<NaiveDate>,
) -> BookingResult<Vec<Reservation>> {
    let rows = sqlx::query_as::<_, DbReservation>(
        r#"
        SELECT id, cancha_id, fecha, hora_inicio, duracion, nombre_contacto,
               telefono_area, telefono_numero, created_at
        FROM reservaciones
        WHERE cancha_id = $1
          AND ($2::date IS NULL OR fecha = $2)
        ORDER BY fecha ASC, hora_inicio ASC, id ASC
        "#,
    )
    .bind(court_id)
    .bind(date)
    .fetch_all(pool)
    .await
    .wrap_err_with(|| format!("failed to list reservations of court {court_id}"))?;

    Ok(rows.into_iter().map(Reservation::from).collect())
}

pub async fn get_reservation(pool: &Pool<Postgres>, id: i64) -> BookingResult<Option<Reservation>> {
    let row = sqlx::query_as::<_, DbReservation>(
        r#"
        SELECT id, cancha_id, fecha, hora_inicio, duracion, nombre_contacto,
               telefono_area, telefono_numero, created_at
        FROM reservaciones
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .wrap_err_with(|| format!("failed to load reservation {id}"))?;

    Ok(row.map(Reservation::from))
}

pub async fn insert_reservation(
    pool: &Pool<Postgres>,
    reservation: &NewReservation,
) -> BookingResult<Reservation> {
    let mut tx = pool.begin().await.wrap_err("failed to open transaction")?;

    lock_court(&mut tx, reservation.court_id).await?;
    ensure_court_exists(&mut tx, reservation.court_id).await?;
    ensure_no_conflict(&mut tx, reservation, None).await?;

    let row = sqlx::query_as::<_, DbReservation>(
        r#"
        INSERT INTO reservaciones
            (cancha_id, fecha, hora_inicio, duracion, nombre_contacto,
             telefono_area, telefono_numero)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, cancha_id, fecha, hora_inicio, duracion, nombre_contacto,
                  telefono_area, telefono_numero, created_at
        "#,
    )
    .bind(reservation.court_id)
    .bind(reservation.date)
    .bind(reservation.start_time)
    .bind(reservation.duration_minutes)
    .bind(&reservation.contact_name)
    .bind(&reservation.phone.area)
    .bind(&reservation.phone.number)
    .fetch_one(&mut *tx)
    .await
    .wrap_err("failed to insert reservation")?;

    tx.commit().await.wrap_err("failed to commit reservation")?;

    tracing::debug!("Reservation created successfully: id={}", row.id);
    Ok(row.into())
}

pub async fn replace_reservation(
    pool: &Pool<Postgres>,
    id: i64,
    reservation: &NewReservation,
) -> BookingResult<Reservation> {
    let mut tx = pool.begin().await.wrap_err("failed to open transaction")?;

    // Lock the row first so a concurrent delete cannot slip in.
    sqlx::query_scalar::<_, i64>(
        r#"
        SELECT id FROM reservaciones WHERE id = $1 FOR UPDATE
        "#,
    )
    .bind(id)
    .fetch_optional(&mut *tx)
    .await
    .wrap_err_with(|| format!("failed to lock reservation {id}"))?
    .ok_or_else(|| reservation_not_found(id))?;

    lock_court(&mut tx, reservation.court_id).await?;
    ensure_court_exists(&mut tx, reservation.court_id).await?;
    ensure_no_conflict(&mut tx, reservation, Some(id)).await?;

    let row = sqlx::query_as::<_, DbReservation>(
        r#"
        UPDATE reservaciones
        SET cancha_id = $2, fecha = $3, hora_inicio = $4, duracion = $5,
            nombre_contacto = $6, telefono_area = $7, telefono_numero = $8
        WHERE id = $1
        RETURNING id, cancha_id, fecha, hora_inicio, duracion, nombre_contacto,
                  telefono_area, telefono_numero, created_at
        "#,
    )
    .bind(id)
    .bind(reservation.court_id)
    .bind(reservation.date)
    .bind(reservation.start_time)
    .bind(reservation.duration_minutes)
    .bind(&reservation.contact_name)
    .bind(&reservation.phone.area)
    .bind(&reservation.phone.number)
    .fetch_one(&mut *tx)
    .await
    .wrap_err_with(|| format!("failed to update reservation {id}"))?;

    tx.commit().await.wrap_err("failed to commit reservation")?;

    Ok(row.into())
}

pub async fn delete_reservation(pool: &Pool<Postgres>, id: i64) -> BookingResult<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM reservaciones
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await
    .wrap_err_with(|| format!("failed to delete reservation {id}"))?;

    Ok(result.rows_affected() > 0)
}

/// Loads the reservations that could collide with `candidate` and rejects it
/// on the first overlap. Must run under the court lock.
async fn ensure_no_conflict(
    conn: &mut PgConnection,
    candidate: &NewReservation,
    exclude: Option<i64>,
) -> BookingResult<()> {
    let (from, to) = search_dates(candidate.date);

    let rows = sqlx::query_as::<_, DbReservation>(
        r#"
        SELECT id, cancha_id, fecha, hora_inicio, duracion, nombre_contacto,
               telefono_area, telefono_numero, created_at
        FROM reservaciones
        WHERE cancha_id = $1
          AND fecha BETWEEN $2 AND $3
          AND ($4::bigint IS NULL OR id <> $4)
        "#,
    )
    .bind(candidate.court_id)
    .bind(from)
    .bind(to)
    .bind(exclude)
    .fetch_all(&mut *conn)
    .await
    .wrap_err("failed to search for overlapping reservations")?;

    let existing: Vec<Reservation> = rows.into_iter().map(Reservation::from).collect();
    match find_conflict(candidate, &existing, exclude) {
        Some(clash) => Err(conflict_error(clash)),
        None => Ok(()),
    }
}
