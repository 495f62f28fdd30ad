use canchas_core::models::{
    court::Court,
    reservation::{ContactPhone, Reservation},
};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbCourt {
    pub id: i64,
    pub nombre: String,
    pub techada: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbReservation {
    pub id: i64,
    pub cancha_id: i64,
    pub fecha: NaiveDate,
    pub hora_inicio: NaiveTime,
    pub duracion: i32,
    pub nombre_contacto: String,
    pub telefono_area: String,
    pub telefono_numero: String,
    pub created_at: DateTime<Utc>,
}

impl From<DbCourt> for Court {
    fn from(row: DbCourt) -> Self {
        Court {
            id: row.id,
            name: row.nombre,
            covered: row.techada,
        }
    }
}

impl From<DbReservation> for Reservation {
    fn from(row: DbReservation) -> Self {
        Reservation {
            id: row.id,
            court_id: row.cancha_id,
            date: row.fecha,
            start_time: row.hora_inicio,
            duration_minutes: row.duracion,
            contact_name: row.nombre_contacto,
            phone: ContactPhone {
                area: row.telefono_area,
                number: row.telefono_numero,
            },
        }
    }
}
