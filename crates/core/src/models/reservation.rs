use std::fmt;

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::{
    errors::{BookingError, BookingResult},
    scheduling::{self, TimeWindow},
};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

const AREA_CODE_DIGITS: std::ops::RangeInclusive<usize> = 3..=4;
const LOCAL_NUMBER_DIGITS: std::ops::RangeInclusive<usize> = 6..=8;

/// Contact phone, stored as area code plus local number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPhone {
    pub area: String,
    pub number: String,
}

impl ContactPhone {
    /// Builds a phone from its two parts, each of which must be all digits.
    pub fn from_parts(area: &str, number: &str) -> BookingResult<Self> {
        let area = area.trim();
        let number = number.trim();

        check_digits(area, "telefono_area", AREA_CODE_DIGITS)?;
        check_digits(number, "telefono_numero", LOCAL_NUMBER_DIGITS)?;

        Ok(Self {
            area: area.to_string(),
            number: number.to_string(),
        })
    }

    /// Parses a combined phone such as `351-4567890` or `351 4567890`.
    ///
    /// A bare run of digits is rejected: the split point between area code
    /// and local number cannot be recovered from it.
    pub fn parse_combined(raw: &str) -> BookingResult<Self> {
        let parts: Vec<&str> = raw
            .split(|c: char| c == '-' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();

        match parts.as_slice() {
            [area, number] => Self::from_parts(area, number),
            _ => Err(BookingError::Validation(
                "telefono_contacto must be an area code and a number separated by '-' or a space \
                 (or send telefono_area and telefono_numero)"
                    .to_string(),
            )),
        }
    }
}

impl fmt::Display for ContactPhone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.area, self.number)
    }
}

fn check_digits(
    value: &str,
    field: &str,
    len: std::ops::RangeInclusive<usize>,
) -> BookingResult<()> {
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(BookingError::Validation(format!(
            "{field} must contain only digits"
        )));
    }
    if !len.contains(&value.len()) {
        return Err(BookingError::Validation(format!(
            "{field} must have between {} and {} digits",
            len.start(),
            len.end()
        )));
    }
    Ok(())
}

/// A stored reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: i64,
    pub court_id: i64,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub duration_minutes: i32,
    pub contact_name: String,
    pub phone: ContactPhone,
}

impl Reservation {
    pub fn from_new(id: i64, new: NewReservation) -> Self {
        Self {
            id,
            court_id: new.court_id,
            date: new.date,
            start_time: new.start_time,
            duration_minutes: new.duration_minutes,
            contact_name: new.contact_name,
            phone: new.phone,
        }
    }

    pub fn window(&self) -> TimeWindow {
        TimeWindow::new(self.date, self.start_time, self.duration_minutes)
    }
}

/// A validated reservation payload, ready for the conflict check and storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReservation {
    pub court_id: i64,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub duration_minutes: i32,
    pub contact_name: String,
    pub phone: ContactPhone,
}

impl NewReservation {
    pub fn window(&self) -> TimeWindow {
        TimeWindow::new(self.date, self.start_time, self.duration_minutes)
    }
}

/// A JSON value that may arrive either as a number or as a numeric string.
///
/// Form-driven clients send `"3"` and `3` interchangeably.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LooseValue {
    Number(i64),
    Text(String),
}

impl LooseValue {
    fn is_blank(&self) -> bool {
        matches!(self, LooseValue::Text(s) if s.trim().is_empty())
    }

    fn as_integer(&self, field: &str) -> BookingResult<i64> {
        match self {
            LooseValue::Number(n) => Ok(*n),
            LooseValue::Text(s) => s.trim().parse().map_err(|_| {
                BookingError::Validation(format!("{field} must be an integer"))
            }),
        }
    }

    fn as_text(&self) -> String {
        match self {
            LooseValue::Number(n) => n.to_string(),
            LooseValue::Text(s) => s.clone(),
        }
    }
}

impl From<i64> for LooseValue {
    fn from(value: i64) -> Self {
        LooseValue::Number(value)
    }
}

impl From<&str> for LooseValue {
    fn from(value: &str) -> Self {
        LooseValue::Text(value.to_string())
    }
}

/// Reservation payload for create and modify requests.
///
/// Every field is optional at the wire level so that a missing or malformed
/// field surfaces as a validation error with a readable detail.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReservationInput {
    #[serde(default)]
    pub cancha_id: Option<LooseValue>,
    #[serde(default)]
    pub fecha: Option<String>,
    #[serde(default)]
    pub hora_inicio: Option<String>,
    #[serde(default)]
    pub duracion: Option<LooseValue>,
    #[serde(default)]
    pub nombre_contacto: Option<String>,
    #[serde(default)]
    pub telefono_contacto: Option<LooseValue>,
    #[serde(default)]
    pub telefono_area: Option<LooseValue>,
    #[serde(default)]
    pub telefono_numero: Option<LooseValue>,
}

impl ReservationInput {
    pub fn validate(&self) -> BookingResult<NewReservation> {
        let court_id = required(&self.cancha_id, "cancha_id")?.as_integer("cancha_id")?;
        if court_id <= 0 {
            return Err(BookingError::Validation(
                "cancha_id must be a positive integer".to_string(),
            ));
        }

        let date = parse_date(required_text(&self.fecha, "fecha")?)?;
        let start_time = parse_time(required_text(&self.hora_inicio, "hora_inicio")?)?;

        let duration = required(&self.duracion, "duracion")?.as_integer("duracion")?;
        let duration_minutes = scheduling::check_duration(duration)?;

        let contact_name = required_text(&self.nombre_contacto, "nombre_contacto")?.to_string();
        let phone = self.contact_phone()?;

        Ok(NewReservation {
            court_id,
            date,
            start_time,
            duration_minutes,
            contact_name,
            phone,
        })
    }

    fn contact_phone(&self) -> BookingResult<ContactPhone> {
        let area = present(&self.telefono_area);
        let number = present(&self.telefono_numero);

        match (area, number) {
            (Some(area), Some(number)) => {
                ContactPhone::from_parts(&area.as_text(), &number.as_text())
            }
            (Some(_), None) => Err(BookingError::Validation(
                "telefono_numero is required when telefono_area is given".to_string(),
            )),
            (None, Some(_)) => Err(BookingError::Validation(
                "telefono_area is required when telefono_numero is given".to_string(),
            )),
            (None, None) => match present(&self.telefono_contacto) {
                Some(combined) => ContactPhone::parse_combined(&combined.as_text()),
                None => Err(BookingError::Validation(
                    "a contact phone is required (telefono_area and telefono_numero)".to_string(),
                )),
            },
        }
    }
}

fn present(value: &Option<LooseValue>) -> Option<&LooseValue> {
    value.as_ref().filter(|v| !v.is_blank())
}

fn required<'a>(value: &'a Option<LooseValue>, field: &str) -> BookingResult<&'a LooseValue> {
    present(value).ok_or_else(|| BookingError::Validation(format!("{field} is required")))
}

fn required_text<'a>(value: &'a Option<String>, field: &str) -> BookingResult<&'a str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| BookingError::Validation(format!("{field} is required")))
}

/// Parses an ISO calendar date (`YYYY-MM-DD`).
pub fn parse_date(raw: &str) -> BookingResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|_| {
        BookingError::Validation(format!("invalid date '{raw}', expected YYYY-MM-DD"))
    })
}

/// Parses a time of day as `HH:MM` or `HH:MM:SS`.
///
/// Bookings start on whole minutes, so a seconds part must be `00`.
pub fn parse_time(raw: &str) -> BookingResult<NaiveTime> {
    let raw = raw.trim();
    let time = NaiveTime::parse_from_str(raw, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .map_err(|_| BookingError::Validation(format!("invalid time '{raw}', expected HH:MM")))?;

    // A leap second shows up as nanoseconds past 1e9.
    if time.second() != 0 || time.nanosecond() != 0 {
        return Err(BookingError::Validation(format!(
            "invalid time '{raw}', bookings start on a whole minute"
        )));
    }
    Ok(time)
}

/// Reservation as served over HTTP.
///
/// Carries both phone shapes so that clients reading either one keep working.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationResponse {
    pub id: i64,
    pub cancha_id: i64,
    pub fecha: String,
    pub hora_inicio: String,
    pub duracion: i32,
    pub nombre_contacto: String,
    pub telefono_area: String,
    pub telefono_numero: String,
    pub telefono_contacto: String,
}

impl From<Reservation> for ReservationResponse {
    fn from(reservation: Reservation) -> Self {
        Self {
            id: reservation.id,
            cancha_id: reservation.court_id,
            fecha: reservation.date.format(DATE_FORMAT).to_string(),
            hora_inicio: reservation.start_time.format(TIME_FORMAT).to_string(),
            duracion: reservation.duration_minutes,
            nombre_contacto: reservation.contact_name,
            telefono_contacto: reservation.phone.to_string(),
            telefono_area: reservation.phone.area,
            telefono_numero: reservation.phone.number,
        }
    }
}
