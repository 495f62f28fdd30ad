use serde::{Deserialize, Serialize};

use crate::errors::{BookingError, BookingResult};

/// A bookable court as stored and served.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Court {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "techada")]
    pub covered: bool,
}

/// Payload for creating or updating a court.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CourtRequest {
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub techada: bool,
}

/// A validated court payload, ready for storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCourt {
    pub name: String,
    pub covered: bool,
}

impl CourtRequest {
    pub fn validate(&self) -> BookingResult<NewCourt> {
        let name = self.nombre.trim();
        if name.is_empty() {
            return Err(BookingError::Validation(
                "nombre must not be empty".to_string(),
            ));
        }

        Ok(NewCourt {
            name: name.to_string(),
            covered: self.techada,
        })
    }
}
