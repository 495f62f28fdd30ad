//! # Canchas Core
//!
//! Domain types and booking rules for the court reservation service.
//!
//! - [`models`]: courts, reservations and the loosely-typed request payloads
//! - [`scheduling`]: time windows and the overlap/conflict rules
//! - [`repository`]: the storage seam implemented by `canchas-db`
//! - [`scheduler`]: the service that validates requests and drives storage

pub mod errors;
pub mod models;
pub mod repository;
pub mod scheduler;
pub mod scheduling;
