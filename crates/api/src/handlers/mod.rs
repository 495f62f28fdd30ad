pub mod court;
pub mod reservation;
