/// Request extractors whose rejections become [`error_handling::AppError`]s
pub mod extract;
/// Mapping of domain errors to HTTP responses
pub mod error_handling;
