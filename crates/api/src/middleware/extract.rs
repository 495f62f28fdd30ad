//! Drop-in replacements for axum's `Json`, `Path` and `Query` extractors.
//!
//! They behave like the originals but reject with [`AppError`], so a
//! malformed body or parameter yields the usual `{detail, kind}` payload
//! instead of axum's plain-text rejection.

use axum::extract::{FromRequest, FromRequestParts};

use super::error_handling::AppError;

#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
