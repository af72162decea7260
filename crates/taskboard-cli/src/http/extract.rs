//! Request extractors that reject with [`ApiError`] instead of axum's
//! plain-text responses.

use axum::extract::{FromRequest, FromRequestParts};

use super::errors::ApiError;

/// JSON request body.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Typed path parameters.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);
