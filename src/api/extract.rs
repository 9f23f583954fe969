//! Extractors whose rejections use the catalog error envelope.

use axum::extract::{FromRequest, FromRequestParts};

use super::ApiError;

/// `axum::Json` that reports malformed bodies as a 400 [`ApiError`].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// `axum::extract::Path` that reports unparsable segments as a 400 [`ApiError`].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);
