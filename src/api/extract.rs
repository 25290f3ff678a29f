use super::error::ApiError;
use axum::async_trait;
use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

/// Query-string extractor that fails closed.
///
/// Wraps axum's [`Query`] so that binding failures (unknown parameter on a
/// `deny_unknown_fields` target, wrong type, malformed value) surface as a 422
/// validation error before the handler body, and therefore before any engine
/// call.
pub struct StrictQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for StrictQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::Validation(rejection.body_text()))?;

        Ok(StrictQuery(params))
    }
}
