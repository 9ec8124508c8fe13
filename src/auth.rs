use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
};
use axum_extra::TypedHeader;
use headers::{Authorization, authorization::Bearer};

/// Guard for scheduler-only routes (feed ingestion, reconciliation).
/// The caller presents the shared CRON_SECRET as a bearer token;
/// interactive user auth lives with the hosted provider, not here.
pub struct CronGuard;

impl<S> FromRequestParts<S> for CronGuard
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, String);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, _state)
                .await
                .map_err(|_| {
                    (
                        StatusCode::UNAUTHORIZED,
                        "Missing or invalid Authorization header".into(),
                    )
                })?;

        let secret = std::env::var("CRON_SECRET").map_err(|_| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "CRON_SECRET is not configured".into(),
            )
        })?;

        if bearer.token() != secret {
            return Err((StatusCode::UNAUTHORIZED, "Invalid scheduler token".into()));
        }

        Ok(Self)
    }
}
