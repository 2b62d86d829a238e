use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use deadpool_sqlite::Pool;
use shared::{
    api::{error::ServerError, response_errors::AuthError},
    model::User,
    types::Uuid,
};

/// Header the fronting auth layer uses to pass the authenticated user's id.
/// Authentication itself happens upstream of this service
pub const USER_ID_HEADER: &str = "x-user-id";

/// The authenticated user, resolved to its database row. Requests without
/// a resolvable identity are rejected before the handler runs
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
    Pool: FromRef<S>,
{
    type Rejection = ServerError<AuthError>;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| Uuid::parse(value).ok())
            .ok_or(AuthError::Unauthorized)?;

        let pool = Pool::from_ref(state);
        let conn = pool.get().await?;

        let user = conn
            .interact(move |conn| User::fetch_by_id(conn, &id))
            .await??
            .ok_or(AuthError::Unauthorized)?;

        Ok(CurrentUser(user))
    }
}
