use axum::{extract::Path, Json};
use shared::{
    api::{error::ServerError, payloads::CreateUserRequest, response_errors::UserError},
    model::{User, ValidateModel},
    types::Uuid,
};
use tracing::instrument;

use crate::db::DatabaseConnection;

/// Provisioning seam for the upstream account system; there is no
/// registration flow in this service
#[instrument(skip(conn))]
pub async fn create_user(
    DatabaseConnection(conn): DatabaseConnection,
    Json(request): Json<CreateUserRequest>,
) -> Result<Json<User>, ServerError<UserError>> {
    request.validate()?;

    let user = conn
        .interact(move |conn| {
            if User::fetch_by_username(conn, &request.username)?.is_some() {
                Err(UserError::UsernameTaken)?;
            }
            let user = User::create(conn, request.username, request.display_name)?;
            Ok::<_, ServerError<UserError>>(user)
        })
        .await??;

    Ok(Json(user))
}

#[instrument(skip(conn))]
pub async fn fetch_user(
    DatabaseConnection(conn): DatabaseConnection,
    Path(id): Path<Uuid>,
) -> Result<Json<User>, ServerError<UserError>> {
    let user = conn
        .interact(move |conn| User::fetch_by_id(conn, &id))
        .await??
        .ok_or(UserError::NotFound)?;

    Ok(Json(user))
}
