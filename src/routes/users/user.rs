use actix_web::{HttpResponse, ResponseError, http::StatusCode, web};

use crate::{
    domain::{UserPayload, parse_id},
    services::{CreateUser, UserError},
    utils,
};

impl ResponseError for UserError {
    fn status_code(&self) -> StatusCode {
        match self {
            UserError::ValidationError(_) => StatusCode::BAD_REQUEST,
            UserError::AlreadyExists => StatusCode::CONFLICT,
            UserError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            UserError::UnexpectedError(_) => "Internal server error".to_string(),
            other => other.to_string(),
        };

        utils::build_error_response(self.status_code(), message)
    }
}

#[tracing::instrument(
    name = "Adding a new user",
    skip(payload, create_user),
    fields(user_name = %payload.name)
)]
pub async fn create_user(
    payload: web::Json<UserPayload>,
    create_user: web::Data<CreateUser>,
) -> Result<HttpResponse, UserError> {
    let UserPayload {
        id,
        name,
        description,
        avatar,
    } = payload.into_inner();
    let id = parse_id("id", &id).map_err(UserError::ValidationError)?;

    create_user.run(id, name, description, avatar).await?;
    Ok(HttpResponse::Ok().finish())
}
