use actix_web::{HttpResponse, ResponseError, http::StatusCode, web};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    domain::{CommentPayload, CommentResponseBody, parse_id},
    services::{CommentError, CommentService},
    utils,
};

impl ResponseError for CommentError {
    fn status_code(&self) -> StatusCode {
        match self {
            CommentError::ValidationError(_) => StatusCode::BAD_REQUEST,
            CommentError::NotFound => StatusCode::NOT_FOUND,
            CommentError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // The cause is logged by the tracing middleware, never sent back.
        let message = match self {
            CommentError::UnexpectedError(_) => "Internal server error".to_string(),
            other => other.to_string(),
        };

        utils::build_error_response(self.status_code(), message)
    }
}

#[derive(Deserialize, Debug)]
pub struct CommentPathParams {
    pub id: String,
}

impl CommentPathParams {
    fn comment_id(&self) -> Result<Uuid, CommentError> {
        parse_id("comment id", &self.id).map_err(CommentError::ValidationError)
    }
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CommentListQuery {
    pub topic_id: Option<String>,
}

#[tracing::instrument(skip(payload, service))]
pub async fn create_comment(
    payload: web::Json<CommentPayload>,
    service: web::Data<CommentService>,
) -> Result<HttpResponse, CommentError> {
    service.create_comment(payload.into_inner()).await?;
    Ok(HttpResponse::Ok().finish())
}

#[tracing::instrument(skip(service))]
pub async fn get_all_comments(
    query: web::Query<CommentListQuery>,
    service: web::Data<CommentService>,
) -> Result<HttpResponse, CommentError> {
    let comments = match &query.topic_id {
        Some(raw) => {
            let topic_id = parse_id("topicId", raw).map_err(CommentError::ValidationError)?;
            service.get_comments_for_topic(topic_id).await?
        }
        None => service.get_all_comments().await?,
    };

    let body: Vec<CommentResponseBody> = comments.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(body))
}

#[tracing::instrument(skip(service), fields(comment_id = %path.id))]
pub async fn get_comment_by_id(
    path: web::Path<CommentPathParams>,
    service: web::Data<CommentService>,
) -> Result<HttpResponse, CommentError> {
    let comment = service.get_comment_by_id(path.comment_id()?).await?;
    Ok(HttpResponse::Ok().json(CommentResponseBody::from(comment)))
}

#[tracing::instrument(skip(payload, service), fields(comment_id = %path.id))]
pub async fn update_comment(
    path: web::Path<CommentPathParams>,
    payload: web::Json<CommentPayload>,
    service: web::Data<CommentService>,
) -> Result<HttpResponse, CommentError> {
    service
        .update_comment(path.comment_id()?, payload.into_inner())
        .await?;
    Ok(HttpResponse::Ok().finish())
}

#[tracing::instrument(skip(service), fields(comment_id = %path.id))]
pub async fn delete_comment(
    path: web::Path<CommentPathParams>,
    service: web::Data<CommentService>,
) -> Result<HttpResponse, CommentError> {
    service.delete_comment(path.comment_id()?).await?;
    Ok(HttpResponse::Ok().finish())
}
