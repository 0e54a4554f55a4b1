use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use models::todo;

use crate::errors::ApiError;
use crate::routes::AppState;

#[derive(Debug, Deserialize, Serialize)]
pub struct CreateTodoInput {
    // Raw JSON value so a non-string title is a validation failure (400),
    // not a body-deserialization rejection
    #[serde(default)]
    pub title: Option<serde_json::Value>,
    #[serde(default)]
    pub completed: Option<bool>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateTodoInput {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub completed: Option<bool>,
}

#[utoipa::path(
    get, path = "/api/todos", tag = "todos",
    responses(
        (status = 200, description = "All todos ordered by ascending id"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<todo::Model>>, ApiError> {
    let todos = todo::list(&state.db).await?;
    Ok(Json(todos))
}

#[utoipa::path(
    post, path = "/api/todos", tag = "todos",
    request_body = crate::openapi::CreateTodoInputDoc,
    responses(
        (status = 201, description = "Created"),
        (status = 400, description = "Missing, non-string or blank title"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn create_todo(
    State(state): State<AppState>,
    Json(input): Json<CreateTodoInput>,
) -> Result<(StatusCode, Json<todo::Model>), ApiError> {
    let title = input.title.as_ref().and_then(|v| v.as_str());
    let created = todo::create(&state.db, title, input.completed.unwrap_or(false)).await?;
    info!(id = created.id, "created todo");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put, path = "/api/todos/{id}", tag = "todos",
    params(("id" = i64, Path, description = "Todo id")),
    request_body = crate::openapi::UpdateTodoInputDoc,
    responses(
        (status = 200, description = "Updated"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<UpdateTodoInput>,
) -> Result<Json<todo::Model>, ApiError> {
    // Both columns are overwritten with exactly the supplied values
    let updated = todo::update(&state.db, id, input.title, input.completed).await?;
    info!(id = updated.id, "updated todo");
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/api/todos/{id}", tag = "todos",
    params(("id" = i64, Path, description = "Todo id")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if todo::delete(&state.db, id).await? {
        info!(id, "deleted todo");
        Ok(Json(serde_json::json!({"message": "Todo deleted successfully"})))
    } else {
        Err(ApiError::not_found("Todo not found"))
    }
}
