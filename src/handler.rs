use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use sqlx::{query, query_as};

use crate::{
    error::ApiError,
    model::Todo,
    schema::{CreateTodoSchema, DeleteResponse, UpdateTodoSchema},
    AppState,
};

// Handler for the health checker route
pub async fn health_checker_handler() -> impl IntoResponse {
    const MESSAGE: &str = "Todo CRUD API with Rust, SQLX, SQLite, and Axum";

    let json_response = serde_json::json!({
        "status": "success",
        "message": MESSAGE
    });

    Json(json_response)
}

// Handler for getting all Todo items
pub async fn get_todos(State(data): State<Arc<AppState>>) -> Result<impl IntoResponse, ApiError> {
    // Fetch all Todo items in insertion order
    let todos = query_as::<_, Todo>(
        "SELECT id, title, description, completed, created_at, updated_at FROM todos ORDER BY id",
    )
    .fetch_all(&data.db)
    .await?;

    Ok(Json(todos))
}

// Handler for creating a new Todo
pub async fn create_todo(
    State(data): State<Arc<AppState>>,
    Json(body): Json<CreateTodoSchema>,
) -> Result<impl IntoResponse, ApiError> {
    // Validation happens before the store is touched
    body.validate()?;

    // A single clock reading so created_at == updated_at on fresh rows
    let now = data.clock.now();
    let todo = query_as::<_, Todo>(
        "INSERT INTO todos (title, description, completed, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?) \
         RETURNING id, title, description, completed, created_at, updated_at",
    )
    .bind(&body.title)
    .bind(&body.description)
    .bind(false)
    .bind(now)
    .bind(now)
    .fetch_one(&data.db)
    .await?;

    Ok((StatusCode::CREATED, Json(todo)))
}

// Handler for toggling a Todo's completion flag
pub async fn toggle_todo(
    Path(id): Path<i64>,
    State(data): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    // Read-modify-write without a guard: two concurrent toggles on the same
    // id may both observe the pre-toggle flag and write the same value.
    let current = query_as::<_, Todo>(
        "SELECT id, title, description, completed, created_at, updated_at FROM todos WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(&data.db)
    .await?
    .ok_or(ApiError::NotFound(id))?;

    let todo = query_as::<_, Todo>(
        "UPDATE todos SET completed = ?, updated_at = ? WHERE id = ? \
         RETURNING id, title, description, completed, created_at, updated_at",
    )
    .bind(!current.completed)
    .bind(data.clock.now())
    .bind(id)
    .fetch_one(&data.db)
    .await?;

    Ok(Json(todo))
}

// Handler for partially updating a Todo by ID
pub async fn update_todo(
    Path(id): Path<i64>,
    State(data): State<Arc<AppState>>,
    Json(body): Json<UpdateTodoSchema>,
) -> Result<impl IntoResponse, ApiError> {
    body.validate()?;

    let current = query_as::<_, Todo>(
        "SELECT id, title, description, completed, created_at, updated_at FROM todos WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(&data.db)
    .await?
    .ok_or(ApiError::NotFound(id))?;

    // Merge supplied fields over the stored row; updated_at is refreshed
    // whenever the target exists, even for an empty patch
    let title = body.title.unwrap_or(current.title);
    let description = body.description.resolve(current.description);
    let completed = body.completed.unwrap_or(current.completed);

    let todo = query_as::<_, Todo>(
        "UPDATE todos SET title = ?, description = ?, completed = ?, updated_at = ? WHERE id = ? \
         RETURNING id, title, description, completed, created_at, updated_at",
    )
    .bind(&title)
    .bind(&description)
    .bind(completed)
    .bind(data.clock.now())
    .bind(id)
    .fetch_one(&data.db)
    .await?;

    Ok(Json(todo))
}

// Handler for deleting a Todo by ID
pub async fn delete_todo(
    Path(id): Path<i64>,
    State(data): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    // Deleting a missing id is not an error; the response reports whether a
    // row was actually removed
    let rows_affected = query("DELETE FROM todos WHERE id = ?")
        .bind(id)
        .execute(&data.db)
        .await?
        .rows_affected();

    Ok(Json(DeleteResponse {
        success: rows_affected > 0,
    }))
}
