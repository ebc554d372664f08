use serde::Deserialize;

use crate::model::Todo;
use crate::schema::{CreateTodoSchema, DeleteResponse, UpdateTodoSchema};

// Error envelope the server sends for failed calls
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Errors surfaced by `TodoApi`. A non-2xx reply carries the server's own
/// message so the caller can log something identifiable; everything that
/// happens below HTTP (connect, decode) is a transport error.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server replied {status}: {message}")]
    Api { status: u16, message: String },
}

/// Typed client for the todo remote procedures, one method per operation.
#[derive(Debug, Clone)]
pub struct TodoApi {
    http: reqwest::Client,
    base_url: String,
}

impl TodoApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn list(&self) -> Result<Vec<Todo>, ClientError> {
        let response = self
            .http
            .get(format!("{}/todos", self.base_url))
            .send()
            .await?;
        decode(response).await
    }

    pub async fn create(&self, input: &CreateTodoSchema) -> Result<Todo, ClientError> {
        let response = self
            .http
            .post(format!("{}/todos", self.base_url))
            .json(input)
            .send()
            .await?;
        decode(response).await
    }

    pub async fn toggle(&self, id: i64) -> Result<Todo, ClientError> {
        let response = self
            .http
            .post(format!("{}/todos/{id}/toggle", self.base_url))
            .send()
            .await?;
        decode(response).await
    }

    pub async fn update(&self, id: i64, input: &UpdateTodoSchema) -> Result<Todo, ClientError> {
        let response = self
            .http
            .patch(format!("{}/todos/{id}", self.base_url))
            .json(input)
            .send()
            .await?;
        decode(response).await
    }

    pub async fn delete(&self, id: i64) -> Result<DeleteResponse, ClientError> {
        let response = self
            .http
            .delete(format!("{}/todos/{id}", self.base_url))
            .send()
            .await?;
        decode(response).await
    }
}

// Decodes a success body, or surfaces the server's error message
async fn decode<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => status.to_string(),
    };
    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}
