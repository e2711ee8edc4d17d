//! Todo API Bindings
//!
//! Frontend bindings to the todo REST endpoint.

mod http;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::models::Todo;

pub use http::HttpTodoApi;

// ========================
// Argument Structs
// ========================

#[derive(Debug, Serialize)]
pub struct CreateTodoArgs<'a> {
    pub title: &'a str,
}

#[derive(Debug, Serialize)]
pub struct SetCompletedArgs {
    pub completed: bool,
}

// ========================
// Errors
// ========================

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("no browser window available for fetch")]
    NoWindow,
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("could not decode response: {0}")]
    Decode(String),
    #[error("could not encode request body: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;

// ========================
// Transport
// ========================

/// Operations the client needs from the todo endpoint.
///
/// Futures are `?Send`: in the browser they wrap JS promises.
#[async_trait(?Send)]
pub trait TodoApi {
    /// `GET {base}`
    async fn list(&self) -> ApiResult<Vec<Todo>>;

    /// `POST {base}` with `{title}`; `Ok` only for a 2xx response
    async fn create(&self, args: &CreateTodoArgs<'_>) -> ApiResult<()>;

    /// `PUT {base}/{id}` with `{completed}`
    async fn set_completed(&self, id: i64, args: &SetCompletedArgs) -> ApiResult<()>;

    /// `DELETE {base}/{id}`
    async fn delete(&self, id: i64) -> ApiResult<()>;
}
