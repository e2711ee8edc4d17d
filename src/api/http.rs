//! Fetch Transport
//!
//! `TodoApi` over the browser `fetch` API.

use async_trait::async_trait;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use super::{ApiError, ApiResult, CreateTodoArgs, SetCompletedArgs, TodoApi};
use crate::models::Todo;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Everything `fetch` needs for one call, built without touching the browser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    pub method: &'static str,
    pub url: String,
    pub body: Option<String>,
}

impl RequestSpec {
    fn new(method: &'static str, url: String) -> Self {
        Self { method, url, body: None }
    }

    fn with_json<T: Serialize>(method: &'static str, url: String, body: &T) -> ApiResult<Self> {
        Ok(Self { method, url, body: Some(serde_json::to_string(body)?) })
    }

    /// Only requests with a body declare a content type
    pub fn content_type(&self) -> Option<&'static str> {
        self.body.as_ref().map(|_| JSON_CONTENT_TYPE)
    }
}

/// REST client rooted at the collection endpoint (e.g. `/api/todos`)
#[derive(Debug, Clone)]
pub struct HttpTodoApi {
    base: String,
}

impl HttpTodoApi {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self { base: base.trim_end_matches('/').to_string() }
    }

    pub fn collection_url(&self) -> &str {
        &self.base
    }

    pub fn item_url(&self, id: i64) -> String {
        format!("{}/{}", self.base, id)
    }

    pub fn list_request(&self) -> RequestSpec {
        RequestSpec::new("GET", self.collection_url().to_string())
    }

    pub fn create_request(&self, args: &CreateTodoArgs<'_>) -> ApiResult<RequestSpec> {
        RequestSpec::with_json("POST", self.collection_url().to_string(), args)
    }

    pub fn set_completed_request(&self, id: i64, args: &SetCompletedArgs) -> ApiResult<RequestSpec> {
        RequestSpec::with_json("PUT", self.item_url(id), args)
    }

    pub fn delete_request(&self, id: i64) -> RequestSpec {
        RequestSpec::new("DELETE", self.item_url(id))
    }

    async fn send(&self, spec: RequestSpec) -> ApiResult<Response> {
        let init = RequestInit::new();
        init.set_method(spec.method);
        if let Some(content_type) = spec.content_type() {
            let headers = Headers::new().map_err(js_error)?;
            headers.set("Content-Type", content_type).map_err(js_error)?;
            init.set_headers(&headers);
        }
        if let Some(body) = &spec.body {
            init.set_body(&JsValue::from_str(body));
        }

        let request = Request::new_with_str_and_init(&spec.url, &init).map_err(js_error)?;
        let window = web_sys::window().ok_or(ApiError::NoWindow)?;
        let value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_error)?;
        let response = value.dyn_into::<Response>().map_err(js_error)?;
        check_status(response.ok(), response.status())?;
        Ok(response)
    }
}

#[async_trait(?Send)]
impl TodoApi for HttpTodoApi {
    async fn list(&self) -> ApiResult<Vec<Todo>> {
        let response = self.send(self.list_request()).await?;
        let json = response.json().map_err(|e| ApiError::Decode(describe(&e)))?;
        let value = JsFuture::from(json)
            .await
            .map_err(|e| ApiError::Decode(describe(&e)))?;
        serde_wasm_bindgen::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn create(&self, args: &CreateTodoArgs<'_>) -> ApiResult<()> {
        self.send(self.create_request(args)?).await?;
        Ok(())
    }

    async fn set_completed(&self, id: i64, args: &SetCompletedArgs) -> ApiResult<()> {
        self.send(self.set_completed_request(id, args)?).await?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> ApiResult<()> {
        self.send(self.delete_request(id)).await?;
        Ok(())
    }
}

/// Map a non-2xx response to `ApiError::Status`.
fn check_status(ok: bool, status: u16) -> ApiResult<()> {
    if ok {
        Ok(())
    } else {
        Err(ApiError::Status(status))
    }
}

fn js_error(value: JsValue) -> ApiError {
    ApiError::Network(describe(&value))
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
