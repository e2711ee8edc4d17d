//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::sync::Arc;

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpTodoApi;
use crate::client::TodoClient;
use crate::dom::DomDisplay;
use crate::models::Todo;

pub type AppClient = TodoClient<HttpTodoApi, DomDisplay>;

/// App-wide handles provided via context
#[derive(Clone)]
pub struct TodoContext {
    client: Arc<AppClient>,
    /// New-todo text input
    pub input_ref: NodeRef<html::Input>,
    /// Last list returned by the server
    pub todos: RwSignal<Vec<Todo>>,
}

impl TodoContext {
    pub fn new(client: Arc<AppClient>, input_ref: NodeRef<html::Input>, todos: RwSignal<Vec<Todo>>) -> Self {
        Self { client, input_ref, todos }
    }

    pub fn load(&self) {
        let client = Arc::clone(&self.client);
        spawn_local(async move { client.load().await });
    }

    pub fn add(&self) {
        let client = Arc::clone(&self.client);
        spawn_local(async move { client.add().await });
    }

    pub fn toggle(&self, id: i64, completed: bool) {
        let client = Arc::clone(&self.client);
        spawn_local(async move { client.toggle(id, completed).await });
    }

    pub fn delete(&self, id: i64) {
        let client = Arc::clone(&self.client);
        spawn_local(async move { client.delete(id).await });
    }
}
