//! Todo Frontend App
//!
//! Root component: builds the client, shares it via context and loads the
//! list on mount.

use std::sync::Arc;

use leptos::html;
use leptos::prelude::*;

use crate::api::HttpTodoApi;
use crate::client::TodoClient;
use crate::components::{NewTodoForm, TodoList};
use crate::config::ClientConfig;
use crate::context::TodoContext;
use crate::dom::DomDisplay;
use crate::models::Todo;

#[component]
pub fn App() -> impl IntoView {
    let config = ClientConfig::from_document();
    log::info!("Todo client using {} ({:?})", config.api_base, config.load_policy);

    let input_ref = NodeRef::<html::Input>::new();
    let todos = RwSignal::new(Vec::<Todo>::new());

    let client = TodoClient::new(
        HttpTodoApi::new(config.api_base),
        DomDisplay::new(input_ref, todos),
        config.load_policy,
    );
    let ctx = TodoContext::new(Arc::new(client), input_ref, todos);
    provide_context(ctx.clone());

    // Load todos on mount
    Effect::new(move |_| {
        ctx.load();
    });

    view! {
        <div class="container">
            <header>
                <h1>"Tao Todo"</h1>
            </header>

            <NewTodoForm />

            <TodoList />
        </div>
    }
}
