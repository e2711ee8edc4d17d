//! Todo List Component
//!
//! Renders the server's list, one `TodoItem` per todo in response order.

use leptos::prelude::*;

use crate::components::TodoItem;
use crate::context::TodoContext;

#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_context::<TodoContext>().expect("TodoContext should be provided");
    let todos = ctx.todos;

    view! {
        <ul id="todo-list" class="todo-list">
            <For
                each=move || todos.get()
                // Key on every displayed field so a toggled todo re-renders
                key=|todo| (todo.id, todo.title.clone(), todo.completed)
                children=move |todo| view! { <TodoItem todo=todo /> }
            />
        </ul>
    }
}
