//! Todo Item Component
//!
//! A single row: clickable toggle region and delete button.

use leptos::prelude::*;

use crate::context::TodoContext;
use crate::models::Todo;

#[component]
pub fn TodoItem(todo: Todo) -> impl IntoView {
    let ctx = use_context::<TodoContext>().expect("TodoContext should be provided");
    let delete_ctx = ctx.clone();

    let id = todo.id;
    let completed = todo.completed;

    view! {
        <li class=if completed { "todo-item completed" } else { "todo-item" }>
            <div class="todo-content" on:click=move |_| ctx.toggle(id, completed)>
                <div class="check-circle"></div>
                // Text node, never parsed as markup
                <span class="todo-text">{todo.title}</span>
            </div>
            <button class="delete-btn" on:click=move |ev| {
                ev.stop_propagation();
                delete_ctx.delete(id);
            }>
                <i class="fas fa-trash"></i>
            </button>
        </li>
    }
}
