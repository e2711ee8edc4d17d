//! New Todo Form Component
//!
//! Text input plus add button. Enter in the input also adds.

use leptos::prelude::*;

use crate::context::TodoContext;

#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_context::<TodoContext>().expect("TodoContext should be provided");
    let input_ref = ctx.input_ref;
    let on_click_ctx = ctx.clone();

    view! {
        <div class="input-group">
            <input
                type="text"
                id="todo-input"
                placeholder="What needs to be done?"
                autocomplete="off"
                node_ref=input_ref
                on:keypress=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        ctx.add();
                    }
                }
            />
            <button id="add-btn" on:click=move |_| on_click_ctx.add()>
                <i class="fas fa-plus"></i>
            </button>
        </div>
    }
}
