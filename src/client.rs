//! Todo List Client
//!
//! Load/Add/Toggle/Delete orchestration. Every mutation is followed by a
//! full reload; failures are logged and never surfaced.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::api::{CreateTodoArgs, SetCompletedArgs, TodoApi};
use crate::config::LoadPolicy;
use crate::models::Todo;

/// Where the client reads input from and renders the list to.
pub trait TodoDisplay {
    /// Current contents of the new-todo input
    fn input_text(&self) -> String;

    fn clear_input(&self);

    /// Replace the whole list with `todos`
    fn show(&self, todos: &[Todo]);
}

/// Trim the same set as JS `String.prototype.trim`, which also strips U+FEFF.
fn trim_input(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Monotonic ticket counter for list loads
#[derive(Debug, Default)]
struct LoadSequencer {
    latest: AtomicU64,
}

impl LoadSequencer {
    fn begin(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::Relaxed) + 1
    }

    fn is_latest(&self, ticket: u64) -> bool {
        self.latest.load(Ordering::Relaxed) == ticket
    }
}

pub struct TodoClient<A, D> {
    api: A,
    display: D,
    policy: LoadPolicy,
    loads: LoadSequencer,
}

impl<A: TodoApi, D: TodoDisplay> TodoClient<A, D> {
    pub fn new(api: A, display: D, policy: LoadPolicy) -> Self {
        Self { api, display, policy, loads: LoadSequencer::default() }
    }

    /// Fetch the collection and render it. On failure the display is left as-is.
    pub async fn load(&self) {
        let ticket = self.loads.begin();
        match self.api.list().await {
            Ok(todos) => {
                if self.policy == LoadPolicy::DiscardStale && !self.loads.is_latest(ticket) {
                    log::debug!("Discarding stale todo list (load #{})", ticket);
                    return;
                }
                log::debug!("Loaded {} todos", todos.len());
                self.render(&todos);
            }
            Err(e) => log::error!("Error fetching todos: {}", e),
        }
    }

    /// Reload after a mutation, whatever its outcome.
    pub async fn refresh(&self) {
        self.load().await;
    }

    /// Create a todo from the trimmed input. Empty input is a no-op.
    pub async fn add(&self) {
        let text = self.display.input_text();
        let title = trim_input(&text);
        if title.is_empty() {
            return;
        }

        match self.api.create(&CreateTodoArgs { title }).await {
            Ok(()) => {
                self.display.clear_input();
                self.refresh().await;
            }
            Err(e) => log::error!("Error adding todo: {}", e),
        }
    }

    pub async fn toggle(&self, id: i64, completed: bool) {
        let args = SetCompletedArgs { completed: !completed };
        if let Err(e) = self.api.set_completed(id, &args).await {
            log::error!("Error toggling todo {}: {}", id, e);
        }
        self.refresh().await;
    }

    pub async fn delete(&self, id: i64) {
        if let Err(e) = self.api.delete(id).await {
            log::error!("Error deleting todo {}: {}", id, e);
        }
        self.refresh().await;
    }

    pub fn render(&self, todos: &[Todo]) {
        self.display.show(todos);
    }
}
