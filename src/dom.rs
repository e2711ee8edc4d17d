//! DOM Display
//!
//! `TodoDisplay` backed by the mounted input and the list signal that
//! `TodoList` renders from.

use leptos::html;
use leptos::prelude::*;

use crate::client::TodoDisplay;
use crate::models::Todo;

#[derive(Clone, Copy)]
pub struct DomDisplay {
    input: NodeRef<html::Input>,
    todos: RwSignal<Vec<Todo>>,
}

impl DomDisplay {
    pub fn new(input: NodeRef<html::Input>, todos: RwSignal<Vec<Todo>>) -> Self {
        Self { input, todos }
    }
}

impl TodoDisplay for DomDisplay {
    fn input_text(&self) -> String {
        self.input.get_untracked().map(|input| input.value()).unwrap_or_default()
    }

    fn clear_input(&self) {
        if let Some(input) = self.input.get_untracked() {
            input.set_value("");
        }
    }

    fn show(&self, todos: &[Todo]) {
        self.todos.set(todos.to_vec());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: i64, title: &str, completed: bool) -> Todo {
        Todo { id, title: title.to_string(), completed }
    }

    #[test]
    fn test_show_replaces_list_in_order() {
        let todos = RwSignal::new(vec![todo(9, "stale", false)]);
        let display = DomDisplay::new(NodeRef::new(), todos);

        let fresh = vec![todo(3, "c", false), todo(1, "<script>a</script>", true), todo(2, "b & c", false)];
        display.show(&fresh);

        let shown = todos.get_untracked();
        assert_eq!(shown.len(), 3);
        assert_eq!(shown.iter().map(|t| t.id).collect::<Vec<_>>(), vec![3, 1, 2]);
        assert_eq!(shown[1].title, "<script>a</script>");
    }

    #[test]
    fn test_show_empty_clears_list() {
        let todos = RwSignal::new(vec![todo(1, "a", false)]);
        let display = DomDisplay::new(NodeRef::new(), todos);

        display.show(&[]);

        assert!(todos.get_untracked().is_empty());
    }

    #[test]
    fn test_unmounted_input_reads_empty() {
        let display = DomDisplay::new(NodeRef::new(), RwSignal::new(Vec::new()));
        assert_eq!(display.input_text(), "");
        display.clear_input();
    }
}
