//! Frontend Models
//!
//! Data structures matching the todo API.

use serde::{Deserialize, Serialize};

/// Todo record as returned by `GET /api/todos`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// SQLite row id on the server
    pub id: i64,
    pub title: String,
    pub completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_server_list() {
        let json = r#"[{"id":1,"title":"a","completed":false},{"id":7,"title":"b","completed":true}]"#;
        let todos: Vec<Todo> = serde_json::from_str(json).unwrap();

        assert_eq!(todos.len(), 2);
        assert_eq!(todos[0], Todo { id: 1, title: "a".to_string(), completed: false });
        assert!(todos[1].completed);
    }

    #[test]
    fn test_decode_id_beyond_u32() {
        let json = r#"[{"id":5000000000,"title":"big","completed":false}]"#;
        let todos: Vec<Todo> = serde_json::from_str(json).unwrap();
        assert_eq!(todos[0].id, 5_000_000_000);
    }

    #[test]
    fn test_reject_missing_fields() {
        let json = r#"[{"id":1,"title":"a"}]"#;
        assert!(serde_json::from_str::<Vec<Todo>>(json).is_err());
    }
}
