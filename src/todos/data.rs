use serde::{Deserialize, Serialize};

pub type TodoID = i64;

/// A stored todo row. `due_date` is either empty or a normalized
/// `yyyy-MM-dd` string; the enumerated fields are either empty or members
/// of their closed sets, enforced at the API boundary rather than by the
/// table.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Todo {
    pub id: TodoID,
    pub todo: String,
    pub priority: String,
    pub status: String,
    pub category: String,
    #[serde(rename = "dueDate")]
    pub due_date: String,
}

#[derive(Deserialize, Debug)]
pub struct CreateTodoRequest {
    pub id: TodoID,
    pub todo: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "dueDate")]
    pub due_date: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct UpdateTodoRequest {
    pub todo: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "dueDate")]
    pub due_date: Option<String>,
}
