use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};

use crate::api_error::ApiResult;

use super::data::{Todo, TodoID};
use super::validate::ValidatedFields;

const TODO_COLUMNS: &str = "id, todo, priority, status, category, due_date";

pub fn create_todo_table(db_connection: &Connection) -> rusqlite::Result<()> {
    db_connection.execute(
        "CREATE TABLE IF NOT EXISTS todo (
            id INTEGER PRIMARY KEY,
            todo TEXT,
            priority TEXT,
            status TEXT,
            category TEXT,
            due_date TEXT
        )",
        params![],
    )?;

    Ok(())
}

pub fn todo_from_row(row: &Row) -> rusqlite::Result<Todo> {
    Ok(Todo {
        id: row.get(0)?,
        todo: row.get(1)?,
        priority: row.get(2)?,
        status: row.get(3)?,
        category: row.get(4)?,
        due_date: row.get(5)?,
    })
}

/// Lists rows matching the filters that are actually present: the WHERE
/// clause is composed from the supplied pieces and every value is bound,
/// never spliced into the statement text. `instr()` keeps the text search
/// case-sensitive where `LIKE` would case-fold ASCII.
pub fn get_todos_from_db(
    search_q: &str,
    fields: &ValidatedFields,
    db_connection: &Connection,
) -> ApiResult<Vec<Todo>> {
    let mut clauses: Vec<&str> = vec![];
    let mut values: Vec<String> = vec![];

    if !search_q.is_empty() {
        clauses.push("instr(todo, ?) > 0");
        values.push(search_q.to_string());
    }
    if let Some(category) = &fields.category {
        clauses.push("category = ?");
        values.push(category.clone());
    }
    if let Some(status) = &fields.status {
        clauses.push("status = ?");
        values.push(status.clone());
    }
    if let Some(priority) = &fields.priority {
        clauses.push("priority = ?");
        values.push(priority.clone());
    }

    let mut query = format!("SELECT {} FROM todo", TODO_COLUMNS);
    if !clauses.is_empty() {
        query.push_str(" WHERE ");
        query.push_str(&clauses.join(" AND "));
    }

    let mut statement = db_connection.prepare(&query)?;
    let rows = statement.query_map(params_from_iter(values.iter()), |row| todo_from_row(row))?;

    let mut todos = vec![];
    for row_result in rows {
        todos.push(row_result?);
    }

    Ok(todos)
}

pub fn get_todo_from_db(todo_id: TodoID, db_connection: &Connection) -> ApiResult<Option<Todo>> {
    let todo = db_connection
        .query_row(
            &format!("SELECT {} FROM todo WHERE id = (?1)", TODO_COLUMNS),
            params![todo_id],
            |row| todo_from_row(row),
        )
        .optional()?;

    Ok(todo)
}

pub fn get_agenda_from_db(date: &str, db_connection: &Connection) -> ApiResult<Vec<Todo>> {
    let mut statement = db_connection.prepare(&format!(
        "SELECT {} FROM todo WHERE due_date = (?1)",
        TODO_COLUMNS
    ))?;
    let rows = statement.query_map(params![date], |row| todo_from_row(row))?;

    let mut todos = vec![];
    for row_result in rows {
        todos.push(row_result?);
    }

    Ok(todos)
}

pub fn add_todo_to_db(todo: &Todo, db_connection: &Connection) -> ApiResult<()> {
    db_connection.execute(
        "INSERT INTO todo (id, todo, priority, status, category, due_date)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            todo.id,
            todo.todo,
            todo.priority,
            todo.status,
            todo.category,
            todo.due_date
        ],
    )?;

    Ok(())
}

pub fn update_todo_in_db(todo: &Todo, db_connection: &Connection) -> ApiResult<()> {
    db_connection.execute(
        "UPDATE todo
         SET todo = (?2), priority = (?3), status = (?4), category = (?5), due_date = (?6)
         WHERE id = (?1)",
        params![
            todo.id,
            todo.todo,
            todo.priority,
            todo.status,
            todo.category,
            todo.due_date
        ],
    )?;

    Ok(())
}

pub fn delete_todo_from_db(todo_id: TodoID, db_connection: &Connection) -> ApiResult<()> {
    db_connection.execute("DELETE FROM todo WHERE id = (?1)", params![todo_id])?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todos::validate::validate_fields;

    fn test_connection() -> Connection {
        let connection = Connection::open_in_memory().unwrap();
        create_todo_table(&connection).unwrap();
        connection
    }

    fn sample_todo(id: TodoID, text: &str, category: &str) -> Todo {
        Todo {
            id,
            todo: text.to_string(),
            priority: "HIGH".to_string(),
            status: "TO DO".to_string(),
            category: category.to_string(),
            due_date: "2021-01-01".to_string(),
        }
    }

    #[test]
    fn insert_then_lookup_round_trips() {
        let connection = test_connection();
        let todo = sample_todo(1, "Buy milk", "HOME");

        add_todo_to_db(&todo, &connection).unwrap();
        let fetched = get_todo_from_db(1, &connection).unwrap();

        assert_eq!(fetched, Some(todo));
    }

    #[test]
    fn lookup_of_missing_id_is_none() {
        let connection = test_connection();

        assert_eq!(get_todo_from_db(99, &connection).unwrap(), None);
    }

    #[test]
    fn duplicate_insert_is_a_conflict() {
        let connection = test_connection();
        add_todo_to_db(&sample_todo(1, "first", "HOME"), &connection).unwrap();

        let err = add_todo_to_db(&sample_todo(1, "second", "WORK"), &connection).unwrap_err();
        assert_eq!(err.to_string(), "Todo Already Exists");
    }

    #[test]
    fn filters_compose() {
        let connection = test_connection();
        add_todo_to_db(&sample_todo(1, "Buy milk", "HOME"), &connection).unwrap();
        add_todo_to_db(&sample_todo(2, "Order milk crates", "WORK"), &connection).unwrap();
        add_todo_to_db(&sample_todo(3, "File report", "WORK"), &connection).unwrap();

        let fields = validate_fields(Some("WORK"), None, None, None).unwrap();
        let todos = get_todos_from_db("milk", &fields, &connection).unwrap();

        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].id, 2);
    }

    #[test]
    fn empty_filters_match_everything() {
        let connection = test_connection();
        add_todo_to_db(&sample_todo(1, "a", "HOME"), &connection).unwrap();
        add_todo_to_db(&sample_todo(2, "b", "WORK"), &connection).unwrap();

        let fields = validate_fields(None, None, None, None).unwrap();
        let todos = get_todos_from_db("", &fields, &connection).unwrap();

        assert_eq!(todos.len(), 2);
    }

    #[test]
    fn text_search_is_case_sensitive() {
        let connection = test_connection();
        add_todo_to_db(&sample_todo(1, "Buy milk", "HOME"), &connection).unwrap();

        let fields = validate_fields(None, None, None, None).unwrap();
        assert!(get_todos_from_db("Milk", &fields, &connection)
            .unwrap()
            .is_empty());
        assert_eq!(
            get_todos_from_db("milk", &fields, &connection).unwrap().len(),
            1
        );
    }

    #[test]
    fn agenda_matches_exact_date_only() {
        let connection = test_connection();
        add_todo_to_db(&sample_todo(1, "a", "HOME"), &connection).unwrap();
        let mut other = sample_todo(2, "b", "HOME");
        other.due_date = "2021-02-02".to_string();
        add_todo_to_db(&other, &connection).unwrap();

        let todos = get_agenda_from_db("2021-01-01", &connection).unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].id, 1);
    }

    #[test]
    fn delete_is_idempotent() {
        let connection = test_connection();
        add_todo_to_db(&sample_todo(1, "a", "HOME"), &connection).unwrap();

        delete_todo_from_db(1, &connection).unwrap();
        delete_todo_from_db(1, &connection).unwrap();

        assert_eq!(get_todo_from_db(1, &connection).unwrap(), None);
    }
}
