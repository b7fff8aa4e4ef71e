use rocket::serde::json::Json;
use rocket::{delete, get, post, put, State};

use crate::api_error::{ApiError, ApiResult};
use crate::DBConnection;

use super::data::*;
use super::helpers::*;
use super::validate::*;

#[get("/todos?<search_q>&<category>&<status>&<priority>")]
pub fn get_todos(
    search_q: Option<String>,
    category: Option<String>,
    status: Option<String>,
    priority: Option<String>,
    db_connection: &State<DBConnection>,
) -> ApiResult<Json<Vec<Todo>>> {
    let fields = validate_fields(
        category.as_deref(),
        status.as_deref(),
        priority.as_deref(),
        None,
    )?;
    let db_connection = db_connection.lock()?;

    let todos = get_todos_from_db(search_q.as_deref().unwrap_or(""), &fields, &db_connection)?;

    Ok(Json(todos))
}

#[get("/todos/<todo_id>")]
pub fn get_todo(todo_id: TodoID, db_connection: &State<DBConnection>) -> ApiResult<Json<Todo>> {
    let db_connection = db_connection.lock()?;

    match get_todo_from_db(todo_id, &db_connection)? {
        Some(todo) => Ok(Json(todo)),
        None => Err(ApiError::NotFound("Todo Not Found")),
    }
}

#[get("/agenda?<date>")]
pub fn get_agenda(
    date: Option<String>,
    db_connection: &State<DBConnection>,
) -> ApiResult<Json<Vec<Todo>>> {
    let fields = validate_fields(None, None, None, date.as_deref())?;
    let db_connection = db_connection.lock()?;

    // Without a date there is nothing a normalized row could match.
    let todos = match &fields.due_date {
        Some(date) => get_agenda_from_db(date, &db_connection)?,
        None => vec![],
    };

    Ok(Json(todos))
}

#[post("/todos", format = "json", data = "<request>")]
pub fn add_todo(
    request: Json<CreateTodoRequest>,
    db_connection: &State<DBConnection>,
) -> ApiResult<String> {
    let request = request.into_inner();
    let fields = validate_fields(
        request.category.as_deref(),
        request.status.as_deref(),
        request.priority.as_deref(),
        request.due_date.as_deref(),
    )?;

    let todo = Todo {
        id: request.id,
        todo: request.todo.unwrap_or_default(),
        priority: fields.priority.unwrap_or_default(),
        status: fields.status.unwrap_or_default(),
        category: fields.category.unwrap_or_default(),
        due_date: fields.due_date.unwrap_or_default(),
    };

    let db_connection = db_connection.lock()?;
    add_todo_to_db(&todo, &db_connection)?;

    Ok(String::from("Todo Successfully Added"))
}

#[put("/todos/<todo_id>", format = "json", data = "<request>")]
pub fn update_todo(
    todo_id: TodoID,
    request: Json<UpdateTodoRequest>,
    db_connection: &State<DBConnection>,
) -> ApiResult<String> {
    let request = request.into_inner();
    let updated_field = updated_field_name(&request)?;
    let fields = validate_fields(
        request.category.as_deref(),
        request.status.as_deref(),
        request.priority.as_deref(),
        request.due_date.as_deref(),
    )?;

    let db_connection = db_connection.lock()?;

    let previous = get_todo_from_db(todo_id, &db_connection)?
        .ok_or(ApiError::NotFound("Todo Not Found"))?;

    let todo = Todo {
        id: todo_id,
        todo: request.todo.unwrap_or(previous.todo),
        priority: fields.priority.unwrap_or(previous.priority),
        status: fields.status.unwrap_or(previous.status),
        category: fields.category.unwrap_or(previous.category),
        due_date: fields.due_date.unwrap_or(previous.due_date),
    };
    update_todo_in_db(&todo, &db_connection)?;

    Ok(format!("{} Updated", updated_field))
}

#[delete("/todos/<todo_id>")]
pub fn delete_todo(todo_id: TodoID, db_connection: &State<DBConnection>) -> ApiResult<String> {
    let db_connection = db_connection.lock()?;

    delete_todo_from_db(todo_id, &db_connection)?;

    Ok(String::from("Todo Deleted"))
}

// The response names a single field even when several were supplied; the
// first one present in this fixed order wins.
fn updated_field_name(request: &UpdateTodoRequest) -> ApiResult<&'static str> {
    if request.todo.is_some() {
        Ok("Todo")
    } else if request.priority.is_some() {
        Ok("Priority")
    } else if request.status.is_some() {
        Ok("Status")
    } else if request.category.is_some() {
        Ok("Category")
    } else if request.due_date.is_some() {
        Ok("Due Date")
    } else {
        Err(ApiError::BadRequest("Invalid Todo Update"))
    }
}
