use rusqlite::Connection;

use std::sync::{Arc, Mutex};

use rocket::{routes, Build, Rocket};

pub mod api_error;
pub mod todos;

use todos::endpoints;

pub type DBConnection = Arc<Mutex<Connection>>;

pub fn rocket(db_connection: DBConnection) -> Rocket<Build> {
    rocket::build().manage(db_connection).mount(
        "/",
        routes![
            endpoints::get_todos,
            endpoints::get_todo,
            endpoints::get_agenda,
            endpoints::add_todo,
            endpoints::update_todo,
            endpoints::delete_todo,
        ],
    )
}
