use rusqlite::Connection;

use std::error::Error;
use std::sync::{Arc, Mutex};

use todo_server::todos::helpers::create_todo_table;

#[rocket::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let connection = Connection::open("todoApplication.db")?;

    create_todo_table(&connection)?;
    let connection = Arc::new(Mutex::new(connection));

    todo_server::rocket(connection).launch().await?;

    Ok(())
}
