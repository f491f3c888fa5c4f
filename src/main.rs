use rocket::*;

mod cors;
mod database;
#[cfg(test)]
mod tests;

use database::DatabasePool;

#[launch]
async fn rocket() -> _ {
    // Connect to a database
    dotenv::dotenv().ok();
    let database_url =
        dotenv::var("DATABASE_URL").expect("DATABASE_URL environment variable is not set");

    let database_pool = database::connect(&database_url)
        .await
        .expect("failed to connect to a database");

    build(database_pool)
}

/// Builds the rocket around an already migrated database.
fn build(database_pool: DatabasePool) -> Rocket<Build> {
    rocket::build()
        .attach(cors::Cors)
        .mount(
            "/",
            routes![
                index,
                cors::preflight,
                database::requests::get_scores,
                database::requests::add_score,
            ],
        )
        .manage::<DatabasePool>(database_pool)
}

#[get("/")]
fn index() -> &'static str {
    "This is the snake high score server!"
}
