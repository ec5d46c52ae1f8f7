use std::env;

use dotenv::dotenv;

use db::{
    get_conn,
    models::{Game, NewGame},
    new_pool,
};
use errors::Error;

fn main() -> Result<(), Error> {
    dotenv().ok();

    let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| "soccer.db".to_string());
    let pool = new_pool(&database_url)?;
    let mut conn = get_conn(&pool)?;

    let game = Game::create(
        &mut conn,
        NewGame {
            title: "Sunday Pickup".to_string(),
            date: "2024-06-02".to_string(),
            time: "10:00".to_string(),
            location: "Riverside Park, Field 2".to_string(),
            cost: 5.0,
            max_players: 10,
        },
    )?;

    println!("Created game {}: /signup/{}", game.title, game.id);

    Ok(())
}
