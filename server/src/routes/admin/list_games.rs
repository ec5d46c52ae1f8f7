use actix_web::web::{block, Data, Json};

use db::{
    get_conn,
    models::{Game, GameSummary},
    SqlitePool,
};
use errors::Error;

pub async fn list_games(pool: Data<SqlitePool>) -> Result<Json<Vec<GameSummary>>, Error> {
    let games = block(move || {
        let mut conn = get_conn(&pool)?;
        Game::find_all_with_signup_counts(&mut conn)
    })
    .await??;

    Ok(Json(games))
}
