use actix_web::web::{block, Data, Json, Path};

use db::{
    get_conn,
    models::{Game, GameDetails},
    SqlitePool,
};
use errors::Error;

pub async fn get_game(
    game_id: Path<i32>,
    pool: Data<SqlitePool>,
) -> Result<Json<GameDetails>, Error> {
    let game_id = game_id.into_inner();

    let details = block(move || {
        let mut conn = get_conn(&pool)?;
        Game::find_with_player_count(&mut conn, game_id)
    })
    .await??;

    Ok(Json(details))
}
