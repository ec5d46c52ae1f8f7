use actix_web::web::{block, Data, Json};
use serde::{Deserialize, Serialize};

use db::{
    get_conn,
    models::{Game, NewGame},
    SqlitePool,
};
use errors::Error;

#[derive(Debug, Deserialize, Serialize)]
pub struct CreateGameResponse {
    pub id: i32,
    pub signup_link: String,
}

pub async fn create_game(
    pool: Data<SqlitePool>,
    params: Json<NewGame>,
) -> Result<Json<CreateGameResponse>, Error> {
    let new_game = params.into_inner();

    let game = block(move || {
        let mut conn = get_conn(&pool)?;
        Game::create(&mut conn, new_game)
    })
    .await??;

    info!("Created game {} ({} on {})", game.id, game.title, game.date);

    Ok(Json(CreateGameResponse {
        id: game.id,
        signup_link: format!("/signup/{}", game.id),
    }))
}
