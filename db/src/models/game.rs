use std::collections::HashMap;

use diesel::{
    self, dsl::count, Connection, ExpressionMethods, OptionalExtension, QueryDsl, RunQueryDsl,
    SqliteConnection,
};
use serde::{Deserialize, Serialize};

use errors::Error;

use crate::models::Signup;
use crate::schema::{games, signups};

#[derive(Clone, Debug, Deserialize, Identifiable, PartialEq, Queryable, Serialize)]
#[diesel(table_name = games)]
pub struct Game {
    pub id: i32,
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub cost: f64,
    pub max_players: i32,
}

#[derive(Clone, Debug, Deserialize, Insertable, Serialize)]
#[diesel(table_name = games)]
pub struct NewGame {
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub cost: f64,
    pub max_players: i32,
}

/// A game as shown on its public signup page.
#[derive(Debug, Deserialize, Serialize)]
pub struct GameDetails {
    #[serde(flatten)]
    pub game: Game,
    pub current_players: i64,
}

/// A row of the admin game list.
#[derive(Debug, Deserialize, Serialize)]
pub struct GameSummary {
    #[serde(flatten)]
    pub game: Game,
    pub signups: i64,
}

impl Game {
    pub fn create(conn: &mut SqliteConnection, new_game: NewGame) -> Result<Game, Error> {
        let game = diesel::insert_into(games::table)
            .values(&new_game)
            .get_result(conn)?;

        Ok(game)
    }

    pub fn find_by_id(conn: &mut SqliteConnection, game_id: i32) -> Result<Game, Error> {
        games::table
            .find(game_id)
            .first::<Game>(conn)
            .optional()?
            .ok_or_else(|| Error::NotFound("Game not found".into()))
    }

    pub fn find_with_player_count(
        conn: &mut SqliteConnection,
        game_id: i32,
    ) -> Result<GameDetails, Error> {
        conn.transaction::<GameDetails, Error, _>(|conn| {
            let game = Game::find_by_id(conn, game_id)?;
            let current_players = Signup::count_by_game_id(conn, game_id)?;

            Ok(GameDetails {
                game,
                current_players,
            })
        })
    }

    pub fn find_all_with_signup_counts(
        conn: &mut SqliteConnection,
    ) -> Result<Vec<GameSummary>, Error> {
        conn.transaction::<Vec<GameSummary>, Error, _>(|conn| {
            let games = games::table
                .order((games::date.asc(), games::time.asc(), games::id.asc()))
                .load::<Game>(conn)?;

            let counts: HashMap<i32, i64> = signups::table
                .group_by(signups::game_id)
                .select((signups::game_id, count(signups::id)))
                .load::<(i32, i64)>(conn)?
                .into_iter()
                .collect();

            Ok(games
                .into_iter()
                .map(|game| GameSummary {
                    signups: counts.get(&game.id).copied().unwrap_or(0),
                    game,
                })
                .collect())
        })
    }
}
