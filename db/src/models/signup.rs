use chrono::NaiveDateTime;
use diesel::{self, ExpressionMethods, QueryDsl, RunQueryDsl, SqliteConnection};
use serde::{Deserialize, Serialize};

use errors::Error;

use crate::models::Game;
use crate::schema::signups;

#[derive(Associations, Clone, Debug, Deserialize, Identifiable, PartialEq, Queryable, Serialize)]
#[diesel(belongs_to(Game))]
#[diesel(table_name = signups)]
pub struct Signup {
    pub id: i32,
    pub game_id: i32,
    pub name: String,
    pub position: String,
    pub age: i32,
    pub speed: i32,
    pub passing: i32,
    pub shooting: i32,
    pub defending: i32,
    pub paid: bool,
    pub signup_time: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize, Insertable, Serialize)]
#[diesel(table_name = signups)]
pub struct NewSignup {
    pub game_id: i32,
    pub name: String,
    pub position: String,
    pub age: i32,
    pub speed: i32,
    pub passing: i32,
    pub shooting: i32,
    pub defending: i32,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct SignupWithSkill {
    #[serde(flatten)]
    pub signup: Signup,
    pub avg_skill: f64,
}

impl Signup {
    /// Mean of the four self-rated skills.
    pub fn avg_skill(&self) -> f64 {
        f64::from(self.speed + self.passing + self.shooting + self.defending) / 4.0
    }

    pub fn count_by_game_id(conn: &mut SqliteConnection, game_id: i32) -> Result<i64, Error> {
        let total = signups::table
            .filter(signups::game_id.eq(game_id))
            .count()
            .get_result::<i64>(conn)?;

        Ok(total)
    }

    /// Inserts the signup only while its game still has an open spot.
    ///
    /// The count and the insert share one `BEGIN IMMEDIATE` transaction, so
    /// the write lock is held from the capacity check until commit and two
    /// requests racing for the last spot cannot both get in.
    pub fn create_if_open(
        conn: &mut SqliteConnection,
        new_signup: NewSignup,
    ) -> Result<Signup, Error> {
        conn.immediate_transaction::<Signup, Error, _>(|conn| {
            let game = Game::find_by_id(conn, new_signup.game_id)?;
            let current_players = Signup::count_by_game_id(conn, game.id)?;

            if current_players >= i64::from(game.max_players) {
                return Err(Error::GameFull);
            }

            let signup = diesel::insert_into(signups::table)
                .values(&new_signup)
                .get_result(conn)?;

            Ok(signup)
        })
    }

    pub fn find_all_by_game_id(
        conn: &mut SqliteConnection,
        game_id: i32,
    ) -> Result<Vec<SignupWithSkill>, Error> {
        let results = signups::table
            .filter(signups::game_id.eq(game_id))
            .order((signups::signup_time.asc(), signups::id.asc()))
            .load::<Signup>(conn)?;

        Ok(results
            .into_iter()
            .map(|signup| SignupWithSkill {
                avg_skill: signup.avg_skill(),
                signup,
            })
            .collect())
    }

    /// Returns the number of rows touched, which is zero for an unknown id.
    pub fn set_paid(
        conn: &mut SqliteConnection,
        signup_id: i32,
        paid: bool,
    ) -> Result<usize, Error> {
        let updated = diesel::update(signups::table.find(signup_id))
            .set(signups::paid.eq(paid))
            .execute(conn)?;

        Ok(updated)
    }
}
