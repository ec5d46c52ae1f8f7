use actix_web::web::{block, Data, Json, Path};
use serde::{Deserialize, Serialize};

use db::{
    get_conn,
    models::{NewSignup, Signup},
    SqlitePool,
};
use errors::Error;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub position: String,
    pub age: i32,
    pub speed: i32,
    pub passing: i32,
    pub shooting: i32,
    pub defending: i32,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct SignupResponse {
    pub success: bool,
    pub message: String,
    #[serde(rename = "signupId")]
    pub signup_id: i32,
}

impl SignupRequest {
    fn into_new_signup(self, game_id: i32) -> NewSignup {
        NewSignup {
            game_id,
            name: self.name,
            position: self.position,
            age: self.age,
            speed: self.speed,
            passing: self.passing,
            shooting: self.shooting,
            defending: self.defending,
        }
    }
}

pub async fn create(
    game_id: Path<i32>,
    pool: Data<SqlitePool>,
    params: Json<SignupRequest>,
) -> Result<Json<SignupResponse>, Error> {
    let game_id = game_id.into_inner();
    let new_signup = params.into_inner().into_new_signup(game_id);

    let signup = block(move || {
        let mut conn = get_conn(&pool)?;
        Signup::create_if_open(&mut conn, new_signup)
    })
    .await??;

    info!("Signup {} added to game {}", signup.id, game_id);

    Ok(Json(SignupResponse {
        success: true,
        message: "Successfully signed up!".to_string(),
        signup_id: signup.id,
    }))
}
