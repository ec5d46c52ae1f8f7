use actix_web::web::{block, Data, Json, Path};

use db::{
    get_conn,
    models::{Signup, SignupWithSkill},
    SqlitePool,
};
use errors::Error;

pub async fn get_signups(
    game_id: Path<i32>,
    pool: Data<SqlitePool>,
) -> Result<Json<Vec<SignupWithSkill>>, Error> {
    let game_id = game_id.into_inner();

    let signups = block(move || {
        let mut conn = get_conn(&pool)?;
        Signup::find_all_by_game_id(&mut conn, game_id)
    })
    .await??;

    Ok(Json(signups))
}

#[cfg(test)]
mod tests {
    use db::{
        get_conn,
        models::{Game, NewSignup, Signup, SignupWithSkill},
    };

    use crate::tests::helpers::{new_game, new_signup, test_get, test_pool};

    #[actix_rt::test]
    async fn test_get_signups_with_avg_skill() {
        let (_dir, pool) = test_pool();
        let mut conn = get_conn(&pool).unwrap();

        let game = Game::create(&mut conn, new_game("Sunday Pickup", 10)).unwrap();
        let other = Game::create(&mut conn, new_game("Elsewhere", 10)).unwrap();
        Signup::create_if_open(
            &mut conn,
            NewSignup {
                speed: 3,
                passing: 4,
                shooting: 5,
                defending: 2,
                ..new_signup(game.id, "Ana")
            },
        )
        .unwrap();
        Signup::create_if_open(
            &mut conn,
            NewSignup {
                speed: 5,
                passing: 5,
                shooting: 5,
                defending: 4,
                ..new_signup(game.id, "Ben")
            },
        )
        .unwrap();
        Signup::create_if_open(&mut conn, new_signup(other.id, "Cal")).unwrap();
        drop(conn);

        let res: (u16, Vec<SignupWithSkill>) =
            test_get(&pool, &format!("/api/admin/games/{}/signups", game.id)).await;
        assert_eq!(res.0, 200);

        let body = res.1;
        // only signups for this game, in the order they arrived
        assert_eq!(body.len(), 2);
        assert_eq!(body[0].signup.name, "Ana");
        assert_eq!(body[0].avg_skill, 3.5);
        assert_eq!(body[1].signup.name, "Ben");
        assert_eq!(body[1].avg_skill, 4.75);
    }

    #[actix_rt::test]
    async fn test_get_signups_serializes_flat() {
        let (_dir, pool) = test_pool();
        let mut conn = get_conn(&pool).unwrap();
        let game = Game::create(&mut conn, new_game("Sunday Pickup", 10)).unwrap();
        Signup::create_if_open(&mut conn, new_signup(game.id, "Ana")).unwrap();
        drop(conn);

        let res: (u16, serde_json::Value) =
            test_get(&pool, &format!("/api/admin/games/{}/signups", game.id)).await;
        assert_eq!(res.0, 200);

        let row = &res.1[0];
        assert_eq!(row["name"], "Ana");
        assert_eq!(row["game_id"], game.id);
        assert_eq!(row["paid"], false);
        assert_eq!(row["avg_skill"], 3.0);
        assert!(row["signup_time"].is_string());
    }

    #[actix_rt::test]
    async fn test_get_signups_for_unknown_game() {
        let (_dir, pool) = test_pool();

        let res: (u16, Vec<SignupWithSkill>) =
            test_get(&pool, "/api/admin/games/31/signups").await;
        assert_eq!(res.0, 200);
        assert!(res.1.is_empty());
    }
}
